mod common;
mod knowledge;
mod planning;
mod validation;
