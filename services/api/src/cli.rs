use crate::demo::{
    run_demo, run_determinations, run_evaluate, run_next, DemoArgs, DeterminationsArgs,
    QuestionnaireArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use roof_compliance::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Roof Compliance",
    about = "Evaluate roofing jobs against building consent and LBP obligations",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a questionnaire saved as JSON
    Evaluate(QuestionnaireArgs),
    /// Show the next question a partially completed questionnaire needs
    Next(QuestionnaireArgs),
    /// List the cited determinations, or show a single one
    Determinations(DeterminationsArgs),
    /// Walk through sample jobs from both pathways
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Next(args) => run_next(args),
        Command::Determinations(args) => run_determinations(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["roof-compliance-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn evaluate_accepts_input_and_json_flag() {
        let cli = Cli::try_parse_from([
            "roof-compliance-api",
            "evaluate",
            "--input",
            "job.json",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.input, PathBuf::from("job.json"));
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_overrides_port() {
        let cli = Cli::try_parse_from(["roof-compliance-api", "serve", "--port", "8088"])
            .expect("parses");

        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8088));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn evaluate_requires_an_input_file() {
        assert!(Cli::try_parse_from(["roof-compliance-api", "evaluate"]).is_err());
    }
}
