use crate::report::{run_analysis_report, AnalyzeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lead_scout::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Lead Scout",
    about = "Find local businesses, score their websites, and draft outreach",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Analyze businesses for a location and niche and print a report
    Analyze(AnalyzeArgs),
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
        Command::Analyze(args) => run_analysis_report(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn serve_is_optional() {
        let cli = Cli::try_parse_from(["lead-scout-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn analyze_takes_location_niche_and_csv_path() {
        let cli = Cli::try_parse_from([
            "lead-scout-api",
            "analyze",
            "--location",
            "Leeds",
            "--niche",
            "dentists",
            "--csv",
            "out.csv",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Analyze(args)) => {
                assert_eq!(args.location, "Leeds");
                assert_eq!(args.niche, "dentists");
                assert_eq!(args.csv, Some(PathBuf::from("out.csv")));
            }
            other => panic!("expected analyze command, got {other:?}"),
        }
    }

    #[test]
    fn analyze_requires_a_niche() {
        assert!(Cli::try_parse_from(["lead-scout-api", "analyze", "--location", "Leeds"]).is_err());
    }
}
