use crate::demo::{run_demo, run_domains, run_rank, run_score, RankArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use somalux::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "SomaLux Rankings",
    about = "Rank SomaLux dashboard stat rows from the command line or over HTTP",
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
    /// Rank an exported stat row file (JSON or CSV)
    Rank(RankArgs),
    /// Explain the score of the first record in an exported file
    Score(ScoreArgs),
    /// List ranking domains with their metrics and weights
    Domains,
    /// Rank built-in sample data for every dashboard
    Demo,
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
        Command::Rank(args) => run_rank(args),
        Command::Score(args) => run_score(args),
        Command::Domains => {
            run_domains();
            Ok(())
        }
        Command::Demo => run_demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use somalux::rankings::Domain;

    #[test]
    fn rank_arguments_parse_with_defaults() {
        let cli = Cli::try_parse_from(["somalux-api", "rank", "authors", "--input", "rows.csv"])
            .expect("arguments parse");
        match cli.command {
            Some(Command::Rank(args)) => {
                assert_eq!(args.domain, Domain::Authors);
                assert_eq!(args.metric, "score");
                assert!(args.search.is_empty());
                assert!(args.limit.is_none());
                assert!(!args.json);
            }
            other => panic!("expected rank command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_domains_and_zero_limits() {
        assert!(Cli::try_parse_from(["somalux-api", "rank", "dragons", "--input", "x.json"]).is_err());
        assert!(Cli::try_parse_from([
            "somalux-api",
            "rank",
            "books",
            "--input",
            "x.json",
            "--limit",
            "0"
        ])
        .is_err());
    }

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["somalux-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
