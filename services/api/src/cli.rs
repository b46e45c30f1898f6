use crate::report::{run_roles, run_score, RolesArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use role_fit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "role-fit",
    about = "Score player attribute ratings against positional role formulas",
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
    /// Score a roster export and print the role fit report
    Score(ScoreArgs),
    /// List the role formulas of the active catalogue
    Roles(RolesArgs),
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
        Command::Score(args) => run_score(args),
        Command::Roles(args) => run_roles(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn score_flags_parse() {
        let cli = Cli::try_parse_from([
            "role-fit", "score", "--roster", "squad.csv", "--player", "Smith", "--top-n", "5",
            "--min", "10", "--max", "15.5", "--best", "3", "--ranks",
        ])
        .expect("arguments parse");

        let Some(Command::Score(args)) = cli.command else {
            panic!("expected score command");
        };
        assert_eq!(args.roster.to_str(), Some("squad.csv"));
        assert_eq!(args.player.as_deref(), Some("Smith"));
        assert_eq!(args.top_n, Some(5));
        assert_eq!((args.min, args.max), (Some(10.0), Some(15.5)));
        assert_eq!(args.best, Some(3));
        assert!(args.ranks);
        assert!(!args.json);
    }

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["role-fit"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
