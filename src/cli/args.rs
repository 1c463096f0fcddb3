// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Run Options:
    --source, -s <SOURCE>      Landmark stream (JSON Lines file, or "-" for stdin) [default: -]
    --threshold <PX>           Neutral band half-height in pixels [default: 55]
    --lane-cooldown-ms <MS>    Lane-change cooldown [default: 180]
    --action-cooldown-ms <MS>  Jump/roll cooldown [default: 50]
    --mirror                   Mirror landmarks horizontally before classification
    --dry-run                  Classify and log without emitting key events
    --verbose                  Show verbose output

Examples:
    pose-control run --source session.jsonl
    pose-control run --source session.jsonl --threshold 40 --dry-run
    pose-bridge --camera 0 | pose-control run --source - --mirror"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Drive a game session from a landmark stream
    Run(RunArgs),
}

/// Arguments for the run command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Landmark stream source (JSON Lines file, or "-" for stdin)
    #[arg(short, long, default_value = "-")]
    pub source: String,

    /// Neutral band half-height in pixels
    #[arg(long, default_value_t = 55)]
    pub threshold: i32,

    /// Lane-change cooldown in milliseconds
    #[arg(long, default_value_t = 180)]
    pub lane_cooldown_ms: u64,

    /// Jump/roll cooldown in milliseconds
    #[arg(long, default_value_t = 50)]
    pub action_cooldown_ms: u64,

    /// Mirror landmarks horizontally before classification
    #[arg(long, default_value_t = false)]
    pub mirror: bool,

    /// Classify and log without emitting key events
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_args_defaults() {
        let args = Cli::parse_from(["app", "run"]);
        match args.command {
            Commands::Run(run_args) => {
                assert_eq!(run_args.source, "-");
                assert_eq!(run_args.threshold, 55);
                assert_eq!(run_args.lane_cooldown_ms, 180);
                assert_eq!(run_args.action_cooldown_ms, 50);
                assert!(!run_args.mirror);
                assert!(!run_args.dry_run);
                assert!(run_args.verbose);
            }
        }
    }

    #[test]
    fn test_run_args_custom() {
        let args = Cli::parse_from([
            "app",
            "run",
            "--source",
            "session.jsonl",
            "--threshold",
            "40",
            "--lane-cooldown-ms",
            "250",
            "--mirror",
            "--verbose",
            "false",
        ]);
        match args.command {
            Commands::Run(run_args) => {
                assert_eq!(run_args.source, "session.jsonl");
                assert_eq!(run_args.threshold, 40);
                assert_eq!(run_args.lane_cooldown_ms, 250);
                assert!(run_args.mirror);
                assert!(!run_args.verbose);
            }
        }
    }
}
