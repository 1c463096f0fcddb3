// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use pose_control::cli::args::{Cli, Commands};
use pose_control::cli::run::run_session;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run_session(&args),
    }
}
