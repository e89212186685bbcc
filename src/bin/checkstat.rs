use clap::Parser;
use colored::Colorize;
use checkstat_core::cli::{self, Cli};
use checkstat_core::exit::CheckstatExit;

fn main() -> CheckstatExit {
    let cli = Cli::parse();

    match cli::execute(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            CheckstatExit::Error
        }
    }
}
