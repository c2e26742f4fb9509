mod check;
mod compare;
mod select;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "jver")]
#[command(about = "JSR 56 version-string matching for Java releases")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether a release satisfies a version-string
    Check(check::CheckArgs),

    /// Validate version-strings against the grammar
    Validate(validate::ValidateArgs),

    /// Compare two version-ids
    Compare(compare::CompareArgs),

    /// Select the newest acceptable release from a list of candidates
    Select(select::SelectArgs),
}

fn run() -> Result<i32> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Commands::Check(check_args) => check::execute(check_args),
        Commands::Validate(validate_args) => validate::execute(validate_args),
        Commands::Compare(compare_args) => compare::execute(compare_args),
        Commands::Select(select_args) => select::execute(select_args),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
