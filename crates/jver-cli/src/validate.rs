//! Validate command - check version-strings against the grammar.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use jver_match::is_valid_version_string;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Version-strings to validate
    #[arg(required = true)]
    pub version_strings: Vec<String>,

    /// Suppress output, use the exit code only
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute(args: ValidateArgs) -> Result<i32> {
    let mut all_valid = true;

    for version_string in &args.version_strings {
        let valid = is_valid_version_string(version_string);
        all_valid &= valid;

        if !args.quiet {
            if valid {
                println!("{}: {}", version_string, "valid".green());
            } else {
                println!("{}: {}", version_string, "invalid".red());
            }
        }
    }

    Ok(if all_valid { 0 } else { 1 })
}
