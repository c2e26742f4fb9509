//! Check command - test a release against a version-string.

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use jver_match::{is_acceptable_release, is_valid_version_string};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Installed release identifier (e.g. "1.8.0_202")
    pub release: String,

    /// Version-string to test against (e.g. "1.5+ 1.6*")
    pub version_string: String,

    /// Skip grammar validation of the version-string
    #[arg(long)]
    pub no_validate: bool,

    /// Suppress output, use the exit code only
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute(args: CheckArgs) -> Result<i32> {
    if !args.no_validate && !is_valid_version_string(&args.version_string) {
        bail!("Invalid version string \"{}\"", args.version_string);
    }

    log::debug!(
        "checking release {} against {}",
        args.release,
        args.version_string
    );
    let accepted = is_acceptable_release(&args.release, &args.version_string);

    if !args.quiet {
        if accepted {
            println!(
                "{} matches {}",
                args.release.green(),
                args.version_string.bold()
            );
        } else {
            println!(
                "{} does not match {}",
                args.release.red(),
                args.version_string.bold()
            );
        }
    }

    Ok(if accepted { 0 } else { 1 })
}
