//! Select command - pick the newest acceptable release from candidates.

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use jver_match::{is_valid_version_string, ReleaseMatcher};

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Version-string describing the acceptable releases
    pub version_string: String,

    /// Candidate release identifiers
    #[arg(required = true)]
    pub releases: Vec<String>,

    /// List every acceptable release instead of only the newest
    #[arg(short, long)]
    pub all: bool,
}

pub fn execute(args: SelectArgs) -> Result<i32> {
    if !is_valid_version_string(&args.version_string) {
        bail!("Invalid version string \"{}\"", args.version_string);
    }

    let releases: Vec<&str> = args.releases.iter().map(|r| r.as_str()).collect();
    log::debug!(
        "selecting from {} candidates with {}",
        releases.len(),
        args.version_string
    );

    if args.all {
        let accepted = ReleaseMatcher::satisfied_by(&releases, &args.version_string);
        if accepted.is_empty() {
            eprintln!(
                "No release matches {}",
                args.version_string.bold()
            );
            return Ok(1);
        }
        for release in ReleaseMatcher::rsort(
            &accepted.iter().map(|r| r.as_str()).collect::<Vec<_>>(),
        ) {
            println!("{}", release);
        }
        return Ok(0);
    }

    match ReleaseMatcher::best_match(&releases, &args.version_string) {
        Some(best) => {
            println!("{}", best.green());
            Ok(0)
        }
        None => {
            eprintln!(
                "No release matches {}",
                args.version_string.bold()
            );
            Ok(1)
        }
    }
}
