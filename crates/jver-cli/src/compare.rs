//! Compare command - order two version-ids.

use std::cmp::Ordering;

use anyhow::Result;
use clap::Args;
use jver_match::{exact_version_compare, prefix_version_compare};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First version-id
    pub id1: String,

    /// Second version-id
    pub id2: String,

    /// Use prefix matching instead of exact matching
    #[arg(long)]
    pub prefix: bool,
}

pub fn execute(args: CompareArgs) -> Result<i32> {
    let ordering = if args.prefix {
        prefix_version_compare(&args.id1, &args.id2)
    } else {
        exact_version_compare(&args.id1, &args.id2)
    };

    let symbol = match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    println!("{} {} {}", args.id1, symbol, args.id2);

    Ok(0)
}
