use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use hbc::{datalad_version, fetch, Roster};

#[derive(Parser)]
#[command(
    name = "fetch_subjects",
    about = "Download every subject with complete EEG, ECG/PPG and pupillometry data"
)]
struct Args {
    /// DataLad dataset root
    #[arg(long, default_value = ".")]
    dataset: PathBuf,

    /// List the eligible subjects without downloading anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subjects = Roster::default().complete_subjects();
    println!("Found {} complete subjects.", subjects.len());
    println!("Fetching: {}", subjects.join(" "));

    if args.dry_run {
        return Ok(());
    }

    eprintln!("Using {}", datalad_version()?);
    fetch::fetch_subjects(&args.dataset, &subjects)?;
    println!("Download complete.");

    Ok(())
}
