use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use hbc::{load_inputs, output_time_axes, write_axes};

#[derive(Parser)]
#[command(
    name = "check_inputs",
    about = "Pre-flight check for heart-brain coupling model inputs"
)]
struct Args {
    /// inputs.safetensors exported from the recording pipeline
    #[arg(long)]
    input: PathBuf,

    /// Optional safetensors path for the derived output time axes
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let inputs = load_inputs(&args.input)?;
    eprintln!(
        "Loaded {} ch × {} samples @ {} Hz ({} beats, wind = {} s)",
        inputs.n_channels(),
        inputs.n_times(),
        inputs.fs,
        inputs.ibi.len(),
        inputs.wind,
    );

    let axes = output_time_axes(&inputs)?;
    let ws = inputs.window_samples() as usize;
    eprintln!(
        "OK: Ws = {ws} samples, t_H2B {} samples, t_B2H {} samples",
        axes.h2b.len(),
        axes.b2h.len(),
    );

    if let Some(path) = &args.output {
        write_axes(&axes, ws, path)?;
        eprintln!("Written → {}", path.display());
    }

    Ok(())
}
