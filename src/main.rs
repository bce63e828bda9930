use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use eyre::WrapErr;
use linecmp::compare;
use log::debug;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Compares a candidate shell's transcript against a reference shell's, line by line"
)]
struct Args {
    /// Output of the reference shell, treated as ground truth.
    reference: PathBuf,

    /// Output of the shell under validation.
    candidate: PathBuf,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let reference = File::open(&args.reference)
        .wrap_err_with(|| format!("could not open reference file {}", args.reference.display()))?;
    let candidate = File::open(&args.candidate)
        .wrap_err_with(|| format!("could not open candidate file {}", args.candidate.display()))?;

    let stdout = io::stdout();
    let count = compare(&reference, &candidate, stdout.lock())?;
    debug!("{count} mismatched line(s)");

    Ok(())
}
