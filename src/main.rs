//! CLI entry point for the symmetry completion dataset generator

use clap::Parser;
use symmetry_completion::io::cli::{Cli, DatasetRunner};

fn main() -> symmetry_completion::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    DatasetRunner::new(&cli).run()?;
    Ok(())
}
