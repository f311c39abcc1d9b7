//! Main application entry point.

use clap::Parser;
use templet_app::{Cli, run};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::debug!("Starting Templet");

    let output = run(Cli::parse())?;
    print!("{}", output);
    Ok(())
}
