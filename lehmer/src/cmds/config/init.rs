use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config_file::write_default_config;

#[derive(Debug, Parser)]
pub struct Opts {
    /// Where to write the config file
    path: PathBuf,
}

pub async fn run(opts: &Opts) -> Result<()> {
    let config = write_default_config(&opts.path)?;
    log::info!("Wrote default config to {}", opts.path.display());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
