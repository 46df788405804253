use anyhow::{Context, Result};
use clap::Parser;
use lehmer_utils::random::SeededRandom;
use lehmer_utils::shuffle::shuffle;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

use crate::config_file::Config;

#[derive(Debug, Parser)]
pub struct Opts {
    #[clap(long, env = "LEHMER_SEED", allow_hyphen_values = true)]
    seed: Option<i64>,

    /// Shuffle the lines of this file
    #[clap(long, value_parser, conflicts_with = "items")]
    file: Option<PathBuf>,

    /// Items to shuffle. Reads lines from stdin when neither these nor --file are given.
    items: Vec<String>,
}

async fn read_items(opts: &Opts) -> Result<Vec<String>> {
    if !opts.items.is_empty() {
        return Ok(opts.items.clone());
    }

    let text = match &opts.file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read stdin")?;
            text
        }
    };

    Ok(text.lines().map(str::to_string).collect())
}

pub async fn run(opts: &Opts, config: &Config) -> Result<()> {
    let seed = super::resolve_seed(opts.seed, config)?;
    let mut items = read_items(opts).await?;

    let mut rng = SeededRandom::new(seed);
    shuffle(&mut items, rng.fractions());
    log::debug!("shuffled {} items with seed {}", items.len(), seed);

    for item in items {
        println!("{}", item);
    }

    Ok(())
}
