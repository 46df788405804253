use anyhow::Result;
use clap::Parser;
use lehmer_utils::shuffle::shuffled_indices;

use crate::config_file::Config;

#[derive(Debug, Parser)]
pub struct Opts {
    #[clap(long, env = "LEHMER_SEED", allow_hyphen_values = true)]
    seed: Option<i64>,

    #[clap(long)]
    size: usize,
}

pub async fn run(opts: &Opts, config: &Config) -> Result<()> {
    let seed = super::resolve_seed(opts.seed, config)?;
    let indices = shuffled_indices(seed, opts.size);

    let line = indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", line);

    Ok(())
}
