use anyhow::Result;
use clap::Parser;
use lehmer_utils::random::SeededRandom;

use crate::config_file::Config;

#[derive(Debug, Parser)]
pub struct Opts {
    #[clap(long, env = "LEHMER_SEED", allow_hyphen_values = true)]
    seed: Option<i64>,

    /// Number of values to print
    #[clap(long, default_value_t = 10)]
    count: usize,

    /// Print fractions in [0, 1) instead of integers
    #[clap(long)]
    fraction: bool,
}

pub fn draw(rng: &mut SeededRandom, count: usize, fraction: bool) -> Vec<String> {
    (0..count)
        .map(|_| {
            if fraction {
                rng.next_fraction().to_string()
            } else {
                rng.next_int().to_string()
            }
        })
        .collect()
}

pub async fn run(opts: &Opts, config: &Config) -> Result<()> {
    let seed = super::resolve_seed(opts.seed, config)?;
    let mut rng = SeededRandom::new(seed);
    log::debug!("seed {} starts at state {}", seed, rng.state());

    for line in draw(&mut rng, opts.count, opts.fraction) {
        println!("{}", line);
    }

    log::debug!("final state {}", rng.state());
    Ok(())
}
