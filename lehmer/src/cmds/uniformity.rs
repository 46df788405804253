use anyhow::{anyhow, Result};
use clap::Parser;
use lehmer_utils::random::SeededRandom;
use lehmer_utils::shuffle::shuffle;
use std::collections::HashMap;

use crate::config_file::Config;

const MAX_SIZE: usize = 8;

#[derive(Debug, Parser)]
pub struct Opts {
    #[clap(long, env = "LEHMER_SEED", allow_hyphen_values = true)]
    seed: Option<i64>,

    /// Length of the shuffled sequence, at most 8
    #[clap(long, default_value_t = 5)]
    size: usize,

    #[clap(long, default_value_t = 1_000_000)]
    rounds: u64,
}

#[derive(Debug, PartialEq)]
pub struct Report {
    pub permutations: u64,
    pub seen: usize,
    pub expected_frequency: f64,
    pub max_deviation: f64,
}

fn factorial(n: usize) -> u64 {
    (1..=n as u64).product()
}

/// Shuffles `0..size` `rounds` times and compares each ordering's frequency
/// with `1 / size!`. Orderings never produced count as a full deviation.
pub fn measure(rng: &mut SeededRandom, size: usize, rounds: u64) -> Result<Report> {
    if size > MAX_SIZE {
        return Err(anyhow!("Size {} is too large, at most {} is supported", size, MAX_SIZE));
    }
    if rounds == 0 {
        return Err(anyhow!("Rounds must be at least 1"));
    }

    let mut counts: HashMap<Vec<u8>, u64> = HashMap::new();
    for _ in 0..rounds {
        let mut items: Vec<u8> = (0..size as u8).collect();
        shuffle(&mut items, rng.fractions());
        *counts.entry(items).or_insert(0) += 1;
    }

    let permutations = factorial(size);
    let expected_frequency = 1.0 / permutations as f64;
    let mut max_deviation = counts
        .values()
        .map(|&count| (count as f64 / rounds as f64 - expected_frequency).abs())
        .fold(0.0, f64::max);
    if (counts.len() as u64) < permutations {
        max_deviation = max_deviation.max(expected_frequency);
    }

    Ok(Report {
        permutations,
        seen: counts.len(),
        expected_frequency,
        max_deviation,
    })
}

pub async fn run(opts: &Opts, config: &Config) -> Result<()> {
    let seed = super::resolve_seed(opts.seed, config)?;
    let mut rng = SeededRandom::new(seed);
    log::info!(
        "Shuffling {} items {} times with seed {}",
        opts.size,
        opts.rounds,
        seed
    );

    let report = measure(&mut rng, opts.size, opts.rounds)?;

    println!("permutations: {}/{}", report.seen, report.permutations);
    println!("expected frequency: {:.6}", report.expected_frequency);
    println!("max deviation: {:.6}", report.max_deviation);

    Ok(())
}
