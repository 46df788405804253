pub mod config;
pub mod draw;
pub mod indices;
pub mod shuffle;
pub mod uniformity;

use anyhow::{Context, Result};
use lehmer_utils::range::check_seed;

use crate::config_file::Config;

/// Picks the seed from the flag, then the config file, then `rand`.
pub fn resolve_seed(flag: Option<i64>, config: &Config) -> Result<i32> {
    match flag.or(config.seed) {
        Some(seed) => check_seed(seed).context("Invalid seed"),
        None => {
            let seed = rand::random::<i32>();
            log::info!("No seed given, using {} (pass --seed {} to repeat this run)", seed, seed);
            Ok(seed)
        }
    }
}
