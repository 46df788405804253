use anyhow::Result;
use log::LevelFilter;

/// Initialize env_logger. `RUST_LOG` still takes precedence over `log_level`.
pub fn init_logging(log_level: Option<String>) -> Result<()> {
    let level_str = log_level.unwrap_or_else(|| "info".to_string());
    let (level_str, known) = match level_str.to_lowercase().parse::<LevelFilter>() {
        Ok(level) => (level.to_string().to_lowercase(), true),
        Err(_) => ("info".to_string(), false),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&level_str))
        .format_timestamp(None)
        .try_init()?;

    if !known {
        log::warn!("Unknown log level, falling back to info");
    }
    log::debug!("Logging initialized (level: {})", level_str);

    Ok(())
}
