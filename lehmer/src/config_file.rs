use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    pub seed: Option<i64>,
    pub log_level: Option<String>,
}

pub fn read_config(path: &Path) -> Result<Config> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open config file {}", path.display()))?;
    let config: Config = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Writes a default config to `path`. Refuses to overwrite an existing file.
pub fn write_default_config(path: &Path) -> Result<Config> {
    if path.exists() {
        return Err(anyhow::anyhow!(
            "Config file already exists at {}. Please choose a different path or remove the existing file.",
            path.display()
        ));
    }

    let config = Config {
        seed: Some(0),
        log_level: Some("info".to_string()),
    };
    let file = fs::File::create(path).context("Failed to create config file")?;
    serde_json::to_writer_pretty(file, &config).context("Failed to write default config file")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("lehmer.json");

        let written = write_default_config(&path)?;
        let read = read_config(&path)?;
        assert_eq!(written, read);
        assert_eq!(read.seed, Some(0));
        Ok(())
    }

    #[test]
    fn test_refuses_overwrite() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("lehmer.json");
        fs::write(&path, "{}")?;

        assert!(write_default_config(&path).is_err());
        assert_eq!(fs::read_to_string(&path)?, "{}");
        Ok(())
    }

    #[test]
    fn test_missing_fields_default_to_none() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{"seed": -12}"#)?;

        let config = read_config(&path)?;
        assert_eq!(config.seed, Some(-12));
        assert!(config.log_level.is_none());
        Ok(())
    }

    #[test]
    fn test_invalid_json_is_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("broken.json");
        fs::write(&path, "seed = 3")?;

        assert!(read_config(&path).is_err());
        Ok(())
    }
}
