use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Optional YAML defaults file. Supplies fallback credentials, port and
/// timeout so they do not have to be repeated on every invocation; explicit
/// CLI flags always override these values.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ToolDefaults {
    pub username: Option<String>,
    pub password: Option<String>,
    pub port: Option<u16>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

pub const DEFAULT_CONFIG_PATH: &str = "config/camcfg.yaml";

/// Load the defaults file if it exists. A missing file at the default path is
/// fine (empty defaults); a missing file at an explicitly requested path is an
/// error.
pub fn load_defaults(path: &str, explicit: bool) -> Result<ToolDefaults> {
    if !Path::new(path).exists() {
        if explicit {
            bail!("Configuration file '{}' not found.", path);
        }
        debug!("No defaults file at '{}', using built-in defaults.", path);
        return Ok(ToolDefaults::default());
    }

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file '{}'", path))?;
    let defaults: ToolDefaults = serde_yaml::from_str(&config_str)
        .with_context(|| format!("Failed to parse YAML configuration from '{}'", path))?;
    validate_defaults(&defaults)
        .with_context(|| format!("Defaults file '{}' failed validation", path))?;
    info!("✅ Loaded connection defaults from '{}'", path);
    Ok(defaults)
}

fn validate_defaults(defaults: &ToolDefaults) -> Result<()> {
    if let Some(username) = &defaults.username {
        if username.is_empty() {
            bail!("Default username cannot be an empty string.");
        }
    }
    if defaults.timeout_secs == Some(0) {
        bail!("Default timeout_secs must be at least 1.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_default_path_yields_empty_defaults() {
        let defaults = load_defaults("does/not/exist.yaml", false).unwrap();
        assert!(defaults.username.is_none());
        assert!(defaults.port.is_none());
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        assert!(load_defaults("does/not/exist.yaml", true).is_err());
    }

    #[test]
    fn parses_partial_defaults_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "username: admin\ntimeout_secs: 5").unwrap();
        let defaults = load_defaults(file.path().to_str().unwrap(), true).unwrap();
        assert_eq!(defaults.username.as_deref(), Some("admin"));
        assert_eq!(defaults.timeout_secs, Some(5));
        assert!(defaults.port.is_none());
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs: 0").unwrap();
        assert!(load_defaults(file.path().to_str().unwrap(), true).is_err());
    }
}
