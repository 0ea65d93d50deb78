use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Name of the config file picked up from the working directory.
pub const CONFIG_FILE_NAME: &str = "average.toml";

/// How end of input before a negative sentinel is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EofPolicy {
    /// End of input ends the sequence as if a sentinel had been read.
    #[default]
    Sentinel,
    /// End of input is a fatal error.
    Error,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub on_eof: EofPolicy,
    pub format: OutputFormat,
}

/// Config as stored in average.toml.
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    on_eof: Option<EofPolicy>,
    format: Option<OutputFormat>,
}

impl Config {
    /// Load `average.toml` from `dir` if present. A missing or unreadable
    /// file yields the defaults.
    pub fn load(dir: &Path) -> Self {
        let mut config = Config::default();

        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return config;
        }
        match read_file_config(&path) {
            Ok(fc) => {
                log::info!("loaded config from {}", path.display());
                config.apply_file_config(&fc);
            }
            Err(e) => log::warn!("ignoring {}: {e}", path.display()),
        }
        config
    }

    /// Load an explicitly named config file. Any failure is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let fc = read_file_config(path)?;
        log::info!("loaded config from {}", path.display());
        let mut config = Config::default();
        config.apply_file_config(&fc);
        Ok(config)
    }

    fn apply_file_config(&mut self, fc: &FileConfig) {
        if let Some(v) = fc.on_eof {
            self.on_eof = v;
        }
        if let Some(v) = fc.format {
            self.format = v;
        }
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    toml::from_str(&content).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.on_eof, EofPolicy::Sentinel);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn load_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(tmp.path());
        assert_eq!(config.on_eof, EofPolicy::Sentinel);
    }

    #[test]
    fn load_from_average_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"
            on_eof = "error"
            format = "json"
            "#,
        )
        .unwrap();
        let config = Config::load(tmp.path());
        assert_eq!(config.on_eof, EofPolicy::Error);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "format = \"json\"\n").unwrap();
        let config = Config::load(tmp.path());
        assert_eq!(config.on_eof, EofPolicy::Sentinel);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn invalid_implicit_file_is_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "on_eof = \"maybe\"\n").unwrap();
        let config = Config::load(tmp.path());
        assert_eq!(config.on_eof, EofPolicy::Sentinel);
    }

    #[test]
    fn invalid_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, "colour = \"blue\"\n").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = Config::from_file(&tmp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }
}
