use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DATA_PATH_ENV: &str = "LCAVIEW_DATA_PATH";
pub const DEFAULT_CONFIG_FILE: &str = "lcaview.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file '{}' is unreadable: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file '{}' is invalid: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no data path configured; pass --data, set LCAVIEW_DATA_PATH, or provide lcaview.toml")]
    MissingDataPath,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Path to the disclosure CSV export.
    pub data_path: PathBuf,
}

impl AppConfig {
    /// Resolution order: explicit flag, then environment, then config file.
    pub fn resolve(
        cli_path: Option<PathBuf>,
        config_file: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        if let Some(data_path) = cli_path {
            return Ok(Self { data_path });
        }

        if let Ok(value) = env::var(DATA_PATH_ENV) {
            if !value.is_empty() {
                return Ok(Self {
                    data_path: PathBuf::from(value),
                });
            }
        }

        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    Err(ConfigError::MissingDataPath)
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("lcaview-{}-{}", std::process::id(), name));
        fs::write(&path, contents).expect("failed to write scratch config");
        path
    }

    #[test]
    fn cli_path_wins() {
        let config = AppConfig::resolve(Some(PathBuf::from("cases.csv")), None).unwrap();
        assert_eq!(config.data_path, PathBuf::from("cases.csv"));
    }

    #[test]
    fn reads_toml_file() {
        let path = scratch_file("ok.toml", "data_path = \"exports/lca.csv\"\n");
        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.data_path, PathBuf::from("exports/lca.csv"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn invalid_toml_is_reported() {
        let path = scratch_file("bad.toml", "data_path = [not toml\n");
        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_explicit_file_is_unreadable() {
        let err = AppConfig::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Unreadable { .. }));
    }
}
