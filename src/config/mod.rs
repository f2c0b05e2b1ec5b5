use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Platform size used when neither the CLI nor a config file sets one
pub const DEFAULT_PLATFORM_SIZE: u8 = 10;

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct FileConfig {
    #[serde(default)]
    pub platform_size: Option<u8>,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub json: bool,
}

/// A config file that was found but could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedConfig {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of searching the standard config locations
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConfigSearch {
    pub config: Option<FileConfig>,
    pub skipped: Vec<SkippedConfig>,
}

impl ConfigSearch {
    /// Emit a warning for every skipped file. Call once logging is set up.
    pub fn log_skipped(&self) {
        for skipped in &self.skipped {
            tracing::warn!(
                path = %skipped.path.display(),
                error = %skipped.error,
                "Failed to parse config file"
            );
        }
    }
}

impl FileConfig {
    /// Load the first config file found in the standard locations
    pub fn load() -> ConfigSearch {
        Self::load_from(&get_config_paths())
    }

    fn load_from(paths: &[PathBuf]) -> ConfigSearch {
        let mut search = ConfigSearch::default();
        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        search.config = Some(config);
                        return search;
                    }
                    Err(e) => search.skipped.push(SkippedConfig {
                        path: path.clone(),
                        error: e.to_string(),
                    }),
                }
            }
        }
        search
    }

    /// Read an explicitly requested config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("landing-area.toml"),
        PathBuf::from(".landing-area.toml"),
    ];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("landing-area").join("config.toml"));
        paths.push(config_dir.join("landing-area.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".landing-area.toml"));
    }

    paths
}
