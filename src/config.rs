use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Cli;
use crate::error::AttributionError;

/// Root configuration structure, deserialized from `.upstream-licenses/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub attribution: AttributionConfig,
}

/// Defaults for the attribution run; every field can be overridden on the
/// command line.
#[derive(Debug, Deserialize)]
pub struct AttributionConfig {
    /// Preference list, most wanted first.
    #[serde(default)]
    pub licenses: Vec<String>,
    /// Directory with one text file per license identifier.
    #[serde(default = "default_license_dir")]
    pub license_dir: PathBuf,
    /// Where the attribution document is written.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Prefix each dependency name is appended to in the document listing.
    #[serde(default = "default_link_base")]
    pub link_base: String,
}

fn default_license_dir() -> PathBuf {
    PathBuf::from("./_licenses")
}

fn default_output() -> PathBuf {
    PathBuf::from("UPSTREAM-LICENSES.md")
}

fn default_link_base() -> String {
    "https://crates.io/crates/".to_string()
}

impl Default for AttributionConfig {
    fn default() -> Self {
        AttributionConfig {
            licenses: Vec::new(),
            license_dir: default_license_dir(),
            output: default_output(),
            link_base: default_link_base(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.upstream-licenses/config.toml`
/// 3. `~/.config/upstream-licenses/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".upstream-licenses").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("upstream-licenses")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}

/// Effective settings for one run, after command-line overrides.
#[derive(Debug)]
pub struct Settings {
    pub preferences: Vec<String>,
    pub license_dir: PathBuf,
    pub output: PathBuf,
    pub link_base: String,
}

impl Settings {
    /// Merge command line (and `LICENSE_FILE_DIR`) over the config file.
    ///
    /// Blank entries in the preference list are dropped; an empty list is an
    /// error since nothing could ever be attributed.
    pub fn resolve(cli: &Cli, config: Config) -> Result<Settings, AttributionError> {
        let AttributionConfig {
            licenses,
            license_dir,
            output,
            link_base,
        } = config.attribution;

        let source = if cli.licenses.is_empty() {
            licenses
        } else {
            cli.licenses.clone()
        };
        let preferences: Vec<String> = source
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();

        if preferences.is_empty() {
            return Err(AttributionError::NoPreferences);
        }

        Ok(Settings {
            preferences,
            license_dir: cli.license_dir.clone().unwrap_or(license_dir),
            output: cli.output.clone().unwrap_or(output),
            link_base,
        })
    }
}
