// src/settings.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Serialize, Deserialize};

const ENV_PREFIX: &str = "CASESTUDY";

/// Which host the deck runs under. Standalone owns the whole window and shows
/// the File menu and branding; embedded only draws the deck itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HostMode {
    #[default]
    Standalone,
    Embedded,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub host_mode: HostMode,
    pub analysis_delay_ms: u64,
    pub application_submitted: bool,
    pub initial_slide: usize,
    pub fixtures_path: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host_mode: HostMode::Standalone,
            analysis_delay_ms: 2000,
            application_submitted: true,
            initial_slide: 0,
            fixtures_path: None,
            window_width: 1280.0,
            window_height: 860.0,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Layers defaults, a TOML file and `CASESTUDY_*` environment variables.
    /// An explicit path must exist; the per-user file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        match explicit {
            Some(path) => {
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(path) = Self::user_config_path() {
                    builder = builder.add_source(File::from(path).required(false));
                }
            }
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")?;

        Ok(settings)
    }

    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("casestudy-deck").join("settings.toml"))
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_the_case_study() {
        let settings = Settings::default();
        assert_eq!(settings.host_mode, HostMode::Standalone);
        assert_eq!(settings.analysis_delay(), Duration::from_millis(2000));
        assert!(settings.application_submitted);
        assert_eq!(settings.initial_slide, 0);
    }

    #[test]
    fn file_values_override_defaults() {
        let file = toml_file("host_mode = \"embedded\"\nanalysis_delay_ms = 250\napplication_submitted = false\n");
        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.host_mode, HostMode::Embedded);
        assert_eq!(settings.analysis_delay_ms, 250);
        assert!(!settings.application_submitted);
        // untouched keys keep their defaults
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Settings::load(Some(&missing)).is_err());
    }

    #[test]
    fn unknown_host_mode_is_rejected() {
        let file = toml_file("host_mode = \"kiosk\"\n");
        assert!(Settings::load(Some(file.path())).is_err());
    }
}
