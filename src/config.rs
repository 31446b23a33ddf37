//! TOML analysis configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level epocha configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Power spectral density settings.
    #[serde(default)]
    pub psd: PsdToml,

    /// Wavelet transform settings.
    #[serde(default)]
    pub wavelet: WaveletToml,

    /// Shift surrogate settings.
    #[serde(default)]
    pub shift: ShiftToml,

    /// Jitter surrogate settings.
    #[serde(default)]
    pub jitter: JitterToml,
}

impl AnalysisConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML or unknown keys.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse TOML config")
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&toml_str)?;
        debug!(path = %path.display(), seed = ?config.seed, "loaded analysis config");
        Ok(config)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PsdToml {
    #[serde(default)]
    pub fs: Option<f64>,
    /// Epoch as `[[start, end], ...]`.
    #[serde(default)]
    pub ep: Option<Vec<[f64; 2]>>,
    #[serde(default)]
    pub full_range: bool,
    #[serde(default)]
    pub norm: bool,
    /// Window length for the mean PSD, in seconds.
    #[serde(default)]
    pub interval_size: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaveletToml {
    #[serde(default)]
    pub fs: Option<f64>,
    /// `"l1"`, `"l2"` or `"none"`.
    #[serde(default = "default_wavelet_norm")]
    pub norm: String,
    #[serde(default = "default_gaussian_width")]
    pub gaussian_width: f64,
    #[serde(default = "default_window_length")]
    pub window_length: f64,
    #[serde(default)]
    pub freqs: FrequenciesToml,
}

impl Default for WaveletToml {
    fn default() -> Self {
        Self {
            fs: None,
            norm: default_wavelet_norm(),
            gaussian_width: default_gaussian_width(),
            window_length: default_window_length(),
            freqs: FrequenciesToml::default(),
        }
    }
}

fn default_wavelet_norm() -> String {
    "l1".to_string()
}
fn default_gaussian_width() -> f64 {
    1.5
}
fn default_window_length() -> f64 {
    1.0
}

/// Frequency grid: exactly one of `values`, `range`, `linear` or `geometric`
/// should be set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrequenciesToml {
    pub values: Option<Vec<f64>>,
    /// `[start, stop, step]`, stop included.
    pub range: Option<[f64; 3]>,
    pub linear: Option<SpacedToml>,
    pub geometric: Option<SpacedToml>,
}

impl Default for FrequenciesToml {
    fn default() -> Self {
        Self {
            values: None,
            range: None,
            linear: Some(SpacedToml {
                start: 1.0,
                stop: 100.0,
                count: 10,
            }),
            geometric: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpacedToml {
    pub start: f64,
    pub stop: f64,
    pub count: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShiftToml {
    #[serde(default)]
    pub min_shift: f64,
    #[serde(default)]
    pub max_shift: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JitterToml {
    #[serde(default)]
    pub min_jitter: f64,
    #[serde(default)]
    pub max_jitter: Option<f64>,
    #[serde(default)]
    pub keep_tsupport: bool,
}
