//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::*;

use epocha_intervals::IntervalSet;
use epocha_randomize::{JitterConfig, ShiftConfig};
use epocha_spectral::PsdConfig;
use epocha_wavelet::{Frequencies, WaveletConfig, WaveletNorm};

/// Parses a wavelet normalisation name; `"none"` disables normalisation.
pub fn parse_wavelet_norm(s: &str) -> Result<Option<WaveletNorm>> {
    if s.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    let norm = s
        .parse::<WaveletNorm>()
        .with_context(|| format!("unknown wavelet norm: {s:?}"))?;
    Ok(Some(norm))
}

/// Builds a [`PsdConfig`] from the TOML PSD configuration.
pub fn build_psd_config(psd: &PsdToml) -> Result<PsdConfig> {
    let mut cfg = PsdConfig::new()
        .with_full_range(psd.full_range)
        .with_norm(psd.norm);
    if let Some(fs) = psd.fs {
        cfg = cfg.with_fs(fs);
    }
    if let Some(ref pairs) = psd.ep {
        let ep = IntervalSet::from_pairs(pairs.iter().map(|&[start, end]| (start, end)))
            .context("invalid [psd].ep")?;
        cfg = cfg.with_ep(ep);
    }
    Ok(cfg)
}

/// Builds the [`PsdConfig`] and window length for
/// [`compute_mean_power_spectral_density`](epocha_spectral::compute_mean_power_spectral_density).
///
/// `interval_size` is required here and must be positive.
pub fn build_mean_psd_config(psd: &PsdToml) -> Result<(PsdConfig, f64)> {
    let Some(interval_size) = psd.interval_size else {
        bail!("[psd].interval_size is required for the mean PSD");
    };
    if !(interval_size.is_finite() && interval_size > 0.0) {
        bail!("[psd].interval_size must be a positive number, got {interval_size}");
    }
    Ok((build_psd_config(psd)?, interval_size))
}

/// Builds a [`WaveletConfig`] from the TOML wavelet configuration.
pub fn build_wavelet_config(wavelet: &WaveletToml) -> Result<WaveletConfig> {
    let norm = parse_wavelet_norm(&wavelet.norm)?;
    let mut cfg = WaveletConfig::new()
        .with_norm(norm)
        .with_gaussian_width(wavelet.gaussian_width)
        .with_window_length(wavelet.window_length);
    if let Some(fs) = wavelet.fs {
        cfg = cfg.with_fs(fs);
    }
    cfg.validate().context("invalid [wavelet] settings")?;
    Ok(cfg)
}

/// Builds the wavelet frequency grid.
///
/// Exactly one of `values`, `range`, `linear` or `geometric` must be set.
pub fn build_frequencies(freqs: &FrequenciesToml) -> Result<Frequencies> {
    let grid = match (&freqs.values, freqs.range, &freqs.linear, &freqs.geometric) {
        (Some(values), None, None, None) => Frequencies::explicit(values.clone()),
        (None, Some([start, stop, step]), None, None) => Frequencies::range(start, stop, step),
        (None, None, Some(s), None) => Frequencies::linear(s.start, s.stop, s.count),
        (None, None, None, Some(s)) => Frequencies::geometric(s.start, s.stop, s.count),
        (None, None, None, None) => {
            bail!("frequencies must have one of values, range, linear or geometric, got none")
        }
        _ => bail!("frequencies must have exactly one of values, range, linear or geometric"),
    };
    grid.context("invalid [wavelet.freqs]")
}

/// Builds a [`ShiftConfig`] from the TOML shift configuration.
pub fn build_shift_config(shift: &ShiftToml) -> ShiftConfig {
    let cfg = ShiftConfig::new().with_min_shift(shift.min_shift);
    match shift.max_shift {
        Some(max) => cfg.with_max_shift(max),
        None => cfg,
    }
}

/// Builds a [`JitterConfig`] from the TOML jitter configuration.
///
/// `max_jitter` is required here so a missing bound fails at load time.
pub fn build_jitter_config(jitter: &JitterToml) -> Result<JitterConfig> {
    let Some(max) = jitter.max_jitter else {
        bail!("[jitter].max_jitter is required");
    };
    if jitter.min_jitter > max {
        bail!(
            "[jitter].min_jitter ({}) must not exceed max_jitter ({max})",
            jitter.min_jitter
        );
    }
    Ok(JitterConfig::new()
        .with_min_jitter(jitter.min_jitter)
        .with_max_jitter(max)
        .with_keep_tsupport(jitter.keep_tsupport))
}

/// Seeded generator when `seed` is set, OS-seeded otherwise.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn wavelet_norm_names() {
        assert_eq!(parse_wavelet_norm("L1").unwrap(), Some(WaveletNorm::L1));
        assert_eq!(parse_wavelet_norm("l2").unwrap(), Some(WaveletNorm::L2));
        assert_eq!(parse_wavelet_norm("None").unwrap(), None);
        let err = parse_wavelet_norm("l3").unwrap_err();
        assert!(err.to_string().contains("l3"));
    }

    #[test]
    fn psd_config_from_toml() {
        let toml = PsdToml {
            fs: Some(250.0),
            ep: Some(vec![[0.0, 1.0]]),
            full_range: true,
            norm: false,
            interval_size: None,
        };
        let cfg = build_psd_config(&toml).unwrap();
        assert_eq!(cfg.fs(), Some(250.0));
        assert_eq!(cfg.ep().map(IntervalSet::len), Some(1));
        assert!(cfg.full_range());
    }

    #[test]
    fn psd_config_rejects_bad_epoch() {
        let toml = PsdToml {
            ep: Some(vec![[2.0, 1.0]]),
            ..PsdToml::default()
        };
        assert!(build_psd_config(&toml).is_err());
    }

    #[test]
    fn mean_psd_config_carries_interval_size() {
        let toml = PsdToml {
            fs: Some(1000.0),
            interval_size: Some(0.5),
            ..PsdToml::default()
        };
        let (cfg, interval_size) = build_mean_psd_config(&toml).unwrap();
        assert_eq!(interval_size, 0.5);
        assert_eq!(cfg.fs(), Some(1000.0));

        assert!(build_mean_psd_config(&PsdToml::default()).is_err());
        let negative = PsdToml {
            interval_size: Some(-1.0),
            ..PsdToml::default()
        };
        assert!(build_mean_psd_config(&negative).is_err());
    }

    #[test]
    fn wavelet_config_from_defaults() {
        let cfg = build_wavelet_config(&WaveletToml::default()).unwrap();
        assert_eq!(cfg.norm(), Some(WaveletNorm::L1));
        assert_eq!(cfg.gaussian_width(), 1.5);
    }

    #[test]
    fn wavelet_config_rejects_bad_width() {
        let toml = WaveletToml {
            gaussian_width: -1.0,
            ..WaveletToml::default()
        };
        assert!(build_wavelet_config(&toml).is_err());
    }

    #[test]
    fn frequencies_exactly_one_source() {
        let range = FrequenciesToml {
            values: None,
            range: Some([1.0, 51.0, 10.0]),
            linear: None,
            geometric: None,
        };
        assert_eq!(build_frequencies(&range).unwrap().len(), 6);

        let both = FrequenciesToml {
            values: Some(vec![4.0, 8.0]),
            ..FrequenciesToml::default()
        };
        assert!(build_frequencies(&both).is_err());

        let none = FrequenciesToml {
            values: None,
            range: None,
            linear: None,
            geometric: None,
        };
        assert!(build_frequencies(&none).is_err());
        assert_eq!(build_frequencies(&FrequenciesToml::default()).unwrap().len(), 10);
    }

    #[test]
    fn shift_config_from_toml() {
        let cfg = build_shift_config(&ShiftToml {
            min_shift: 0.5,
            max_shift: Some(2.0),
        });
        assert_eq!(cfg.min_shift(), 0.5);
        assert_eq!(cfg.max_shift(), Some(2.0));
        assert_eq!(build_shift_config(&ShiftToml::default()).max_shift(), None);
    }

    #[test]
    fn jitter_config_requires_max() {
        assert!(build_jitter_config(&JitterToml::default()).is_err());
        let cfg = build_jitter_config(&JitterToml {
            min_jitter: 0.0,
            max_jitter: Some(0.2),
            keep_tsupport: true,
        })
        .unwrap();
        assert_eq!(cfg.max_jitter(), Some(0.2));
        assert!(cfg.keep_tsupport());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a: u64 = build_rng(Some(3)).random();
        let b: u64 = build_rng(Some(3)).random();
        assert_eq!(a, b);
    }
}
