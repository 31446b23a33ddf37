//! Tracing subscriber set-up.

use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "epocha",
    "epocha_intervals",
    "epocha_randomize",
    "epocha_series",
    "epocha_spectral",
    "epocha_stats",
    "epocha_wavelet",
];

/// Initialize tracing for the host application.
///
/// Mapping:
/// - 0 -> warn
/// - 1 -> info
/// - 2 -> debug
/// - 3+ -> trace
///
/// `RUST_LOG` env var overrides the verbosity if set. Installing a second
/// global subscriber is a no-op.
pub fn init(verbosity: u8) {
    let filter = build_filter(verbosity);
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn build_filter(verbosity: u8) -> EnvFilter {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_covers_every_crate() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = build_filter(2).to_string();
        for target in CRATE_TARGETS {
            assert!(filter.contains(&format!("{target}=debug")), "{filter}");
        }
    }

    #[test]
    fn init_twice_is_harmless() {
        init(0);
        init(3);
    }
}
