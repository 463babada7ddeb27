use std::env;
use std::path::PathBuf;

use anyhow::Result;
use tracing::warn;

use crate::similarity::traits::ComparisonMode;

/// Threshold used when none is given or the given one can't be parsed.
pub const DEFAULT_THRESHOLD: f64 = 50.0;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags override anything set here.
pub struct Config {
    /// Folder scanned by `check` when no directory argument is given
    pub submissions_dir: PathBuf,
    /// Where report files are written
    pub reports_dir: PathBuf,
    /// Display threshold in percent
    pub threshold: f64,
    pub mode: ComparisonMode,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nothing is required; every field has a default. A bad threshold or
    /// mode falls back to the default with a warning rather than failing.
    pub fn load() -> Result<Self> {
        let threshold = env::var("SIMCHECK_THRESHOLD")
            .map(|raw| parse_threshold(&raw))
            .unwrap_or(DEFAULT_THRESHOLD);

        let mode = match env::var("SIMCHECK_MODE") {
            Ok(raw) => raw.parse::<ComparisonMode>().unwrap_or_else(|e| {
                warn!("{e}; using standard mode");
                ComparisonMode::Standard
            }),
            Err(_) => ComparisonMode::Standard,
        };

        Ok(Self {
            submissions_dir: env::var("SIMCHECK_SUBMISSIONS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("submissions")),
            reports_dir: env::var("SIMCHECK_REPORTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("reports")),
            threshold,
            mode,
        })
    }
}

/// Parse a percent threshold, falling back to 50 on bad input.
///
/// Accepts anything that parses as a finite number in 0-100, with an optional
/// trailing `%`. Everything else is a configuration error that is recovered
/// from, not a reason to abort.
pub fn parse_threshold(raw: &str) -> f64 {
    let trimmed = raw.trim().trim_end_matches('%').trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && (0.0..=100.0).contains(&v) => v,
        _ => {
            warn!(
                input = raw,
                default = DEFAULT_THRESHOLD,
                "Invalid threshold, using default"
            );
            DEFAULT_THRESHOLD
        }
    }
}
