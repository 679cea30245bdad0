//! Layered scoring configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `STREAMCREDIT_*` environment variables. CLI flags are applied
//! on top by the caller.

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat, Map};
use streamcredit_core::config::ScoringConfig;

/// Environment variable prefix, e.g. `STREAMCREDIT_FRAUD_THRESHOLD=30`.
pub const ENV_PREFIX: &str = "STREAMCREDIT";

/// Load configuration from `path` (if given) and the process environment.
pub fn load(path: Option<&Path>) -> Result<ScoringConfig> {
    load_with_env(path, None)
}

/// Like [`load`], reading environment variables from `env` instead of the
/// process environment when it is `Some`.
pub fn load_with_env(
    path: Option<&Path>,
    env: Option<Map<String, String>>,
) -> Result<ScoringConfig> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env),
    );

    let scoring: ScoringConfig = builder
        .build()
        .context("failed to read configuration")?
        .try_deserialize()
        .context("failed to parse configuration")?;
    scoring.validate().context("invalid configuration")?;
    Ok(scoring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn no_env() -> Option<Map<String, String>> {
        Some(Map::new())
    }

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_sources() {
        let cfg = load_with_env(None, no_env()).unwrap();
        assert_eq!(cfg, ScoringConfig::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let file = toml_file(concat!(
            "fraud_threshold = 30\n",
            "revenue_periods = 6\n",
            "\n[ladder]\n",
            "ceiling = 90\n",
            "\n[[ladder.steps]]\n",
            "max_rate = 0.2\n",
            "probability = 10\n",
        ));
        let cfg = load_with_env(Some(file.path()), no_env()).unwrap();
        assert_eq!(cfg.fraud_threshold, 30);
        assert_eq!(cfg.revenue_periods, 6);
        assert_eq!(cfg.min_sample_size, 10);
        assert_eq!(cfg.ladder.steps.len(), 1);
        assert_eq!(cfg.ladder.steps[0].max_rate, 0.2);
        assert_eq!(cfg.ladder.ceiling, 90);
    }

    #[test]
    fn env_overrides_file() {
        let file = toml_file("fraud_threshold = 30\n");
        let mut env = Map::new();
        env.insert("STREAMCREDIT_FRAUD_THRESHOLD".to_string(), "35".to_string());
        env.insert("STREAMCREDIT_MIN_SAMPLE_SIZE".to_string(), "25".to_string());
        let cfg = load_with_env(Some(file.path()), Some(env)).unwrap();
        assert_eq!(cfg.fraud_threshold, 35);
        assert_eq!(cfg.min_sample_size, 25);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let file = toml_file("revenue_periods = 0\n");
        let err = load_with_env(Some(file.path()), no_env()).unwrap_err();
        assert!(format!("{err:#}").contains("revenue_periods"), "{err:#}");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(load_with_env(Some(&path), no_env()).is_err());
    }
}
