use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::clock::HOURS_PER_DAY;
use crate::error::ConfigError;
use crate::rng::{RandomSource, REFERENCE_SEED};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "parkade.toml";

/// Which lots to simulate, for how long, and from which seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Capacities of the lots, simulated in this order.
    #[serde(default = "default_lot_capacities")]
    pub lot_capacities: Vec<usize>,
    /// Simulated days per lot.
    #[serde(default = "default_days")]
    pub days: u32,
    /// Initial generator state, shared by all lots in sequence.
    #[serde(default = "default_seed")]
    pub seed: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            lot_capacities: default_lot_capacities(),
            days: default_days(),
            seed: default_seed(),
        }
    }
}

impl SimulationConfig {
    /// Simulated hours per lot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DurationOverflow`] if `days * 24` overflows.
    pub const fn total_hours(&self) -> Result<u32, ConfigError> {
        match self.days.checked_mul(HOURS_PER_DAY) {
            Some(hours) => Ok(hours),
            None => Err(ConfigError::DurationOverflow { days: self.days }),
        }
    }

    /// Check the configuration before running.
    ///
    /// Zero-capacity lots and zero-day runs are valid and produce
    /// degenerate statistics.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lot_capacities.is_empty() {
            return Err(ConfigError::NoLots);
        }
        self.total_hours()?;
        RandomSource::new(self.seed)?;
        Ok(())
    }
}

/// Load a configuration file.
///
/// With an explicit `path` the file must exist. Without one,
/// [`DEFAULT_CONFIG_FILE`] is read from `dir` when present and defaults are
/// used otherwise. Missing keys take their defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(dir: &Path, path: Option<&Path>) -> Result<SimulationConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = dir.join(DEFAULT_CONFIG_FILE);
            if !candidate.exists() {
                return Ok(SimulationConfig::default());
            }
            candidate
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<SimulationConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

fn default_lot_capacities() -> Vec<usize> {
    vec![50, 100, 150, 200, 250]
}

const fn default_days() -> u32 {
    31
}

const fn default_seed() -> u32 {
    REFERENCE_SEED
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_reference_run() {
        let config = SimulationConfig::default();
        assert_eq!(config.lot_capacities, vec![50, 100, 150, 200, 250]);
        assert_eq!(config.days, 31);
        assert_eq!(config.seed, 314_159);
        assert_eq!(config.total_hours(), Ok(744));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_lot_list_rejected() {
        let config = SimulationConfig {
            lot_capacities: Vec::new(),
            ..SimulationConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoLots));
    }

    #[test]
    fn bad_seed_rejected() {
        for seed in [0, crate::rng::MODULUS, u32::MAX] {
            let config = SimulationConfig {
                seed,
                ..SimulationConfig::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::InvalidSeed { seed }));
        }
    }

    #[test]
    fn overflowing_duration_rejected() {
        let config = SimulationConfig {
            days: u32::MAX,
            ..SimulationConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DurationOverflow { days: u32::MAX })
        );
    }

    #[test]
    fn degenerate_lots_and_durations_are_valid() {
        let config = SimulationConfig {
            lot_capacities: vec![0],
            days: 0,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_default_file_yields_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let config = load_config(dir.path(), None).expect("load");
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "days = 2\nseed = 42\n")
            .expect("write config");

        let config = load_config(dir.path(), None).expect("load");
        assert_eq!(config.days, 2);
        assert_eq!(config.seed, 42);
        assert_eq!(config.lot_capacities, vec![50, 100, 150, 200, 250]);
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("nope.toml");
        let err = load_config(dir.path(), Some(&missing)).expect_err("missing file");
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "lot_capacities = \"lots\"\n").expect("write config");
        let err = load_config(dir.path(), Some(&path)).expect_err("parse failure");
        assert!(err.to_string().contains("Failed to parse"));
        assert!(err.to_string().contains("bad.toml"));
    }
}
