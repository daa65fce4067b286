pub mod run;
pub mod trace;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use parkade_sim::{SimulationConfig, load_config};

/// Options shared by every simulation command.
///
/// Values come from the config file first; flags override them.
#[derive(Args, Debug, Default)]
pub struct SimOptions {
    /// Path to a TOML config file (default: ./parkade.toml if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Comma-separated lot capacities, simulated in order.
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub lots: Option<Vec<usize>>,

    /// Simulated days per lot.
    #[arg(long)]
    pub days: Option<u32>,

    /// Initial random seed, shared across lots.
    #[arg(long)]
    pub seed: Option<u32>,
}

impl SimOptions {
    /// Load the config file and apply flag overrides.
    pub fn resolve(&self, working_dir: &Path) -> Result<SimulationConfig> {
        let mut config = load_config(working_dir, self.config.as_deref())?;
        if let Some(lots) = &self.lots {
            config.lot_capacities.clone_from(lots);
        }
        if let Some(days) = self.days {
            config.days = days;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.validate()?;
        Ok(config)
    }
}
