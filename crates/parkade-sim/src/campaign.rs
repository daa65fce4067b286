//! Campaign runner: every configured lot, in order, on one random stream.
//!
//! Lots are simulated strictly one after another and the random source is
//! handed from each lot to the next without reseeding, so a lot's results
//! depend on every lot simulated before it.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::rng::RandomSource;
use crate::run::{LotTrace, run_lot_simulation, run_lot_traced};
use crate::stats::LotStatistics;

/// Outcome for one lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotReport {
    /// Lot capacity.
    pub capacity: usize,
    /// Final statistics.
    pub stats: LotStatistics,
}

/// Aggregate report for a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignReport {
    /// Initial generator state.
    pub seed: u32,
    /// Simulated days per lot.
    pub days: u32,
    /// Simulated hours per lot.
    pub total_hours: u32,
    /// Per-lot results in simulation order.
    pub lots: Vec<LotReport>,
    /// Generator state after the last lot.
    pub final_state: u32,
}

impl CampaignReport {
    /// Sum of all lots' revenue.
    #[must_use]
    pub fn total_revenue(&self) -> u64 {
        self.lots.iter().map(|lot| lot.stats.total_revenue).sum()
    }
}

/// Run every configured lot.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn run_campaign(config: &SimulationConfig) -> Result<CampaignReport> {
    config.validate()?;
    let total_hours = config.total_hours()?;
    let mut rng = RandomSource::new(config.seed)?;

    let lots = config
        .lot_capacities
        .iter()
        .map(|&capacity| LotReport {
            capacity,
            stats: run_lot_simulation(capacity, total_hours, &mut rng),
        })
        .collect::<Vec<_>>();

    let report = CampaignReport {
        seed: config.seed,
        days: config.days,
        total_hours,
        lots,
        final_state: rng.state(),
    };

    info!(
        lots = report.lots.len(),
        total_hours,
        total_revenue = report.total_revenue(),
        "campaign complete"
    );

    Ok(report)
}

/// Replay the lot at `index` with a full hourly trace.
///
/// Earlier lots are re-simulated first so the replayed lot starts from the
/// same random state it had in the full campaign.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or `index` is out of
/// range.
pub fn replay_lot(config: &SimulationConfig, index: usize) -> Result<LotTrace> {
    config.validate()?;
    let count = config.lot_capacities.len();
    let Some(&capacity) = config.lot_capacities.get(index) else {
        return Err(ConfigError::LotIndexOutOfRange { index, count }.into());
    };
    let total_hours = config.total_hours()?;
    let mut rng = RandomSource::new(config.seed)?;

    for &earlier in &config.lot_capacities[..index] {
        let _ = run_lot_simulation(earlier, total_hours, &mut rng);
    }

    Ok(run_lot_traced(capacity, total_hours, &mut rng))
}
