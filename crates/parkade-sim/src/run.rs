//! Lot simulation runs.
//!
//! A run starts from an empty lot and zeroed statistics and applies the
//! hourly engine once per simulated hour. Vehicles still parked when the
//! run ends are not billed and add nothing to the totals.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::{ClockTick, SimulationClock};
use crate::engine::{HourReport, simulate_hour};
use crate::lot::Lot;
use crate::rng::RandomSource;
use crate::stats::LotStatistics;

/// Hourly record of a traced run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracedHour {
    /// Hours since the start of the run.
    pub elapsed: u32,
    /// Hour of day in `0..24`.
    pub hour_of_day: u32,
    /// Engine outcome for the hour.
    #[serde(flatten)]
    pub report: HourReport,
}

/// Full hour-by-hour account of one lot's run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotTrace {
    /// Lot capacity.
    pub capacity: usize,
    /// Random state when the run started.
    pub start_state: u32,
    /// Final statistics.
    pub stats: LotStatistics,
    /// One entry per simulated hour.
    pub hours: Vec<TracedHour>,
    /// Vehicles still parked at the end; their stays are not counted.
    pub unfinished: usize,
}

/// Simulate one lot for `total_hours` hours, drawing from the shared `rng`.
#[must_use]
pub fn run_lot_simulation(
    capacity: usize,
    total_hours: u32,
    rng: &mut RandomSource,
) -> LotStatistics {
    let (stats, _) = drive(capacity, total_hours, rng, |_, _| {});
    stats
}

/// Like [`run_lot_simulation`], recording every hour.
#[must_use]
pub fn run_lot_traced(capacity: usize, total_hours: u32, rng: &mut RandomSource) -> LotTrace {
    let start_state = rng.state();
    let mut hours = Vec::with_capacity(usize::try_from(total_hours).unwrap_or_default());
    let (stats, unfinished) = drive(capacity, total_hours, rng, |tick, report| {
        hours.push(TracedHour {
            elapsed: tick.elapsed,
            hour_of_day: tick.hour_of_day,
            report,
        });
    });

    LotTrace {
        capacity,
        start_state,
        stats,
        hours,
        unfinished,
    }
}

fn drive(
    capacity: usize,
    total_hours: u32,
    rng: &mut RandomSource,
    mut observe: impl FnMut(ClockTick, HourReport),
) -> (LotStatistics, usize) {
    let mut lot = Lot::new(capacity);
    let mut stats = LotStatistics::default();

    debug!(capacity, total_hours, rng_state = rng.state(), "lot run starting");

    for tick in SimulationClock::new(total_hours).ticks() {
        let report = simulate_hour(tick.hour_of_day, &mut lot, &mut stats, rng);
        observe(tick, report);
    }

    let unfinished = lot.occupied();
    debug!(
        capacity,
        admitted = stats.admitted,
        refused = stats.refused,
        total_parked_hours = stats.total_parked_hours,
        total_revenue = stats.total_revenue,
        unfinished,
        "lot run finished"
    );

    (stats, unfinished)
}
