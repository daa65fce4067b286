use serde::{Deserialize, Serialize};

/// Hours in a simulated day.
pub const HOURS_PER_DAY: u32 = 24;

/// One simulated hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTick {
    /// Hours since the start of the run.
    pub elapsed: u32,
    /// Hour of day in `0..24`.
    pub hour_of_day: u32,
}

/// Simulation clock for a run of fixed length, starting at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationClock {
    total_hours: u32,
}

impl SimulationClock {
    /// Clock covering `total_hours` hours.
    #[must_use]
    pub const fn new(total_hours: u32) -> Self {
        Self { total_hours }
    }

    /// Length of the run in hours.
    #[must_use]
    pub const fn total_hours(&self) -> u32 {
        self.total_hours
    }

    /// Every hour of the run, in order.
    pub fn ticks(self) -> impl Iterator<Item = ClockTick> {
        (0..self.total_hours).map(|elapsed| ClockTick {
            elapsed,
            hour_of_day: elapsed % HOURS_PER_DAY,
        })
    }
}

/// Split a duration into whole days and leftover hours.
#[must_use]
pub const fn days_and_hours(total_hours: u32) -> (u32, u32) {
    (total_hours / HOURS_PER_DAY, total_hours % HOURS_PER_DAY)
}
