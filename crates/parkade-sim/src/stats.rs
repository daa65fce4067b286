use serde::{Deserialize, Serialize};

/// Running totals for one lot's simulation run.
///
/// Every counter only grows during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotStatistics {
    /// Vehicles given a slot.
    pub admitted: u64,
    /// Admission attempts that found the lot full.
    pub refused: u64,
    /// Sum of assigned durations of departed vehicles.
    pub total_parked_hours: u64,
    /// Sum of fees paid by departed vehicles.
    pub total_revenue: u64,
}

impl LotStatistics {
    pub(crate) const fn record_admission(&mut self) {
        self.admitted += 1;
    }

    pub(crate) const fn record_refusal(&mut self) {
        self.refused += 1;
    }

    pub(crate) fn record_departure(&mut self, hours: u32, cost: u64) {
        self.total_parked_hours += u64::from(hours);
        self.total_revenue += cost;
    }

    /// Mean parked hours per admitted vehicle, `None` when nothing was admitted.
    ///
    /// Stays still running at the end of the simulation contribute to
    /// `admitted` but not to `total_parked_hours`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_hours(&self) -> Option<f64> {
        if self.admitted == 0 {
            return None;
        }
        Some(self.total_parked_hours as f64 / self.admitted as f64)
    }
}
