//! Hourly transition engine.
//!
//! Each simulated hour runs, in order:
//!
//! 1. a departure pass over every slot, billing vehicles on their last hour;
//! 2. during the admission window (06:00 to 20:59), one draw for the number
//!    of arrivals, followed by first-fit admission of each arrival with its
//!    own duration draw. The first refusal ends admissions for the hour.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cost::calculate_cost;
use crate::lot::Lot;
use crate::rng::{RandomSource, buckets};
use crate::stats::LotStatistics;

/// First hour of day with arrivals.
pub const ADMISSION_OPEN: u32 = 6;

/// Last hour of day with arrivals.
pub const ADMISSION_CLOSE: u32 = 20;

/// First hour of the evening arrival band.
pub const EVENING_START: u32 = 18;

/// Longest stay in hours.
pub const HOUR_MAX: u32 = 72;

const DAYTIME_MIN_ARRIVALS: u32 = 5;
const DAYTIME_SPREAD: NonZeroU32 = buckets(5);
const EVENING_MIN_ARRIVALS: u32 = 1;
const EVENING_SPREAD: NonZeroU32 = buckets(2);
const DURATION_SPREAD: NonZeroU32 = buckets(HOUR_MAX);

/// Arrival regime for an hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrivalBand {
    /// No arrivals (21:00 to 05:59).
    Closed,
    /// 5 to 9 arrivals per hour (06:00 to 17:59).
    Daytime,
    /// 1 to 2 arrivals per hour (18:00 to 20:59).
    Evening,
}

impl ArrivalBand {
    /// Band in effect at `hour_of_day`.
    #[must_use]
    pub const fn for_hour(hour_of_day: u32) -> Self {
        if hour_of_day < ADMISSION_OPEN || hour_of_day > ADMISSION_CLOSE {
            Self::Closed
        } else if hour_of_day < EVENING_START {
            Self::Daytime
        } else {
            Self::Evening
        }
    }

    /// Inclusive range of arrival counts, `None` when closed.
    #[must_use]
    pub const fn arrival_range(self) -> Option<(u32, u32)> {
        match self {
            Self::Closed => None,
            Self::Daytime => Some((
                DAYTIME_MIN_ARRIVALS,
                DAYTIME_MIN_ARRIVALS + DAYTIME_SPREAD.get() - 1,
            )),
            Self::Evening => Some((
                EVENING_MIN_ARRIVALS,
                EVENING_MIN_ARRIVALS + EVENING_SPREAD.get() - 1,
            )),
        }
    }

    /// Draw this hour's arrival count. A closed hour consumes no draw.
    pub fn draw_arrivals(self, rng: &mut RandomSource) -> u32 {
        match self {
            Self::Closed => 0,
            Self::Daytime => DAYTIME_MIN_ARRIVALS + rng.draw(DAYTIME_SPREAD),
            Self::Evening => EVENING_MIN_ARRIVALS + rng.draw(EVENING_SPREAD),
        }
    }
}

/// Draw a parking duration in `1..=HOUR_MAX`.
pub fn draw_duration(rng: &mut RandomSource) -> u32 {
    1 + rng.draw(DURATION_SPREAD)
}

/// What happened to a lot during one simulated hour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourReport {
    /// Vehicles that left during the departure pass.
    pub departed: u32,
    /// Hours billed to departing vehicles.
    pub departed_hours: u64,
    /// Revenue collected from departing vehicles.
    pub revenue: u64,
    /// Arrival count drawn for the hour (0 outside the admission window).
    pub arrivals: u32,
    /// Arrivals that were given a slot.
    pub admitted: u32,
    /// Refused admission attempts (0 or 1).
    pub refused: u32,
    /// Occupied slots at the end of the hour.
    pub occupied: usize,
}

impl HourReport {
    /// Arrivals dropped without an admission attempt after the lot filled.
    #[must_use]
    pub const fn turned_away(&self) -> u32 {
        self.arrivals - self.admitted - self.refused
    }
}

/// Advance `lot` by one hour at `hour_of_day`, updating `stats`.
pub fn simulate_hour(
    hour_of_day: u32,
    lot: &mut Lot,
    stats: &mut LotStatistics,
    rng: &mut RandomSource,
) -> HourReport {
    let mut report = HourReport::default();

    for departure in lot.advance_hour() {
        let cost = calculate_cost(departure.assigned_hours);
        stats.record_departure(departure.assigned_hours, cost);
        report.departed += 1;
        report.departed_hours += u64::from(departure.assigned_hours);
        report.revenue += cost;
    }

    report.arrivals = ArrivalBand::for_hour(hour_of_day).draw_arrivals(rng);

    for _ in 0..report.arrivals {
        if lot.first_free_slot().is_none() {
            stats.record_refusal();
            report.refused += 1;
            trace!(
                hour_of_day,
                capacity = lot.capacity(),
                dropped = report.arrivals - report.admitted - 1,
                "lot full, closing admissions for the hour"
            );
            break;
        }
        let hours = draw_duration(rng);
        lot.admit(hours);
        stats.record_admission();
        report.admitted += 1;
    }

    report.occupied = lot.occupied();
    report
}
