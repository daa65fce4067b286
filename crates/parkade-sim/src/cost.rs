//! Parking tariff.

/// Charge per hour for a short final block.
pub const HOURLY_COST: u64 = 3;

/// Flat charge for a full day, or for a final block longer than
/// [`HOURLY_THRESHOLD`] hours.
pub const DAILY_COST: u64 = 20;

/// Longest final block still billed by the hour.
pub const HOURLY_THRESHOLD: u32 = 6;

const HOURS_PER_DAY: u32 = 24;

/// Price of a stay of `hours` hours.
///
/// Each block of 24 hours beyond the first costs [`DAILY_COST`]. The
/// remaining block (1 to 24 hours) costs [`DAILY_COST`] when it exceeds
/// [`HOURLY_THRESHOLD`] hours and `hours * HOURLY_COST` otherwise.
#[must_use]
pub fn calculate_cost(hours: u32) -> u64 {
    let mut remaining = hours;
    let mut cost = 0;

    while remaining > HOURS_PER_DAY {
        cost += DAILY_COST;
        remaining -= HOURS_PER_DAY;
    }

    if remaining > HOURLY_THRESHOLD {
        cost + DAILY_COST
    } else {
        cost + u64::from(remaining) * HOURLY_COST
    }
}
