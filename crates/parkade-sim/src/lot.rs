//! Per-lot slot occupancy.
//!
//! A lot is an arena of slots indexed `0..capacity`. An empty slot is
//! `None`; an occupied slot carries the vehicle's assigned and remaining
//! hours, both non-zero for as long as the vehicle is parked.

use serde::{Deserialize, Serialize};

/// A parked vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkedVehicle {
    /// Hours granted at admission; fixed for the stay.
    pub assigned_hours: u32,
    /// Hours left before the vehicle departs.
    pub remaining_hours: u32,
}

/// A vehicle leaving its slot this hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departure {
    /// Slot the vehicle occupied.
    pub slot: usize,
    /// Hours the vehicle was granted.
    pub assigned_hours: u32,
}

/// Slot arena for one lot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lot {
    slots: Vec<Option<ParkedVehicle>>,
}

impl Lot {
    /// Create a lot with every slot free.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Vehicle in `slot`, if any.
    #[must_use]
    pub fn vehicle(&self, slot: usize) -> Option<ParkedVehicle> {
        self.slots.get(slot).copied().flatten()
    }

    /// Lowest-index free slot.
    #[must_use]
    pub fn first_free_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Park a vehicle for `hours` in the first free slot.
    ///
    /// Returns the slot used, or `None` when the lot is full. `hours` must
    /// be at least 1; a zero-hour stay would leave the slot looking free.
    pub fn admit(&mut self, hours: u32) -> Option<usize> {
        debug_assert!(hours > 0, "a stay lasts at least one hour");
        let slot = self.first_free_slot()?;
        self.slots[slot] = Some(ParkedVehicle {
            assigned_hours: hours,
            remaining_hours: hours,
        });
        Some(slot)
    }

    /// Advance every parked vehicle by one hour.
    ///
    /// A vehicle with more than one hour left loses an hour; a vehicle on
    /// its last hour leaves and its slot is freed. Departures are returned
    /// in slot order.
    pub fn advance_hour(&mut self) -> Vec<Departure> {
        let mut departures = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(vehicle) = slot else {
                continue;
            };
            if vehicle.remaining_hours > 1 {
                vehicle.remaining_hours -= 1;
            } else {
                departures.push(Departure {
                    slot: index,
                    assigned_hours: vehicle.assigned_hours,
                });
                *slot = None;
            }
        }
        departures
    }

    /// Iterate over occupied slots as `(slot, vehicle)`.
    pub fn parked(&self) -> impl Iterator<Item = (usize, ParkedVehicle)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|vehicle| (index, vehicle)))
    }
}
