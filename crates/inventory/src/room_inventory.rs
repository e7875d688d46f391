use innkeep_core::{DomainError, DomainResult};

use crate::report::OccupancyReport;
use crate::value::{DailyRate, RoomCount};

/// A single hotel's rooms: how many exist, how many are occupied, and what a
/// room costs per day.
///
/// Invariants, held before and after every operation:
/// - `0 <= occupied_rooms <= total_rooms`
/// - `total_rooms > 0`
/// - `daily_rate >= 0`
///
/// Errors are reserved for arguments the inventory can never accept (see
/// [`DomainError`]). Running out of rooms, or checking out more rooms than are
/// occupied, is an ordinary outcome: `check_in`/`check_out` return `false` and
/// leave the state untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomInventory {
    name: String,
    total_rooms: RoomCount,
    occupied_rooms: u32,
    /// `None` until the first successful `set_daily_rate`.
    daily_rate: Option<DailyRate>,
}

impl RoomInventory {
    /// Create an inventory with every room vacant and no rate configured.
    ///
    /// Fails with [`DomainError::InvalidArgument`] when `total_rooms <= 0`.
    pub fn new(name: impl Into<String>, total_rooms: i64) -> DomainResult<Self> {
        let total_rooms = RoomCount::new(total_rooms)?;
        Ok(Self::with_capacity(name, total_rooms))
    }

    pub fn with_capacity(name: impl Into<String>, total_rooms: RoomCount) -> Self {
        Self {
            name: name.into(),
            total_rooms,
            occupied_rooms: 0,
            daily_rate: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn occupied_rooms(&self) -> u32 {
        self.occupied_rooms
    }

    pub fn total_rooms(&self) -> u32 {
        self.total_rooms.get()
    }

    pub fn available_rooms(&self) -> u32 {
        self.total_rooms.get() - self.occupied_rooms
    }

    /// Current rate; `0.0` while no rate has been set.
    pub fn daily_rate(&self) -> f64 {
        self.daily_rate.map(DailyRate::value).unwrap_or(0.0)
    }

    pub fn is_rate_set(&self) -> bool {
        self.daily_rate.is_some()
    }

    /// Set the price per room per day. The last successful call wins.
    ///
    /// Fails with [`DomainError::InvalidArgument`] for negative or non-finite
    /// rates, leaving the previous rate in place.
    pub fn set_daily_rate(&mut self, rate: f64) -> DomainResult<()> {
        let rate = DailyRate::new(rate)?;
        self.daily_rate = Some(rate);
        tracing::debug!(hotel = %self.name, %rate, "daily rate set");
        Ok(())
    }

    /// Occupy `count` rooms. Returns `false` (no change) when `count <= 0` or
    /// there are not enough vacant rooms.
    pub fn check_in(&mut self, count: i64) -> bool {
        let Some(count) = positive_count(count) else {
            tracing::debug!(hotel = %self.name, count, "check-in refused: count out of range");
            return false;
        };
        if count > self.available_rooms() {
            tracing::debug!(
                hotel = %self.name,
                count,
                available = self.available_rooms(),
                "check-in refused: not enough vacant rooms"
            );
            return false;
        }

        self.occupied_rooms += count;
        tracing::debug!(hotel = %self.name, count, occupied = self.occupied_rooms, "checked in");
        true
    }

    pub fn check_in_one(&mut self) -> bool {
        self.check_in(1)
    }

    /// Release `count` rooms. Returns `false` (no change) when `count <= 0` or
    /// fewer than `count` rooms are occupied.
    pub fn check_out(&mut self, count: i64) -> bool {
        let Some(count) = positive_count(count) else {
            tracing::debug!(hotel = %self.name, count, "check-out refused: count out of range");
            return false;
        };
        if count > self.occupied_rooms {
            tracing::debug!(
                hotel = %self.name,
                count,
                occupied = self.occupied_rooms,
                "check-out refused: not enough occupied rooms"
            );
            return false;
        }

        self.occupied_rooms -= count;
        tracing::debug!(hotel = %self.name, count, occupied = self.occupied_rooms, "checked out");
        true
    }

    pub fn check_out_one(&mut self) -> bool {
        self.check_out(1)
    }

    /// Projected revenue for `days` days at the current occupancy and rate.
    ///
    /// This is a snapshot: a later check-out lowers the figure if it is
    /// recomputed.
    pub fn calculate_total_revenue(&self, days: i64) -> DomainResult<f64> {
        if days <= 0 {
            return Err(DomainError::invalid_argument(
                "number of days must be greater than zero",
            ));
        }
        let rate = self
            .daily_rate
            .ok_or_else(|| DomainError::precondition("daily rate is not set"))?;

        Ok(f64::from(self.occupied_rooms) * rate.value() * days as f64)
    }

    pub fn report(&self) -> OccupancyReport {
        OccupancyReport {
            name: self.name.clone(),
            occupied_rooms: self.occupied_rooms,
            total_rooms: self.total_rooms(),
            daily_rate: self.daily_rate(),
            available_rooms: self.available_rooms(),
        }
    }
}

/// `Some` for counts in `1..=u32::MAX`. Larger counts exceed any possible
/// total or occupancy, so `None` makes the callers refuse them.
fn positive_count(count: i64) -> Option<u32> {
    if count <= 0 {
        return None;
    }
    u32::try_from(count).ok()
}
