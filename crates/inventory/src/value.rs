//! Validated value objects for the room inventory.

use innkeep_core::{DomainError, DomainResult, ValueObject};

/// Price per room per day. Always finite and non-negative.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct DailyRate(f64);

impl DailyRate {
    pub fn new(rate: f64) -> DomainResult<Self> {
        if !rate.is_finite() {
            return Err(DomainError::invalid_argument(
                "daily rate must be a finite number",
            ));
        }
        if rate < 0.0 {
            return Err(DomainError::invalid_argument(
                "room price cannot be negative",
            ));
        }
        Ok(Self(rate))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl ValueObject for DailyRate {}

impl core::fmt::Display for DailyRate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Total number of rooms in a hotel. Always strictly positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomCount(u32);

impl RoomCount {
    pub fn new(total: i64) -> DomainResult<Self> {
        if total <= 0 {
            return Err(DomainError::invalid_argument(
                "total number of rooms must be positive",
            ));
        }
        let total = u32::try_from(total).map_err(|_| {
            DomainError::invalid_argument(format!(
                "total number of rooms cannot exceed {}",
                u32::MAX
            ))
        })?;
        Ok(Self(total))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl ValueObject for RoomCount {}

impl core::fmt::Display for RoomCount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
