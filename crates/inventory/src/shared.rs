//! Lock-guarded handle for using one inventory from several threads.

use std::sync::{Arc, Mutex, MutexGuard};

use innkeep_core::{DomainError, DomainResult};

use crate::report::OccupancyReport;
use crate::room_inventory::RoomInventory;

/// Cloneable, thread-safe handle to a single [`RoomInventory`].
///
/// Each call takes the lock once, so a check-in's read of the vacancy count
/// and its write of the new occupancy cannot interleave with another caller.
#[derive(Debug, Clone)]
pub struct SharedRoomInventory {
    inner: Arc<Mutex<RoomInventory>>,
}

impl SharedRoomInventory {
    pub fn new(inventory: RoomInventory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inventory)),
        }
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, RoomInventory>> {
        self.inner
            .lock()
            .map_err(|_| DomainError::precondition("inventory lock poisoned"))
    }

    pub fn set_daily_rate(&self, rate: f64) -> DomainResult<()> {
        self.lock()?.set_daily_rate(rate)
    }

    /// Same as [`RoomInventory::check_in`]; a poisoned lock counts as a refusal.
    pub fn check_in(&self, count: i64) -> bool {
        match self.lock() {
            Ok(mut inv) => inv.check_in(count),
            Err(_) => false,
        }
    }

    /// Same as [`RoomInventory::check_out`]; a poisoned lock counts as a refusal.
    pub fn check_out(&self, count: i64) -> bool {
        match self.lock() {
            Ok(mut inv) => inv.check_out(count),
            Err(_) => false,
        }
    }

    pub fn calculate_total_revenue(&self, days: i64) -> DomainResult<f64> {
        self.lock()?.calculate_total_revenue(days)
    }

    pub fn report(&self) -> DomainResult<OccupancyReport> {
        Ok(self.lock()?.report())
    }

    /// Run a read-only closure against the inventory under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&RoomInventory) -> R) -> DomainResult<R> {
        Ok(f(&*self.lock()?))
    }
}

impl From<RoomInventory> for SharedRoomInventory {
    fn from(inventory: RoomInventory) -> Self {
        Self::new(inventory)
    }
}
