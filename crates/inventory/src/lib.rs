//! Hotel room inventory domain module.
//!
//! This crate contains business rules for a single hotel's rooms: occupancy,
//! the nightly rate, and revenue projection. Pure domain logic (no IO, no
//! storage).

pub mod report;
pub mod room_inventory;
pub mod shared;
pub mod value;

pub use report::OccupancyReport;
pub use room_inventory::RoomInventory;
pub use shared::SharedRoomInventory;
pub use value::{DailyRate, RoomCount};
