//! Front-desk demo: drives one [`RoomInventory`](innkeep_inventory::RoomInventory)
//! through a scripted stay and prints occupancy reports.

pub mod config;
pub mod render;
pub mod scenario;

pub use config::{ConfigError, DemoConfig, ReportFormat};
pub use scenario::run;
