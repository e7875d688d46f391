//! Read-only occupancy snapshot for display.

use serde::{Deserialize, Serialize};

/// Point-in-time view of a [`RoomInventory`](crate::RoomInventory).
///
/// `Display` renders the four-line front-desk summary; `serde` gives the same
/// fields as a flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyReport {
    pub name: String,
    pub occupied_rooms: u32,
    pub total_rooms: u32,
    pub daily_rate: f64,
    pub available_rooms: u32,
}

impl core::fmt::Display for OccupancyReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Hotel: {}", self.name)?;
        writeln!(f, "Rooms occupied: {}/{}", self.occupied_rooms, self.total_rooms)?;
        writeln!(f, "Daily rate: {}", self.daily_rate)?;
        write!(f, "Available rooms: {}", self.available_rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RoomInventory;

    fn sample() -> OccupancyReport {
        let mut inv = RoomInventory::new("Grand Hotel", 100).unwrap();
        inv.set_daily_rate(1000.0).unwrap();
        inv.check_in(5);
        inv.report()
    }

    #[test]
    fn display_renders_front_desk_summary() {
        assert_eq!(
            sample().to_string(),
            "Hotel: Grand Hotel\nRooms occupied: 5/100\nDaily rate: 1000\nAvailable rooms: 95"
        );
    }

    #[test]
    fn display_keeps_fractional_rate() {
        let mut report = sample();
        report.daily_rate = 99.5;
        assert!(report.to_string().contains("Daily rate: 99.5\n"));
    }

    #[test]
    fn serializes_as_flat_object() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Grand Hotel",
                "occupied_rooms": 5,
                "total_rooms": 100,
                "daily_rate": 1000.0,
                "available_rooms": 95,
            })
        );
    }
}
