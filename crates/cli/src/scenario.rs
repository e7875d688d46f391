//! The scripted stay: open a hotel, set the rate, check guests in, project
//! revenue, check some out.

use std::io::Write;

use anyhow::Context;
use innkeep_inventory::RoomInventory;

use crate::config::DemoConfig;
use crate::render::render_report;

/// Run the scenario, writing reports to `out`, and hand back the final
/// inventory.
///
/// Refused check-ins/check-outs are logged and the scenario carries on; any
/// domain error stops it and is returned with context.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> anyhow::Result<RoomInventory> {
    let mut hotel = RoomInventory::new(config.hotel_name.as_str(), config.total_rooms)
        .with_context(|| format!("failed to open hotel {:?}", config.hotel_name))?;
    tracing::info!(hotel = hotel.name(), total_rooms = hotel.total_rooms(), "hotel opened");

    hotel
        .set_daily_rate(config.daily_rate)
        .context("failed to set daily rate")?;

    if !hotel.check_in(config.check_in) {
        tracing::warn!(
            hotel = hotel.name(),
            requested = config.check_in,
            available = hotel.available_rooms(),
            "check-in refused"
        );
    }
    render_report(out, &hotel.report(), config.report_format)?;

    let revenue = hotel
        .calculate_total_revenue(config.stay_days)
        .context("failed to calculate revenue")?;
    tracing::info!(hotel = hotel.name(), days = config.stay_days, revenue, "revenue projected");
    writeln!(
        out,
        "\nTotal revenue for {} days: {} USD",
        config.stay_days, revenue
    )?;

    if !hotel.check_out(config.check_out) {
        tracing::warn!(
            hotel = hotel.name(),
            requested = config.check_out,
            occupied = hotel.occupied_rooms(),
            "check-out refused"
        );
    }
    render_report(out, &hotel.report(), config.report_format)?;

    Ok(hotel)
}
