//! Occupancy report output.

use std::io::Write;

use anyhow::Context;
use innkeep_inventory::OccupancyReport;

use crate::config::ReportFormat;

/// Write one report followed by a newline.
pub fn render_report<W: Write>(
    out: &mut W,
    report: &OccupancyReport,
    format: ReportFormat,
) -> anyhow::Result<()> {
    match format {
        ReportFormat::Text => writeln!(out, "{report}")?,
        ReportFormat::Json => {
            let line = serde_json::to_string(report).context("failed to encode report")?;
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> OccupancyReport {
        OccupancyReport {
            name: "Seaside Inn".to_string(),
            occupied_rooms: 2,
            total_rooms: 10,
            daily_rate: 80.0,
            available_rooms: 8,
        }
    }

    #[test]
    fn text_report_ends_with_newline() {
        let mut out = Vec::new();
        render_report(&mut out, &report(), ReportFormat::Text).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hotel: Seaside Inn\nRooms occupied: 2/10\nDaily rate: 80\nAvailable rooms: 8\n"
        );
    }

    #[test]
    fn json_report_is_one_line() {
        let mut out = Vec::new();
        render_report(&mut out, &report(), ReportFormat::Json).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);

        let decoded: OccupancyReport = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(decoded, report());
    }
}
