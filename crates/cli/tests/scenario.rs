use innkeep_cli::{DemoConfig, ReportFormat};
use innkeep_core::DomainError;

fn run_to_string(config: &DemoConfig) -> anyhow::Result<String> {
    let mut out = Vec::new();
    innkeep_cli::run(config, &mut out)?;
    Ok(String::from_utf8(out).expect("report output is utf-8"))
}

#[test]
fn default_scenario_prints_reports_and_revenue() {
    let output = run_to_string(&DemoConfig::default()).unwrap();

    let expected = "\
Hotel: Grand Hotel
Rooms occupied: 5/100
Daily rate: 1000
Available rooms: 95

Total revenue for 7 days: 35000 USD
Hotel: Grand Hotel
Rooms occupied: 3/100
Daily rate: 1000
Available rooms: 97
";
    assert_eq!(output, expected);
}

#[test]
fn default_scenario_leaves_three_rooms_occupied() {
    let hotel = innkeep_cli::run(&DemoConfig::default(), &mut std::io::sink()).unwrap();
    assert_eq!(hotel.occupied_rooms(), 3);
    assert_eq!(hotel.calculate_total_revenue(7).unwrap(), 21000.0);
}

#[test]
fn over_capacity_check_in_is_refused_and_scenario_continues() {
    let config = DemoConfig {
        hotel_name: "X".to_string(),
        total_rooms: 3,
        check_in: 4,
        ..DemoConfig::default()
    };

    let output = run_to_string(&config).unwrap();
    assert!(output.starts_with("Hotel: X\nRooms occupied: 0/3\n"));
    assert!(output.contains("Total revenue for 7 days: 0 USD"));
    assert!(output.ends_with("Available rooms: 3\n"));
}

#[test]
fn non_positive_room_count_is_a_domain_error() {
    let config = DemoConfig {
        total_rooms: 0,
        ..DemoConfig::default()
    };

    let err = innkeep_cli::run(&config, &mut std::io::sink()).unwrap_err();
    match err.downcast_ref::<DomainError>() {
        Some(DomainError::InvalidArgument(_)) => {}
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
    assert!(format!("{err:#}").contains("total number of rooms must be positive"));
}

#[test]
fn negative_rate_stops_before_any_report() {
    let config = DemoConfig {
        daily_rate: -1.0,
        ..DemoConfig::default()
    };

    let mut out = Vec::new();
    let err = innkeep_cli::run(&config, &mut out).unwrap_err();
    assert!(out.is_empty());
    assert!(matches!(
        err.downcast_ref::<DomainError>(),
        Some(DomainError::InvalidArgument(_))
    ));
}

#[test]
fn zero_day_stay_fails_after_first_report() {
    let config = DemoConfig {
        stay_days: 0,
        ..DemoConfig::default()
    };

    let mut out = Vec::new();
    let err = innkeep_cli::run(&config, &mut out).unwrap_err();
    let printed = String::from_utf8(out).unwrap();
    assert_eq!(printed.matches("Hotel: Grand Hotel").count(), 1);
    assert!(format!("{err:#}").starts_with("failed to calculate revenue"));
}

#[test]
fn json_format_prints_one_object_per_report() {
    let config = DemoConfig {
        report_format: ReportFormat::Json,
        ..DemoConfig::default()
    };

    let output = run_to_string(&config).unwrap();
    let reports: Vec<serde_json::Value> = output
        .lines()
        .filter(|line| line.starts_with('{'))
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["occupied_rooms"], 5);
    assert_eq!(reports[1]["occupied_rooms"], 3);
    assert_eq!(reports[1]["available_rooms"], 97);
}
