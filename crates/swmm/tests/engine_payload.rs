//! Integration tests for SWMM payload rendering.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use notos_schema::{ColumnarSeries, WeatherRecord};
use notos_swmm::{convert, convert_series, ConvertConfig, SwmmError};

fn hourly_series(base: f64, n: usize) -> ColumnarSeries {
    let mut s = ColumnarSeries::new(0.25, 0.75);
    for step in 0..n {
        let v = base + step as f64;
        s.push(WeatherRecord::from_values(
            format!("2025-03-10T{:02}:00:00Z", step),
            [v, v + 10.0, 1010.0 + v, 40.0 + v, v / 2.0, 90.0 + v],
        ));
    }
    s
}

#[test]
fn payload_covers_every_area_with_one_line_per_timestep() {
    let mut map = BTreeMap::new();
    map.insert("east".to_string(), hourly_series(1.0, 4));
    map.insert("west".to_string(), hourly_series(7.0, 4));
    let now = Utc.with_ymd_and_hms(2026, 8, 30, 6, 0, 0).unwrap();

    let payload = convert(
        &map,
        &ConvertConfig::default(),
        "2025-03-10T00:00:00Z",
        "2025-03-10T03:00:00Z",
        now,
    )
    .unwrap();

    assert_eq!(payload.timeseries.len(), 2);
    for lines in payload.timeseries.values() {
        assert_eq!(lines.len(), 4);
    }
    assert_eq!(payload.timeseries["east"][0], "03/10/2025  00:00:00     1.00");
    assert_eq!(payload.timeseries["west"][3], "03/10/2025  03:00:00     10.00");
}

#[test]
fn window_is_reanchored_to_now_with_duration_kept() {
    let mut map = BTreeMap::new();
    map.insert("a".to_string(), hourly_series(0.0, 2));
    let now = Utc.with_ymd_and_hms(2026, 2, 28, 23, 30, 0).unwrap();

    let payload = convert(
        &map,
        &ConvertConfig::default(),
        "2025-03-10T00:00:00Z",
        "2025-03-10T01:00:00Z",
        now,
    )
    .unwrap();

    assert_eq!(payload.options["start_date"], "02/28/2026");
    assert_eq!(payload.options["start_time"], "23:30:00");
    // 2026 is not a leap year, so one hour later is March 1st.
    assert_eq!(payload.options["end_date"], "03/01/2026");
    assert_eq!(payload.options["end_time"], "00:30:00");
}

#[test]
fn each_column_resolves_to_its_own_values() {
    let series = hourly_series(2.0, 1);
    for (name, expected) in [
        ("precipitation", "2.00"),
        ("temperature", "12.00"),
        ("atmospheric_pressure", "1012.00"),
        ("humidity", "42.00"),
        ("wind_speed", "1.00"),
        ("wind_direction", "92.00"),
    ] {
        let config = ConvertConfig {
            parameter: name.to_string(),
            decimal_places: 2,
        };
        let lines = convert_series("a", &series, &config).unwrap();
        assert_eq!(lines[0], format!("03/10/2025  00:00:00     {expected}"));
    }
}

#[test]
fn unknown_parameter_reports_declared_columns() {
    let config = ConvertConfig {
        parameter: "dew_point".to_string(),
        decimal_places: 2,
    };
    match convert_series("a", &hourly_series(0.0, 1), &config) {
        Err(SwmmError::ParameterNotFound { parameter, columns }) => {
            assert_eq!(parameter, "dew_point");
            assert_eq!(columns.len(), 7);
            assert_eq!(columns[0], "timestamp");
        }
        other => panic!("expected ParameterNotFound, got {other:?}"),
    }
}
