//! End-to-end lifecycle tests: generator reply feeds the interpolator,
//! interpolator reply feeds the converter.

use serde_json::{Value, json};

use notos_session::{ConverterSession, GeneratorSession, InterpolatorSession};

fn generate_reply(use_random_walk: bool) -> Value {
    let mut generator = GeneratorSession::create(&json!({
        "use_random_walk": use_random_walk,
        "seed": 11,
    }))
    .unwrap();
    let reply = generator.receive(&json!({
        "start_time": "2025-01-01T00:00:00Z",
        "time_delta": 900,
        "total_time": 21600,
        "areas": [
            {"name": "north", "x": 0.2, "y": 0.8, "precipitation": 2.0},
            {"name": "south", "x": 0.8, "y": 0.2, "precipitation": 8.0},
        ],
    }));
    assert_eq!(reply["status"], "success");
    reply
}

#[test]
fn three_stage_pipeline_produces_engine_lines() {
    let generated = generate_reply(true);
    assert_eq!(generated["num_timesteps"], 25);

    let interpolator = InterpolatorSession::create(&json!({}));
    let interpolated = interpolator.receive(&json!({
        "timeseries": generated,
        "query": {"gauge": {"x": 0.5, "y": 0.5}},
    }));
    assert_eq!(interpolated["status"], "success");
    assert_eq!(interpolated["num_timesteps"], 25);

    let converter = ConverterSession::create(&json!({"decimal_places": 3})).unwrap();
    let converted = converter.receive(&json!({
        "timeseries": interpolated["timeseries"],
        "start_time": interpolated["start_time"],
        "end_time": interpolated["end_time"],
    }));
    assert_eq!(converted["status"], "success");

    let lines = converted["modifications"]["timeseries"]["gauge"]
        .as_array()
        .unwrap();
    assert_eq!(lines.len(), 25);
    for line in lines {
        let line = line.as_str().unwrap();
        // MM/DD/YYYY  HH:MM:SS     V.VVV
        assert_eq!(&line[10..12], "  ");
        assert_eq!(&line[20..25], "     ");
        let value: f64 = line[25..].parse().unwrap();
        assert!((0.0..=50.0).contains(&value));
    }
    assert_eq!(
        converted["modifications"]["options"]
            .as_object()
            .unwrap()
            .len(),
        4
    );
}

#[test]
fn columns_stay_identical_across_stages() {
    let generated = generate_reply(false);
    let generator_columns = generated["area_timeseries"]["north"]["columns"].clone();

    let interpolator = InterpolatorSession::create(&json!({}));
    let interpolated = interpolator.receive(&json!({
        "timeseries": generated,
        "query": {"q": {"x": 0.4, "y": 0.6}},
    }));
    assert_eq!(
        interpolated["timeseries"]["q"]["columns"],
        generator_columns
    );
}

#[test]
fn whole_request_bodies_may_be_json_text() {
    let generated = generate_reply(false);

    let interpolator = InterpolatorSession::create(&json!({}));
    let request = json!({
        "timeseries": serde_json::to_string(&generated).unwrap(),
        "query": "{\"q\": {\"x\": 0.2, \"y\": 0.8}}",
    });
    let interpolated = interpolator.receive(&serde_json::to_value(
        serde_json::to_string(&request).unwrap(),
    )
    .unwrap());
    assert_eq!(interpolated["status"], "success");
    // Co-located with "north", so its series passes through exactly.
    assert_eq!(
        interpolated["timeseries"]["q"]["timeseries"],
        generated["area_timeseries"]["north"]["timeseries"]
    );
}

#[test]
fn interpolated_duration_survives_conversion() {
    let generated = generate_reply(false);
    let interpolator = InterpolatorSession::create(&json!({}));
    let interpolated = interpolator.receive(&json!({
        "timeseries": generated,
        "query": {"q": {"x": 0.5, "y": 0.5}},
    }));

    let converter = ConverterSession::create(&json!({})).unwrap();
    let converted = converter.receive(&json!({
        "timeseries": interpolated["timeseries"],
        "start_time": interpolated["start_time"],
        "end_time": interpolated["end_time"],
    }));
    let options = converted["modifications"]["options"].as_object().unwrap();

    // A 6 hour window stays a 6 hour window after re-anchoring.
    let fmt = "%m/%d/%Y %H:%M:%S";
    let start = chrono::NaiveDateTime::parse_from_str(
        &format!(
            "{} {}",
            options["start_date"].as_str().unwrap(),
            options["start_time"].as_str().unwrap()
        ),
        fmt,
    )
    .unwrap();
    let end = chrono::NaiveDateTime::parse_from_str(
        &format!(
            "{} {}",
            options["end_date"].as_str().unwrap(),
            options["end_time"].as_str().unwrap()
        ),
        fmt,
    )
    .unwrap();
    assert_eq!(end - start, chrono::Duration::hours(6));
}

#[test]
fn oversized_time_window_yields_error_envelope() {
    let mut generator = GeneratorSession::create(&json!({"seed": 1})).unwrap();
    let reply = generator.receive(&json!({
        "time_delta": 10_000_000_000_000i64,
        "total_time": 10_000_000_000_000i64,
        "areas": [{"name": "a", "x": 0.0, "y": 0.0}],
    }));
    assert_eq!(reply["status"], "error");
    assert!(
        reply["message"]
            .as_str()
            .unwrap()
            .starts_with("generation failed: ")
    );
}

#[test]
fn malformed_body_yields_error_envelope_from_every_stage() {
    let mut generator = GeneratorSession::create(&json!({"seed": 1})).unwrap();
    let interpolator = InterpolatorSession::create(&json!({}));
    let converter = ConverterSession::create(&json!({})).unwrap();

    let bad = json!("{definitely not json");
    for reply in [
        generator.receive(&bad),
        interpolator.receive(&bad),
        converter.receive(&bad),
    ] {
        assert_eq!(reply["status"], "error");
        assert!(
            reply["message"]
                .as_str()
                .unwrap()
                .starts_with("malformed request: ")
        );
    }
}
