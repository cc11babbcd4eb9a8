// tests/model_train.rs
//
// Tests for the location model: training on a synthetic frame with a
// known day/month → lat/lon relationship, cache keys, input hygiene.
//
use baac_scope::frame::Frame;
use baac_scope::model;
use rand::{rngs::StdRng, SeedableRng};

fn lat_of(day: u32, month: u32) -> f64 {
    0.02 * day as f64 + 0.05 * month as f64 - 0.5
}

fn lon_of(day: u32, month: u32) -> f64 {
    0.08 * month as f64 - 0.01 * day as f64 + 0.2
}

/// One row per (day, month) pair; coordinates follow a fixed linear map
/// the network has no trouble representing.
fn synthetic_frame() -> Frame {
    let headers = vec![
        "jour".to_string(),
        "mois".to_string(),
        "hrmn".to_string(),
        "lat".to_string(),
        "lon".to_string(),
    ];
    let mut rows = Vec::new();
    for day in 1..=31u32 {
        for month in 1..=12u32 {
            let hour = ((day * 7 + month * 5) % 24) as f64 + 0.15;
            rows.push(vec![
                day.to_string(),
                month.to_string(),
                format!("{hour:.2}"),
                format!("{:.4}", lat_of(day, month)),
                format!("{:.4}", lon_of(day, month)),
            ]);
        }
    }
    Frame { headers, rows }
}

#[test]
fn training_learns_the_mapping() {
    let frame = synthetic_frame();
    let mut rng = StdRng::seed_from_u64(7);

    let m = model::train(&frame, 0xBAAC, &mut rng, None).unwrap();

    assert_eq!(m.key, 0xBAAC);
    assert_eq!(m.rows_used, 31 * 12);
    assert_eq!(m.history.len(), 20);

    // The loss has to come down over twenty epochs.
    let first = m.history.first().unwrap().loss;
    let last = m.history.last().unwrap().loss;
    assert!(
        last < first * 0.8,
        "loss should drop: first {first}, last {last}"
    );

    // Validation error in the same ballpark as the training fit.
    let mae = m.val_mae();
    assert!(mae.is_finite());
    assert!(mae < 0.4, "val MAE too high: {mae}");

    // A mid-range query lands near the true coordinates.
    let (lat, lon) = m.predict(15.0, 6.0, 12.30);
    assert!((lat - lat_of(15, 6)).abs() < 0.5, "lat off: {lat}");
    assert!((lon - lon_of(15, 6)).abs() < 0.5, "lon off: {lon}");
}

#[test]
fn rows_with_nulls_are_skipped() {
    let mut frame = synthetic_frame();
    frame.rows.truncate(40);
    // Three rows lose their time; they must not reach the model.
    for i in [3, 17, 29] {
        frame.rows[i][2] = String::new();
    }

    let mut rng = StdRng::seed_from_u64(42);
    let m = model::train(&frame, 1, &mut rng, None).unwrap();
    assert_eq!(m.rows_used, 37);
}

#[test]
fn missing_columns_are_named_in_the_error() {
    let mut frame = synthetic_frame();
    frame.drop_column("hrmn");

    let mut rng = StdRng::seed_from_u64(1);
    let err = model::train(&frame, 1, &mut rng, None).unwrap_err();
    assert!(err.to_string().contains("hrmn"), "got: {err}");
}

#[test]
fn too_little_data_is_an_error() {
    let mut frame = synthetic_frame();
    frame.rows.truncate(10);

    let mut rng = StdRng::seed_from_u64(1);
    let err = model::train(&frame, 1, &mut rng, None).unwrap_err();
    assert!(err.to_string().contains("Not enough"), "got: {err}");
}

#[test]
fn scaler_standardizes_and_tolerates_constants() {
    let rows = vec![
        vec![1.0, 5.0],
        vec![2.0, 5.0],
        vec![3.0, 5.0],
    ];
    let scaler = model::Scaler::fit(&rows);

    let t = scaler.transform(&[2.0, 5.0]);
    assert!(t[0].abs() < 1e-12); // the mean maps to zero
    assert!(t[1].abs() < 1e-12); // constant feature: scale 1, not a division by zero

    // Population std: sqrt(2/3) for {1,2,3}.
    let t1 = scaler.transform(&[3.0, 5.0]);
    assert!((t1[0] - 1.0 / (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
}
