//! Golden tests for the demand engine.
//!
//! These verify the weighting, classification, and interpretation behavior
//! against known payloads and expected figures.

use aadhaarpulse_core::demand::{classify_demand, interpret_station_estimate, DemandBucket};
use aadhaarpulse_core::models::{ServiceRecord, StationEstimate};
use aadhaarpulse_core::{parse_national, parse_records, service_load};

/// Single-band weighting case.
struct WeightCase {
    id: &'static str,
    record: ServiceRecord,
    expected_load: f64,
}

fn get_weight_cases() -> Vec<WeightCase> {
    vec![
        WeightCase {
            id: "enrolment-0-5",
            record: ServiceRecord {
                age_0_5: 1.0,
                ..Default::default()
            },
            expected_load: 1.2,
        },
        WeightCase {
            id: "enrolment-5-17",
            record: ServiceRecord {
                age_5_17: 1.0,
                ..Default::default()
            },
            expected_load: 1.1,
        },
        WeightCase {
            id: "enrolment-18-plus",
            record: ServiceRecord {
                age_18_greater: 1.0,
                ..Default::default()
            },
            expected_load: 1.0,
        },
        WeightCase {
            id: "biometric-5-17",
            record: ServiceRecord {
                bio_age_5_17: 1.0,
                ..Default::default()
            },
            expected_load: 0.8,
        },
        WeightCase {
            id: "biometric-17-plus",
            record: ServiceRecord {
                bio_age_17_: 1.0,
                ..Default::default()
            },
            expected_load: 1.0,
        },
        WeightCase {
            id: "demographic-5-17",
            record: ServiceRecord {
                demo_age_5_17: 1.0,
                ..Default::default()
            },
            expected_load: 0.6,
        },
        WeightCase {
            id: "demographic-17-plus",
            record: ServiceRecord {
                demo_age_17_: 1.0,
                ..Default::default()
            },
            expected_load: 0.7,
        },
        WeightCase {
            id: "empty-record",
            record: ServiceRecord::default(),
            expected_load: 0.0,
        },
    ]
}

#[test]
fn test_weight_golden_cases() {
    for case in get_weight_cases() {
        let load = service_load(&case.record);
        assert!(
            (load - case.expected_load).abs() < 1e-12,
            "Case {}: expected load {}, got {}",
            case.id,
            case.expected_load,
            load
        );
    }
}

#[test]
fn test_classification_scenario() {
    // Loads 120, 60, 12; sorted [12, 60, 120]; median = 60, q3 = 120
    let records = [
        ServiceRecord {
            age_0_5: 100.0,
            ..Default::default()
        },
        ServiceRecord {
            age_0_5: 50.0,
            ..Default::default()
        },
        ServiceRecord {
            age_0_5: 10.0,
            ..Default::default()
        },
    ];

    let loads: Vec<f64> = records.iter().map(service_load).collect();
    assert_eq!(loads, vec![120.0, 60.0, 12.0]);

    let buckets = classify_demand(&records);
    assert_eq!(
        buckets,
        vec![DemandBucket::High, DemandBucket::Medium, DemandBucket::Low]
    );
}

#[test]
fn test_station_interpretation_scenario() {
    let estimate = StationEstimate {
        district: "Ernakulam".into(),
        estimated_stations_needed: Some(7),
        service_load_annualised: Some(123_456.7),
        time_window_days: Some(90),
        annualisation_factor: Some(4.06),
    };

    let interp = interpret_station_estimate(&estimate);
    assert_eq!(interp.stations_needed, 7);
    assert_eq!(interp.annual_load, 123_457);
    assert!(interp.explanation.contains("90 days"));
    assert!(interp.explanation.contains("4.06x"));
}

#[test]
fn test_district_marker_stripping() {
    let marked = StationEstimate {
        district: "Lucknow *".into(),
        ..Default::default()
    };
    assert_eq!(marked.district_display(), "Lucknow");

    let unmarked = StationEstimate {
        district: "Kanpur Nagar".into(),
        ..Default::default()
    };
    assert_eq!(unmarked.district_display(), "Kanpur Nagar");
}

#[test]
fn test_flat_and_nested_shapes_agree() {
    let flat_json = r#"[{
        "state": "Kerala",
        "age_0_5": 120, "age_5_17": 340, "age_18_greater": 560,
        "bio_age_5_17": 78, "bio_age_17_": 90,
        "demo_age_5_17": 12, "demo_age_17_": 34
    }]"#;
    let nested_json = r#"{
        "enrolment": {"age_0_5": 120, "age_5_17": 340, "age_18_greater": 560},
        "biometric_update": {"bio_age_5_17": 78, "bio_age_17_": 90},
        "demographic_update": {"demo_age_5_17": 12, "demo_age_17_": 34}
    }"#;

    let flat = parse_records(flat_json).unwrap().remove(0).normalize();
    let nested = parse_national(nested_json).unwrap().normalize();

    assert_eq!(flat, nested);
    assert_eq!(service_load(&flat), service_load(&nested));
}

#[test]
fn test_missing_fields_default_to_zero() {
    let json = r#"[{"state": "Goa"}, {"state": "Sikkim", "age_0_5": null}]"#;
    let records = parse_records(json).unwrap();
    for raw in &records {
        assert_eq!(service_load(&raw.normalize()), 0.0);
    }
}
