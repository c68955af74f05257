//! End-to-end checks of clause values through the public API.

use bridge_core::layout::{Component, CrossSectionLayout};
use bridge_core::pipeline::{evaluate_batch, evaluate_case, params, ClauseOutcome, DesignCase, Geometry};
use bridge_core::standards::irc6_2017::{congestion_factor, design_lanes, impact_factor, DeckMaterial};
use bridge_core::standards::{GeneralFeaturesEdition, LoadsEdition};
use bridge_core::units::{Meters, Unit};
use bridge_core::vehicles::VehicleClass;
use bridge_core::EvaluationSettings;

#[test]
fn test_design_lane_bands() {
    let lanes = |w: f64| design_lanes(Meters(w)).unwrap();
    assert_eq!(lanes(5.29999), 1);
    assert_eq!(lanes(5.3), 2);
    assert_eq!(lanes(23.6), 7);
    assert_eq!(lanes(27.1), 8);
}

#[test]
fn test_class_70r_wheeled_layout() {
    let model = VehicleClass::Class70RWheeled.load_model().unwrap();
    assert_eq!(model.axle_count(), 7);
    assert!((model.axle_positions_m[0] - 0.81).abs() < 1e-9);
    assert!((model.total_load() - 100.0).abs() < 1e-9);
    assert_eq!(model.total_load_kn().0, 100.0);
    assert!(model.axle_positions_m.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_congestion_values() {
    assert_eq!(congestion_factor(Meters(25.0)).unwrap(), 1.15);
    assert_eq!(congestion_factor(Meters(35.0)).unwrap(), 1.225);
    assert_eq!(congestion_factor(Meters(80.0)).unwrap(), 1.7);
    assert_eq!(congestion_factor(Meters(10.0)).unwrap_err().error_code(), "DOMAIN_ERROR");
}

#[test]
fn test_layout_gets_two_barriers() {
    use Component::*;
    let mut layout = CrossSectionLayout::new(vec![Railing, Footpath, Carriageway, Footpath, Railing]);
    assert_eq!(layout.apply_protection(), 2);
    assert_eq!(
        layout.components(),
        &[Railing, Footpath, CrashBarrier, Carriageway, CrashBarrier, Footpath, Railing]
    );
    assert!(layout.is_protected());
}

#[test]
fn test_steel_impact_non_increasing() {
    for class in [VehicleClass::ClassA, VehicleClass::ClassB] {
        assert_eq!(impact_factor(class, Meters(3.0), DeckMaterial::Steel).unwrap(), 0.545);
        assert_eq!(impact_factor(class, Meters(45.0), DeckMaterial::Steel).unwrap(), 0.154);
        let mut previous = f64::INFINITY;
        for step in 0..=84 {
            let span = 3.0 + 0.5 * step as f64;
            let factor = impact_factor(class, Meters(span), DeckMaterial::Steel).unwrap();
            assert!(factor <= previous, "{} at {} m", class, span);
            previous = factor;
        }
    }
}

#[test]
fn test_editions_are_selected_by_caller() {
    let settings = EvaluationSettings::from_json(r#"{ "general_features": "IRC5:2015", "loads": "IRC6:2017" }"#)
        .unwrap();
    assert_eq!(settings.general_features, GeneralFeaturesEdition::Irc5_2015);
    assert_eq!(settings.loads, LoadsEdition::Irc6_2017);
}

fn full_case() -> DesignCase {
    use Component::*;
    DesignCase::new("four lane with footpaths")
        .with_parameter(params::CARRIAGEWAY_WIDTH, 14.5, Unit::Meter)
        .with_parameter(params::FOOTPATH_WIDTH, 1.5, Unit::Meter)
        .with_parameter(params::SPAN, 40.0, Unit::Meter)
        .with_parameter(params::SKEW_ANGLE, 15.0, Unit::Degree)
        .with_parameter(params::LONGITUDINAL_GRADIENT, 0.5, Unit::Percent)
        .with_parameter(params::RAILING_HEIGHT, 1100.0, Unit::Millimeter)
        .with_footpath(bridge_core::standards::irc5_2015::FootpathProvision::BothSides)
        .with_layout(CrossSectionLayout::new(vec![
            Railing,
            Footpath,
            Carriageway,
            Median,
            Carriageway,
            Footpath,
            Railing,
        ]))
        .with_vehicle(VehicleClass::ClassA)
        .with_vehicle(VehicleClass::Class70RWheeled)
}

#[test]
fn test_full_case_report() {
    let report = evaluate_case(&full_case(), &EvaluationSettings::default());
    assert_eq!(report.errors().count(), 0, "{:#?}", report.entries);
    assert!(report.is_compliant());

    assert_eq!(report.quantity("design lanes"), Some(4.0));
    assert_eq!(report.quantity("design life"), Some(100.0));
    assert!(report.quantity("footway live load").is_some());
    assert!(report.quantity("braking force (Class 70R (wheeled))").is_some());

    match &report.find("cross-section layout").unwrap().outcome {
        ClauseOutcome::Geometry(Geometry::Layout(layout)) => {
            assert_eq!(layout.count(Component::CrashBarrier), 2);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_report_serializes_with_clause_citations() {
    let report = evaluate_case(&full_case(), &EvaluationSettings::default());
    let json = serde_json::to_value(&report).unwrap();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), report.entries.len());
    assert!(entries.iter().all(|e| e["clause"]["clause"].is_string()));
}

#[test]
fn test_batch_isolates_failures() {
    let bad = DesignCase::new("bad").with_parameter(params::SPAN, -1.0, Unit::Meter).with_vehicle(VehicleClass::ClassA);
    let reports = evaluate_batch(&[full_case(), bad, full_case()], &EvaluationSettings::default());
    assert_eq!(reports.len(), 3);
    assert!(reports[0].is_compliant());
    assert!(!reports[1].is_compliant());
    assert_eq!(reports[0], reports[2]);
}
