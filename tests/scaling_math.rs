// End-to-end checks of the scaling math against worked scenarios.
use dryfire_scaler::{
    angular_size_moa, scale_down, scale_up, to_inches, Length, ProjectionInput, ReferenceDistance,
    ScalingInput, Unit, REFERENCE_DISTANCES,
};

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_unit_factor_identities() {
    for x in [0.0, 1.0, 3.5, 100.0] {
        assert_eq!(to_inches(x, Unit::Feet), x * 12.0);
        assert_eq!(to_inches(x, Unit::Inches), x);
        assert_eq!(to_inches(x, Unit::Yards), x * 36.0);
    }
}

#[test]
fn test_moa_edge_cases() {
    assert_eq!(angular_size_moa(18.0, 0.0), 0.0);
    assert_eq!(angular_size_moa(0.0, 900.0), 0.0);
    assert!(angular_size_moa(6.0, 360.0) > 0.0);
}

#[test]
fn test_worked_scale_down_scenario() {
    // 18x24" target at 25 yd practiced from 10 ft:
    // 900" real, 120" sim, scale 0.1333..., 2.4 x 3.2", 68.75 MOA
    let input = ScalingInput {
        target_width: Length::new(18.0, Unit::Inches),
        target_height: Length::new(24.0, Unit::Inches),
        real_distance: Length::new(25.0, Unit::Yards),
        sim_distance: Length::new(10.0, Unit::Feet),
    };
    let result = scale_down(&input);

    assert!((result.scale - 2.0 / 15.0).abs() < TOLERANCE);
    assert!((result.width_in - 2.4).abs() < TOLERANCE);
    assert!((result.height_in - 3.2).abs() < TOLERANCE);

    let expected_moa = 2.0 * ((9.0f64 / 900.0).atan()) * (180.0 / std::f64::consts::PI) * 60.0;
    assert!((result.moa - expected_moa).abs() < TOLERANCE);
    assert!((result.moa - 68.75).abs() < 0.05);
}

#[test]
fn test_worked_scale_up_scenario() {
    // 1x1" at 10 ft: equivalent at 25 yd is 900/120 = 7.5"
    let result = scale_up(&ProjectionInput::default(), REFERENCE_DISTANCES);

    let at_25 = result
        .projections
        .iter()
        .find(|p| p.label == "25 yds")
        .unwrap();
    assert!((at_25.width_in - 7.5).abs() < TOLERANCE);
}

#[test]
fn test_scale_preservation_across_units() {
    let input = ScalingInput {
        target_width: Length::new(45.0, Unit::Centimeters),
        target_height: Length::new(60.0, Unit::Centimeters),
        real_distance: Length::new(50.0, Unit::Meters),
        sim_distance: Length::new(12.0, Unit::Feet),
    };
    let result = scale_down(&input);

    let real_moa = angular_size_moa(input.target_width.to_inches(), input.real_distance.to_inches());
    let scaled_moa = angular_size_moa(result.width_in, input.sim_distance.to_inches());

    assert!((scaled_moa - real_moa).abs() / real_moa < TOLERANCE);
}

#[test]
fn test_round_trip_recovers_real_dimensions() {
    let real = ScalingInput {
        target_width: Length::new(18.0, Unit::Inches),
        target_height: Length::new(22.5, Unit::Inches),
        real_distance: Length::new(15.0, Unit::Yards),
        sim_distance: Length::new(9.0, Unit::Feet),
    };
    let scaled = scale_down(&real);

    // Feed the scaled target back through the projector at the original
    // real distance
    let projection_input = ProjectionInput {
        target_width: Length::new(scaled.width_in, Unit::Inches),
        target_height: Length::new(scaled.height_in, Unit::Inches),
        sim_distance: real.sim_distance,
    };
    let back_at_real = [ReferenceDistance {
        value: 15.0,
        unit: Unit::Yards,
        label: "15 yds",
    }];
    let projected = scale_up(&projection_input, &back_at_real);

    assert_eq!(projected.projections.len(), 1);
    assert!((projected.projections[0].width_in - 18.0).abs() < TOLERANCE);
    assert!((projected.projections[0].height_in - 22.5).abs() < TOLERANCE);
}

#[test]
fn test_degenerate_distances() {
    let zero_real = ScalingInput {
        real_distance: Length::new(0.0, Unit::Yards),
        ..Default::default()
    };
    let down = scale_down(&zero_real);
    assert_eq!((down.width_in, down.height_in, down.scale, down.moa), (0.0, 0.0, 0.0, 0.0));

    let zero_sim = ProjectionInput {
        sim_distance: Length::new(0.0, Unit::Feet),
        ..Default::default()
    };
    let up = scale_up(&zero_sim, REFERENCE_DISTANCES);
    assert_eq!(up.moa, 0.0);
    assert!(up.projections.is_empty());
}

#[test]
fn test_projection_table_preserves_catalog_order() {
    let result = scale_up(&ProjectionInput::default(), REFERENCE_DISTANCES);

    assert_eq!(result.projections.len(), REFERENCE_DISTANCES.len());
    let labels: Vec<&str> = result.projections.iter().map(|p| p.label).collect();
    let expected: Vec<&str> = REFERENCE_DISTANCES.iter().map(|d| d.label).collect();
    assert_eq!(labels, expected);

    // Farther distance, larger equivalent target
    for pair in result.projections.windows(2) {
        assert!(pair[1].width_in > pair[0].width_in);
    }
}
