use spinwheel_core::{WheelConfig, WheelError, WheelGeometry};

#[test]
fn every_draw_settles_on_its_slice_for_any_slice_count() {
    let config = WheelConfig::default();
    for slice_count in 1..=36 {
        let geometry = WheelGeometry::new(slice_count, &config).expect("geometry");
        let mut cumulative = 0.0_f64;
        let mut rest = 0.0_f64;

        for round in 0..25 {
            let index = (round * 7 + slice_count) % slice_count;
            let next = rest + geometry.spin_delta(rest, index).expect("index in range");
            assert!(
                next >= cumulative,
                "rotation went backwards for {slice_count} slices at round {round}"
            );

            let settle = geometry.settle(next);
            assert_eq!(
                settle.nearest_index, index,
                "{slice_count} slices, round {round}: normalized {}",
                settle.normalized
            );

            cumulative = next;
            rest = next + settle.snap_delta;
            assert_eq!(geometry.settle(rest).nearest_index, index);
        }
    }
}

#[test]
fn six_slice_example_lands_inside_safe_interior() {
    let geometry = WheelGeometry::new(6, &WheelConfig::default()).expect("geometry");
    assert_eq!(geometry.slice_degrees(), 60.0);
    assert!((geometry.margin_degrees() - 12.0).abs() < 1e-9);

    let cumulative = geometry.spin_delta(0.0, 2).expect("index 2");
    let settle = geometry.settle(cumulative);
    assert_eq!(settle.nearest_index, 2);
    assert!((132.0..=168.0).contains(&settle.normalized));
    assert!((settle.snapped_angle - 150.0).abs() < 1e-9);

    let rested = geometry.settle(cumulative + settle.snap_delta);
    assert!((rested.normalized - 150.0).abs() < 1e-9);
}

#[test]
fn snap_correction_is_short() {
    let geometry = WheelGeometry::new(6, &WheelConfig::default()).expect("geometry");
    let mut rotation = 0.0;
    while rotation < 720.0 {
        let settle = geometry.settle(rotation);
        assert!(
            settle.snap_delta.abs() <= geometry.slice_degrees() / 2.0 + 1e-9,
            "rotation {rotation}: snap delta {}",
            settle.snap_delta
        );
        rotation += 0.37;
    }
}

#[test]
fn zero_slices_are_rejected() {
    assert_eq!(
        WheelGeometry::new(0, &WheelConfig::default()),
        Err(WheelError::ZeroSlices)
    );
}

#[test]
fn invalid_config_is_rejected_before_geometry_is_built() {
    let config = WheelConfig {
        angular_bias_ratio: 0.75,
        ..WheelConfig::default()
    };
    let err = WheelGeometry::new(6, &config).expect_err("bias ratio too large");
    assert!(matches!(err, WheelError::InvalidConfig(_)));
}
