use spinwheel_core::{
    Category, Easing, FixedSliceSource, RngSliceSource, SpinEngine, SpinOutcome, TipCatalog,
    WheelConfig, WheelError, WheelState,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const SPIN: Duration = Duration::from_millis(15_000);
const SNAP: Duration = Duration::from_millis(250);

fn run_to_outcome<S: spinwheel_core::SliceSource>(engine: &mut SpinEngine<'_, S>) -> SpinOutcome {
    engine
        .advance(SPIN + SNAP)
        .expect("spin settles")
        .expect("outcome after full spin and snap")
}

#[test]
fn drawn_index_two_lands_on_energy() {
    let catalog = TipCatalog::builtin().expect("builtin catalog");
    let mut engine = SpinEngine::new(
        WheelConfig::default(),
        FixedSliceSource::always(2),
        catalog.general(),
    )
    .expect("engine");

    engine.start_spin(Category::Sleep).expect("spin starts");
    engine.advance(SPIN).expect("spin phase ends");

    let settle = engine
        .geometry()
        .settle(engine.state().cumulative_rotation_degrees);
    assert_eq!(settle.nearest_index, 2);
    assert!((132.0..=168.0).contains(&settle.normalized));

    let outcome = engine
        .advance(SNAP)
        .expect("snap ends")
        .expect("outcome after snap");
    assert_eq!(outcome.chosen, Category::Sleep);
    assert_eq!(outcome.landed, Category::Energy);
    assert_eq!(
        outcome.tip_text,
        catalog.general().tip(Category::Sleep, Category::Energy)
    );

    let rested = engine.geometry().settle(outcome.final_rotation_degrees);
    assert!((rested.normalized - 150.0).abs() < 1e-9);
}

#[test]
fn thousand_spins_on_fixed_source_always_report_first_slice() {
    let catalog = TipCatalog::builtin().expect("builtin catalog");
    let mut engine = SpinEngine::new(
        WheelConfig::default(),
        FixedSliceSource::always(0),
        catalog.general(),
    )
    .expect("engine");

    let expected_tip = catalog.general().tip(Category::Focus, Category::ALL[0]);
    let mut previous_rotation = 0.0;
    for round in 0..1000 {
        engine.start_spin(Category::Focus).expect("spin starts");
        let rotation = engine.state().cumulative_rotation_degrees;
        assert!(rotation >= previous_rotation, "round {round} rewound the wheel");
        previous_rotation = rotation;

        let outcome = run_to_outcome(&mut engine);
        assert_eq!(outcome.landed, Category::ALL[0], "round {round}");
        assert_eq!(outcome.tip_text, expected_tip);
    }
}

#[test]
fn seeded_random_spins_never_mismatch() {
    let catalog = TipCatalog::builtin().expect("builtin catalog");
    let mut engine = SpinEngine::new(
        WheelConfig::default(),
        RngSliceSource::seeded(2024),
        catalog.general(),
    )
    .expect("engine");

    let mut landed = Vec::new();
    for _ in 0..300 {
        engine.start_spin(Category::Stress).expect("spin starts");
        let outcome = run_to_outcome(&mut engine);
        let settle = engine.geometry().settle(outcome.final_rotation_degrees);
        assert_eq!(settle.nearest_index, outcome.landed.index());
        landed.push(outcome.landed);
    }
    assert!(Category::ALL.iter().all(|category| landed.contains(category)));
}

#[test]
fn start_spin_while_in_flight_is_a_no_op() {
    let catalog = TipCatalog::builtin().expect("builtin catalog");
    let mut engine = SpinEngine::new(
        WheelConfig::default(),
        FixedSliceSource::cycle(vec![1, 4]),
        catalog.general(),
    )
    .expect("engine");

    engine.start_spin(Category::Energy).expect("spin starts");
    let before = engine.state();
    assert_eq!(
        engine.start_spin(Category::Nutrition),
        Err(WheelError::SpinInProgress)
    );
    assert_eq!(engine.state(), before);

    engine.advance(SPIN).expect("spin phase ends");
    assert!(engine.state().is_snapping);
    let snapping = engine.state();
    assert_eq!(
        engine.start_spin(Category::Nutrition),
        Err(WheelError::SpinInProgress)
    );
    assert_eq!(engine.state(), snapping);

    let outcome = engine.advance(SNAP).expect("snap ends").expect("outcome");
    assert_eq!(outcome.chosen, Category::Energy);
    assert_eq!(outcome.landed, Category::Stress);
}

#[test]
fn outcome_waits_for_snap_to_finish() {
    let catalog = TipCatalog::builtin().expect("builtin catalog");
    let mut engine = SpinEngine::new(
        WheelConfig::default(),
        FixedSliceSource::always(5),
        catalog.general(),
    )
    .expect("engine");

    engine.start_spin(Category::Fitness).expect("spin starts");
    let spinning = engine.state();
    assert!(spinning.is_spinning);
    assert!(!spinning.is_snapping);
    assert_eq!(spinning.transition.easing, Easing::EaseOut);
    assert_eq!(spinning.transition.duration, SPIN);

    assert_eq!(engine.advance(SPIN).expect("spin phase"), None);
    let snapping = engine.state();
    assert!(snapping.is_spinning);
    assert!(snapping.is_snapping);
    assert_eq!(snapping.transition.easing, Easing::EaseInOut);
    assert!(engine.outcome().is_none());

    assert_eq!(
        engine
            .advance(SNAP - Duration::from_millis(1))
            .expect("snap phase"),
        None
    );
    let outcome = engine
        .advance(Duration::from_millis(1))
        .expect("snap ends")
        .expect("outcome");
    assert_eq!(engine.outcome(), Some(&outcome));
    assert_eq!(outcome.landed, Category::Nutrition);

    let settled = engine.state();
    assert!(!settled.is_spinning);
    assert!(!settled.is_snapping);
    assert_eq!(settled.transition.easing, Easing::None);
}

#[test]
fn outcome_sink_is_notified_once_per_spin() {
    let catalog = TipCatalog::builtin().expect("builtin catalog");
    let mut engine = SpinEngine::new(
        WheelConfig::default(),
        FixedSliceSource::cycle(vec![0, 3]),
        catalog.general(),
    )
    .expect("engine");

    let received: Arc<Mutex<Vec<SpinOutcome>>> = Arc::new(Mutex::new(Vec::new()));
    let sink_target = Arc::clone(&received);
    engine.set_outcome_sink(move |outcome: &SpinOutcome| {
        sink_target
            .lock()
            .expect("sink mutex")
            .push(outcome.clone());
    });

    for _ in 0..2 {
        engine.start_spin(Category::Sleep).expect("spin starts");
        run_to_outcome(&mut engine);
        assert_eq!(engine.advance(SPIN).expect("idle advance"), None);
    }

    let received = received.lock().expect("sink mutex");
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].landed, Category::Sleep);
    assert_eq!(received[1].landed, Category::Focus);
    assert_ne!(received[0].spin_id, received[1].spin_id);
}

#[test]
fn reset_zeroes_state_and_clears_outcome() {
    let catalog = TipCatalog::builtin().expect("builtin catalog");
    let mut engine = SpinEngine::new(
        WheelConfig::default(),
        FixedSliceSource::always(4),
        catalog.general(),
    )
    .expect("engine");

    engine.start_spin(Category::Sleep).expect("spin starts");
    run_to_outcome(&mut engine);
    engine.start_spin(Category::Sleep).expect("second spin starts");
    engine.advance(SPIN / 2).expect("half spin");

    engine.reset();
    assert_eq!(engine.state(), WheelState::default());
    assert!(engine.outcome().is_none());
    assert_eq!(engine.advance(SPIN + SNAP).expect("advance after reset"), None);
}

#[test]
fn custom_durations_are_honoured() {
    let catalog = TipCatalog::builtin().expect("builtin catalog");
    let config = WheelConfig {
        spin_duration_ms: 40,
        snap_duration_ms: 0,
        ..WheelConfig::default()
    };
    let mut engine =
        SpinEngine::new(config, FixedSliceSource::always(1), catalog.general()).expect("engine");

    engine.start_spin(Category::Sleep).expect("spin starts");
    assert_eq!(
        engine.advance(Duration::from_millis(39)).expect("advance"),
        None
    );
    let outcome = engine
        .advance(Duration::from_millis(1))
        .expect("advance")
        .expect("zero-length snap completes immediately");
    assert_eq!(outcome.landed, Category::Stress);
}

#[test]
fn builtin_tips_engine_uses_general_table() {
    let mut engine =
        SpinEngine::with_builtin_tips(WheelConfig::default(), FixedSliceSource::always(0))
            .expect("engine");
    engine.start_spin(Category::Sleep).expect("spin starts");
    let outcome = run_to_outcome(&mut engine);
    assert_eq!(
        outcome.tip_text,
        "Consistent sleep and wake times strengthen your body clock and improve sleep quality."
    );
}
