use rig::{ActionSnapshot, Axis, ErrorKind, RigPositions, RigState, RigVelocities, StepError};

fn legs_forward() -> ActionSnapshot {
    ActionSnapshot::new(1.0, 0.0, 0.0, 0.0, false).unwrap()
}

fn toggle() -> ActionSnapshot {
    ActionSnapshot::new(0.0, 0.0, 0.0, 0.0, true).unwrap()
}

#[test]
fn non_positive_dt_is_rejected_without_mutation() {
    for dt in [0.0, -0.0, -0.5, f64::NEG_INFINITY] {
        let mut rig = RigState::new(1.0, 0.1);
        rig.pos = RigPositions::new(0.3, 0.4, 0.5, -0.2);
        rig.vel = RigVelocities::new(0.1, -0.1, 0.2, 1.0);
        let before = rig.clone();

        let err = rig.update(dt, &toggle()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(matches!(err, StepError::NonPositiveDt(_)));
        assert_eq!(rig, before, "dt={dt}");
    }
}

#[test]
fn toggle_flips_feather() {
    let mut rig = RigState::new(1.0, 0.1);
    assert!(rig.feather);

    rig.update(0.5, &ActionSnapshot::neutral()).unwrap();
    assert!(rig.feather);

    rig.update(0.5, &toggle()).unwrap();
    assert!(!rig.feather);

    rig.update(0.5, &toggle()).unwrap();
    assert!(rig.feather);
}

#[test]
fn single_step_pins_legs_to_upper_bound() {
    // Documents current behaviour: the upper clamp fires for any position
    // at or below the maximum, whatever the requested direction.
    for legs in [1.0, 0.0, -1.0] {
        let mut rig = RigState::new(1.0, 0.1);
        let action = ActionSnapshot::new(legs, 0.0, 0.0, 0.0, false).unwrap();
        rig.update(1.0, &action).unwrap();
        assert_eq!(rig.pos.legs, 1.0, "legs action {legs}");
        assert_eq!(rig.vel.legs, 0.0);
    }
}

#[test]
fn single_step_pins_every_axis_to_upper_bound() {
    let mut rig = RigState::new(1.0, 0.1);
    rig.update(1.0, &legs_forward()).unwrap();
    for axis in Axis::ALL {
        assert_eq!(rig.pos.get(axis), axis.bounds().pos_max, "{}", axis.name());
        assert_eq!(rig.vel.get(axis), 0.0, "{}", axis.name());
    }
}

#[test]
fn repeated_half_steps_stay_in_bounds() {
    let mut rig = RigState::new(1.0, 0.1);
    for _ in 0..200 {
        rig.update(0.5, &legs_forward()).unwrap();
        assert!((0.0..=1.0).contains(&rig.pos.legs), "pos={}", rig.pos.legs);
        assert!((-3.0..=3.0).contains(&rig.vel.legs), "vel={}", rig.vel.legs);
    }
}

#[test]
fn velocity_is_clamped_to_axis_limit() {
    // dt = 2 makes (-damping)^dt positive, so the clamped velocity survives
    // and carries the axis past its upper bound.
    let mut rig = RigState::new(1.0, 1.0);
    rig.pos.legs = 0.5;
    rig.vel.legs = 10.0;
    rig.pos.handle = 0.5;
    rig.vel.handle = 10.0;
    rig.update(2.0, &ActionSnapshot::neutral()).unwrap();

    assert_eq!(rig.vel.legs, 3.0);
    assert_eq!(rig.pos.legs, 6.5);
    assert_eq!(rig.vel.handle, 4.0);
    assert_eq!(rig.pos.handle, 8.5);
}

#[test]
fn negative_velocity_is_clamped_to_axis_limit() {
    // Starting above the upper bound, a clamped negative velocity survives.
    let mut rig = RigState::new(1.0, 1.0);
    rig.pos.body = 10.0;
    rig.vel.body = -10.0;
    rig.pos.handle = 20.0;
    rig.vel.handle = -10.0;
    rig.update(2.0, &ActionSnapshot::neutral()).unwrap();

    assert_eq!(rig.vel.body, -3.0);
    assert_eq!(rig.pos.body, 4.0);
    assert_eq!(rig.vel.handle, -4.0);
    assert_eq!(rig.pos.handle, 12.0);
}

#[test]
fn reversed_handle_velocity_stops_at_lower_bound() {
    // dt = 1 keeps the sign of (-damping)^dt, so a positive velocity turns
    // negative, gets clamped and is then stopped at the lower bound.
    let mut rig = RigState::new(1.0, 1.0);
    rig.pos.handle = 0.5;
    rig.vel.handle = 10.0;
    rig.update(1.0, &ActionSnapshot::neutral()).unwrap();
    assert_eq!(rig.pos.handle, 1.0);
    assert_eq!(rig.vel.handle, 0.0);
}

#[test]
fn overshoot_past_upper_bound_is_kept() {
    let mut rig = RigState::new(1.0, 0.5);
    rig.pos.arms = 0.2;
    rig.vel.arms = 2.0;
    rig.update(2.0, &ActionSnapshot::neutral()).unwrap();
    assert!((rig.pos.arms - 1.2).abs() < 1e-12);
    assert!((rig.vel.arms - 0.5).abs() < 1e-12);
}

#[test]
fn axes_are_independent() {
    let mut a = RigState::new(1.0, 0.5);
    a.pos.arms = 0.2;
    a.vel.arms = 2.0;
    let mut b = RigState::new(1.0, 0.5);
    b.pos.arms = 0.2;
    b.vel.arms = 2.0;
    b.pos.body = 0.9;
    b.vel.body = -2.5;

    a.update(2.0, &ActionSnapshot::neutral()).unwrap();
    b.update(2.0, &ActionSnapshot::neutral()).unwrap();
    assert_eq!(a.pos.arms.to_bits(), b.pos.arms.to_bits());
    assert_eq!(a.vel.arms.to_bits(), b.vel.arms.to_bits());
}

#[test]
fn identical_inputs_give_identical_states() {
    let actions = [
        ActionSnapshot::new(1.0, -0.5, 0.25, -1.0, false).unwrap(),
        ActionSnapshot::new(-1.0, 0.5, 0.0, 1.0, true).unwrap(),
        ActionSnapshot::neutral(),
    ];
    let run = || {
        let mut rig = RigState::new(0.8, 0.3);
        rig.vel = RigVelocities::new(2.0, -1.0, 0.5, 3.5);
        let mut history = Vec::new();
        for (i, action) in actions.iter().cycle().take(60).enumerate() {
            let dt = if i % 2 == 0 { 0.5 } else { 1.0 / 60.0 };
            rig.update(dt, action).unwrap();
            history.push(rig.clone());
        }
        history
    };

    let first = run();
    let second = run();
    assert_eq!(first.len(), second.len());
    for (x, y) in first.iter().zip(&second) {
        for axis in Axis::ALL {
            assert_eq!(x.pos.get(axis).to_bits(), y.pos.get(axis).to_bits());
            assert_eq!(x.vel.get(axis).to_bits(), y.vel.get(axis).to_bits());
        }
        assert_eq!(x.feather, y.feather);
    }
}
