// core/tests/test_physics.rs
use workout_core::{Running, SportsWalking, Swimming, Workout};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_running_reference() {
    let run = Running::new(15000.0, 1.0, 75.0).unwrap();
    assert!(approx(run.distance(), 9.75));
    assert!(approx(run.mean_speed(), 9.75));
    // (18 * 9.75 - 20) * 75 / 1000 * 60
    assert!(approx(run.spent_calories(), 699.75), "got {}", run.spent_calories());
}

#[test]
fn test_running_half_hour() {
    let run = Running::new(15000.0, 0.5, 75.0).unwrap();
    assert!(approx(run.mean_speed(), 19.5));
    // (18 * 19.5 - 20) * 75 / 1000 * 30
    assert!(approx(run.spent_calories(), 744.75));
}

#[test]
fn test_walking_floor_term_zero() {
    // 5.85² = 34.2 < 180 → gulvdivisjon gir 0
    let walk = SportsWalking::new(9000.0, 1.0, 75.0, 180.0).unwrap();
    assert!(approx(walk.distance(), 5.85));
    assert!(approx(walk.mean_speed(), 5.85));
    assert!(approx(walk.spent_calories(), 0.035 * 75.0 * 60.0));
}

#[test]
fn test_walking_floor_term_nonzero() {
    // 19.5² = 380.25, 380.25 // 180 = 2 (ikke 2.1125)
    let walk = SportsWalking::new(30000.0, 1.0, 75.0, 180.0).unwrap();
    let expected = (0.035 * 75.0 + 2.0 * 0.029 * 75.0) * 60.0;
    assert!(approx(walk.spent_calories(), expected), "got {}", walk.spent_calories());
    assert!(approx(expected, 418.5));
}

#[test]
fn test_swimming_reference() {
    let swim = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0).unwrap();
    assert!(approx(swim.distance(), 720.0 * 1.38 / 1000.0));
    assert!(approx(swim.mean_speed(), 1.0));
    assert!(approx(swim.spent_calories(), 336.0));
}

#[test]
fn test_swimming_speed_ignores_strokes() {
    let few = Swimming::new(0.0, 2.0, 80.0, 50.0, 20.0).unwrap();
    let many = Swimming::new(5000.0, 2.0, 80.0, 50.0, 20.0).unwrap();
    assert!(approx(few.mean_speed(), 0.5));
    assert!(approx(few.mean_speed(), many.mean_speed()));
    assert!(many.distance() > few.distance());
}

#[test]
fn test_summary_is_idempotent() {
    let walk = SportsWalking::new(9000.0, 1.0, 75.0, 180.0).unwrap();
    assert_eq!(walk.summary(), walk.summary());

    let swim = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0).unwrap();
    assert_eq!(swim.summary(), swim.summary());
}
