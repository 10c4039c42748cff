use super::*;

#[test]
fn progress_clamps_into_unit_interval() {
    assert_eq!(Progress::new(-0.5).get(), 0.0);
    assert_eq!(Progress::new(1.7).get(), 1.0);
    assert_eq!(Progress::new(0.25).get(), 0.25);
    assert_eq!(Progress::new(f64::NAN), Progress::START);
    assert_eq!(Progress::new(f64::INFINITY), Progress::END);
    assert_eq!(Progress::new(f64::NEG_INFINITY), Progress::START);
}

#[test]
fn viewport_rejects_non_positive_height() {
    assert!(Viewport::new(0.0).is_err());
    assert!(Viewport::new(-10.0).is_err());
    assert!(Viewport::new(f64::NAN).is_err());
    assert_eq!(Viewport::new(900.0).unwrap().height, 900.0);
}

#[test]
fn scene_time_arithmetic_saturates() {
    let t = SceneTime::from_millis(1500);
    assert_eq!(t.after(Duration::from_millis(500)), SceneTime::from_millis(2000));
    assert_eq!(t.since(SceneTime::from_millis(500)), Duration::from_millis(1000));
    assert_eq!(SceneTime::ZERO.since(t), Duration::ZERO);
    assert_eq!(t.as_secs_f64(), 1.5);
}
