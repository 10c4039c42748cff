use super::*;

fn table(inputs: &[f64], outputs: &[f64]) -> ControlTable {
    ControlTable::from_pairs(inputs, outputs).unwrap()
}

#[test]
fn clamps_below_and_above_range() {
    let t = table(&[0.0, 0.5, 1.0], &[0.7, 1.0, 1.5]);
    for x in [-100.0, -0.1, 0.0] {
        assert_eq!(interpolate(&t, x), 0.7);
    }
    for x in [1.0, 1.1, 1e9, f64::INFINITY] {
        assert_eq!(interpolate(&t, x), 1.5);
    }
    assert_eq!(interpolate(&t, f64::NEG_INFINITY), 0.7);
    assert_eq!(interpolate(&t, f64::NAN), 0.7);
}

#[test]
fn midpoint_is_average_of_outputs() {
    let t = table(&[0.0, 1.0], &[2.0, 6.0]);
    assert_eq!(interpolate(&t, 0.5), (2.0 + 6.0) / 2.0);
    let t = table(&[0.0, 1.0], &[-20.0, 15.0]);
    assert_eq!(interpolate(&t, 0.5), -2.5);
}

#[test]
fn hits_breakpoints_exactly() {
    let t = table(&[0.0, 0.3, 0.5, 0.7], &[0.0, 1.0, 1.0, 0.0]);
    assert_eq!(t.sample(0.3), 1.0);
    assert_eq!(t.sample(0.5), 1.0);
    assert_eq!(t.sample(0.7), 0.0);
    assert_eq!(t.sample(0.4), 1.0);
    assert!((t.sample(0.6) - 0.5).abs() < 1e-12);
}

#[test]
fn increasing_segment_stays_strictly_between_outputs() {
    let t = table(&[0.0, 0.5, 1.0], &[0.7, 1.0, 1.5]);
    for i in 1..50 {
        let x = f64::from(i) / 100.0;
        let v = t.sample(x);
        assert!(v > 0.7 && v < 1.0, "x={x} v={v}");
    }
    for i in 51..100 {
        let x = f64::from(i) / 100.0;
        let v = t.sample(x);
        assert!(v > 1.0 && v < 1.5, "x={x} v={v}");
    }
}

#[test]
fn channels_are_independent_over_the_same_domain() {
    let scale = table(&[0.0, 0.5, 1.0], &[0.7, 1.0, 1.5]);
    let rotate = table(&[0.0, 0.5, 1.0], &[-20.0, 0.0, 15.0]);
    assert!((scale.sample(0.25) - 0.85).abs() < 1e-12);
    assert!((rotate.sample(0.25) + 10.0).abs() < 1e-12);
    assert!((rotate.sample(0.75) - 7.5).abs() < 1e-12);
}

#[test]
fn single_breakpoint_is_constant() {
    let t = table(&[0.4], &[3.0]);
    assert_eq!(t.sample(0.0), 3.0);
    assert_eq!(t.sample(0.4), 3.0);
    assert_eq!(t.sample(1.0), 3.0);
}

#[test]
fn rejects_invalid_tables() {
    assert!(ControlTable::new(vec![]).is_err());
    assert!(ControlTable::from_pairs(&[0.0, 1.0], &[1.0]).is_err());
    assert!(ControlTable::from_pairs(&[0.0, 0.0], &[1.0, 2.0]).is_err());
    assert!(ControlTable::from_pairs(&[0.5, 0.2], &[1.0, 2.0]).is_err());
    assert!(ControlTable::from_pairs(&[0.0, f64::NAN], &[1.0, 2.0]).is_err());
}

#[test]
fn deserialize_validates() {
    let ok: ControlTable =
        serde_json::from_str(r#"[{"input":0.0,"output":1.0},{"input":1.0,"output":2.0}]"#)
            .unwrap();
    assert_eq!(ok.points().len(), 2);
    let bad = serde_json::from_str::<ControlTable>(
        r#"[{"input":1.0,"output":1.0},{"input":0.0,"output":2.0}]"#,
    );
    assert!(bad.is_err());
}
