use super::*;

const ALL: [Ease; 2] = [Ease::Linear, Ease::EaseInOut];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn ease_in_out_matches_css_curve() {
    let e = Ease::EaseInOut;
    assert!((e.apply(0.5) - 0.5).abs() < 1e-9);
    // Reference values for cubic-bezier(0.42, 0, 0.58, 1).
    assert!((e.apply(0.25) - 0.129_161).abs() < 1e-4, "{}", e.apply(0.25));
    assert!((e.apply(0.75) - 0.870_839).abs() < 1e-4, "{}", e.apply(0.75));
    for i in 1..10 {
        let t = i as f64 / 10.0;
        assert!((e.apply(t) + e.apply(1.0 - t) - 1.0).abs() < 1e-6, "t={t}");
    }
}

#[test]
fn ease_in_out_is_the_default() {
    assert_eq!(Ease::default(), Ease::EaseInOut);
    let e: Ease = serde_json::from_str("\"ease_in_out\"").unwrap();
    assert_eq!(e, Ease::EaseInOut);
    assert_eq!(serde_json::to_string(&Ease::Linear).unwrap(), "\"linear\"");
}
