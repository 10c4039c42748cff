use super::*;

#[test]
fn active_index_reference_points() {
    assert_eq!(active_index(Progress::new(0.0), 5), 0);
    assert_eq!(active_index(Progress::new(1.0), 5), 6);
    assert_eq!(active_index(Progress::new(0.5), 5), 3);
}

#[test]
fn active_index_is_monotonic_and_bounded() {
    let mut prev = 0;
    for i in 0..=1000 {
        let idx = active_index(Progress::new(f64::from(i) / 1000.0), 5);
        assert!(idx >= prev);
        assert!(idx <= 6);
        prev = idx;
    }
    assert_eq!(active_index(Progress::new(1.0), 0), 1);
}

#[test]
fn resolve_maps_indices_to_sections() {
    let cat = Catalog::builtin();
    assert_eq!(ActiveSection::resolve(0, &cat), ActiveSection::Hero);
    assert_eq!(
        ActiveSection::resolve(2, &cat),
        ActiveSection::Product { ordinal: 2, id: 2 }
    );
    assert_eq!(ActiveSection::resolve(6, &cat), ActiveSection::Closing);
}

#[test]
fn nav_uses_product_accent_and_highlights_one_indicator() {
    let cat = Catalog::builtin();
    // 3/7 of the page lands in the third product slot.
    let nav = NavState::derive(Progress::new(3.5 / 7.0), &cat);
    assert_eq!(nav.active_index, 3);
    assert_eq!(nav.accent, "text-blue-400");
    assert_eq!(nav.indicators, vec![false, false, true, false, false]);
}

#[test]
fn hero_and_closing_use_neutral_accent() {
    let cat = Catalog::builtin();
    let hero = NavState::derive(Progress::START, &cat);
    assert_eq!(hero.active, ActiveSection::Hero);
    assert_eq!(hero.accent, NEUTRAL_ACCENT);
    assert!(hero.indicators.iter().all(|on| !on));

    let end = NavState::derive(Progress::END, &cat);
    assert_eq!(end.active, ActiveSection::Closing);
    assert_eq!(end.accent, NEUTRAL_ACCENT);
    assert!(end.indicators.iter().all(|on| !on));
}

#[test]
fn accent_is_always_a_style_token() {
    let cat = Catalog::builtin();
    assert!(NEUTRAL_ACCENT.starts_with("text-"));
    for i in 0..=40 {
        let nav = NavState::derive(Progress::new(i as f64 / 40.0), &cat);
        assert!(nav.accent.starts_with("text-"), "{}", nav.accent);
    }
}
