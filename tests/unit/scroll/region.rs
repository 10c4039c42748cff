use super::*;

fn vp(h: f64) -> Viewport {
    Viewport::new(h).unwrap()
}

#[test]
fn progress_is_clamped_outside_region() {
    let r = ScrollRegion {
        start: 100.0,
        end: 300.0,
    };
    for off in [-1e9, 0.0, 99.9, 100.0] {
        assert_eq!(r.progress(off), Progress::START);
    }
    for off in [300.0, 300.1, 1e9] {
        assert_eq!(r.progress(off), Progress::END);
    }
    assert_eq!(r.progress(200.0).get(), 0.5);
    assert_eq!(r.progress(f64::NAN), Progress::START);
}

#[test]
fn degenerate_region_is_a_step() {
    let r = ScrollRegion {
        start: 50.0,
        end: 50.0,
    };
    assert_eq!(r.progress(49.0), Progress::START);
    assert_eq!(r.progress(50.0), Progress::END);
    let inverted = ScrollRegion {
        start: 50.0,
        end: 10.0,
    };
    assert_eq!(inverted.progress(20.0), Progress::START);
}

#[test]
fn document_region_spans_scrollable_range() {
    let r = ScrollRegion::document(5000.0, vp(1000.0));
    assert_eq!(r.start, 0.0);
    assert_eq!(r.end, 4000.0);
    assert_eq!(r.progress(2000.0).get(), 0.5);

    let short = ScrollRegion::document(500.0, vp(1000.0));
    assert_eq!(short.end, 0.0);
    assert_eq!(short.progress(0.0), Progress::END);
}

#[test]
fn section_transit_covers_entry_to_exit() {
    let bounds = SectionBounds {
        top: 2000.0,
        height: 1000.0,
    };
    let r = ScrollRegion::section_transit(bounds, vp(1000.0));
    assert_eq!(r.start, 1000.0);
    assert_eq!(r.end, 3000.0);
    // Section centered in the viewport sits at the midpoint.
    assert_eq!(r.progress(2000.0).get(), 0.5);
}

#[test]
fn stacked_layout_places_sections_in_order() {
    let layout = PageLayout::stacked(vp(800.0), 800.0, 800.0, 5, 1200.0, 800.0).unwrap();
    assert_eq!(layout.hero().top, 0.0);
    assert_eq!(layout.product(0).unwrap().top, 800.0);
    assert_eq!(layout.product(4).unwrap().top, 4000.0);
    assert!(layout.product(5).is_none());
    assert_eq!(layout.contact().top, 4800.0);
    assert_eq!(layout.footer().top, 6000.0);
    assert_eq!(layout.document_height(), 6800.0);
    assert_eq!(layout.max_scroll(), 6000.0);
    assert_eq!(layout.document_region().end, 6000.0);
}

#[test]
fn stacked_layout_rejects_bad_heights() {
    assert!(PageLayout::stacked(vp(800.0), 0.0, 800.0, 5, 800.0, 800.0).is_err());
    assert!(PageLayout::stacked(vp(800.0), 800.0, f64::NAN, 5, 800.0, 800.0).is_err());
    assert!(PageLayout::stacked(vp(800.0), 800.0, 800.0, 0, 800.0, 800.0).is_ok());
}

#[test]
fn measured_layout_is_validated() {
    let b = |top: f64, height: f64| SectionBounds { top, height };
    let layout = PageLayout::from_bounds(
        vp(700.0),
        b(0.0, 700.0),
        vec![b(700.0, 900.0)],
        b(1600.0, 1000.0),
        b(2600.0, 700.0),
    )
    .unwrap();
    assert_eq!(layout.product_count(), 1);
    assert_eq!(layout.document_height(), 3300.0);

    let bad = PageLayout::from_bounds(
        vp(700.0),
        b(0.0, -1.0),
        vec![],
        b(0.0, 1.0),
        b(1.0, 1.0),
    );
    assert!(bad.is_err());
}
