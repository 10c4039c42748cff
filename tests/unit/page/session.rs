use super::*;
use crate::{form::controller::FormPhase, nav::coordinator::ActiveSection};

fn session() -> PageSession {
    PageSession::new(PageConfig::default(), Catalog::builtin()).unwrap()
}

#[test]
fn starts_on_hero_at_rest() {
    let s = session();
    let f = s.frame();
    assert_eq!(f.global_progress, Progress::START);
    assert_eq!(f.nav.active, ActiveSection::Hero);
    assert_eq!(f.sections.len(), 5);
    assert!(s.is_at_rest());
    // First product is one viewport below the hero: its transit has just started.
    assert_eq!(f.sections[0].progress, Progress::START);
    assert_eq!(f.sections[0].scale, 0.7);
}

#[test]
fn scrolling_updates_each_section_independently() {
    let mut s = session();
    // Product 1 occupies [900, 1800); centered when offset == 900.
    s.scroll_to(900.0);
    let f = s.frame();
    assert_eq!(f.sections[0].progress.get(), 0.5);
    assert_eq!(f.sections[1].progress.get(), 0.0);
    assert_eq!(f.sections[0].text_opacity, 1.0);
    // Smoothed channels still show the previous value until time advances.
    assert_eq!(f.sections[0].scale, 0.7);

    s.settle();
    let f = s.frame();
    assert_eq!(f.sections[0].scale, 1.0);
    assert_eq!(f.sections[1].scale, 0.7);
}

#[test]
fn ticking_moves_springs_toward_targets() {
    let mut s = session();
    s.scroll_to(900.0);
    s.tick(SceneTime::from_millis(16));
    let early = s.section(1).unwrap().scale;
    assert!(early > 0.7 && early < 1.0);
    s.tick(SceneTime::from_millis(10_000));
    assert!(s.is_at_rest());
    assert_eq!(s.section(1).unwrap().scale, 1.0);
}

#[test]
fn nav_tracks_global_progress() {
    let mut s = session();
    let max = s.layout().max_scroll();
    s.scroll_to(max * 0.5);
    assert_eq!(s.frame().nav.active_index, 3);
    assert_eq!(
        s.frame().nav.active,
        ActiveSection::Product { ordinal: 3, id: 3 }
    );
    s.scroll_to(max);
    assert_eq!(s.frame().nav.active_index, 6);
    assert_eq!(s.frame().nav.active, ActiveSection::Closing);
    s.scroll_to(max * 10.0);
    assert_eq!(s.frame().global_progress, Progress::END);
}

#[test]
fn contact_motion_follows_its_section() {
    let mut s = session();
    let contact = s.layout().contact();
    let vh = s.layout().viewport().height;
    s.scroll_to(contact.top - vh);
    s.settle();
    assert_eq!(s.frame().contact.scale, 0.5);
    s.scroll_to(contact.top);
    s.settle();
    assert_eq!(s.frame().contact.progress.get(), 0.5);
    assert_eq!(s.frame().contact.scale, 1.0);
}

#[test]
fn form_reset_fires_on_tick() {
    let mut s = session();
    s.tick(SceneTime::from_millis(500));
    s.change_field(FormField::Name, "Alice");
    s.change_field(FormField::Email, "a@b.com");
    s.change_field(FormField::Message, "Hello there friend");
    assert!(matches!(s.submit(), SubmitOutcome::Accepted { .. }));
    assert!(s.frame().form.submitted);

    s.tick(SceneTime::from_millis(3499));
    assert!(s.frame().form.submitted);
    s.tick(SceneTime::from_millis(3500));
    let form = s.frame().form;
    assert!(!form.submitted);
    assert!(form.fields.name.is_empty());
}

#[test]
fn teardown_cancels_pending_reset_and_ignores_events() {
    let mut s = session();
    s.change_field(FormField::Name, "Alice");
    s.change_field(FormField::Email, "a@b.com");
    s.change_field(FormField::Message, "Hello there friend");
    s.submit();
    s.teardown();
    assert!(s.is_torn_down());
    assert_eq!(s.form().phase(), FormPhase::Submitted { reset_at: None });

    s.tick(SceneTime::from_millis(60_000));
    assert_eq!(s.form().fields().name, "Alice");
    s.scroll_to(2000.0);
    assert_eq!(s.scroll_offset(), 0.0);
    assert!(!s.change_field(FormField::Name, "Bob"));
    assert_eq!(s.submit(), SubmitOutcome::Ignored);
}

#[test]
fn resize_rebuilds_regions() {
    let mut s = session();
    s.scroll_to(900.0);
    assert_eq!(s.frame().sections[0].progress.get(), 0.5);
    s.resize(Viewport::new(600.0).unwrap()).unwrap();
    // Product 1 now spans [600, 1200): transit [0, 1200).
    assert_eq!(s.frame().sections[0].progress.get(), 0.75);
    assert_eq!(s.layout().document_height(), 8.0 * 600.0);
}

#[test]
fn mismatched_layout_is_rejected() {
    let cfg = PageConfig::default();
    let layout = cfg.layout(2).unwrap();
    assert!(PageSession::with_layout(cfg, Catalog::builtin(), layout).is_err());
}

#[test]
fn ambient_and_particles_follow_time() {
    let mut s = session();
    let a0 = s.frame().ambient;
    assert_eq!(a0.product_float.y, 0.0);
    assert_eq!(a0.contact_rings.len(), 3);
    s.tick(SceneTime::from_millis(2000));
    assert!((s.frame().ambient.product_float.y + 20.0).abs() < 1e-9);

    let p = s.particles();
    assert_eq!(p.hero.len(), 20);
    assert_eq!(p.contact.len(), 30);
    assert_eq!(p.products.len(), 5);
    assert!(p.products.values().all(|layer| layer.len() == 15));
}

#[test]
fn frame_serializes_for_the_renderer() {
    let s = session();
    let v = serde_json::to_value(s.frame()).unwrap();
    assert_eq!(v["nav"]["active"]["kind"], "hero");
    assert_eq!(v["sections"][2]["badge"], "03");
    assert_eq!(v["form"]["submitted"], false);
}
