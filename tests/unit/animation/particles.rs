use super::*;

#[test]
fn same_seed_same_field() {
    let a = ParticleField::generate(ParticleKind::Product, 42);
    let b = ParticleField::generate(ParticleKind::Product, 42);
    assert_eq!(a, b);
    let c = ParticleField::generate(ParticleKind::Product, 43);
    assert_ne!(a, c);
}

#[test]
fn counts_match_layer_kind() {
    assert_eq!(ParticleField::generate(ParticleKind::Hero, 1).particles.len(), 20);
    assert_eq!(ParticleField::generate(ParticleKind::Product, 1).particles.len(), 15);
    assert_eq!(ParticleField::generate(ParticleKind::Contact, 1).particles.len(), 30);
}

#[test]
fn anchors_and_timing_are_in_range() {
    let field = ParticleField::generate(ParticleKind::Contact, 9);
    for p in &field.particles {
        assert!((0.0..100.0).contains(&p.left_pct));
        assert!((0.0..100.0).contains(&p.top_pct));
        let y = p.motion.y.as_ref().unwrap();
        assert!((3.0..5.0).contains(&y.duration_s()));
        assert!((0.0..2.0).contains(&y.delay_s()));
    }
}

#[test]
fn samples_start_at_rest_values() {
    let field = ParticleField::generate(ParticleKind::Hero, 3);
    for s in field.sample(0.0) {
        assert_eq!(s.y, 0.0);
        assert_eq!(s.scale, 1.0);
        assert!((s.opacity - 0.1).abs() < 1e-12);
    }
}
