use std::collections::BTreeMap;

use crate::{
    animation::{
        ambient::{AmbientLoop, AmbientSample},
        particles::{ParticleField, ParticleKind, ParticleSample},
    },
    catalog::model::Catalog,
    foundation::{
        core::{Progress, SceneTime, Viewport},
        error::{LegacyError, LegacyResult},
    },
    form::{
        controller::{ContactFormController, FormState, SubmitOutcome},
        validate::FormField,
    },
    motion::{
        contact::{ContactMotion, ContactVisual},
        section::{SectionMotion, SectionVisual},
    },
    nav::coordinator::NavState,
    page::config::PageConfig,
    scroll::{region::PageLayout, tracker::ScrollProgressTracker},
};

/// Number of pulsing rings around the contact shoe.
const CONTACT_RINGS: usize = 3;

/// Everything the rendering layer needs for one paint.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageFrame {
    /// Scroll offset the frame was derived from.
    pub scroll_offset: f64,
    /// Session time of the frame.
    pub time: SceneTime,
    /// Whole-document progress.
    pub global_progress: Progress,
    /// Navigation bar state.
    pub nav: NavState,
    /// Product sections in catalog order.
    pub sections: Vec<SectionVisual>,
    /// Contact shoe.
    pub contact: ContactVisual,
    /// Contact form.
    pub form: FormState,
    /// Idle loops.
    pub ambient: AmbientFrame,
}

/// Idle-loop channels for one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AmbientFrame {
    /// Hero "scroll to explore" hint.
    pub hero_hint: AmbientSample,
    /// Float shared by every product image.
    pub product_float: AmbientSample,
    /// Glow shared by every product image.
    pub product_glow: AmbientSample,
    /// Contact shoe float.
    pub contact_float: AmbientSample,
    /// Contact shoe glow.
    pub contact_glow: AmbientSample,
    /// Contact rings, innermost first.
    pub contact_rings: Vec<AmbientSample>,
}

/// Particle layers for one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParticleFrame {
    /// Hero layer.
    pub hero: Vec<ParticleSample>,
    /// Per-product layers keyed by product id.
    pub products: BTreeMap<u32, Vec<ParticleSample>>,
    /// Contact layer.
    pub contact: Vec<ParticleSample>,
}

#[derive(Clone, Debug)]
struct SectionSlot {
    tracker: ScrollProgressTracker,
    motion: SectionMotion,
    particles: ParticleField,
}

#[derive(Clone, Debug)]
struct AmbientSet {
    hero_hint: AmbientLoop,
    product_float: AmbientLoop,
    product_glow: AmbientLoop,
    contact_float: AmbientLoop,
    contact_glow: AmbientLoop,
    contact_rings: Vec<AmbientLoop>,
}

impl AmbientSet {
    fn new() -> Self {
        Self {
            hero_hint: AmbientLoop::hero_hint(),
            product_float: AmbientLoop::product_float(),
            product_glow: AmbientLoop::product_glow(),
            contact_float: AmbientLoop::contact_float(),
            contact_glow: AmbientLoop::contact_glow(),
            contact_rings: (0..CONTACT_RINGS).map(AmbientLoop::contact_ring).collect(),
        }
    }

    fn sample(&self, t_s: f64) -> AmbientFrame {
        AmbientFrame {
            hero_hint: self.hero_hint.sample(t_s),
            product_float: self.product_float.sample(t_s),
            product_glow: self.product_glow.sample(t_s),
            contact_float: self.contact_float.sample(t_s),
            contact_glow: self.contact_glow.sample(t_s),
            contact_rings: self.contact_rings.iter().map(|r| r.sample(t_s)).collect(),
        }
    }
}

/// Pull-based page driver.
///
/// The host's event dispatcher feeds raw inputs in (scroll offset, geometry, time, form events)
/// and reads a [`PageFrame`] back. No subscriptions: each input method recomputes exactly the
/// values that depend on it.
#[derive(Clone, Debug)]
pub struct PageSession {
    config: PageConfig,
    catalog: Catalog,
    layout: PageLayout,
    global: ScrollProgressTracker,
    sections: BTreeMap<u32, SectionSlot>,
    contact_tracker: ScrollProgressTracker,
    contact: ContactMotion,
    nav: NavState,
    form: ContactFormController,
    ambient: AmbientSet,
    hero_particles: ParticleField,
    contact_particles: ParticleField,
    scroll_offset: f64,
    now: SceneTime,
    torn_down: bool,
}

impl PageSession {
    /// Build a session with the stacked layout derived from `config`.
    #[tracing::instrument(skip_all, fields(products = catalog.len()))]
    pub fn new(config: PageConfig, catalog: Catalog) -> LegacyResult<Self> {
        config.validate()?;
        let layout = config.layout(catalog.len())?;
        Self::with_layout(config, catalog, layout)
    }

    /// Build a session on host-measured geometry.
    pub fn with_layout(
        config: PageConfig,
        catalog: Catalog,
        layout: PageLayout,
    ) -> LegacyResult<Self> {
        config.validate()?;
        check_layout(&layout, &catalog)?;

        let viewport = layout.viewport();
        let seed = config.particle_seed;
        let mut sections = BTreeMap::new();
        for (i, product) in catalog.products().iter().enumerate() {
            let bounds = layout
                .product(i)
                .ok_or_else(|| LegacyError::validation("layout is missing a product section"))?;
            sections.insert(
                product.id,
                SectionSlot {
                    tracker: ScrollProgressTracker::section(bounds, viewport),
                    motion: SectionMotion::new(
                        product.id,
                        i + 1,
                        &config.product_motion,
                        config.spring,
                    ),
                    particles: ParticleField::generate(
                        ParticleKind::Product,
                        seed ^ u64::from(product.id).wrapping_mul(0x9E37_79B9),
                    ),
                },
            );
        }

        let mut session = Self {
            global: ScrollProgressTracker::global(layout.document_height(), viewport),
            contact_tracker: ScrollProgressTracker::section(layout.contact(), viewport),
            contact: ContactMotion::new(&config.contact_motion, config.spring),
            nav: NavState::derive(Progress::START, &catalog),
            form: ContactFormController::new(config.form_reset_delay()),
            ambient: AmbientSet::new(),
            hero_particles: ParticleField::generate(ParticleKind::Hero, seed),
            contact_particles: ParticleField::generate(ParticleKind::Contact, !seed),
            sections,
            layout,
            catalog,
            config,
            scroll_offset: 0.0,
            now: SceneTime::ZERO,
            torn_down: false,
        };
        session.recompute();
        session.settle();
        Ok(session)
    }

    /// Active configuration.
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Catalog being shown.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current layout.
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Latest scroll offset.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Latest session time.
    pub fn now(&self) -> SceneTime {
        self.now
    }

    /// Scroll position changed.
    #[tracing::instrument(skip(self), level = "trace")]
    pub fn scroll_to(&mut self, offset: f64) {
        if self.torn_down {
            return;
        }
        self.scroll_offset = offset;
        self.recompute();
    }

    /// Viewport resized. Rebuilds the stacked layout for the new height.
    pub fn resize(&mut self, viewport: Viewport) -> LegacyResult<()> {
        let mut config = self.config.clone();
        config.viewport_height = viewport.height;
        let layout = config.layout(self.catalog.len())?;
        self.config = config;
        self.set_layout(layout)
    }

    /// Host re-measured the page. Trackers pick up their new regions immediately.
    pub fn set_layout(&mut self, layout: PageLayout) -> LegacyResult<()> {
        check_layout(&layout, &self.catalog)?;
        let viewport = layout.viewport();
        self.global = ScrollProgressTracker::global(layout.document_height(), viewport);
        for (i, product) in self.catalog.products().iter().enumerate() {
            if let (Some(slot), Some(bounds)) =
                (self.sections.get_mut(&product.id), layout.product(i))
            {
                slot.tracker = ScrollProgressTracker::section(bounds, viewport);
            }
        }
        self.contact_tracker = ScrollProgressTracker::section(layout.contact(), viewport);
        self.layout = layout;
        tracing::debug!(height = self.layout.document_height(), "layout updated");
        if !self.torn_down {
            self.recompute();
        }
        Ok(())
    }

    /// Advance session time to `now`: steps every spring and fires a due form reset.
    pub fn tick(&mut self, now: SceneTime) {
        if self.torn_down {
            return;
        }
        let dt = now.since(self.now).as_secs_f64();
        self.now = self.now.max(now);
        if dt > 0.0 {
            for slot in self.sections.values_mut() {
                slot.motion.step(dt);
            }
            self.contact.step(dt);
        }
        self.form.poll(self.now);
    }

    /// Snap every spring onto its current raw value.
    pub fn settle(&mut self) {
        for slot in self.sections.values_mut() {
            slot.motion.settle();
        }
        self.contact.settle();
    }

    /// Whether every spring is at rest.
    pub fn is_at_rest(&self) -> bool {
        self.sections.values().all(|s| s.motion.is_at_rest()) && self.contact.is_at_rest()
    }

    /// Keystroke in the contact form.
    pub fn change_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if self.torn_down {
            return false;
        }
        self.form.change(field, value)
    }

    /// Submit the contact form at the current session time.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.torn_down {
            return SubmitOutcome::Ignored;
        }
        self.form.submit(self.now)
    }

    /// Contact form controller.
    pub fn form(&self) -> &ContactFormController {
        &self.form
    }

    /// Stop reacting to events and disarm any pending form reset.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.form.cancel_reset();
        self.torn_down = true;
        tracing::debug!("session torn down");
    }

    /// Whether [`Self::teardown`] has run.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Visual state of the product with `id`.
    pub fn section(&self, id: u32) -> Option<SectionVisual> {
        self.sections.get(&id).map(|s| s.motion.visual())
    }

    /// Snapshot for the renderer.
    pub fn frame(&self) -> PageFrame {
        PageFrame {
            scroll_offset: self.scroll_offset,
            time: self.now,
            global_progress: self.global.progress(),
            nav: self.nav.clone(),
            sections: self
                .catalog
                .products()
                .iter()
                .filter_map(|p| self.section(p.id))
                .collect(),
            contact: self.contact.visual(),
            form: self.form.state(),
            ambient: self.ambient.sample(self.now.as_secs_f64()),
        }
    }

    /// Particle layers at the current session time.
    pub fn particles(&self) -> ParticleFrame {
        let t = self.now.as_secs_f64();
        ParticleFrame {
            hero: self.hero_particles.sample(t),
            products: self
                .sections
                .iter()
                .map(|(id, s)| (*id, s.particles.sample(t)))
                .collect(),
            contact: self.contact_particles.sample(t),
        }
    }

    fn recompute(&mut self) {
        let offset = self.scroll_offset;
        let global = self.global.update(offset);
        for slot in self.sections.values_mut() {
            let p = slot.tracker.update(offset);
            slot.motion.set_progress(p);
        }
        let p = self.contact_tracker.update(offset);
        self.contact.set_progress(p);

        let nav = NavState::derive(global, &self.catalog);
        if nav.active_index != self.nav.active_index {
            tracing::debug!(
                from = self.nav.active_index,
                to = nav.active_index,
                "active section changed"
            );
        }
        self.nav = nav;
    }
}

fn check_layout(layout: &PageLayout, catalog: &Catalog) -> LegacyResult<()> {
    if layout.product_count() != catalog.len() {
        return Err(LegacyError::validation(format!(
            "layout has {} product sections but the catalog has {} products",
            layout.product_count(),
            catalog.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/page/session.rs"]
mod tests;
