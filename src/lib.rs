//! Scroll-driven motion core for the LEGACY sneaker showcase.
//!
//! The page is a hero banner, one full-height section per product, a contact form, and a footer.
//! This crate owns the deterministic logic behind it; a rendering host owns layout and pixels.
//!
//! # Pipeline overview
//!
//! 1. **Track**: `scroll offset -> Progress`, once for the whole document and once per section
//!    ([`ScrollProgressTracker`])
//! 2. **Map**: `Progress -> channel values` through piecewise-linear [`ControlTable`]s
//! 3. **Smooth**: spring-follow the scale/rotation/offset channels ([`SmoothedValue`])
//! 4. **Navigate**: `global progress -> active section` ([`active_index`], [`NavState`])
//!
//! The contact form ([`ContactFormController`]) is an independent state machine fed by input
//! events. [`PageSession`] wires all of it behind a pull-based API: the host pushes raw inputs
//! and reads a [`PageFrame`] back.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total hot path**: per-tick evaluation never fails; errors are front-loaded into
//!   constructors.
//! - **No clocks, no threads**: time is supplied by the host as [`SceneTime`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod catalog;
mod foundation;
mod form;
mod motion;
mod nav;
mod page;
mod scroll;

pub use kurbo::Affine;

pub use animation::ambient::{AmbientLoop, AmbientSample, LoopTrack};
pub use animation::ease::Ease;
pub use animation::particles::{Particle, ParticleField, ParticleKind, ParticleSample};
pub use animation::spring::{SmoothedValue, SpringConfig};
pub use animation::table::{Breakpoint, ControlTable, interpolate};
pub use catalog::model::{Catalog, ColorScheme, ProductRecord};
pub use form::controller::{
    ContactFormController, DEFAULT_RESET_DELAY, FieldErrors, FormFields, FormPhase, FormState,
    SubmitOutcome,
};
pub use form::validate::{
    FormField, FormValidationError, MIN_MESSAGE_CHARS, ValidationKind, is_js_space,
    is_valid_email, validate_field,
};
pub use foundation::core::{Progress, SceneTime, Viewport};
pub use foundation::error::{LegacyError, LegacyResult};
pub use motion::channel::SpringChannel;
pub use motion::contact::{ContactMotion, ContactMotionPreset, ContactVisual};
pub use motion::section::{ProductMotionPreset, SectionMotion, SectionVisual};
pub use nav::coordinator::{ActiveSection, NEUTRAL_ACCENT, NavState, active_index};
pub use page::config::PageConfig;
pub use page::session::{AmbientFrame, PageFrame, PageSession, ParticleFrame};
pub use scroll::region::{PageLayout, ScrollRegion, SectionBounds};
pub use scroll::tracker::{ScrollProgressTracker, TrackingMode};
