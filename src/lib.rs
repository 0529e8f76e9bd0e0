//! slidemotion is the animation timing engine behind narrated explainer slide videos.
//!
//! Given an element's [`AnimationDescriptor`] and a slide-relative time in seconds, the
//! engine computes the element's [`AnimationState`] (opacity, translation, scale, rotation
//! and effect fields such as typewriter character counts or stroke progress).
//!
//! # Pipeline overview
//!
//! 1. **Author**: an upstream step attaches a percentage-based [`AnimationPlan`] to a
//!    [`Slide`], or the user picks a [`Preset`].
//! 2. **Compile**: [`compile_plan`] / [`generate_preset`] resolve that into absolute
//!    per-element descriptors.
//! 3. **Evaluate**: [`compute_state`] maps `(descriptor, time)` to a state, once per element
//!    per frame, or in batch via [`render_filmstrip`].
//! 4. **Gate**: [`all_complete`] tells the playback driver when narration may start.
//!
//! Evaluation is pure: identical inputs always produce identical states, so frames can be
//! computed ahead of time, in parallel, or just in time interchangeably. Invalid numbers
//! are normalized rather than rejected; only opt-in validation and IO return
//! [`MotionError`].
#![forbid(unsafe_code)]

mod animation;
mod eval;
mod foundation;
mod plan;
mod slide;

pub use animation::calc::{Phase, compute_state, phase_at};
pub use animation::descriptor::{AnimationDescriptor, DEFAULT_DISTANCE, descriptor_id};
pub use animation::ease::Ease;
pub use animation::interp::{
    DEFAULT_CONTENT_LENGTH, interpolate, post_end_state, pre_start_state,
};
pub use animation::kind::{AnimationFamily, AnimationKind, Intensity, SlideDir};
pub use animation::state::AnimationState;
pub use eval::filmstrip::{
    Filmstrip, FilmstripFrame, FilmstripOpts, MAX_FILMSTRIP_FRAMES, render_filmstrip,
    render_filmstrip_parallel,
};
pub use eval::timeline::{all_complete, is_complete, total_duration};
pub use foundation::core::{Fps, FrameIndex};
pub use foundation::error::{MotionError, MotionResult};
pub use plan::compile::compile_plan;
pub use plan::model::{AnimationPlan, PlanEntry};
pub use plan::presets::{Preset, PresetConfig, generate_preset, generate_preset_with};
pub use slide::model::{
    ElementKind, ElementState, Slide, SlideElement, SlideTransition, TransitionKind,
};
