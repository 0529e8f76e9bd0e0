//! Per-kind interpolators and boundary states.
//!
//! Boundary states are spelled out per kind rather than derived by evaluating the active
//! formula at progress 0 or 1: several kinds rest in states the formula never produces at
//! its own endpoints (`highlight` keeps its overlay, `glow-pulse` ends dark, `typewriter`
//! drops its character count).

use std::f64::consts::PI;

use crate::animation::{
    descriptor::AnimationDescriptor, kind::AnimationKind, state::AnimationState,
};

/// Character count assumed for typewriter reveals when no content length is known.
pub const DEFAULT_CONTENT_LENGTH: usize = 100;

// Settle legs use literal spans: `1.2 - 1.0 != 0.2` in f64.
const BOUNCE_PEAK: f64 = 1.2;
const BOUNCE_PEAK_AT: f64 = 0.6;
const BOUNCE_SETTLE_SPAN: f64 = 0.4;
const BOUNCE_OVERSHOOT: f64 = 0.2;
const POP_PEAK: f64 = 1.15;
const POP_PEAK_AT: f64 = 0.5;
const POP_OVERSHOOT: f64 = 0.15;
const SHAKE_AMPLITUDE: f64 = 3.0;
const SHAKE_HALF_CYCLES: f64 = 8.0;
const WOBBLE_AMPLITUDE: f64 = 5.0;
const WOBBLE_HALF_CYCLES: f64 = 6.0;

/// State held before the active window opens.
pub fn pre_start_state(desc: &AnimationDescriptor) -> AnimationState {
    let id = AnimationState::IDENTITY;
    match desc.kind {
        AnimationKind::FadeIn => id.with_opacity(0.0),
        AnimationKind::SlideLeft
        | AnimationKind::SlideRight
        | AnimationKind::SlideUp
        | AnimationKind::SlideDown => {
            let (x, y) = slide_offset(desc, 0.0);
            id.with_translate(x, y).with_opacity(0.0)
        }
        AnimationKind::ScaleIn | AnimationKind::Bounce => id.with_scale(0.0).with_opacity(0.0),
        AnimationKind::ZoomIn => id.with_scale(0.5).with_opacity(0.0),
        AnimationKind::Pop => id.with_scale(0.0),
        AnimationKind::Typewriter => AnimationState {
            visible_chars: Some(0),
            ..id
        },
        AnimationKind::Highlight => AnimationState {
            highlight_opacity: Some(0.0),
            ..id
        },
        AnimationKind::GlowPulse => AnimationState {
            glow_intensity: Some(0.0),
            ..id
        },
        AnimationKind::UnderlineDraw | AnimationKind::CircleDraw => AnimationState {
            draw_progress: Some(0.0),
            ..id
        },
        AnimationKind::FadeOut
        | AnimationKind::ScaleOut
        | AnimationKind::Shake
        | AnimationKind::Wobble
        | AnimationKind::None
        | AnimationKind::Unknown => id,
    }
}

/// State held once the active window has closed.
pub fn post_end_state(desc: &AnimationDescriptor) -> AnimationState {
    let id = AnimationState::IDENTITY;
    match desc.kind {
        AnimationKind::FadeOut => id.with_opacity(0.0),
        AnimationKind::ScaleOut => id.with_scale(0.0).with_opacity(0.0),
        AnimationKind::Highlight => AnimationState {
            highlight_opacity: Some(1.0),
            ..id
        },
        AnimationKind::GlowPulse => AnimationState {
            glow_intensity: Some(0.0),
            ..id
        },
        AnimationKind::UnderlineDraw | AnimationKind::CircleDraw => AnimationState {
            draw_progress: Some(1.0),
            ..id
        },
        AnimationKind::Pop | AnimationKind::Bounce => id.with_scale(1.0),
        // Entrances settle at identity; typewriter shows everything implicitly.
        AnimationKind::FadeIn
        | AnimationKind::SlideLeft
        | AnimationKind::SlideRight
        | AnimationKind::SlideUp
        | AnimationKind::SlideDown
        | AnimationKind::ScaleIn
        | AnimationKind::ZoomIn
        | AnimationKind::Typewriter
        | AnimationKind::Shake
        | AnimationKind::Wobble
        | AnimationKind::None
        | AnimationKind::Unknown => id,
    }
}

/// Active-window state for already-eased progress `p`.
///
/// `p` may leave `[0, 1]` slightly for overshooting curves; formulas are applied as-is.
pub fn interpolate(
    desc: &AnimationDescriptor,
    p: f64,
    content_len: Option<usize>,
) -> AnimationState {
    let id = AnimationState::IDENTITY;
    match desc.kind {
        AnimationKind::FadeIn => id.with_opacity(p),
        AnimationKind::FadeOut => id.with_opacity(1.0 - p),
        AnimationKind::SlideLeft
        | AnimationKind::SlideRight
        | AnimationKind::SlideUp
        | AnimationKind::SlideDown => {
            let (x, y) = slide_offset(desc, p);
            id.with_translate(x, y).with_opacity(half_fade(p))
        }
        AnimationKind::ScaleIn => id.with_scale(p).with_opacity(p),
        AnimationKind::ScaleOut => id.with_scale(1.0 - p).with_opacity(1.0 - p),
        AnimationKind::ZoomIn => id.with_scale(0.5 + p * 0.5).with_opacity(p),
        AnimationKind::Bounce => id
            .with_scale(bounce_scale(p).min(BOUNCE_PEAK))
            .with_opacity(half_fade(p)),
        AnimationKind::Pop => id.with_scale(pop_scale(p)),
        AnimationKind::Typewriter => {
            let total = match content_len {
                Some(n) if n > 0 => n,
                _ => DEFAULT_CONTENT_LENGTH,
            };
            AnimationState {
                visible_chars: Some((p * total as f64).floor().max(0.0) as u64),
                ..id
            }
        }
        AnimationKind::Highlight => AnimationState {
            highlight_opacity: Some(p),
            ..id
        },
        AnimationKind::GlowPulse => AnimationState {
            glow_intensity: Some((p * PI * 2.0).sin() * 0.5 + 0.5),
            ..id
        },
        AnimationKind::Shake => {
            let amplitude = (1.0 - p) * SHAKE_AMPLITUDE * desc.intensity_multiplier();
            id.with_translate((p * PI * SHAKE_HALF_CYCLES).sin() * amplitude, 0.0)
        }
        AnimationKind::Wobble => {
            let amplitude = (1.0 - p) * WOBBLE_AMPLITUDE * desc.intensity_multiplier();
            id.with_rotation((p * PI * WOBBLE_HALF_CYCLES).sin() * amplitude)
        }
        AnimationKind::UnderlineDraw | AnimationKind::CircleDraw => AnimationState {
            draw_progress: Some(p),
            ..id
        },
        AnimationKind::None | AnimationKind::Unknown => id,
    }
}

/// Remaining slide offset at progress `p`; zero for non-slide kinds.
fn slide_offset(desc: &AnimationDescriptor, p: f64) -> (f64, f64) {
    let Some(dir) = desc.kind.slide_dir() else {
        return (0.0, 0.0);
    };
    let remaining = desc.distance_or_default() * (1.0 - p);
    dir.offset(remaining)
}

// Full opacity by the halfway point.
fn half_fade(p: f64) -> f64 {
    (p * 2.0).min(1.0)
}

fn bounce_scale(p: f64) -> f64 {
    if p < BOUNCE_PEAK_AT {
        p / BOUNCE_PEAK_AT * BOUNCE_PEAK
    } else {
        BOUNCE_PEAK - (p - BOUNCE_PEAK_AT) / BOUNCE_SETTLE_SPAN * BOUNCE_OVERSHOOT
    }
}

fn pop_scale(p: f64) -> f64 {
    if p < POP_PEAK_AT {
        p * 2.0 * POP_PEAK
    } else {
        POP_PEAK - (p - POP_PEAK_AT) * 2.0 * POP_OVERSHOOT
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
