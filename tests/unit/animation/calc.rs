use super::*;
use crate::animation::{ease::Ease, kind::AnimationKind};

const ALL_KINDS: [AnimationKind; 20] = [
    AnimationKind::None,
    AnimationKind::FadeIn,
    AnimationKind::FadeOut,
    AnimationKind::SlideLeft,
    AnimationKind::SlideRight,
    AnimationKind::SlideUp,
    AnimationKind::SlideDown,
    AnimationKind::ScaleIn,
    AnimationKind::ScaleOut,
    AnimationKind::Typewriter,
    AnimationKind::Bounce,
    AnimationKind::ZoomIn,
    AnimationKind::Highlight,
    AnimationKind::GlowPulse,
    AnimationKind::Shake,
    AnimationKind::Wobble,
    AnimationKind::Pop,
    AnimationKind::UnderlineDraw,
    AnimationKind::CircleDraw,
    AnimationKind::Unknown,
];

fn d(kind: AnimationKind, start: f64, duration: f64) -> AnimationDescriptor {
    AnimationDescriptor::new("el", kind, start, duration)
}

#[test]
fn missing_descriptor_is_identity() {
    assert_eq!(compute_state(None, 3.0, None), AnimationState::IDENTITY);
    let none = d(AnimationKind::None, 0.0, 1.0);
    assert_eq!(compute_state(Some(&none), 0.5, None), AnimationState::IDENTITY);
}

#[test]
fn fade_in_scenario() {
    let fade = d(AnimationKind::FadeIn, 2.0, 1.0);
    assert_eq!(compute_state(Some(&fade), 1.0, None).opacity, 0.0);
    assert_eq!(compute_state(Some(&fade), 2.5, None).opacity, 0.5);
    assert_eq!(compute_state(Some(&fade), 4.0, None).opacity, 1.0);
    assert_eq!(compute_state(Some(&fade), 4.0, None), AnimationState::IDENTITY);
}

#[test]
fn slide_left_scenario() {
    let slide = d(AnimationKind::SlideLeft, 0.0, 1.0).with_distance(40.0);
    let s = compute_state(Some(&slide), 0.5, None);
    assert_eq!(s.translate_x, 20.0);
    assert_eq!(s.opacity, 1.0);
}

#[test]
fn pre_start_states_are_exact() {
    let at = |kind| compute_state(Some(&d(kind, 1.0, 1.0)), 0.5, None);

    assert_eq!(at(AnimationKind::FadeIn).opacity, 0.0);
    assert_eq!(at(AnimationKind::FadeOut), AnimationState::IDENTITY);
    assert_eq!(at(AnimationKind::ScaleOut), AnimationState::IDENTITY);

    let s = at(AnimationKind::ScaleIn);
    assert_eq!((s.scale, s.opacity), (0.0, 0.0));
    let s = at(AnimationKind::ZoomIn);
    assert_eq!((s.scale, s.opacity), (0.5, 0.0));
    let s = at(AnimationKind::Bounce);
    assert_eq!((s.scale, s.opacity), (0.0, 0.0));
    let s = at(AnimationKind::Pop);
    assert_eq!((s.scale, s.opacity), (0.0, 1.0));

    assert_eq!(at(AnimationKind::Typewriter).visible_chars, Some(0));
    assert_eq!(at(AnimationKind::Highlight).highlight_opacity, Some(0.0));
    assert_eq!(at(AnimationKind::GlowPulse).glow_intensity, Some(0.0));
    assert_eq!(at(AnimationKind::UnderlineDraw).draw_progress, Some(0.0));
    assert_eq!(at(AnimationKind::CircleDraw).draw_progress, Some(0.0));
    assert_eq!(at(AnimationKind::Shake), AnimationState::IDENTITY);
    assert_eq!(at(AnimationKind::Wobble), AnimationState::IDENTITY);
}

#[test]
fn post_end_states_are_exact() {
    let at = |kind| compute_state(Some(&d(kind, 1.0, 1.0)), 2.0, None);

    assert_eq!(at(AnimationKind::FadeOut).opacity, 0.0);
    let s = at(AnimationKind::ScaleOut);
    assert_eq!((s.scale, s.opacity), (0.0, 0.0));
    assert_eq!(at(AnimationKind::Highlight).highlight_opacity, Some(1.0));
    assert_eq!(at(AnimationKind::GlowPulse).glow_intensity, Some(0.0));
    assert_eq!(at(AnimationKind::UnderlineDraw).draw_progress, Some(1.0));
    assert_eq!(at(AnimationKind::CircleDraw).draw_progress, Some(1.0));

    for kind in [
        AnimationKind::FadeIn,
        AnimationKind::SlideLeft,
        AnimationKind::SlideRight,
        AnimationKind::SlideUp,
        AnimationKind::SlideDown,
        AnimationKind::ScaleIn,
        AnimationKind::ZoomIn,
        AnimationKind::Bounce,
        AnimationKind::Pop,
        AnimationKind::Typewriter,
        AnimationKind::Shake,
        AnimationKind::Wobble,
    ] {
        assert_eq!(at(kind), AnimationState::IDENTITY, "{kind:?}");
    }
}

#[test]
fn delay_shifts_the_active_window() {
    let fade = d(AnimationKind::FadeIn, 1.0, 2.0).with_delay(1.0);
    assert_eq!(phase_at(&fade, 1.5), Phase::Before);
    assert_eq!(phase_at(&fade, 2.0), Phase::Active(0.0));
    assert_eq!(phase_at(&fade, 3.0), Phase::Active(0.5));
    assert_eq!(phase_at(&fade, 4.0), Phase::After);
    assert_eq!(compute_state(Some(&fade), 3.0, None).opacity, 0.5);
}

#[test]
fn easing_is_applied_to_progress() {
    let fade = d(AnimationKind::FadeIn, 0.0, 1.0).with_easing(Ease::EaseIn);
    assert_eq!(compute_state(Some(&fade), 0.5, None).opacity, 0.125);
}

#[test]
fn degenerate_durations_jump_to_post_end() {
    for duration in [0.0, -1.0, f64::NAN] {
        for kind in ALL_KINDS {
            let desc = d(kind, 1.0, duration);
            let expected = if kind.is_noop() {
                AnimationState::IDENTITY
            } else {
                post_end_state(&desc)
            };
            assert_eq!(compute_state(Some(&desc), 1.0, None), expected);
            assert_eq!(compute_state(Some(&desc), 50.0, None), expected);
            assert_eq!(phase_at(&desc, 0.5), Phase::Before);
        }
    }
}

#[test]
fn nan_time_is_before_start() {
    let fade = d(AnimationKind::FadeIn, 0.0, 1.0);
    assert_eq!(phase_at(&fade, f64::NAN), Phase::Before);
    assert_eq!(compute_state(Some(&fade), f64::NAN, None).opacity, 0.0);
}

#[test]
fn boundaries_are_continuous_where_the_table_agrees() {
    let eps = 1e-6;
    for kind in [
        AnimationKind::FadeIn,
        AnimationKind::FadeOut,
        AnimationKind::ScaleIn,
        AnimationKind::ScaleOut,
        AnimationKind::ZoomIn,
        AnimationKind::SlideUp,
        AnimationKind::Highlight,
        AnimationKind::UnderlineDraw,
    ] {
        let desc = d(kind, 2.0, 1.0);
        let before = compute_state(Some(&desc), 2.0 - eps, None);
        let just_after_start = compute_state(Some(&desc), 2.0 + eps, None);
        assert!((before.opacity - just_after_start.opacity).abs() < 1e-3, "{kind:?}");
        assert!((before.scale - just_after_start.scale).abs() < 1e-3, "{kind:?}");
        assert!((before.translate_y - just_after_start.translate_y).abs() < 1e-3, "{kind:?}");

        let before_end = compute_state(Some(&desc), 3.0 - eps, None);
        let after = compute_state(Some(&desc), 3.0, None);
        assert!((before_end.opacity - after.opacity).abs() < 1e-3, "{kind:?}");
        assert!((before_end.scale - after.scale).abs() < 1e-3, "{kind:?}");
        assert!((before_end.translate_y - after.translate_y).abs() < 1e-3, "{kind:?}");
    }
}

#[test]
fn repeated_queries_are_identical() {
    let desc = d(AnimationKind::Wobble, 0.25, 0.8)
        .with_easing(Ease::Elastic)
        .with_intensity(crate::animation::kind::Intensity::Light);
    for i in 0..120 {
        let t = f64::from(i) / 60.0;
        assert_eq!(
            compute_state(Some(&desc), t, None),
            compute_state(Some(&desc), t, None)
        );
    }
}
