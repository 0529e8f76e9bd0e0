use super::*;

const EPS: f64 = 1e-12;

fn starts(descs: &[AnimationDescriptor]) -> Vec<f64> {
    descs.iter().map(|d| d.start_time).collect()
}

#[test]
fn stagger_slides_left_with_fixed_distance() {
    let out = generate_preset(Preset::Stagger, &["a", "b", "c"], 10.0);
    assert_eq!(out.len(), 3);
    for (got, want) in starts(&out).into_iter().zip([0.0, 0.15, 0.30]) {
        assert!((got - want).abs() < EPS);
    }
    for d in &out {
        assert_eq!(d.kind, AnimationKind::SlideLeft);
        assert_eq!(d.distance, Some(30.0));
        assert_eq!(d.duration, 0.5);
        assert_eq!(d.easing, Ease::EaseOut);
    }
    assert_eq!(out[1].id, "anim_b");
    assert_eq!(out[1].element_id, "b");
}

#[test]
fn sequential_waits_for_previous_plus_gap() {
    let out = generate_preset(Preset::Sequential, &["a", "b", "c"], 10.0);
    for (got, want) in starts(&out).into_iter().zip([0.0, 0.65, 1.3]) {
        assert!((got - want).abs() < EPS);
    }
    assert!(out.iter().all(|d| d.kind == AnimationKind::FadeIn && d.duration == 0.5));
}

#[test]
fn simultaneous_presets_start_together() {
    let fade = generate_preset(Preset::AllFade, &["a", "b"], 10.0);
    assert!(fade.iter().all(|d| d.start_time == 0.0 && d.duration == 0.75));
    assert!(fade.iter().all(|d| d.kind == AnimationKind::FadeIn));

    let slide = generate_preset(Preset::AllSlide, &["a", "b"], 10.0);
    assert!(slide.iter().all(|d| d.start_time == 0.0 && d.duration == 0.5));
    assert!(
        slide
            .iter()
            .all(|d| d.kind == AnimationKind::SlideUp && d.distance == Some(20.0))
    );
}

#[test]
fn emphasis_pops_first_and_fades_rest() {
    let out = generate_preset(Preset::Emphasis, &["hero", "b", "c"], 10.0);
    assert_eq!(out[0].kind, AnimationKind::Pop);
    assert_eq!(out[0].easing, Ease::Bounce);
    assert_eq!(out[0].duration, 0.3);
    assert_eq!(out[0].start_time, 0.0);

    assert_eq!(out[1].kind, AnimationKind::FadeIn);
    assert_eq!(out[1].easing, Ease::EaseOut);
    assert!((out[2].start_time - 0.3).abs() < EPS);
    assert_eq!(out[2].duration, 0.5);
}

#[test]
fn clear_and_empty_inputs_yield_nothing() {
    assert!(generate_preset(Preset::Clear, &["a", "b"], 10.0).is_empty());
    let none: [&str; 0] = [];
    for preset in Preset::ALL {
        assert!(generate_preset(preset, &none, 10.0).is_empty());
    }
}

#[test]
fn slide_duration_does_not_change_output() {
    for preset in Preset::ALL {
        assert_eq!(
            generate_preset(preset, &["a", "b"], 1.0),
            generate_preset(preset, &["a", "b"], 60.0)
        );
    }
}

#[test]
fn custom_config_overrides_timing() {
    let config = PresetConfig {
        base_duration: 1.0,
        stagger_delay: 0.5,
        default_easing: Ease::Linear,
    };
    let out = generate_preset_with(&config, Preset::Sequential, &["a", "b"], 0.0);
    assert_eq!(starts(&out), vec![0.0, 1.5]);
    assert_eq!(out[1].easing, Ease::Linear);
}

#[test]
fn tags_round_trip() {
    for preset in Preset::ALL {
        assert_eq!(Preset::from_tag(preset.as_tag()), Some(preset));
        let json = serde_json::to_string(&preset).unwrap();
        assert_eq!(json, format!("\"{}\"", preset.as_tag()));
    }
    assert_eq!(Preset::from_tag(" All-Fade "), Some(Preset::AllFade));
    assert_eq!(Preset::from_tag("spin"), None);
}
