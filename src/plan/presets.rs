use crate::animation::{descriptor::AnimationDescriptor, ease::Ease, kind::AnimationKind};

/// Named, parameter-free strategy for animating a set of elements without a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Fade in one after another.
    Sequential,
    /// Slide in from the right with a short stagger.
    Stagger,
    /// Fade everything in together.
    AllFade,
    /// Slide everything up together.
    AllSlide,
    /// Pop the first element, fade in the rest.
    Emphasis,
    /// Remove all animation.
    Clear,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::Sequential,
        Preset::Stagger,
        Preset::AllFade,
        Preset::AllSlide,
        Preset::Emphasis,
        Preset::Clear,
    ];

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Stagger => "stagger",
            Self::AllFade => "all-fade",
            Self::AllSlide => "all-slide",
            Self::Emphasis => "emphasis",
            Self::Clear => "clear",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|p| p.as_tag() == tag)
    }
}

/// Timing constants shared by all presets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetConfig {
    /// Seconds per element animation.
    pub base_duration: f64,
    /// Seconds between consecutive element starts.
    pub stagger_delay: f64,
    pub default_easing: Ease,
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            base_duration: 0.5,
            stagger_delay: 0.15,
            default_easing: Ease::EaseOut,
        }
    }
}

const STAGGER_DISTANCE: f64 = 30.0;
const ALL_SLIDE_DISTANCE: f64 = 20.0;
const ALL_FADE_STRETCH: f64 = 1.5;
const EMPHASIS_POP_DURATION: f64 = 0.3;

/// Generate descriptors for `preset` with the default [`PresetConfig`].
pub fn generate_preset<S: AsRef<str>>(
    preset: Preset,
    element_ids: &[S],
    slide_duration: f64,
) -> Vec<AnimationDescriptor> {
    generate_preset_with(&PresetConfig::default(), preset, element_ids, slide_duration)
}

/// Generate descriptors for `preset`, one per id, in id order.
///
/// `_slide_duration` is accepted for duration-aware presets; none of the current ones use it.
#[tracing::instrument(skip(config, element_ids), fields(elements = element_ids.len()))]
pub fn generate_preset_with<S: AsRef<str>>(
    config: &PresetConfig,
    preset: Preset,
    element_ids: &[S],
    _slide_duration: f64,
) -> Vec<AnimationDescriptor> {
    let ids = element_ids.iter().map(AsRef::as_ref).enumerate();
    let base = |id: &str, kind, start, duration| {
        AnimationDescriptor::new(id, kind, start, duration).with_easing(config.default_easing)
    };

    match preset {
        Preset::Sequential => ids
            .map(|(i, id)| {
                let start = i as f64 * (config.base_duration + config.stagger_delay);
                base(id, AnimationKind::FadeIn, start, config.base_duration)
            })
            .collect(),
        Preset::Stagger => ids
            .map(|(i, id)| {
                let start = i as f64 * config.stagger_delay;
                base(id, AnimationKind::SlideLeft, start, config.base_duration)
                    .with_distance(STAGGER_DISTANCE)
            })
            .collect(),
        Preset::AllFade => ids
            .map(|(_, id)| {
                base(
                    id,
                    AnimationKind::FadeIn,
                    0.0,
                    config.base_duration * ALL_FADE_STRETCH,
                )
            })
            .collect(),
        Preset::AllSlide => ids
            .map(|(_, id)| {
                base(id, AnimationKind::SlideUp, 0.0, config.base_duration)
                    .with_distance(ALL_SLIDE_DISTANCE)
            })
            .collect(),
        Preset::Emphasis => ids
            .map(|(i, id)| {
                if i == 0 {
                    AnimationDescriptor::new(id, AnimationKind::Pop, 0.0, EMPHASIS_POP_DURATION)
                        .with_easing(Ease::Bounce)
                } else {
                    let start = i as f64 * config.stagger_delay;
                    base(id, AnimationKind::FadeIn, start, config.base_duration)
                }
            })
            .collect(),
        Preset::Clear => Vec::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/presets.rs"]
mod tests;
