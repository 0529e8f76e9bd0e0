use crate::{
    animation::{ease::Ease, kind::AnimationKind},
    foundation::error::{MotionError, MotionResult},
    slide::model::{ElementKind, SlideTransition},
};

/// One role-targeted assignment in an [`AnimationPlan`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub element_type: ElementKind,
    pub animation: AnimationKind,
    /// Start as percent of slide duration, 0..=100.
    pub relative_start_percent: f64,
    /// Duration as percent of slide duration, 0..=100.
    pub duration_percent: f64,
    #[serde(default)]
    pub easing: Ease,
}

/// Resolution-independent animation plan authored upstream and attached to a slide.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationPlan {
    #[serde(default)]
    pub element_animations: Vec<PlanEntry>,
    /// Seconds between sequential elements, as authored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger_delay: Option<f64>,
    /// Seconds the authored build is expected to take.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_build_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<SlideTransition>,
}

fn check_percent(idx: usize, field: &str, v: f64) -> MotionResult<()> {
    if !v.is_finite() || !(0.0..=100.0).contains(&v) {
        return Err(MotionError::plan(format!(
            "elementAnimations[{idx}].{field} must be within 0..=100 (got {v})"
        )));
    }
    Ok(())
}

fn check_seconds(field: &str, v: Option<f64>) -> MotionResult<()> {
    match v {
        Some(v) if !v.is_finite() || v < 0.0 => Err(MotionError::plan(format!(
            "{field} must be finite and >= 0 (got {v})"
        ))),
        _ => Ok(()),
    }
}

impl AnimationPlan {
    pub fn entry(mut self, entry: PlanEntry) -> Self {
        self.element_animations.push(entry);
        self
    }

    /// Strict checks for authoring tools. The compiler clamps instead of calling this.
    pub fn validate(&self) -> MotionResult<()> {
        for (idx, e) in self.element_animations.iter().enumerate() {
            check_percent(idx, "relativeStartPercent", e.relative_start_percent)?;
            check_percent(idx, "durationPercent", e.duration_percent)?;
            if e.element_type == ElementKind::Unknown {
                return Err(MotionError::plan(format!(
                    "elementAnimations[{idx}].elementType is not a known element type"
                )));
            }
            if e.animation == AnimationKind::Unknown {
                return Err(MotionError::plan(format!(
                    "elementAnimations[{idx}].animation is not a known animation"
                )));
            }
        }
        check_seconds("staggerDelay", self.stagger_delay)?;
        check_seconds("totalBuildTime", self.total_build_time)?;
        check_seconds("transition.duration", self.transition.as_ref().map(|t| t.duration))?;
        Ok(())
    }
}

impl PlanEntry {
    pub fn new(
        element_type: ElementKind,
        animation: AnimationKind,
        relative_start_percent: f64,
        duration_percent: f64,
    ) -> Self {
        Self {
            element_type,
            animation,
            relative_start_percent,
            duration_percent,
            easing: Ease::Linear,
        }
    }

    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }
}
