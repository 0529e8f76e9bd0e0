use crate::{
    animation::{calc::compute_state, descriptor::AnimationDescriptor, state::AnimationState},
    eval::timeline::all_complete,
    foundation::error::{MotionError, MotionResult},
    plan::{
        compile::compile_plan,
        model::AnimationPlan,
        presets::{Preset, generate_preset},
    },
};

/// Role of an element on a slide; plans target elements by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Headline,
    Subheadline,
    Body,
    Bullets,
    Image,
    /// Roles this version does not know; never targeted by a plan.
    #[serde(other)]
    Unknown,
}

/// Transition style into the next slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionKind {
    Cut,
    Fade,
    Dissolve,
    SlideLeft,
    SlideRight,
    Wipe,
    Zoom,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideTransition {
    #[serde(rename = "type")]
    pub kind: TransitionKind,
    /// Seconds.
    pub duration: f64,
}

/// One positioned element on a slide. Geometry is in percent of the slide.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "full_extent")]
    pub width: f64,
    #[serde(default = "full_extent")]
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationDescriptor>,
}

fn full_extent() -> f64 {
    100.0
}

fn default_true() -> bool {
    true
}

impl SlideElement {
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            x: 0.0,
            y: 0.0,
            width: full_extent(),
            height: full_extent(),
            content: None,
            animation: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_animation(mut self, animation: AnimationDescriptor) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Text length for typewriter reveals, in UTF-16 code units so `visibleChars` slices
    /// the same prefix as a browser-side `text.slice(0, n)`.
    pub fn content_len(&self) -> Option<usize> {
        self.content.as_deref().map(|c| c.encode_utf16().count())
    }
}

/// Computed state for one element at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementState {
    pub element_id: String,
    pub state: AnimationState,
}

/// The slide fragment of a project document that the engine consumes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    /// Seconds, usually the narration length.
    pub duration: f64,
    #[serde(default)]
    pub elements: Vec<SlideElement>,
    #[serde(default = "default_true")]
    pub animations_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_plan: Option<AnimationPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<SlideTransition>,
}

impl Slide {
    pub fn new(id: impl Into<String>, duration: f64) -> Self {
        Self {
            id: id.into(),
            duration,
            elements: Vec::new(),
            animations_enabled: true,
            animation_plan: None,
            transition: None,
        }
    }

    pub fn with_element(mut self, element: SlideElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn with_plan(mut self, plan: AnimationPlan) -> Self {
        self.animation_plan = Some(plan);
        self
    }

    pub fn from_json(s: &str) -> MotionResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_pretty(&self) -> MotionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Descriptors currently attached to elements, in element order.
    pub fn descriptors(&self) -> Vec<AnimationDescriptor> {
        self.elements
            .iter()
            .filter_map(|e| e.animation.clone())
            .collect()
    }

    /// Compile the slide's plan and attach the results.
    ///
    /// Every element's previous descriptor is cleared. When several plan entries land on the
    /// same element the first one wins. Returns how many elements received a descriptor.
    #[tracing::instrument(skip(self), fields(slide = %self.id))]
    pub fn apply_plan(&mut self) -> usize {
        let compiled = match &self.animation_plan {
            Some(plan) => compile_plan(plan, &self.elements, self.duration),
            None => Vec::new(),
        };

        for element in &mut self.elements {
            element.animation = None;
        }

        let mut attached = 0;
        for desc in compiled {
            let Some(element) = self.elements.iter_mut().find(|e| e.id == desc.element_id) else {
                continue;
            };
            if element.animation.is_some() {
                tracing::debug!(element = %element.id, "duplicate plan entry ignored");
                continue;
            }
            element.animation = Some(desc);
            attached += 1;
        }
        attached
    }

    /// Replace every element's descriptor with `preset`'s, in element order.
    #[tracing::instrument(skip(self), fields(slide = %self.id))]
    pub fn apply_preset(&mut self, preset: Preset) {
        let ids: Vec<&str> = self.elements.iter().map(|e| e.id.as_str()).collect();
        let generated = generate_preset(preset, &ids, self.duration);

        for element in &mut self.elements {
            element.animation = None;
        }
        for desc in generated {
            if let Some(element) = self.elements.iter_mut().find(|e| e.id == desc.element_id) {
                element.animation = Some(desc);
            }
        }
    }

    /// State of every element at `time` seconds into the slide.
    pub fn element_states(&self, time: f64) -> Vec<ElementState> {
        self.elements
            .iter()
            .map(|e| {
                let state = if self.animations_enabled {
                    compute_state(e.animation.as_ref(), time, e.content_len())
                } else {
                    AnimationState::IDENTITY
                };
                ElementState {
                    element_id: e.id.clone(),
                    state,
                }
            })
            .collect()
    }

    /// True once every attached animation has finished, so dependent narration may start.
    pub fn narration_ready(&self, time: f64) -> bool {
        if !self.animations_enabled {
            return true;
        }
        all_complete(&self.descriptors(), time)
    }

    /// Strict checks for tooling. Rendering never requires a slide to pass these.
    pub fn validate(&self) -> MotionResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(MotionError::validation(format!(
                "slide '{}' duration must be finite and >= 0",
                self.id
            )));
        }

        let mut seen = std::collections::BTreeSet::new();
        for element in &self.elements {
            if !seen.insert(element.id.as_str()) {
                return Err(MotionError::validation(format!(
                    "slide '{}' has duplicate element id '{}'",
                    self.id, element.id
                )));
            }
            let Some(desc) = &element.animation else {
                continue;
            };
            if desc.element_id != element.id {
                return Err(MotionError::validation(format!(
                    "animation '{}' targets '{}' but is attached to '{}'",
                    desc.id, desc.element_id, element.id
                )));
            }
            if !desc.start_time.is_finite() || desc.start_time < 0.0 {
                return Err(MotionError::validation(format!(
                    "animation '{}' startTime must be finite and >= 0",
                    desc.id
                )));
            }
            if !desc.duration.is_finite() || desc.duration <= 0.0 {
                return Err(MotionError::validation(format!(
                    "animation '{}' duration must be finite and > 0",
                    desc.id
                )));
            }
        }

        if let Some(plan) = &self.animation_plan {
            plan.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slide/model.rs"]
mod tests;
