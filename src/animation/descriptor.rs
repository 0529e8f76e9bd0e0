use crate::animation::{ease::Ease, kind::AnimationKind, kind::Intensity};

/// Slide distance (percent of container) used when a descriptor does not set one.
pub const DEFAULT_DISTANCE: f64 = 100.0;

/// One element's animation on one slide, in absolute slide-relative seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationDescriptor {
    pub id: String,
    pub element_id: String,
    #[serde(rename = "type")]
    pub kind: AnimationKind,
    /// Seconds from slide start.
    pub start_time: f64,
    /// Active window length in seconds.
    pub duration: f64,
    #[serde(default)]
    pub easing: Ease,
    /// Extra seconds after `start_time` before the effect begins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    /// Slide distance in percent of the container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
}

impl AnimationDescriptor {
    /// Descriptor with id `anim_<element_id>`, linear easing and no optional parameters.
    pub fn new(
        element_id: impl Into<String>,
        kind: AnimationKind,
        start_time: f64,
        duration: f64,
    ) -> Self {
        let element_id = element_id.into();
        Self {
            id: descriptor_id(&element_id),
            element_id,
            kind,
            start_time,
            duration,
            easing: Ease::Linear,
            delay: None,
            distance: None,
            highlight_color: None,
            intensity: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn with_highlight_color(mut self, color: impl Into<String>) -> Self {
        self.highlight_color = Some(color.into());
        self
    }

    /// Delay in seconds; missing or non-finite counts as 0.
    pub fn delay_secs(&self) -> f64 {
        match self.delay {
            Some(d) if d.is_finite() => d,
            _ => 0.0,
        }
    }

    /// Slide distance; missing, zero or non-finite counts as [`DEFAULT_DISTANCE`].
    pub fn distance_or_default(&self) -> f64 {
        match self.distance {
            Some(d) if d.is_finite() && d != 0.0 => d,
            _ => DEFAULT_DISTANCE,
        }
    }

    pub fn intensity_multiplier(&self) -> f64 {
        self.intensity.unwrap_or_default().multiplier()
    }

    /// `start_time + delay`: the instant the active window opens.
    pub fn effective_start(&self) -> f64 {
        self.start_time + self.delay_secs()
    }

    /// `start_time + delay + duration`: the instant the post-end state begins.
    pub fn end_time(&self) -> f64 {
        self.effective_start() + self.duration
    }
}

/// Descriptor id convention shared by presets and the plan compiler.
pub fn descriptor_id(element_id: &str) -> String {
    format!("anim_{element_id}")
}
