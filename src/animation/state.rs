use std::collections::BTreeMap;

use kurbo::{Affine, Vec2};

/// Renderable visual transform of one element at one instant.
///
/// Computed fresh on every query and never persisted. Translations are percentages of the
/// element's own box; rotation is in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationState {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotation: f64,
    /// Typewriter: number of characters revealed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_chars: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glow_intensity: Option<f64>,
    /// Underline/circle stroke completion in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_progress: Option<f64>,
}

impl AnimationState {
    /// Fully visible, untransformed, no effect fields.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        rotation: 0.0,
        visible_chars: None,
        highlight_opacity: None,
        glow_intensity: None,
        draw_progress: None,
    };

    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    pub fn with_translate(self, translate_x: f64, translate_y: f64) -> Self {
        Self {
            translate_x,
            translate_y,
            ..self
        }
    }

    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub fn with_rotation(self, rotation: f64) -> Self {
        Self { rotation, ..self }
    }

    /// True when the geometric components are all at rest.
    pub fn is_untransformed(&self) -> bool {
        self.translate_x == 0.0 && self.translate_y == 0.0 && self.scale == 1.0 && self.rotation == 0.0
    }

    /// CSS `transform` value: translate, scale and rotate terms for the components that
    /// differ from identity, in that order, or `none`.
    pub fn css_transform(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(4);
        if self.translate_x != 0.0 {
            parts.push(format!("translateX({}%)", self.translate_x));
        }
        if self.translate_y != 0.0 {
            parts.push(format!("translateY({}%)", self.translate_y));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.rotation != 0.0 {
            parts.push(format!("rotate({}deg)", self.rotation));
        }
        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(" ")
        }
    }

    /// Inline style map for an HTML renderer. CSS transitions are disabled since the
    /// engine drives every frame.
    pub fn css_styles(&self) -> BTreeMap<&'static str, String> {
        let mut out = BTreeMap::new();
        out.insert("opacity", self.opacity.to_string());
        out.insert("transform", self.css_transform());
        out.insert("transition", "none".to_owned());
        out
    }

    /// Pixel-space transform for an element box of `box_w` x `box_h`, pivoting on the box
    /// center. Apply to points in box-local coordinates.
    pub fn to_affine(&self, box_w: f64, box_h: f64) -> Affine {
        let center = Vec2::new(box_w * 0.5, box_h * 0.5);
        let offset = Vec2::new(
            self.translate_x / 100.0 * box_w,
            self.translate_y / 100.0 * box_h,
        );
        Affine::translate(offset + center)
            * Affine::rotate(self.rotation.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(-center)
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
