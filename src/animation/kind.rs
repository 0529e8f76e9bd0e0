/// Animation variant tag carried by a descriptor's `type` field.
///
/// Unrecognized tags deserialize as [`AnimationKind::Unknown`], which evaluates to the
/// identity state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    /// No animation; always identity.
    None,
    /// Opacity 0 to 1.
    FadeIn,
    /// Opacity 1 to 0.
    FadeOut,
    /// Enters from the right, moving left.
    SlideLeft,
    /// Enters from the left, moving right.
    SlideRight,
    /// Enters from below, moving up.
    SlideUp,
    /// Enters from above, moving down.
    SlideDown,
    /// Grows from nothing.
    ScaleIn,
    /// Shrinks to nothing.
    ScaleOut,
    /// Reveals text one character at a time.
    Typewriter,
    /// Scale overshoot to 1.2 then settle.
    Bounce,
    /// Grows from half size.
    ZoomIn,
    /// Fades a highlight overlay in and keeps it.
    Highlight,
    /// One full glow pulse.
    GlowPulse,
    /// Decaying horizontal oscillation.
    Shake,
    /// Decaying rotational oscillation.
    Wobble,
    /// Scale overshoot to 1.15 then settle.
    Pop,
    /// Draws an underline stroke.
    UnderlineDraw,
    /// Draws a circling stroke.
    CircleDraw,
    /// Any tag this version does not know.
    #[serde(other)]
    Unknown,
}

/// Behavioral category of an [`AnimationKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationFamily {
    /// `none` and unrecognized tags.
    None,
    /// Hidden before, visible after.
    Entrance,
    /// Visible before, hidden after.
    Exit,
    /// Visible throughout; an effect plays over the element.
    Emphasis,
    /// A stroke is drawn over the element.
    Draw,
}

/// Slide direction of the `slide-*` kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDir {
    /// Offset starts at `+distance` on X.
    Left,
    /// Offset starts at `-distance` on X.
    Right,
    /// Offset starts at `+distance` on Y.
    Up,
    /// Offset starts at `-distance` on Y.
    Down,
}

impl SlideDir {
    /// Starting `(translate_x, translate_y)` for a slide of `distance` percent.
    pub fn offset(self, distance: f64) -> (f64, f64) {
        match self {
            Self::Left => (distance, 0.0),
            Self::Right => (-distance, 0.0),
            Self::Up => (0.0, distance),
            Self::Down => (0.0, -distance),
        }
    }
}

impl AnimationKind {
    /// Family used to pick boundary-state conventions.
    pub fn family(self) -> AnimationFamily {
        match self {
            Self::None | Self::Unknown => AnimationFamily::None,
            Self::FadeIn
            | Self::SlideLeft
            | Self::SlideRight
            | Self::SlideUp
            | Self::SlideDown
            | Self::ScaleIn
            | Self::ZoomIn
            | Self::Bounce
            | Self::Pop
            | Self::Typewriter => AnimationFamily::Entrance,
            Self::FadeOut | Self::ScaleOut => AnimationFamily::Exit,
            Self::Highlight | Self::GlowPulse | Self::Shake | Self::Wobble => {
                AnimationFamily::Emphasis
            }
            Self::UnderlineDraw | Self::CircleDraw => AnimationFamily::Draw,
        }
    }

    /// Direction for the `slide-*` kinds.
    pub fn slide_dir(self) -> Option<SlideDir> {
        match self {
            Self::SlideLeft => Some(SlideDir::Left),
            Self::SlideRight => Some(SlideDir::Right),
            Self::SlideUp => Some(SlideDir::Up),
            Self::SlideDown => Some(SlideDir::Down),
            _ => None,
        }
    }

    /// True for `none` and unrecognized tags.
    pub fn is_noop(self) -> bool {
        self.family() == AnimationFamily::None
    }
}

/// Strength tier for the oscillating emphasis kinds (`shake`, `wobble`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Half amplitude.
    Light,
    /// One and a half times amplitude.
    Strong,
    /// Unit amplitude.
    #[default]
    #[serde(other)]
    Medium,
}

impl Intensity {
    /// Amplitude multiplier for this tier.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Light => 0.5,
            Self::Medium => 1.0,
            Self::Strong => 1.5,
        }
    }
}
