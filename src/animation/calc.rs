use crate::animation::{
    descriptor::AnimationDescriptor,
    interp::{interpolate, post_end_state, pre_start_state},
    state::AnimationState,
};

/// Where a slide-relative instant falls relative to a descriptor's active window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// Before `start_time + delay`.
    Before,
    /// Inside the window; raw (un-eased) progress in `[0, 1)`.
    Active(f64),
    /// At or after `start_time + delay + duration`.
    After,
}

/// Classify `time` against `desc`.
///
/// A NaN `time` counts as before the start. A duration that is not strictly positive puts
/// the descriptor straight into [`Phase::After`] once the start is reached, so progress is
/// never computed with a zero divisor.
pub fn phase_at(desc: &AnimationDescriptor, time: f64) -> Phase {
    let start = desc.effective_start();
    let elapsed = time - start;
    if elapsed.is_nan() || elapsed < 0.0 {
        return Phase::Before;
    }
    if desc.duration.is_nan() || desc.duration <= 0.0 || elapsed >= desc.duration {
        return Phase::After;
    }
    Phase::Active(elapsed / desc.duration)
}

/// Visual state of an element at `time` seconds into its slide.
///
/// `None` descriptors and `none`/unknown kinds yield [`AnimationState::IDENTITY`].
/// `content_len` is the element's text length in UTF-16 code units, used by `typewriter`.
pub fn compute_state(
    desc: Option<&AnimationDescriptor>,
    time: f64,
    content_len: Option<usize>,
) -> AnimationState {
    let Some(desc) = desc else {
        return AnimationState::IDENTITY;
    };
    if desc.kind.is_noop() {
        return AnimationState::IDENTITY;
    }

    match phase_at(desc, time) {
        Phase::Before => pre_start_state(desc),
        Phase::After => post_end_state(desc),
        Phase::Active(progress) => {
            let eased = desc.easing.apply(progress);
            interpolate(desc, eased, content_len)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/calc.rs"]
mod tests;
