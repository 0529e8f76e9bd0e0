use rayon::prelude::*;

use crate::{
    foundation::{
        core::{FrameIndex, Fps},
        error::{MotionError, MotionResult},
    },
    slide::model::{ElementState, Slide},
};

/// Options for batch sampling a slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilmstripOpts {
    pub fps: Fps,
    /// Seconds to cover; `None` uses the slide's own duration.
    pub duration_secs: Option<f64>,
}

impl Default for FilmstripOpts {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            duration_secs: None,
        }
    }
}

/// Element states for one sampled frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmstripFrame {
    pub frame: FrameIndex,
    /// Slide-relative seconds.
    pub time: f64,
    pub elements: Vec<ElementState>,
}

/// Every frame of a slide, precomputed.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filmstrip {
    pub slide_id: String,
    pub fps: Fps,
    pub frames: Vec<FilmstripFrame>,
}

/// Upper bound on frames per filmstrip (about 39 hours at 30 fps).
pub const MAX_FILMSTRIP_FRAMES: usize = 1 << 22;

fn frame_count(slide: &Slide, opts: &FilmstripOpts) -> MotionResult<usize> {
    let secs = opts.duration_secs.unwrap_or(slide.duration);
    if !secs.is_finite() || secs < 0.0 {
        return Err(MotionError::validation(format!(
            "filmstrip duration must be finite and >= 0 (got {secs})"
        )));
    }
    let fps = Fps::new(opts.fps.num, opts.fps.den)?;
    let too_long = || {
        MotionError::validation(format!(
            "filmstrip of {secs}s at {} fps exceeds {MAX_FILMSTRIP_FRAMES} frames",
            fps.as_f64()
        ))
    };
    // Checked in f64 first; the integer cast saturates.
    if (secs * fps.as_f64()).ceil() > MAX_FILMSTRIP_FRAMES as f64 {
        return Err(too_long());
    }
    usize::try_from(fps.secs_to_frames_ceil(secs)).map_err(|_| too_long())
}

fn sample(slide: &Slide, fps: Fps, frame: FrameIndex) -> FilmstripFrame {
    let time = fps.frame_to_secs(frame);
    FilmstripFrame {
        frame,
        time,
        elements: slide.element_states(time),
    }
}

/// Sample every frame of `slide` on the calling thread.
#[tracing::instrument(skip(slide), fields(slide = %slide.id))]
pub fn render_filmstrip(slide: &Slide, opts: &FilmstripOpts) -> MotionResult<Filmstrip> {
    let n = frame_count(slide, opts)?;
    let frames = (0..n)
        .map(|f| sample(slide, opts.fps, FrameIndex(f as u64)))
        .collect();
    Ok(Filmstrip {
        slide_id: slide.id.clone(),
        fps: opts.fps,
        frames,
    })
}

/// Same output as [`render_filmstrip`], with frames sampled across the rayon pool.
#[tracing::instrument(skip(slide), fields(slide = %slide.id))]
pub fn render_filmstrip_parallel(slide: &Slide, opts: &FilmstripOpts) -> MotionResult<Filmstrip> {
    let n = frame_count(slide, opts)?;
    let frames = (0..n)
        .into_par_iter()
        .map(|f| sample(slide, opts.fps, FrameIndex(f as u64)))
        .collect();
    Ok(Filmstrip {
        slide_id: slide.id.clone(),
        fps: opts.fps,
        frames,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/filmstrip.rs"]
mod tests;
