use crate::{
    animation::descriptor::AnimationDescriptor,
    plan::model::{AnimationPlan, PlanEntry},
    slide::model::{ElementKind, SlideElement},
};

/// Percent field normalized to `[0, 1]`; non-finite values count as 0.
fn fraction(percent: f64) -> f64 {
    if percent.is_finite() {
        percent.clamp(0.0, 100.0) / 100.0
    } else {
        0.0
    }
}

fn descriptor_for(
    entry: &PlanEntry,
    element: &SlideElement,
    slide_duration: f64,
) -> AnimationDescriptor {
    AnimationDescriptor::new(
        element.id.as_str(),
        entry.animation,
        fraction(entry.relative_start_percent) * slide_duration,
        fraction(entry.duration_percent) * slide_duration,
    )
    .with_easing(entry.easing)
}

/// Resolve a percentage plan against concrete elements and a slide length in seconds.
///
/// Each entry targets the first element whose role matches; entries with no match are
/// skipped and elements no entry targets get no descriptor. Output follows entry order.
#[tracing::instrument(skip(plan, elements), fields(entries = plan.element_animations.len()))]
pub fn compile_plan(
    plan: &AnimationPlan,
    elements: &[SlideElement],
    slide_duration: f64,
) -> Vec<AnimationDescriptor> {
    let slide_duration = if slide_duration.is_finite() {
        slide_duration.max(0.0)
    } else {
        0.0
    };

    let mut out = Vec::with_capacity(plan.element_animations.len());
    for entry in &plan.element_animations {
        let target = match entry.element_type {
            ElementKind::Unknown => None,
            kind => elements.iter().find(|e| e.kind == kind),
        };
        match target {
            Some(element) => out.push(descriptor_for(entry, element, slide_duration)),
            None => tracing::debug!(element_type = ?entry.element_type, "no element for plan entry"),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/plan/compile.rs"]
mod tests;
