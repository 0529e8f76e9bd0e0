use crate::animation::descriptor::AnimationDescriptor;

/// Latest end time (`start_time + delay + duration`) across `descriptors`; 0 when empty.
pub fn total_duration(descriptors: &[AnimationDescriptor]) -> f64 {
    descriptors
        .iter()
        .map(AnimationDescriptor::end_time)
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// True once `time` has reached the end of `desc`'s active window.
pub fn is_complete(desc: &AnimationDescriptor, time: f64) -> bool {
    time >= desc.end_time()
}

/// True iff every descriptor is complete at `time` (vacuously true when empty).
pub fn all_complete(descriptors: &[AnimationDescriptor], time: f64) -> bool {
    descriptors.iter().all(|d| is_complete(d, time))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/timeline.rs"]
mod tests;
