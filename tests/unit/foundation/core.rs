use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert_eq!(Fps::new(30, 1).unwrap(), Fps::default());
}

#[test]
fn frame_time_conversions() {
    let fps = Fps::new(30000, 1001).unwrap();
    assert!((fps.as_f64() - 29.97).abs() < 1e-3);
    assert!((fps.frame_duration_secs() - 1001.0 / 30000.0).abs() < 1e-12);

    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.frame_to_secs(FrameIndex(0)), 0.0);
    assert_eq!(fps.frame_to_secs(FrameIndex(45)), 1.5);
    assert_eq!(fps.secs_to_frames_ceil(1.0), 30);
    assert_eq!(fps.secs_to_frames_ceil(1.01), 31);
    assert_eq!(fps.secs_to_frames_ceil(-2.0), 0);
}
