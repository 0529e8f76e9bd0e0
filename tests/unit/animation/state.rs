use super::*;
use kurbo::Point;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn identity_is_default_and_untransformed() {
    let s = AnimationState::default();
    assert_eq!(s, AnimationState::IDENTITY);
    assert!(s.is_untransformed());
    assert_eq!(s.opacity, 1.0);
    assert!(s.visible_chars.is_none());
    assert!(s.draw_progress.is_none());
}

#[test]
fn css_transform_orders_terms() {
    assert_eq!(AnimationState::IDENTITY.css_transform(), "none");

    let s = AnimationState::IDENTITY
        .with_translate(20.0, -5.5)
        .with_scale(1.2)
        .with_rotation(3.0);
    assert_eq!(
        s.css_transform(),
        "translateX(20%) translateY(-5.5%) scale(1.2) rotate(3deg)"
    );

    let s = AnimationState::IDENTITY.with_scale(0.5);
    assert_eq!(s.css_transform(), "scale(0.5)");
}

#[test]
fn css_styles_disable_transitions() {
    let styles = AnimationState::IDENTITY.with_opacity(0.25).css_styles();
    assert_eq!(styles["opacity"], "0.25");
    assert_eq!(styles["transform"], "none");
    assert_eq!(styles["transition"], "none");
}

#[test]
fn affine_identity_maps_points_to_themselves() {
    let a = AnimationState::IDENTITY.to_affine(200.0, 100.0);
    let p = Point::new(13.0, 77.0);
    assert!(close(a * p, p));
}

#[test]
fn affine_translates_by_box_percent_and_scales_about_center() {
    let s = AnimationState::IDENTITY.with_translate(50.0, -10.0);
    let a = s.to_affine(200.0, 100.0);
    assert!(close(a * Point::new(0.0, 0.0), Point::new(100.0, -10.0)));

    let s = AnimationState::IDENTITY.with_scale(0.5);
    let a = s.to_affine(200.0, 100.0);
    assert!(close(a * Point::new(100.0, 50.0), Point::new(100.0, 50.0)));
    assert!(close(a * Point::new(0.0, 0.0), Point::new(50.0, 25.0)));
}

#[test]
fn serializes_camel_case_and_skips_unset_fields() {
    let json = serde_json::to_value(AnimationState::IDENTITY.with_translate(5.0, 0.0)).unwrap();
    assert_eq!(json["translateX"], 5.0);
    assert!(json.get("visibleChars").is_none());
    assert!(json.get("drawProgress").is_none());
}
