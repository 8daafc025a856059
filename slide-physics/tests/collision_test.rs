use glam::Vec2;
use slide_physics::{
    ContactWindow, CornerTieBreak, GeometryError, Mover, Ray, Rect, SlideSettings, overlaps,
    ray_vs_rect, swept_rect_vs_rect,
};

fn assert_vec2_approx_eq(a: Vec2, b: Vec2, tolerance: f32) {
    assert!(
        (a - b).length_squared() < tolerance * tolerance,
        "Assertion failed: {:?} != {:?} within tolerance {}",
        a,
        b,
        tolerance
    );
}

fn assert_f32_approx_eq(a: f32, b: f32, tolerance: f32) {
    assert!(
        (a - b).abs() < tolerance,
        "Assertion failed: {} != {} within tolerance {}",
        a,
        b,
        tolerance
    );
}

#[test]
fn test_overlap_is_symmetric() {
    let rects = [
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(10.0, 0.0, 10.0, 10.0),
        Rect::new(5.0, 5.0, 2.0, 2.0),
        Rect::new(-3.0, 8.0, 20.0, 1.0),
        Rect::new(9.5, -20.0, 1.0, 100.0),
        Rect::new(100.0, 100.0, 0.0, 0.0),
    ];
    for a in &rects {
        for b in &rects {
            assert_eq!(overlaps(a, b), overlaps(b, a), "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn test_shared_edge_is_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 0.0, 10.0, 10.0);
    let c = Rect::new(0.0, 10.0, 10.0, 10.0);
    assert!(!overlaps(&a, &b));
    assert!(!overlaps(&a, &c));
    assert!(overlaps(&a, &Rect::new(9.9, 9.9, 1.0, 1.0)));
}

#[test]
fn test_rect_helpers() {
    let hitbox = Rect::from_center_size(Vec2::ZERO, Vec2::new(10.0, 4.0));
    assert_eq!(hitbox, Rect::new(-5.0, -2.0, 10.0, 4.0));
    assert_eq!(hitbox.center(), Vec2::ZERO);
    assert_eq!(hitbox.end(), Vec2::new(5.0, 2.0));

    let moved = hitbox.translate(Vec2::new(-30.0, 20.0));
    assert_eq!(hitbox.union(&moved), Rect::new(-35.0, -2.0, 40.0, 24.0));

    let expanded = Rect::new(20.0, -5.0, 10.0, 20.0).minkowski_expand(Vec2::new(10.0, 10.0));
    assert_eq!(expanded, Rect::new(15.0, -10.0, 20.0, 30.0));
}

#[test]
fn test_checked_constructors() {
    assert_eq!(
        Rect::try_new(0.0, 0.0, -1.0, 2.0),
        Err(GeometryError::NegativeExtent {
            width: -1.0,
            height: 2.0
        })
    );
    assert!(matches!(
        Rect::try_new(f32::NAN, 0.0, 1.0, 1.0),
        Err(GeometryError::NonFinite { .. })
    ));
    assert_eq!(
        Rect::try_new(1.0, 2.0, 3.0, 4.0),
        Ok(Rect::new(1.0, 2.0, 3.0, 4.0))
    );

    assert!(matches!(
        Mover::try_new(Vec2::ZERO, Vec2::new(1.0, f32::INFINITY)),
        Err(GeometryError::NonFinite { .. })
    ));
    let mover = Mover::try_new(Vec2::new(5.0, 5.0), Vec2::new(2.0, 4.0)).expect("valid mover");
    assert_eq!(mover.hitbox(), Rect::new(4.0, 3.0, 2.0, 4.0));
    assert_eq!(mover.hitbox_at(Vec2::ZERO), Rect::new(-1.0, -2.0, 2.0, 4.0));

    let err = ContactWindow::new(1.0, -1.0).unwrap_err();
    assert_eq!(err.to_string(), "invalid contact window [1, -1]");
    assert!(ContactWindow::new(0.0, f32::INFINITY).is_err());
    assert_eq!(
        ContactWindow::new(-1.0, 1.0),
        Ok(ContactWindow::LENIENT)
    );
}

#[test]
fn test_ray_hits_near_face() {
    let target = Rect::new(10.0, 0.0, 10.0, 10.0);
    let ray = Ray::new(Vec2::new(0.0, 5.0), Vec2::new(20.0, 0.0));

    let contact = ray_vs_rect(&ray, &target).expect("ray should hit");
    assert_f32_approx_eq(contact.time, 0.5, 1e-5);
    assert_vec2_approx_eq(contact.point, Vec2::new(10.0, 5.0), 1e-4);
    assert_eq!(contact.normal, Vec2::new(-1.0, 0.0));
}

#[test]
fn test_ray_moving_up_hits_bottom_face() {
    let target = Rect::new(0.0, 0.0, 10.0, 10.0);
    let ray = Ray::new(Vec2::new(5.0, 30.0), Vec2::new(0.0, -20.0));

    let contact = ray_vs_rect(&ray, &target).expect("ray should hit");
    assert_f32_approx_eq(contact.time, 1.0, 1e-5);
    assert_vec2_approx_eq(contact.point, Vec2::new(5.0, 10.0), 1e-4);
    assert_eq!(contact.normal, Vec2::new(0.0, 1.0));
}

#[test]
fn test_ray_misses() {
    let target = Rect::new(10.0, 0.0, 10.0, 10.0);

    let beside = Ray::new(Vec2::new(0.0, 20.0), Vec2::new(20.0, 0.0));
    assert!(ray_vs_rect(&beside, &target).is_none());

    let behind = Ray::new(Vec2::new(30.0, 5.0), Vec2::new(10.0, 0.0));
    assert!(ray_vs_rect(&behind, &target).is_none());

    // 0 * inf on the y slab.
    let along_edge = Ray::new(Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0));
    assert!(ray_vs_rect(&along_edge, &target).is_none());

    let still = Ray::new(Vec2::new(15.0, 5.0), Vec2::ZERO);
    assert!(ray_vs_rect(&still, &target).is_none());
}

#[test]
fn test_corner_hit_tie_break() {
    let target = Rect::new(5.0, 5.0, 10.0, 10.0);
    let ray = Ray::new(Vec2::ZERO, Vec2::new(10.0, 10.0));

    let contact = ray_vs_rect(&ray, &target).expect("ray should hit");
    assert_eq!(contact.normal, Vec2::new(-1.0, 0.0));
    assert_f32_approx_eq(contact.time, 0.5, 1e-5);

    let vertical = SlideSettings::default().with_corner(CornerTieBreak::PreferVertical);
    let contact = vertical.ray_vs_rect(&ray, &target).expect("ray should hit");
    assert_eq!(contact.normal, Vec2::new(0.0, -1.0));
}

#[test]
fn test_sweep_with_zero_velocity_never_hits() {
    let mover = Rect::from_center_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
    let targets = [
        Rect::new(20.0, -5.0, 10.0, 20.0),
        Rect::new(-2.0, -2.0, 4.0, 4.0),
        Rect::new(5.0, -5.0, 10.0, 10.0),
    ];
    for target in &targets {
        assert!(swept_rect_vs_rect(&mover, target, Vec2::ZERO, 1.0).is_none());
    }
}

#[test]
fn test_sweep_into_wall() {
    let mover = Rect::from_center_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
    let wall = Rect::new(20.0, -5.0, 10.0, 20.0);

    let contact =
        swept_rect_vs_rect(&mover, &wall, Vec2::new(100.0, 0.0), 1.0).expect("should hit");
    assert_f32_approx_eq(contact.time, 0.15, 1e-5);
    assert_vec2_approx_eq(contact.point, Vec2::new(15.0, 0.0), 1e-3);
    assert_eq!(contact.normal, Vec2::new(-1.0, 0.0));

    // Too slow to reach the wall within this step.
    assert!(swept_rect_vs_rect(&mover, &wall, Vec2::new(10.0, 0.0), 1.0).is_none());
}

#[test]
fn test_horizontal_sweep_reports_horizontal_normal() {
    let mover = Rect::from_center_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
    let cases = [
        (Vec2::new(100.0, 0.0), Rect::new(20.0, -5.0, 10.0, 10.0)),
        (Vec2::new(300.0, 0.0), Rect::new(20.0, 3.0, 4.0, 4.0)),
        (Vec2::new(-50.0, 0.0), Rect::new(-40.0, -5.0, 10.0, 10.0)),
        (Vec2::new(-250.0, 0.0), Rect::new(-100.0, -8.0, 10.0, 4.0)),
    ];
    for (velocity, target) in cases {
        let contact = swept_rect_vs_rect(&mover, &target, velocity, 1.0)
            .unwrap_or_else(|| panic!("{:?} should hit {:?}", velocity, target));
        assert_eq!(contact.normal.y, 0.0);
        assert_eq!(contact.normal.x, -velocity.x.signum());
    }
}

#[test]
fn test_sweep_from_overlap_stays_in_window() {
    let mover = Rect::from_center_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
    let target = Rect::new(-8.0, -5.0, 10.0, 10.0);
    assert!(overlaps(&mover, &target));

    let contact =
        swept_rect_vs_rect(&mover, &target, Vec2::new(100.0, 0.0), 1.0).expect("lenient hit");
    assert!(contact.time >= -1.0 && contact.time <= 0.0, "{}", contact.time);

    let forward = SlideSettings::default().with_window(ContactWindow::FORWARD);
    assert!(
        forward
            .swept_rect_vs_rect(&mover, &target, Vec2::new(100.0, 0.0), 1.0)
            .is_none()
    );
}

#[test]
fn test_sweep_beyond_step_is_rejected() {
    let mover = Rect::from_center_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
    let wall = Rect::new(200.0, -5.0, 10.0, 20.0);
    assert!(swept_rect_vs_rect(&mover, &wall, Vec2::new(100.0, 0.0), 1.0).is_none());

    let contact = swept_rect_vs_rect(&mover, &wall, Vec2::new(100.0, 0.0), 2.0)
        .expect("longer step reaches the wall");
    assert_f32_approx_eq(contact.time, 0.975, 1e-5);
}
