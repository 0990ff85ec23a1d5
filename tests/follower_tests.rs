use glam::Vec3;
use ground_picker::{blend_factor, Follower, Scene};

#[test]
fn test_lerp_lies_on_segment() {
    let mut scene = Scene::new();
    let a_pos = Vec3::new(-3.0, 1.0, 7.0);
    let b_pos = Vec3::new(5.0, -2.0, 1.0);
    let a = scene.spawn("a", a_pos);
    let b = scene.spawn("b", b_pos);
    let follower_entity = scene.spawn("follower", Vec3::ZERO);

    for percentage in [0.0, 10.0, 25.0, 50.0, 75.0, 90.0, 100.0] {
        let follower = Follower::between(follower_entity, a, b, percentage);
        let pos = follower.compute_position(&scene).unwrap();

        let f = blend_factor(percentage);
        let expected = a_pos + (b_pos - a_pos) * f;
        assert!(
            (pos - expected).length() < 1e-5,
            "point at {}% should sit at fractional distance {} along AB, got {:?}",
            percentage,
            f,
            pos
        );
    }
}

#[test]
fn test_lerp_endpoints_are_exact() {
    let mut scene = Scene::new();
    let a_pos = Vec3::new(0.1, 0.2, 0.3);
    let b_pos = Vec3::new(9.9, 8.8, 7.7);
    let a = scene.spawn("a", a_pos);
    let b = scene.spawn("b", b_pos);
    let follower_entity = scene.spawn("follower", Vec3::ZERO);

    let at_a = Follower::between(follower_entity, a, b, 0.0);
    let at_b = Follower::between(follower_entity, a, b, 100.0);

    assert_eq!(at_a.compute_position(&scene), Ok(a_pos), "f=0 must be exactly A");
    assert_eq!(at_b.compute_position(&scene), Ok(b_pos), "f=1 must be exactly B");
}

#[test]
fn test_single_tracks_moving_reference_without_lag() {
    let mut scene = Scene::new();
    let marble = scene.spawn("marble", Vec3::ZERO);
    let shadow = scene.spawn("shadow", Vec3::new(100.0, 100.0, 100.0));
    let follower = Follower::single(shadow, marble);

    for step in 0..10 {
        let reference = Vec3::new(step as f32, (step * 2) as f32, -(step as f32));
        scene.set_position(marble, reference);
        assert_eq!(
            follower.compute_position(&scene),
            Ok(reference),
            "single-target follower must return the reference exactly each frame"
        );
    }
}

#[test]
fn test_blend_factor_clamps_out_of_range_percentages() {
    assert_eq!(blend_factor(-10.0), 0.0);
    assert_eq!(blend_factor(150.0), 1.0);
    for p in [0.0, 37.5, 100.0] {
        let f = blend_factor(p);
        assert!((0.0..=1.0).contains(&f));
    }
}
