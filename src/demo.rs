//! Canned worlds and input scripts for the headless demo driver and tests.

use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_4, PI};

use crate::camera::{Camera, Projection};
use crate::config::Config;
use crate::driver::World;
use crate::follower::Follower;
use crate::input::FrameInput;
use crate::math::Plane;
use crate::scene::Scene;

pub const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

/// Point-and-click scene: a marble that jumps to each selected target, and a
/// midpoint marker sitting halfway between the marble and the crosshair.
pub fn demo_world(config: Config, orthographic: bool) -> World {
    let projection = if orthographic {
        Projection::Orthographic { size: 8.0 }
    } else {
        Projection::Perspective { fov_y_deg: 60.0 }
    };
    let camera = Camera::new(
        Vec3::new(0.0, 10.0, 10.0),
        PI,
        -FRAC_PI_4,
        VIEWPORT,
        projection,
    );

    let mut scene = Scene::new();
    let ground = scene.spawn("ground", Vec3::new(0.0, -1.0, 0.0));
    let marble = scene.spawn("marble", Vec3::new(0.0, 0.0, 0.0));
    let midpoint = scene.spawn("midpoint", Vec3::ZERO);

    // Lift the picking plane above the ground entity so markers sit on the
    // floor instead of inside it.
    let ground_point = scene.position(ground).unwrap_or(Vec3::ZERO) + Vec3::Y * config.ground_lift;
    let plane = Plane {
        normal: Vec3::Y,
        point: ground_point,
    };

    let mut world = World::new(scene, camera, plane, config);
    world.add_follower(Follower::single(marble, world.target_marker()));
    world.add_follower(Follower::between(
        midpoint,
        marble,
        world.crosshair(),
        50.0,
    ));
    world
}

/// Scripted input sequence for a named scenario, or None if unknown.
pub fn scripted_input(scenario: &str, frames: usize) -> Option<Vec<FrameInput>> {
    match scenario {
        "sweep" => Some(sweep(frames)),
        "hold" => Some(hold(frames)),
        "zoom" => Some(zoom(frames)),
        _ => None,
    }
}

/// Pointer sweeps left to right across the screen, clicking once mid-sweep.
fn sweep(frames: usize) -> Vec<FrameInput> {
    (0..frames)
        .map(|i| {
            let t = i as f32 / frames.max(1) as f32;
            let input = FrameInput::pointer_at(t * VIEWPORT.x, VIEWPORT.y * 0.5);
            if i == frames / 2 {
                input.with_select()
            } else {
                input
            }
        })
        .collect()
}

/// Button goes down on frame 2 and stays held; exactly one selection should
/// come out the other end.
fn hold(frames: usize) -> Vec<FrameInput> {
    (0..frames)
        .map(|i| {
            let input = FrameInput::pointer_at(VIEWPORT.x * 0.5, VIEWPORT.y * 0.5);
            if i >= 2 {
                input.with_select()
            } else {
                input
            }
        })
        .collect()
}

/// Alternating scroll bursts, enough to run the zoom into both clamps.
fn zoom(frames: usize) -> Vec<FrameInput> {
    (0..frames)
        .map(|i| {
            let scroll = if i < frames / 2 { 120.0 } else { -120.0 };
            FrameInput::pointer_at(VIEWPORT.x * 0.5, VIEWPORT.y * 0.5).with_scroll(scroll)
        })
        .collect()
}
