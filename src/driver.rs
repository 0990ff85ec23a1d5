use glam::Vec3;

use crate::camera::Camera;
use crate::config::Config;
use crate::follower::Follower;
use crate::input::{EdgeTrigger, FrameInput};
use crate::math::Plane;
use crate::picker::{PointerPicker, SelectionEvent};
use crate::scene::{EntityId, Scene};

/// One applied update from a tick. The tick applies these to the scene
/// itself (followers must see the current frame's crosshair); the returned
/// list is a record for the outer driver to drain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Move { entity: EntityId, position: Vec3 },
    Show { entity: EntityId },
    Selected { position: Vec3 },
}

/// The whole frame-driven core: scene, camera, picker and followers, stepped
/// once per loop iteration by an external driver. Single threaded; nothing
/// here suspends or runs concurrently.
pub struct World {
    scene: Scene,
    camera: Camera,
    picker: PointerPicker,
    config: Config,
    followers: Vec<Follower>,
    crosshair: EntityId,
    target_marker: EntityId,
    select: EdgeTrigger,
}

impl World {
    pub fn new(
        mut scene: Scene,
        camera: Camera,
        ground: Plane,
        config: Config,
    ) -> Self {
        let crosshair = scene.spawn("crosshair", ground.point);
        // Hidden until the first selection commits a position for it.
        let target_marker = scene.spawn_hidden("target", ground.point);

        Self {
            scene,
            camera,
            picker: PointerPicker::new(ground),
            config,
            followers: Vec::new(),
            crosshair,
            target_marker,
            select: EdgeTrigger::new(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn picker(&self) -> &PointerPicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut PointerPicker {
        &mut self.picker
    }

    pub fn crosshair(&self) -> EntityId {
        self.crosshair
    }

    pub fn target_marker(&self) -> EntityId {
        self.target_marker
    }

    pub fn add_follower(&mut self, follower: Follower) {
        self.followers.push(follower);
    }

    /// Advance one frame. Order matters: the pick is recomputed before any
    /// follower reads, since followers may be bound to the crosshair or the
    /// target marker.
    pub fn tick(&mut self, input: &FrameInput) -> Vec<Command> {
        let mut commands = Vec::new();

        // 1. Reproject the pointer and move the crosshair. On a miss the
        //    crosshair keeps its previous position.
        let ray = self.camera.screen_to_world_ray(input.pointer);
        if let Ok(point) = self.picker.update_pick(&ray) {
            self.scene.set_position(self.crosshair, point);
            commands.push(Command::Move {
                entity: self.crosshair,
                position: point,
            });
        }

        // 2. Commit the pick on a fresh press. Holding across frames fires
        //    exactly once.
        if self.select.update(input.select_held) {
            if let Some(SelectionEvent { position }) = self.picker.select() {
                if !self.scene.is_visible(self.target_marker) {
                    self.scene.set_visible(self.target_marker, true);
                    commands.push(Command::Show {
                        entity: self.target_marker,
                    });
                }
                self.scene.set_position(self.target_marker, position);
                commands.push(Command::Move {
                    entity: self.target_marker,
                    position,
                });
                commands.push(Command::Selected { position });
            }
        }

        // 3. Zoom.
        self.camera.apply_scroll(input.scroll, &self.config);

        // 4. Followers read whatever the frame produced above.
        for follower in &self.followers {
            match follower.compute_position(&self.scene) {
                Ok(position) => {
                    self.scene.set_position(follower.entity, position);
                    commands.push(Command::Move {
                        entity: follower.entity,
                        position,
                    });
                }
                Err(err) => {
                    // Recoverable: leave the follower where it is.
                    log::debug!(
                        "follower {:?} skipped: {}",
                        self.scene.name(follower.entity),
                        err
                    );
                }
            }
        }

        commands
    }
}
