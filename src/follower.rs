use glam::Vec3;
use thiserror::Error;

use crate::math::blend_factor;
use crate::scene::{EntityId, Scene};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FollowError {
    /// A bound reference entity is unset or has been despawned. The caller
    /// should leave the follower where it is; the condition clears itself
    /// once the reference exists again.
    #[error("follower reference is unset or despawned")]
    MissingReference,
}

/// How a follower derives its position from its references.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FollowMode {
    /// Track the first reference exactly, with no lag or smoothing.
    Single,
    /// Sit at `percentage`% of the way from the first reference to the
    /// second. The percentage is clamped to [0, 100].
    Dual { percentage: f32 },
}

/// Binds an entity to one or two reference entities it follows. References
/// are held by id, not ownership; the tracked entities live in the scene.
#[derive(Debug, Clone, Copy)]
pub struct Follower {
    pub entity: EntityId,
    pub mode: FollowMode,
    pub target_one: Option<EntityId>,
    pub target_two: Option<EntityId>,
}

impl Follower {
    pub fn single(entity: EntityId, target: EntityId) -> Self {
        Self {
            entity,
            mode: FollowMode::Single,
            target_one: Some(target),
            target_two: None,
        }
    }

    pub fn between(entity: EntityId, a: EntityId, b: EntityId, percentage: f32) -> Self {
        Self {
            entity,
            mode: FollowMode::Dual { percentage },
            target_one: Some(a),
            target_two: Some(b),
        }
    }

    /// Position this follower should occupy, given current reference
    /// positions. Pure; the caller writes the result back to the scene.
    pub fn compute_position(&self, scene: &Scene) -> Result<Vec3, FollowError> {
        let one = self
            .target_one
            .and_then(|id| scene.position(id))
            .ok_or(FollowError::MissingReference)?;

        match self.mode {
            FollowMode::Single => Ok(one),
            FollowMode::Dual { percentage } => {
                let two = self
                    .target_two
                    .and_then(|id| scene.position(id))
                    .ok_or(FollowError::MissingReference)?;
                Ok(one.lerp(two, blend_factor(percentage)))
            }
        }
    }
}
