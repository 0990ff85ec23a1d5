use glam::Vec3;
use thiserror::Error;

use crate::math::{Plane, Ray};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickError {
    /// The ray is parallel to the ground plane or meets it behind the
    /// origin. The caller keeps the previous pick result on screen.
    #[error("ray does not meet the ground plane in front of the origin")]
    NoIntersection,
}

/// Fired when a pick is committed as the new target. Carries no state of its
/// own beyond the selected world position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionEvent {
    pub position: Vec3,
}

pub type SelectionListener = Box<dyn FnMut(&SelectionEvent)>;

/// Point-and-click picker against a ground plane.
///
/// Each frame the driver feeds it the pointer ray via [`update_pick`]; a
/// discrete select press commits the current pick as the target via
/// [`select`] and notifies subscribers synchronously, in subscription order.
/// Constructed once and passed by reference to whoever needs the target.
///
/// [`update_pick`]: PointerPicker::update_pick
/// [`select`]: PointerPicker::select
pub struct PointerPicker {
    ground: Plane,
    current_pick: Option<Vec3>,
    target: Option<Vec3>,
    listeners: Vec<SelectionListener>,
}

impl PointerPicker {
    pub fn new(ground: Plane) -> Self {
        Self {
            ground,
            current_pick: None,
            target: None,
            listeners: Vec::new(),
        }
    }

    pub fn ground(&self) -> Plane {
        self.ground
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SelectionEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Recompute the picked point for this frame. On a miss the pick is
    /// cleared, so a select this frame is a no-op.
    pub fn update_pick(&mut self, ray: &Ray) -> Result<Vec3, PickError> {
        match self.ground.raycast(ray) {
            Some(t) => {
                let point = ray.point_at(t);
                self.current_pick = Some(point);
                Ok(point)
            }
            None => {
                self.current_pick = None;
                Err(PickError::NoIntersection)
            }
        }
    }

    /// This frame's pick, if the pointer ray hit the ground.
    pub fn current_pick(&self) -> Option<Vec3> {
        self.current_pick
    }

    /// The committed target. Persists across frames until the next select.
    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    /// Commit the current pick as the target and notify subscribers. Returns
    /// None without firing anything when there is no valid pick this frame.
    pub fn select(&mut self) -> Option<SelectionEvent> {
        let position = self.current_pick?;
        self.target = Some(position);

        let event = SelectionEvent { position };
        for listener in &mut self.listeners {
            listener(&event);
        }
        Some(event)
    }
}
