use glam::Vec3;

use super::ray::Ray;

const EPSILON: f32 = 1e-6;

/// Infinite plane defined by a unit normal and a point it passes through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub point: Vec3,
}

impl Plane {
    /// Build a plane from any non-zero normal and a point on it.
    /// Returns None for a zero (or non-finite) normal.
    pub fn new(normal: Vec3, point: Vec3) -> Option<Self> {
        let normal = normal.try_normalize()?;
        Some(Self { normal, point })
    }

    /// Distance along the ray at which it crosses this plane.
    ///
    /// Returns None when the ray is parallel to the plane or the
    /// intersection lies behind the ray origin.
    pub fn raycast(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < EPSILON {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if t < 0.0 {
            return None;
        }

        Some(t)
    }
}
