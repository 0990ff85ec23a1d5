use glam::{Vec2, Vec3};

use crate::config::Config;
use crate::math::Ray;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Orthographic projection; `size` is the half-height of the view volume.
    Orthographic { size: f32 },
    /// Perspective projection with a vertical field of view in degrees.
    Perspective { fov_y_deg: f32 },
}

/// Minimal camera model: a world pose, a viewport and a projection. Enough to
/// turn an on-screen point into a world-space ray and to apply scroll zoom.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Viewport size in pixels; screen coordinates have y pointing down.
    pub viewport: Vec2,
    pub projection: Projection,
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32, viewport: Vec2, projection: Projection) -> Self {
        Self {
            position,
            yaw,
            pitch,
            viewport,
            projection,
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    fn aspect(&self) -> f32 {
        self.viewport.x / self.viewport.y.max(1.0)
    }

    /// Ray through the given screen point (pixels, origin top-left), such
    /// that its ground-plane intersection lands under the on-screen point.
    pub fn screen_to_world_ray(&self, screen: Vec2) -> Ray {
        let ndc_x = (2.0 * screen.x / self.viewport.x) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen.y / self.viewport.y);

        match self.projection {
            Projection::Perspective { fov_y_deg } => {
                let half_h = (fov_y_deg.to_radians() * 0.5).tan();
                let half_w = half_h * self.aspect();
                let direction = (self.forward()
                    + self.right() * ndc_x * half_w
                    + self.up() * ndc_y * half_h)
                    .normalize();
                Ray {
                    origin: self.position,
                    direction,
                }
            }
            Projection::Orthographic { size } => {
                let origin = self.position
                    + self.right() * ndc_x * size * self.aspect()
                    + self.up() * ndc_y * size;
                Ray {
                    origin,
                    direction: self.forward(),
                }
            }
        }
    }

    /// Scroll-wheel zoom. The raw device delta is divided by the platform
    /// tick size so one detent is one step; zero steps are a no-op.
    pub fn apply_scroll(&mut self, raw_scroll: f32, config: &Config) {
        let step = raw_scroll / config.scroll_tick;
        if step == 0.0 {
            return;
        }

        match &mut self.projection {
            Projection::Orthographic { size } => {
                *size = (*size - step).clamp(config.ortho_size_min, config.ortho_size_max);
            }
            Projection::Perspective { fov_y_deg } => {
                *fov_y_deg = (*fov_y_deg - step * config.fov_gain)
                    .clamp(config.fov_min_deg, config.fov_max_deg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    fn perspective_cam() -> Camera {
        Camera::new(
            Vec3::new(0.0, 10.0, 10.0),
            std::f32::consts::PI,
            -FRAC_PI_4,
            Vec2::new(800.0, 600.0),
            Projection::Perspective { fov_y_deg: 60.0 },
        )
    }

    #[test]
    fn test_center_screen_ray_is_forward() {
        let cam = perspective_cam();
        let ray = cam.screen_to_world_ray(Vec2::new(400.0, 300.0));
        assert_eq!(ray.origin, cam.position);
        assert!((ray.direction - cam.forward()).length() < 1e-5);
    }

    #[test]
    fn test_right_half_of_screen_bends_ray_right() {
        let cam = perspective_cam();
        let ray = cam.screen_to_world_ray(Vec2::new(700.0, 300.0));
        assert!(ray.direction.dot(cam.right()) > 0.0);
    }

    #[test]
    fn test_ortho_ray_offsets_origin_not_direction() {
        let cam = Camera::new(
            Vec3::new(0.0, 10.0, 10.0),
            std::f32::consts::PI,
            -FRAC_PI_4,
            Vec2::new(800.0, 600.0),
            Projection::Orthographic { size: 5.0 },
        );
        let center = cam.screen_to_world_ray(Vec2::new(400.0, 300.0));
        let edge = cam.screen_to_world_ray(Vec2::new(800.0, 300.0));

        assert!((center.direction - edge.direction).length() < 1e-6);
        // Full half-width to the right: size * aspect.
        let offset = edge.origin - center.origin;
        assert!((offset - cam.right() * 5.0 * (800.0 / 600.0)).length() < 1e-4);
    }

    #[test]
    fn test_ortho_zoom_clamps() {
        let config = Config::default();
        let mut cam = Camera::new(
            Vec3::ZERO,
            0.0,
            0.0,
            Vec2::new(800.0, 600.0),
            Projection::Orthographic { size: 5.0 },
        );

        // Scroll in far past the limit.
        for _ in 0..100 {
            cam.apply_scroll(120.0, &config);
        }
        assert_eq!(cam.projection, Projection::Orthographic { size: 1.0 });

        // And back out again.
        for _ in 0..100 {
            cam.apply_scroll(-120.0, &config);
        }
        assert_eq!(cam.projection, Projection::Orthographic { size: 12.0 });
    }

    #[test]
    fn test_perspective_zoom_clamps() {
        let config = Config::default();
        let mut cam = perspective_cam();

        for _ in 0..100 {
            cam.apply_scroll(120.0, &config);
        }
        assert_eq!(cam.projection, Projection::Perspective { fov_y_deg: 20.0 });

        for _ in 0..100 {
            cam.apply_scroll(-120.0, &config);
        }
        assert_eq!(cam.projection, Projection::Perspective { fov_y_deg: 100.0 });
    }

    #[test]
    fn test_zero_scroll_is_noop() {
        let config = Config::default();
        let mut cam = perspective_cam();
        let before = cam.projection;
        cam.apply_scroll(0.0, &config);
        assert_eq!(cam.projection, before);
    }
}
