mod blend;
mod plane;
mod ray;

pub use blend::blend_factor;
pub use plane::Plane;
pub use ray::Ray;
