pub mod camera;
pub mod cli;
pub mod config;
pub mod demo;
pub mod driver;
pub mod follower;
pub mod input;
pub mod math;
pub mod picker;
pub mod scene;

pub use camera::{Camera, Projection};
pub use config::Config;
pub use driver::{Command, World};
pub use follower::{FollowError, FollowMode, Follower};
pub use input::{EdgeTrigger, FrameInput};
pub use math::{blend_factor, Plane, Ray};
pub use picker::{PickError, PointerPicker, SelectionEvent};
pub use scene::{EntityId, Scene};
