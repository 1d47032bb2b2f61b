pub mod animator;
pub mod camera;
pub mod layout;
pub mod orbit;
pub mod scene;

pub use animator::{AnimParams, Animator, FrameInput, FrameTransform};
pub use camera::{Camera, Euler, Projected};
pub use layout::{grid_columns, grid_rows, Bounds, Breakpoint};
pub use orbit::{ItemTransform, OrbitLayout};
pub use scene::{generate, SceneEdge, SceneNode, SceneParams, SceneTopology};

