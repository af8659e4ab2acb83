pub mod geometry;
pub mod manifest;
pub mod props;

pub use geometry::{Aabb, Ray};
pub use props::{Collider, Label, nearest_hit, spawn_prop};
