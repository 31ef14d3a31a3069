pub mod geometry;
mod level;
mod vector;

pub use geometry::{Rgb, Triangle, Wall, cross, segments_intersect};
pub use level::Level;
pub use vector::{Length, Vector};
