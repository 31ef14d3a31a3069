//! Segment-wall raycaster.
//!
//! Each frame the [`engine::Engine`] culls the static wall set against the
//! field-of-view triangle, then casts one ray per screen column and reports
//! the nearest wall's colour, hit point and length factor. Everything that
//! draws or reads input lives outside the engine.

pub mod engine;
pub mod renderer;
pub mod sim;
pub mod wad;
pub mod world;
