//! Rendering abstraction layer.
//!
//! *The engine never touches a pixel buffer directly.*
//! Each frame's [`RayHit`]s are turned into [`WallColumn`] draw calls and
//! handed to a type that implements [`Renderer`].
//!
//! * Height: `wall_constant / length_factor`, centred on the horizon.
//! * Shading: `length_factor` is subtracted from every channel.
//!
//! A hit with a zero length factor has no finite height and is skipped.

use crate::{engine::RayHit, world::Rgb};

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Sky above the horizon.
pub const SKY: Rgb = Rgb::new(30, 30, 40);
/// Floor below the horizon.
pub const FLOOR: Rgb = Rgb::new(80, 80, 80);
/// Horizon row as a fraction of the screen height.
pub const HORIZON: f32 = 0.6;

/// Darken `color` linearly with distance, clamping each channel at 0.
#[inline]
pub fn shade(color: Rgb, length_factor: f32) -> Rgb {
    let ch = |c: u8| (c as f32 - length_factor).max(0.0) as u8;
    Rgb::new(ch(color.r), ch(color.g), ch(color.b))
}

/// Half the on-screen height of a wall column.
#[inline]
pub fn column_height(wall_constant: f32, length_factor: f32) -> f32 {
    wall_constant / length_factor
}

/// One solid wall column, `x_start ..= x_end` on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallColumn {
    pub x_start: usize,
    pub x_end: usize,
    pub half_height: f32,
    pub color: Rgba,
}

impl WallColumn {
    /// Draw call for ray `idx` of `rays` on a `width`-pixel screen.
    pub fn from_hit(
        hit: &RayHit,
        wall_constant: f32,
        idx: usize,
        rays: usize,
        width: usize,
    ) -> Option<Self> {
        if !(hit.length_factor > 0.0) {
            return None;
        }
        let x_start = idx * width / rays;
        let x_end = ((idx + 1) * width / rays).max(x_start + 1) - 1;
        Some(Self {
            x_start,
            x_end: x_end.min(width.saturating_sub(1)),
            half_height: column_height(wall_constant, hit.length_factor),
            color: shade(hit.color, hit.length_factor).to_u32(),
        })
    }
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear
    /// it to sky and floor.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Rasterise one wall column into the internal buffer.
    fn draw_column(&mut self, column: &WallColumn);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(
        &mut self,
        width: usize,
        height: usize,
        hits: &[Option<RayHit>],
        wall_constants: &[f32],
        submit: F,
    ) where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        let rays = hits.len();
        for (idx, (hit, &k)) in hits.iter().zip(wall_constants).enumerate() {
            if let Some(col) = hit
                .as_ref()
                .and_then(|h| WallColumn::from_hit(h, k, idx, rays, width))
            {
                self.draw_column(&col);
            }
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod software;

pub use software::Software;

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    fn hit(lf: f32) -> RayHit {
        RayHit {
            color: Rgb::new(255, 100, 10),
            point: vec2(0.0, 0.0),
            length_factor: lf,
        }
    }

    #[test]
    fn shade_subtracts_and_clamps() {
        assert_eq!(shade(Rgb::new(255, 100, 10), 50.0), Rgb::new(205, 50, 0));
        assert_eq!(shade(Rgb::new(255, 255, 0), 0.0), Rgb::new(255, 255, 0));
        assert_eq!(shade(Rgb::new(255, 255, 255), 400.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn closer_walls_are_taller() {
        assert!(column_height(7500.0, 10.0) > column_height(7500.0, 100.0));
        assert!((column_height(7500.0, 100.0) - 75.0).abs() < 1e-4);
    }

    #[test]
    fn columns_tile_the_screen() {
        // 4 rays on 8 px: two pixels each
        let c = WallColumn::from_hit(&hit(100.0), 7500.0, 3, 4, 8).unwrap();
        assert_eq!((c.x_start, c.x_end), (6, 7));
        // 4 rays on 4 px: one each
        let c = WallColumn::from_hit(&hit(100.0), 7500.0, 2, 4, 4).unwrap();
        assert_eq!((c.x_start, c.x_end), (2, 2));
        assert_eq!(c.color, Rgb::new(155, 0, 0).to_u32());
    }

    #[test]
    fn zero_length_factor_is_not_drawn() {
        assert!(WallColumn::from_hit(&hit(0.0), 7500.0, 0, 4, 4).is_none());
    }
}
