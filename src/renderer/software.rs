//! ---------------------------------------------------------------------------
//! Classic software (CPU) column renderer
//!
//! * Fills a `Vec<u32>` frame-buffer in **0x00RRGGBB** format.
//! * Every ray owns its columns outright, so there is no clipping state
//!   between draw calls: sky/floor are cleared first, walls painted over.
//! ---------------------------------------------------------------------------

use crate::renderer::{FLOOR, HORIZON, Renderer, Rgba, SKY, WallColumn};

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

/// Wolfenstein-style column renderer.
#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }

        let split = self.horizon_row().min(h) * w;
        self.scratch[..split].fill(SKY.to_u32());
        self.scratch[split..].fill(FLOOR.to_u32());
    }

    fn draw_column(&mut self, col: &WallColumn) {
        if self.height == 0 || col.x_start >= self.width {
            return;
        }
        let mid = self.horizon_row() as f32;
        let y0 = (mid - col.half_height).max(0.0) as usize;
        let y1 = ((mid + col.half_height) as usize).min(self.height - 1);
        if y0 > y1 {
            return;
        }

        let x_end = col.x_end.min(self.width - 1);
        for y in y0..=y1 {
            let row = y * self.width;
            self.scratch[row + col.x_start..=row + x_end].fill(col.color);
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

impl Software {
    #[inline]
    fn horizon_row(&self) -> usize {
        (self.height as f32 * HORIZON) as usize
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
