use glam::Vec2;

/// Length of a [`Vector`], tagged with where it came from.
///
/// Vectors start out with a fixed default radius and only carry their real
/// length after [`Vector::measure`]. The FOV boundaries and the line of
/// sight are never measured: their `unit_vector` divides by the radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Default(f32),
    Measured(f32),
}

impl Length {
    #[inline]
    pub fn value(self) -> f32 {
        match self {
            Length::Default(l) | Length::Measured(l) => l,
        }
    }

    #[inline]
    pub fn is_measured(self) -> bool {
        matches!(self, Length::Measured(_))
    }
}

/// Directed segment anchored at `start` with a separately rotated end point.
///
/// `delta` and `length` are derived at construction and are *not* refreshed
/// when `start` moves; call [`Vector::recompute`] for that.
#[derive(Clone, Copy, Debug)]
pub struct Vector {
    start: Vec2,
    end: Vec2,
    delta: Vec2,
    length: Length,
    rotated_end: Vec2,
}

impl Vector {
    pub fn new(start: Vec2, end: Vec2, default_len: f32) -> Self {
        let delta = end - start;
        Self {
            start,
            end,
            delta,
            length: Length::Default(default_len),
            rotated_end: end,
        }
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// (dx, dy) as of the last construction / recompute.
    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    #[inline]
    pub fn length(&self) -> Length {
        self.length
    }

    /// End point after the most recent rotation (the plain end before any).
    #[inline]
    pub fn rotated_end(&self) -> Vec2 {
        self.rotated_end
    }

    /// Re-anchor at `start`; `delta` keeps its old value.
    #[inline]
    pub fn set_start(&mut self, start: Vec2) {
        self.start = start;
    }

    /// Re-derive `delta` from the current `start`/`end`. A measured length
    /// is measured again; a default one stays the default.
    pub fn recompute(&mut self) {
        self.delta = self.end - self.start;
        if let Length::Measured(_) = self.length {
            self.measure();
        }
    }

    /// Replace the default length with the Euclidean one.
    pub fn measure(&mut self) -> f32 {
        let len = self.delta.x.hypot(self.delta.y);
        self.length = Length::Measured(len);
        len
    }

    /// Rotate `delta` by `angle` about `start`.
    pub fn rotate(&mut self, angle: f32) -> Vec2 {
        let (s, c) = angle.sin_cos();
        let d = self.delta;
        self.rotated_end = self.start + Vec2::new(c * d.x - s * d.y, s * d.x + c * d.y);
        self.rotated_end
    }

    /// Cheaper [`rotate`](Self::rotate) for vectors built with `dy == 0`.
    pub fn rotate_line_of_sight(&mut self, angle: f32) -> Vec2 {
        debug_assert!(self.delta.y == 0.0, "line of sight must be horizontal");
        let (s, c) = angle.sin_cos();
        self.rotated_end = self.start + Vec2::new(c * self.delta.x, s * self.delta.x);
        self.rotated_end
    }

    /// Direction of the rotated vector scaled by `1 / length`.
    #[inline]
    pub fn unit_vector(&self) -> Vec2 {
        (self.rotated_end - self.start) / self.length.value()
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
