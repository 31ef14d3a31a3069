use glam::Vec2;

/*----------------------------- colour --------------------------------*/

/// 8-bit RGB triple as stored in level files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into the frame-buffer format (0x00RRGGBB).
    #[inline]
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/*------------------------------ walls --------------------------------*/

/// One coloured line segment of the static scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    pub color: Rgb,
    pub a: Vec2,
    pub b: Vec2,
}

impl Wall {
    pub fn new(color: Rgb, a: Vec2, b: Vec2) -> Self {
        Self { color, a, b }
    }
}

/*-------------------------- sign predicates --------------------------*/

/// Twice the signed area of triangle `(a, b, c)`.
///
/// Positive and negative values encode the two windings; zero means the
/// three points are collinear.
#[inline(always)]
pub fn cross(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (a.x - c.x) * (b.y - c.y) - (a.y - c.y) * (b.x - c.x)
}

/// `true` iff segment `a–b` properly crosses segment `c–d`.
///
/// The fourth orientation is derived from the identity
/// `s1 + s2 == s3 + s4` instead of a second full cross product.
/// Touching and collinear configurations (a zero sign) count as misses,
/// and so does any NaN coordinate.
#[inline]
pub fn segments_intersect(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    let s1 = cross(c, d, a);
    let s2 = cross(c, d, b);
    let straddles_cd = s1 * s2 < 0.0;
    if !straddles_cd {
        return false;
    }
    let s3 = cross(c, b, a);
    let s4 = s3 + s2 - s1;
    s3 * s4 <= 0.0
}

/*----------------------------- triangle ------------------------------*/

/// Field-of-view triangle `(apex, left, right)` with positive winding.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        cross(self.a, self.b, self.c) == 0.0
    }

    /// Same-side test against all three directed edges; a point lying on
    /// an edge is inside. A zero-area triangle contains nothing.
    pub fn contains(&self, p: Vec2) -> bool {
        if self.is_degenerate() {
            return false;
        }
        cross(self.a, self.b, p) >= 0.0
            && cross(self.b, self.c, p) >= 0.0
            && cross(self.c, self.a, p) >= 0.0
    }

    /// Does segment `d–e` overlap the triangle?
    ///
    /// Only the two edges leaving the apex are tested for crossings: a wall
    /// crossing the far edge alone must have an endpoint inside.
    pub fn touches_segment(&self, d: Vec2, e: Vec2) -> bool {
        segments_intersect(self.a, self.b, d, e)
            || segments_intersect(self.c, self.a, d, e)
            || self.contains(d)
            || self.contains(e)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
