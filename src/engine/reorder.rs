//! Move-to-front ordering for the candidate walls.
//!
//! Neighbouring rays usually hit the same wall, so the last winner is
//! tested first on the next ray. This only changes the order of the
//! candidates, never which wall is nearest.

/// Rotate `items` left by `idx`, bringing `items[idx]` to the front.
///
/// The rest of the sequence keeps its cyclic order. Out-of-range indices
/// are ignored.
#[inline]
pub fn move_to_front<T>(items: &mut [T], idx: usize) {
    if idx > 0 && idx < items.len() {
        items.rotate_left(idx);
    }
}
