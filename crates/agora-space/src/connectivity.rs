//! Neighbourhood shapes for grid queries.

/// Which offsets around a centre cell count as neighbours.
///
/// # Examples
///
/// ```
/// use agora_space::{Connectivity, Grid};
///
/// let grid = Grid::new(5, 5, false).unwrap();
/// let eight = grid.get_neighborhood((2, 2), Connectivity::Eight, false, 1).unwrap();
/// let four = grid.get_neighborhood((2, 2), Connectivity::Four, false, 1).unwrap();
/// assert_eq!(eight.len(), 8);
/// assert_eq!(four.len(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Offsets within Manhattan distance `radius`: a diamond, no diagonals
    /// at radius 1.
    Four,
    /// Every offset with `|dx|, |dy| <= radius`: a square, diagonals
    /// included.
    Eight,
}

impl Connectivity {
    /// Whether the offset `(dx, dy)` lies inside this shape at `radius`.
    pub fn admits(self, dx: i64, dy: i64, radius: u32) -> bool {
        let (ax, ay) = (dx.unsigned_abs(), dy.unsigned_abs());
        let r = u64::from(radius);
        match self {
            Self::Eight => ax <= r && ay <= r,
            Self::Four => ax + ay <= r,
        }
    }
}
