//! Shared coordinate arithmetic for the grid backends.

use crate::error::GridError;
use agora_core::Coord;

/// Largest accepted width or height: coordinates are `i32`.
pub const MAX_DIM: u32 = i32::MAX as u32;

/// Validate grid dimensions.
pub(crate) fn check_dims(width: u32, height: u32) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyGrid);
    }
    if width > MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "width",
            value: width,
            max: MAX_DIM,
        });
    }
    if height > MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "height",
            value: height,
            max: MAX_DIM,
        });
    }
    Ok(())
}

/// `true` iff either axis lies outside `[0, len)`.
pub(crate) fn out_of_bounds(pos: Coord, width: u32, height: u32) -> bool {
    let (x, y) = pos;
    x < 0 || x >= width as i32 || y < 0 || y >= height as i32
}

/// Wrap a single axis value into `[0, len)`.
pub(crate) fn wrap_axis(val: i32, len: u32) -> i32 {
    val.rem_euclid(len as i32)
}

/// Resolve `pos` against the grid bounds, wrapping when `torus` is set.
pub(crate) fn resolve(pos: Coord, width: u32, height: u32, torus: bool) -> Result<Coord, GridError> {
    if !out_of_bounds(pos, width, height) {
        return Ok(pos);
    }
    if !torus {
        return Err(GridError::OutOfBounds {
            coord: pos,
            width,
            height,
        });
    }
    Ok((wrap_axis(pos.0, width), wrap_axis(pos.1, height)))
}

/// Flat storage index of an in-bounds coordinate.
///
/// Storage is x-major: all cells of column `x` are contiguous, ascending `y`.
pub(crate) fn index_of(pos: Coord, height: u32) -> usize {
    (pos.0 as usize) * (height as usize) + (pos.1 as usize)
}

/// Inverse of [`index_of`].
pub(crate) fn coord_of(index: usize, height: u32) -> Coord {
    let h = height as usize;
    ((index / h) as i32, (index % h) as i32)
}
