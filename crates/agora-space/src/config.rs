//! Grid configuration and validation.
//!
//! [`GridConfig`] is the builder-input for a [`Grid`] or [`SingleGrid`].
//! Geometry is fixed for the lifetime of the constructed grid; the
//! neighbourhood cache relies on that.

use crate::error::GridError;
use crate::geometry;
use crate::grid::Grid;
use crate::single::SingleGrid;

/// Geometry of a two-dimensional grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of columns (`x` range). Default: 10.
    pub width: u32,
    /// Number of rows (`y` range). Default: 10.
    pub height: u32,
    /// Whether opposite edges are connected. Default: `false`.
    pub torus: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            torus: false,
        }
    }
}

impl GridConfig {
    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// [`GridError::EmptyGrid`] if either dimension is zero, or
    /// [`GridError::DimensionTooLarge`] if either exceeds `i32::MAX`.
    pub fn validate(&self) -> Result<(), GridError> {
        geometry::check_dims(self.width, self.height)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Build a base (overwriting) grid.
    pub fn build_grid(&self) -> Result<Grid, GridError> {
        Grid::from_config(self)
    }

    /// Build a single-occupancy grid.
    pub fn build_single_grid(&self) -> Result<SingleGrid, GridError> {
        SingleGrid::from_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = GridConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.cell_count(), 100);
    }

    #[test]
    fn zero_width_is_rejected() {
        let cfg = GridConfig {
            width: 0,
            ..GridConfig::default()
        };
        assert_eq!(cfg.validate(), Err(GridError::EmptyGrid));
        assert!(cfg.build_grid().is_err());
    }

    #[test]
    fn builds_carry_geometry() {
        let cfg = GridConfig {
            width: 4,
            height: 3,
            torus: true,
        };
        let grid = cfg.build_grid().unwrap();
        assert_eq!((grid.width(), grid.height(), grid.is_torus()), (4, 3, true));
        let single = cfg.build_single_grid().unwrap();
        assert_eq!(single.cell_count(), 12);
    }
}
