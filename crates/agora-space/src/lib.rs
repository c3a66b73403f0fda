//! Spatial substrate for Agora simulations.
//!
//! A [`Grid`] is a fixed `width x height` lattice whose cells are either
//! empty or hold one [`AgentId`](agora_core::AgentId). It tracks the set of
//! empty coordinates for O(1) random relocation and memoizes neighborhood
//! queries per instance. [`SingleGrid`] layers strict single occupancy on
//! top.
//!
//! # Edges
//!
//! Grids are either bounded (off-grid coordinates are rejected or, in
//! neighborhood queries, dropped) or toroidal (coordinates wrap modulo each
//! axis).
//!
//! # Neighborhoods
//!
//! [`Connectivity::Eight`] selects the square of offsets within `radius`,
//! [`Connectivity::Four`] the diamond within Manhattan distance `radius`.
//! Results are cached under `(center, connectivity, include_center,
//! radius)`; grid geometry is immutable, so cached entries never go stale.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod connectivity;
pub mod error;
pub(crate) mod geometry;
pub mod grid;
pub mod neighborhood;
pub mod single;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::GridConfig;
pub use connectivity::Connectivity;
pub use error::GridError;
pub use geometry::MAX_DIM;
pub use grid::Grid;
pub use neighborhood::{Neighborhood, NeighborhoodKey};
pub use single::{Placement, SingleGrid};
