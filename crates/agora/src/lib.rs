//! Agora: grid spaces and activation schedulers for agent-based simulation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Agora sub-crates. For most users, adding `agora` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use agora::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! struct Walker {
//!     id: AgentId,
//!     pos: Option<Coord>,
//! }
//!
//! impl Agent for Walker {
//!     fn unique_id(&self) -> AgentId { self.id }
//!     fn pos(&self) -> Option<Coord> { self.pos }
//!     fn set_pos(&mut self, pos: Option<Coord>) { self.pos = pos; }
//! }
//!
//! struct World {
//!     grid: SingleGrid,
//!     schedule: RandomActivation,
//!     rng: ChaCha8Rng,
//!     walkers: Vec<Walker>,
//! }
//!
//! impl Model for World {
//!     type Schedule = RandomActivation;
//!     type Random = ChaCha8Rng;
//!     type Error = GridError;
//!     fn schedule(&self) -> &RandomActivation { &self.schedule }
//!     fn schedule_mut(&mut self) -> &mut RandomActivation { &mut self.schedule }
//!     fn rng(&mut self) -> &mut ChaCha8Rng { &mut self.rng }
//!     fn activate(&mut self, agent: AgentId) -> Result<(), GridError> {
//!         let walker = &mut self.walkers[agent.0 as usize];
//!         self.grid.move_to_empty(walker, &mut self.rng)?;
//!         Ok(())
//!     }
//! }
//!
//! let mut world = World {
//!     grid: SingleGrid::new(8, 8, true).unwrap(),
//!     schedule: RandomActivation::new(),
//!     rng: ChaCha8Rng::seed_from_u64(7),
//!     walkers: (0..4).map(|i| Walker { id: AgentId(i), pos: None }).collect(),
//! };
//! for walker in world.walkers.iter_mut() {
//!     world
//!         .grid
//!         .position_agent(walker, Placement::Random, Placement::Random, &mut world.rng)
//!         .unwrap();
//!     world.schedule.add(walker.id).unwrap();
//! }
//!
//! RandomActivation::step(&mut world).unwrap();
//! assert_eq!(world.schedule.steps(), 1);
//! assert_eq!(world.grid.empty_count(), 60);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `agora-core` | Agent ids, coordinates, the `Agent` trait |
//! | [`space`] | `agora-space` | `Grid`, `SingleGrid`, neighborhoods, grid config |
//! | [`time`] | `agora-time` | `Schedule`, `Model`, and the concrete schedulers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Agent identity and coordinates (`agora-core`).
pub use agora_core as types;

/// Grid spaces (`agora-space`).
///
/// [`space::Grid`] permits overwriting a cell; [`space::SingleGrid`]
/// rejects a second occupant with [`space::GridError::CellOccupied`].
pub use agora_space as space;

/// Activation schedulers (`agora-time`).
///
/// [`time::BaseScheduler`] visits agents in insertion order,
/// [`time::RandomActivation`] reshuffles every tick.
pub use agora_time as time;

/// Common imports for typical Agora usage.
///
/// ```rust
/// use agora::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use agora_core::{Agent, AgentId, Coord};

    // Space
    pub use agora_space::{
        Connectivity, Grid, GridConfig, GridError, Neighborhood, Placement, SingleGrid,
    };

    // Time
    pub use agora_time::{BaseScheduler, Model, RandomActivation, Schedule, ScheduleError};
}
