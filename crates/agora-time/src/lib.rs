//! Agent activation schedulers for Agora simulations.
//!
//! A scheduler decides in what order agents act during each tick. It keeps
//! an insertion-ordered registry of [`AgentId`](agora_core::AgentId)s and two
//! counters (`steps`, `time`). The owning simulation implements [`Model`];
//! [`Schedule::step`] snapshots the registry, orders the snapshot, and calls
//! [`Model::activate`] for each id still registered when its turn comes.
//!
//! # Schedulers
//!
//! - [`BaseScheduler`]: insertion order, every tick.
//! - [`RandomActivation`]: a fresh uniform shuffle every tick.
//!
//! # Example
//!
//! ```
//! use agora_core::AgentId;
//! use agora_time::{BaseScheduler, Model, Schedule};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! struct Counter {
//!     schedule: BaseScheduler,
//!     rng: ChaCha8Rng,
//!     seen: Vec<AgentId>,
//! }
//!
//! impl Model for Counter {
//!     type Schedule = BaseScheduler;
//!     type Random = ChaCha8Rng;
//!     type Error = std::convert::Infallible;
//!     fn schedule(&self) -> &BaseScheduler { &self.schedule }
//!     fn schedule_mut(&mut self) -> &mut BaseScheduler { &mut self.schedule }
//!     fn rng(&mut self) -> &mut ChaCha8Rng { &mut self.rng }
//!     fn activate(&mut self, agent: AgentId) -> Result<(), Self::Error> {
//!         self.seen.push(agent);
//!         Ok(())
//!     }
//! }
//!
//! let mut model = Counter {
//!     schedule: BaseScheduler::new(),
//!     rng: ChaCha8Rng::seed_from_u64(0),
//!     seen: Vec::new(),
//! };
//! model.schedule.add(AgentId(1)).unwrap();
//! model.schedule.add(AgentId(2)).unwrap();
//! BaseScheduler::step(&mut model).unwrap();
//! assert_eq!(model.seen, vec![AgentId(1), AgentId(2)]);
//! assert_eq!(model.schedule.steps(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod random;
pub mod schedule;

pub use error::ScheduleError;
pub use model::Model;
pub use random::RandomActivation;
pub use schedule::{BaseScheduler, Schedule};
