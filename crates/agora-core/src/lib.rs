//! Core types and traits for the Agora simulation substrate.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! identifiers and the agent capability trait shared by the grid
//! (`agora-space`) and the schedulers (`agora-time`).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod id;

pub use agent::Agent;
pub use id::{AgentId, Coord};
