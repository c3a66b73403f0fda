//! The owning-model capability the schedulers drive.

use crate::schedule::Schedule;
use agora_core::AgentId;
use rand::RngCore;

/// An owning simulation model, as seen by a scheduler.
///
/// The model holds the schedule, the random source, and the agents
/// themselves. During [`Schedule::step`] the scheduler hands control back
/// to the model once per activated agent through
/// [`activate`](Model::activate); the model is free to query or mutate its
/// grid and its schedule from there, including adding or removing other
/// agents mid-tick.
pub trait Model {
    /// The scheduler this model drives.
    type Schedule: Schedule;
    /// The model-wide random source used to order activations.
    type Random: RngCore;
    /// Failure type of an agent's behaviour.
    type Error;

    /// Borrow the schedule.
    fn schedule(&self) -> &Self::Schedule;

    /// Mutably borrow the schedule.
    fn schedule_mut(&mut self) -> &mut Self::Schedule;

    /// The model's random source.
    fn rng(&mut self) -> &mut Self::Random;

    /// Run one agent's behaviour for the current tick.
    ///
    /// Returning an error aborts the tick: the remaining agents are not
    /// activated and the tick counters do not advance.
    fn activate(&mut self, agent: AgentId) -> Result<(), Self::Error>;
}
