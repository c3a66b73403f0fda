//! Uniformly shuffled activation.

use crate::schedule::{BaseScheduler, Schedule};
use agora_core::AgentId;
use rand::seq::SliceRandom;
use rand::RngCore;

/// Activates every registered agent once per tick in a fresh random order.
///
/// The order is a permutation of the registry snapshot taken at the start of
/// the tick, drawn from the owning model's random source, so a seeded model
/// replays the same sequence of orders.
#[derive(Clone, Debug, Default)]
pub struct RandomActivation {
    base: BaseScheduler,
}

impl RandomActivation {
    /// Create an empty schedule at tick 0.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Schedule for RandomActivation {
    fn base(&self) -> &BaseScheduler {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseScheduler {
        &mut self.base
    }

    fn arrange<R: RngCore + ?Sized>(order: &mut [AgentId], rng: &mut R) {
        order.shuffle(rng);
    }
}
