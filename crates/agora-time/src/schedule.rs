//! The [`Schedule`] trait and the insertion-order [`BaseScheduler`].

use crate::error::ScheduleError;
use crate::model::Model;
use agora_core::AgentId;
use indexmap::IndexSet;
use rand::RngCore;

/// Registry and tick counters shared by every scheduler.
///
/// Agents are tracked by id in insertion order. Activation visits that
/// order unchanged; other schedulers reorder a snapshot of it via
/// [`Schedule::arrange`].
#[derive(Clone, Debug, Default)]
pub struct BaseScheduler {
    agents: IndexSet<AgentId>,
    steps: u64,
    time: u64,
}

impl BaseScheduler {
    /// Create an empty schedule at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the registered ids in insertion order.
    pub fn snapshot(&self) -> Vec<AgentId> {
        self.agents.iter().copied().collect()
    }

    fn advance(&mut self) {
        self.steps += 1;
        self.time += 1;
    }
}

/// An agent activation regime.
///
/// Implementors supply access to their [`BaseScheduler`] state and an
/// ordering rule; registry management and the tick loop are shared.
///
/// # Mutation during a tick
///
/// [`step`](Schedule::step) snapshots the registered ids before dispatching
/// anything, then re-checks membership right before each activation. Agents
/// added during a tick therefore wait for the next tick, and agents removed
/// during a tick are skipped if their turn has not come yet.
pub trait Schedule {
    /// Shared registry and counters.
    fn base(&self) -> &BaseScheduler;

    /// Mutable access to the shared registry and counters.
    fn base_mut(&mut self) -> &mut BaseScheduler;

    /// Put a snapshot of the registry into activation order.
    fn arrange<R: RngCore + ?Sized>(order: &mut [AgentId], rng: &mut R)
    where
        Self: Sized;

    /// Register an agent at the end of the order.
    fn add(&mut self, agent: AgentId) -> Result<(), ScheduleError> {
        if !self.base_mut().agents.insert(agent) {
            return Err(ScheduleError::DuplicateAgent { id: agent });
        }
        tracing::trace!(agent = %agent, "scheduled agent");
        Ok(())
    }

    /// Unregister an agent, keeping the order of the rest.
    fn remove(&mut self, agent: AgentId) -> Result<(), ScheduleError> {
        if !self.base_mut().agents.shift_remove(&agent) {
            return Err(ScheduleError::UnknownAgent { id: agent });
        }
        tracing::trace!(agent = %agent, "unscheduled agent");
        Ok(())
    }

    /// Whether `agent` is currently registered.
    fn contains(&self, agent: AgentId) -> bool {
        self.base().agents.contains(&agent)
    }

    /// Number of registered agents.
    fn get_agent_count(&self) -> usize {
        self.base().agents.len()
    }

    /// Registered agents in insertion order.
    fn agents(&self) -> impl ExactSizeIterator<Item = &AgentId> + '_ {
        self.base().agents.iter()
    }

    /// Completed ticks.
    fn steps(&self) -> u64 {
        self.base().steps
    }

    /// Simulated time; advances by one per completed tick.
    fn time(&self) -> u64 {
        self.base().time
    }

    /// The ids the next tick would visit, in visit order.
    fn agent_buffer<R: RngCore + ?Sized>(&self, rng: &mut R) -> Vec<AgentId>
    where
        Self: Sized,
    {
        let mut order = self.base().snapshot();
        Self::arrange(&mut order, rng);
        order
    }

    /// Run one tick of `model`.
    ///
    /// Every agent registered when the tick starts is activated at most
    /// once, in the order chosen by [`arrange`](Schedule::arrange). On
    /// success `steps` and `time` both advance by one. If an activation
    /// fails, the error is returned immediately, the rest of the order is
    /// not visited and the counters stay where they were.
    fn step<M>(model: &mut M) -> Result<(), M::Error>
    where
        M: Model<Schedule = Self>,
        Self: Sized,
    {
        let mut order = model.schedule().base().snapshot();
        Self::arrange(&mut order, model.rng());

        let mut activated = 0usize;
        for agent in order {
            if !model.schedule().contains(agent) {
                tracing::trace!(agent = %agent, "skipping agent removed mid-tick");
                continue;
            }
            tracing::trace!(agent = %agent, "activating agent");
            model.activate(agent)?;
            activated += 1;
        }

        let base = model.schedule_mut().base_mut();
        base.advance();
        tracing::debug!(
            steps = base.steps,
            time = base.time,
            activated,
            registered = base.agents.len(),
            "tick complete"
        );
        Ok(())
    }
}

impl Schedule for BaseScheduler {
    fn base(&self) -> &BaseScheduler {
        self
    }

    fn base_mut(&mut self) -> &mut BaseScheduler {
        self
    }

    fn arrange<R: RngCore + ?Sized>(_order: &mut [AgentId], _rng: &mut R) {}
}
