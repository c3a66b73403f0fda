//! Test utilities and mock types for Agora development.
//!
//! Provides a [`MockAgent`], a [`RecordingModel`] that logs every
//! activation and can run per-agent hooks that mutate the model mid-tick,
//! and invariant assertions for grid/agent consistency.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use agora_core::{Agent, AgentId, Coord};
use agora_space::{Grid, GridError, Placement, SingleGrid};
use agora_time::{Model, Schedule, ScheduleError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Minimal agent: identity, position, and an activation counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockAgent {
    pub id: AgentId,
    pub pos: Option<Coord>,
    pub activations: u32,
}

impl MockAgent {
    pub fn new(id: u64) -> Self {
        Self {
            id: AgentId(id),
            pos: None,
            activations: 0,
        }
    }
}

impl Agent for MockAgent {
    fn unique_id(&self) -> AgentId {
        self.id
    }

    fn pos(&self) -> Option<Coord> {
        self.pos
    }

    fn set_pos(&mut self, pos: Option<Coord>) {
        self.pos = pos;
    }
}

/// Error surfaced by [`RecordingModel`] activations and hooks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockModelError {
    Schedule(ScheduleError),
    Grid(GridError),
    /// A hook asked the tick to abort.
    Refused(AgentId),
    /// The scheduler activated an id the model does not hold.
    Missing(AgentId),
}

impl fmt::Display for MockModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schedule(e) => write!(f, "schedule: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Refused(id) => write!(f, "agent {id} refused to act"),
            Self::Missing(id) => write!(f, "agent {id} is not held by the model"),
        }
    }
}

impl std::error::Error for MockModelError {}

impl From<ScheduleError> for MockModelError {
    fn from(e: ScheduleError) -> Self {
        Self::Schedule(e)
    }
}

impl From<GridError> for MockModelError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Behaviour injected for a single agent. Runs after the activation is
/// logged.
pub type Hook<S> = Box<dyn FnMut(AgentId, &mut RecordingModel<S>) -> Result<(), MockModelError>>;

/// A [`Model`] that owns a [`SingleGrid`], a schedule and its agents, and
/// records every activation in order.
pub struct RecordingModel<S: Schedule> {
    pub schedule: S,
    pub grid: SingleGrid,
    pub rng: ChaCha8Rng,
    pub agents: BTreeMap<AgentId, MockAgent>,
    /// Every activation, across all ticks.
    pub log: Vec<AgentId>,
    /// Index into `log` where each tick started.
    pub tick_starts: Vec<usize>,
    hooks: HashMap<AgentId, Hook<S>>,
}

impl<S: Schedule> RecordingModel<S> {
    pub fn new(schedule: S, grid: SingleGrid, seed: u64) -> Self {
        Self {
            schedule,
            grid,
            rng: ChaCha8Rng::seed_from_u64(seed),
            agents: BTreeMap::new(),
            log: Vec::new(),
            tick_starts: Vec::new(),
            hooks: HashMap::new(),
        }
    }

    /// Create an agent, put it on a random empty cell and schedule it.
    pub fn spawn(&mut self, id: u64) -> Result<AgentId, MockModelError> {
        let mut agent = MockAgent::new(id);
        self.schedule.add(agent.id)?;
        if let Err(e) = self
            .grid
            .position_agent(&mut agent, Placement::Random, Placement::Random, &mut self.rng)
        {
            self.schedule.remove(agent.id)?;
            return Err(e.into());
        }
        let key = agent.id;
        self.agents.insert(key, agent);
        Ok(key)
    }

    /// Unschedule an agent and take it off the grid.
    pub fn despawn(&mut self, id: AgentId) -> Result<MockAgent, MockModelError> {
        self.schedule.remove(id)?;
        let mut agent = self.agents.remove(&id).ok_or(MockModelError::Missing(id))?;
        if agent.pos.is_some() {
            self.grid.remove_agent(&mut agent)?;
        }
        Ok(agent)
    }

    /// Install behaviour for one agent, replacing any earlier hook.
    pub fn on_activate(
        &mut self,
        id: AgentId,
        hook: impl FnMut(AgentId, &mut RecordingModel<S>) -> Result<(), MockModelError> + 'static,
    ) {
        self.hooks.insert(id, Box::new(hook));
    }

    /// Run one tick through the schedule.
    pub fn tick(&mut self) -> Result<(), MockModelError> {
        self.tick_starts.push(self.log.len());
        S::step(self)
    }

    /// Activations grouped by tick.
    pub fn ticks(&self) -> Vec<&[AgentId]> {
        let mut out = Vec::with_capacity(self.tick_starts.len());
        for (i, &start) in self.tick_starts.iter().enumerate() {
            let end = self.tick_starts.get(i + 1).copied().unwrap_or(self.log.len());
            out.push(&self.log[start..end]);
        }
        out
    }

    /// Move an agent to a random empty cell on the model's grid.
    pub fn relocate(&mut self, id: AgentId) -> Result<Coord, MockModelError> {
        let agent = self.agents.get_mut(&id).ok_or(MockModelError::Missing(id))?;
        Ok(self.grid.move_to_empty(agent, &mut self.rng)?)
    }
}

impl<S: Schedule> Model for RecordingModel<S> {
    type Schedule = S;
    type Random = ChaCha8Rng;
    type Error = MockModelError;

    fn schedule(&self) -> &S {
        &self.schedule
    }

    fn schedule_mut(&mut self) -> &mut S {
        &mut self.schedule
    }

    fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    fn activate(&mut self, agent: AgentId) -> Result<(), MockModelError> {
        self.log.push(agent);
        if let Some(a) = self.agents.get_mut(&agent) {
            a.activations += 1;
        }
        if let Some(mut hook) = self.hooks.remove(&agent) {
            let result = hook(agent, self);
            self.hooks.entry(agent).or_insert(hook);
            result?;
        }
        Ok(())
    }
}

/// Assert that `grid` and `agents` agree on every position, and that the
/// number of occupied cells equals the number of placed agents.
pub fn assert_grid_matches_agents<'a>(grid: &Grid, agents: impl IntoIterator<Item = &'a MockAgent>) {
    let mut placed = 0;
    for agent in agents {
        if let Some(pos) = agent.pos {
            placed += 1;
            assert_eq!(
                grid.cell(pos).unwrap(),
                Some(agent.id),
                "agent {} claims {pos:?} but the cell disagrees",
                agent.id
            );
        }
    }
    let occupied = grid.iter().filter(|c| c.is_some()).count();
    assert_eq!(occupied, placed, "occupied cells do not match placed agents");
    assert_eq!(grid.empty_count() + occupied, grid.cell_count());
}
