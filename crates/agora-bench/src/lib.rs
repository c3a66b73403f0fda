//! Benchmark fixtures for Agora.
//!
//! - [`populate`]: fill a [`SingleGrid`] to a target density, deterministically
//! - [`Swarm`]: a [`Model`] whose agents hop to a random empty cell on
//!   every activation, for timing whole ticks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use agora_core::{Agent, AgentId, Coord};
use agora_space::{GridConfig, GridError, Placement, SingleGrid};
use agora_time::{Model, Schedule, ScheduleError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Bare agent used by the fixtures.
#[derive(Clone, Debug)]
pub struct Walker {
    /// Identity; equals the walker's index in its owning `Vec`.
    pub id: AgentId,
    /// Current cell.
    pub pos: Option<Coord>,
}

impl Agent for Walker {
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

/// Anything that can go wrong while building or stepping a fixture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixtureError {
    /// Grid construction or placement failed.
    Grid(GridError),
    /// Registration failed.
    Schedule(ScheduleError),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Schedule(e) => write!(f, "schedule: {e}"),
        }
    }
}

impl std::error::Error for FixtureError {}

impl From<GridError> for FixtureError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ScheduleError> for FixtureError {
    fn from(e: ScheduleError) -> Self {
        Self::Schedule(e)
    }
}

/// Build a single-occupancy grid holding `population` walkers at random
/// cells drawn from `rng`.
pub fn populate(
    config: &GridConfig,
    population: usize,
    rng: &mut ChaCha8Rng,
) -> Result<(SingleGrid, Vec<Walker>), FixtureError> {
    let mut grid = config.build_single_grid()?;
    let mut walkers = Vec::with_capacity(population);
    for i in 0..population {
        let mut w = Walker {
            id: AgentId(i as u64),
            pos: None,
        };
        grid.position_agent(&mut w, Placement::Random, Placement::Random, rng)?;
        walkers.push(w);
    }
    Ok((grid, walkers))
}

/// A model of random walkers on a [`SingleGrid`].
pub struct Swarm<S: Schedule> {
    /// The shared grid.
    pub grid: SingleGrid,
    /// Activation order.
    pub schedule: S,
    /// Model-owned random source.
    pub rng: ChaCha8Rng,
    /// Walkers indexed by id.
    pub walkers: Vec<Walker>,
}

impl<S: Schedule> Swarm<S> {
    /// Populate `config` with `population` scheduled walkers.
    pub fn new(mut schedule: S, config: &GridConfig, population: usize, seed: u64) -> Result<Self, FixtureError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (grid, walkers) = populate(config, population, &mut rng)?;
        for w in &walkers {
            schedule.add(w.id)?;
        }
        Ok(Self {
            grid,
            schedule,
            rng,
            walkers,
        })
    }
}

impl<S: Schedule> Model for Swarm<S> {
    type Schedule = S;
    type Random = ChaCha8Rng;
    type Error = GridError;

    fn schedule(&self) -> &S {
        &self.schedule
    }

    fn schedule_mut(&mut self) -> &mut S {
        &mut self.schedule
    }

    fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    fn activate(&mut self, agent: AgentId) -> Result<(), GridError> {
        let Some(walker) = self.walkers.get_mut(agent.0 as usize) else {
            return Err(GridError::UnknownAgent { id: agent });
        };
        self.grid.move_to_empty(walker, &mut self.rng)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_time::RandomActivation;

    #[test]
    fn populate_fills_requested_cells() {
        let config = GridConfig {
            width: 10,
            height: 10,
            torus: true,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let (grid, walkers) = populate(&config, 60, &mut rng).unwrap();
        assert_eq!(grid.empty_count(), 40);
        assert!(walkers.iter().all(|w| w.pos.is_some()));
    }

    #[test]
    fn overfull_population_fails() {
        let config = GridConfig {
            width: 2,
            height: 2,
            torus: false,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            populate(&config, 5, &mut rng).err(),
            Some(FixtureError::Grid(GridError::GridFull))
        );
    }

    #[test]
    fn swarm_ticks() {
        let mut swarm = Swarm::new(RandomActivation::new(), &GridConfig::default(), 50, 9).unwrap();
        RandomActivation::step(&mut swarm).unwrap();
        assert_eq!(swarm.schedule.steps(), 1);
        assert_eq!(swarm.grid.empty_count(), 50);
    }
}
