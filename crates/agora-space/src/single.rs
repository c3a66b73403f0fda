//! Single-occupancy grid: at most one agent per cell.

use crate::config::GridConfig;
use crate::error::GridError;
use crate::grid::Grid;
use agora_core::{Agent, Coord};
use rand::Rng;
use std::ops::Deref;

/// One axis of a [`SingleGrid::position_agent`] request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// Pick a uniformly random empty cell.
    #[default]
    Random,
    /// Use this explicit axis value.
    At(i32),
}

/// A [`Grid`] that never lets two agents share a cell.
///
/// Every read-only [`Grid`] query is available through `Deref`. Mutation
/// goes only through the methods on this type, each of which checks the
/// target cell before touching anything: a rejected call leaves both the
/// grid and the agent unchanged.
///
/// # Examples
///
/// ```
/// use agora_core::{Agent, AgentId, Coord};
/// use agora_space::{GridError, SingleGrid};
///
/// struct Cell { id: AgentId, pos: Option<Coord> }
/// impl Agent for Cell {
///     fn unique_id(&self) -> AgentId { self.id }
///     fn pos(&self) -> Option<Coord> { self.pos }
///     fn set_pos(&mut self, pos: Option<Coord>) { self.pos = pos; }
/// }
///
/// let mut grid = SingleGrid::new(2, 2, false).unwrap();
/// let mut a = Cell { id: AgentId(1), pos: None };
/// let mut b = Cell { id: AgentId(2), pos: None };
/// grid.place_agent(&mut a, (0, 0)).unwrap();
/// assert!(matches!(
///     grid.place_agent(&mut b, (0, 0)),
///     Err(GridError::CellOccupied { .. })
/// ));
/// assert_eq!(b.pos, None);
/// ```
#[derive(Clone, Debug)]
pub struct SingleGrid {
    grid: Grid,
}

impl SingleGrid {
    /// Create an empty single-occupancy grid.
    pub fn new(width: u32, height: u32, torus: bool) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(width, height, torus)?,
        })
    }

    /// Create an empty single-occupancy grid from a [`GridConfig`].
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::from_config(config)?,
        })
    }

    /// Borrow the underlying base grid.
    pub fn as_grid(&self) -> &Grid {
        &self.grid
    }

    /// Put an unplaced `agent` at `pos`.
    ///
    /// Fails with [`GridError::AlreadyPlaced`] if the agent already has a
    /// position (use [`move_agent`](Self::move_agent)), and with
    /// [`GridError::CellOccupied`] if the resolved cell already holds an
    /// agent.
    pub fn place_agent<A: Agent + ?Sized>(&mut self, agent: &mut A, pos: Coord) -> Result<(), GridError> {
        Self::unplaced(agent)?;
        let pos = self.vacant(pos)?;
        self.grid.place_agent(agent, pos)
    }

    /// Place an agent for the first time.
    ///
    /// If either axis is [`Placement::Random`], a uniformly random empty
    /// cell is drawn from `rng` (failing with [`GridError::GridFull`] if
    /// none remain). Otherwise the explicit `(x, y)` is used and goes
    /// through the same occupancy check as [`place_agent`](Self::place_agent).
    /// An agent that is already placed is rejected before `rng` is touched.
    ///
    /// Returns the cell the agent now occupies.
    pub fn position_agent<A, R>(&mut self, agent: &mut A, x: Placement, y: Placement, rng: &mut R) -> Result<Coord, GridError>
    where
        A: Agent + ?Sized,
        R: Rng + ?Sized,
    {
        Self::unplaced(agent)?;
        let pos = match (x, y) {
            (Placement::At(x), Placement::At(y)) => (x, y),
            _ => self.grid.find_empty(rng)?,
        };
        self.place_agent(agent, pos)?;
        self.grid.resolve(pos)
    }

    /// Relocate a placed agent to `pos`.
    ///
    /// Moving onto the agent's own cell is a no-op relocation; any other
    /// occupied target fails with [`GridError::CellOccupied`] before the
    /// agent leaves its current cell.
    pub fn move_agent<A: Agent + ?Sized>(&mut self, agent: &mut A, pos: Coord) -> Result<(), GridError> {
        let to = self.grid.resolve(pos)?;
        let from = self.grid.locate(agent)?;
        if to != from {
            self.vacant(to)?;
        }
        self.grid.relocate(agent, from, to);
        Ok(())
    }

    /// Take `agent` off the grid.
    pub fn remove_agent<A: Agent + ?Sized>(&mut self, agent: &mut A) -> Result<(), GridError> {
        self.grid.remove_agent(agent)
    }

    /// Move `agent` to a uniformly random empty cell.
    ///
    /// The chosen cell is empty by construction, so occupancy holds.
    pub fn move_to_empty<A, R>(&mut self, agent: &mut A, rng: &mut R) -> Result<Coord, GridError>
    where
        A: Agent + ?Sized,
        R: Rng + ?Sized,
    {
        self.grid.move_to_empty(agent, rng)
    }

    fn unplaced<A: Agent + ?Sized>(agent: &A) -> Result<(), GridError> {
        match agent.pos() {
            Some(pos) => Err(GridError::AlreadyPlaced {
                id: agent.unique_id(),
                pos,
            }),
            None => Ok(()),
        }
    }

    /// Resolve `pos` and require it to be empty.
    fn vacant(&self, pos: Coord) -> Result<Coord, GridError> {
        let pos = self.grid.resolve(pos)?;
        match self.grid.cell(pos)? {
            Some(occupant) => Err(GridError::CellOccupied { coord: pos, occupant }),
            None => Ok(pos),
        }
    }
}

impl Deref for SingleGrid {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        &self.grid
    }
}
