//! The base occupancy grid.

use crate::config::GridConfig;
use crate::connectivity::Connectivity;
use crate::error::GridError;
use crate::geometry;
use crate::neighborhood::{self, Neighborhood, NeighborhoodCache, NeighborhoodKey};
use agora_core::{Agent, AgentId, Coord};
use indexmap::IndexSet;
use rand::Rng;
use smallvec::SmallVec;

/// A fixed `width x height` lattice of cells, each empty or holding one
/// agent id.
///
/// Cells are indexed `(x, y)` with `0 <= x < width`, `0 <= y < height`.
/// When `torus` is set, coordinates outside that range wrap around both
/// axes; otherwise they are rejected with [`GridError::OutOfBounds`].
///
/// The grid does not own agents. Each mutating operation takes the agent by
/// `&mut` and updates both sides in one call: the cell stores the agent's
/// [`AgentId`], and the agent's position is set through [`Agent::set_pos`].
///
/// The base grid permits overwriting: [`place_agent`](Self::place_agent)
/// writes into the target cell whatever it held before. Exclusive occupancy
/// is enforced by [`SingleGrid`](crate::SingleGrid), which wraps this type.
///
/// # Examples
///
/// ```
/// use agora_core::{Agent, AgentId, Coord};
/// use agora_space::{Connectivity, Grid};
///
/// struct Cell { id: AgentId, pos: Option<Coord> }
/// impl Agent for Cell {
///     fn unique_id(&self) -> AgentId { self.id }
///     fn pos(&self) -> Option<Coord> { self.pos }
///     fn set_pos(&mut self, pos: Option<Coord>) { self.pos = pos; }
/// }
///
/// let mut grid = Grid::new(4, 4, true).unwrap();
/// let mut a = Cell { id: AgentId(1), pos: None };
/// grid.place_agent(&mut a, (-1, 0)).unwrap();
/// assert_eq!(a.pos, Some((3, 0)));
/// assert_eq!(grid.cell((3, 0)).unwrap(), Some(AgentId(1)));
///
/// let near = grid.get_neighbors((0, 0), Connectivity::Four, false, 1).unwrap();
/// assert_eq!(near.as_slice(), &[AgentId(1)]);
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    torus: bool,
    cells: Vec<Option<AgentId>>,
    empties: IndexSet<Coord>,
    neighborhoods: NeighborhoodCache,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32, torus: bool) -> Result<Self, GridError> {
        geometry::check_dims(width, height)?;
        let n = width as usize * height as usize;
        let empties: IndexSet<Coord> = (0..n).map(|i| geometry::coord_of(i, height)).collect();
        Ok(Self {
            width,
            height,
            torus,
            cells: vec![None; n],
            empties,
            neighborhoods: NeighborhoodCache::default(),
        })
    }

    /// Create an empty grid from a validated [`GridConfig`].
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Self::new(config.width, config.height, config.torus)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether edges wrap.
    pub fn is_torus(&self) -> bool {
        self.torus
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.empties.len()
    }

    /// `true` if at least one cell is empty.
    pub fn exists_empty_cells(&self) -> bool {
        !self.empties.is_empty()
    }

    /// Iterate over the currently empty coordinates.
    ///
    /// Iteration order is deterministic for a given history of operations
    /// but otherwise unspecified.
    pub fn empties(&self) -> impl Iterator<Item = Coord> + '_ {
        self.empties.iter().copied()
    }

    /// `true` iff either axis of `pos` lies outside the grid.
    pub fn out_of_bounds(&self, pos: Coord) -> bool {
        geometry::out_of_bounds(pos, self.width, self.height)
    }

    /// Resolve `pos` to an in-bounds coordinate.
    ///
    /// In-bounds coordinates are returned unchanged. Out-of-bounds ones wrap
    /// modulo each axis on a torus and fail with
    /// [`GridError::OutOfBounds`] otherwise.
    pub fn resolve(&self, pos: Coord) -> Result<Coord, GridError> {
        geometry::resolve(pos, self.width, self.height, self.torus)
    }

    // ── Contents ────────────────────────────────────────────────

    /// The occupant of a single cell.
    pub fn cell(&self, pos: Coord) -> Result<Option<AgentId>, GridError> {
        let pos = self.resolve(pos)?;
        Ok(self.slot(pos))
    }

    /// The occupants of several cells, in input order, `None` for empty
    /// cells.
    ///
    /// Every coordinate is resolved before any is read; one unresolvable
    /// member fails the whole call.
    pub fn cells(&self, positions: &[Coord]) -> Result<Vec<Option<AgentId>>, GridError> {
        let resolved = self.resolve_all(positions)?;
        Ok(resolved.into_iter().map(|p| self.slot(p)).collect())
    }

    /// The agents found in the listed cells, skipping empty ones.
    pub fn get_cell_list_contents(&self, positions: &[Coord]) -> Result<Vec<AgentId>, GridError> {
        Ok(self.iter_cell_list_contents(positions)?.collect())
    }

    /// Lazy form of [`get_cell_list_contents`](Self::get_cell_list_contents).
    ///
    /// Resolution happens eagerly so that errors surface before iteration.
    pub fn iter_cell_list_contents(
        &self,
        positions: &[Coord],
    ) -> Result<impl Iterator<Item = AgentId> + '_, GridError> {
        let resolved = self.resolve_all(positions)?;
        Ok(resolved.into_iter().filter_map(move |p| self.slot(p)))
    }

    /// `true` iff the cell at `pos` holds no agent.
    pub fn is_cell_empty(&self, pos: Coord) -> Result<bool, GridError> {
        Ok(self.cell(pos)?.is_none())
    }

    /// All cells of column `x`, ascending `y`.
    pub fn column(&self, x: i32) -> Result<&[Option<AgentId>], GridError> {
        let (x, _) = self.resolve((x, 0))?;
        let h = self.height as usize;
        let start = x as usize * h;
        Ok(&self.cells[start..start + h])
    }

    /// All cells of row `y`, ascending `x`.
    pub fn row(&self, y: i32) -> Result<impl Iterator<Item = Option<AgentId>> + '_, GridError> {
        let (_, y) = self.resolve((0, y))?;
        Ok((0..self.width as i32).map(move |x| self.slot((x, y))))
    }

    /// Every cell's contents in storage order (x-major, ascending `y`).
    pub fn iter(&self) -> impl Iterator<Item = Option<AgentId>> + '_ {
        self.cells.iter().copied()
    }

    /// Every cell as `(contents, x, y)`, x-major, each cell exactly once.
    ///
    /// Calling again restarts from `(0, 0)`.
    pub fn coord_iter(&self) -> impl Iterator<Item = (Option<AgentId>, i32, i32)> + '_ {
        let h = self.height;
        self.cells.iter().enumerate().map(move |(i, c)| {
            let (x, y) = geometry::coord_of(i, h);
            (*c, x, y)
        })
    }

    // ── Neighborhoods ───────────────────────────────────────────

    /// The coordinates around `pos`, memoized per grid.
    ///
    /// The centre is resolved first. Every offset with `|dx|, |dy| <= radius`
    /// is considered, restricted to Manhattan distance `radius` under
    /// [`Connectivity::Four`]; `(0, 0)` is skipped unless `include_center`.
    /// Off-grid cells are dropped on a bounded grid and wrapped on a torus.
    ///
    /// Repeated calls with the same arguments return the same shared set.
    pub fn get_neighborhood(
        &self,
        pos: Coord,
        connectivity: Connectivity,
        include_center: bool,
        radius: u32,
    ) -> Result<Neighborhood, GridError> {
        let center = self.resolve(pos)?;
        let key = NeighborhoodKey {
            center,
            connectivity,
            include_center,
            radius,
        };
        let (w, h, torus) = (self.width, self.height, self.torus);
        Ok(self
            .neighborhoods
            .get_or_compile(key, |k| neighborhood::compile(k, w, h, torus)))
    }

    /// Lazy form of [`get_neighborhood`](Self::get_neighborhood).
    pub fn iter_neighborhood(
        &self,
        pos: Coord,
        connectivity: Connectivity,
        include_center: bool,
        radius: u32,
    ) -> Result<impl Iterator<Item = Coord>, GridError> {
        let hood = self.get_neighborhood(pos, connectivity, include_center, radius)?;
        Ok((0..hood.len()).map(move |i| hood[i]))
    }

    /// The agents occupying the neighborhood of `pos`; empty cells are
    /// skipped.
    pub fn get_neighbors(
        &self,
        pos: Coord,
        connectivity: Connectivity,
        include_center: bool,
        radius: u32,
    ) -> Result<SmallVec<[AgentId; 8]>, GridError> {
        Ok(self
            .iter_neighbors(pos, connectivity, include_center, radius)?
            .collect())
    }

    /// Lazy form of [`get_neighbors`](Self::get_neighbors).
    pub fn iter_neighbors(
        &self,
        pos: Coord,
        connectivity: Connectivity,
        include_center: bool,
        radius: u32,
    ) -> Result<impl Iterator<Item = AgentId> + '_, GridError> {
        let hood = self.get_neighborhood(pos, connectivity, include_center, radius)?;
        Ok((0..hood.len()).filter_map(move |i| self.slot(hood[i])))
    }

    /// Occupants adjacent to `pos` at radius 1, centre excluded.
    pub fn neighbor_iter(
        &self,
        pos: Coord,
        connectivity: Connectivity,
    ) -> Result<impl Iterator<Item = AgentId> + '_, GridError> {
        self.iter_neighbors(pos, connectivity, false, 1)
    }

    /// Number of distinct neighborhood queries memoized so far.
    pub fn neighborhood_cache_len(&self) -> usize {
        self.neighborhoods.len()
    }

    // ── Mutation ────────────────────────────────────────────────

    /// Put `agent` at `pos` and record the position on the agent.
    ///
    /// The target is resolved first. Whatever the cell held is overwritten;
    /// an agent that is already placed elsewhere should be relocated with
    /// [`move_agent`](Self::move_agent) instead.
    pub fn place_agent<A: Agent + ?Sized>(&mut self, agent: &mut A, pos: Coord) -> Result<(), GridError> {
        let pos = self.resolve(pos)?;
        let id = agent.unique_id();
        if let Some(previous) = self.write_cell(pos, id) {
            if previous != id {
                tracing::warn!(
                    agent = %id,
                    previous = %previous,
                    pos = ?pos,
                    "overwriting occupied cell"
                );
            }
        }
        agent.set_pos(Some(pos));
        tracing::trace!(agent = %id, pos = ?pos, "placed agent");
        Ok(())
    }

    /// Relocate a placed agent to `pos`, vacating its old cell.
    ///
    /// Fails with [`GridError::UnknownAgent`] if the agent is not placed on
    /// this grid, leaving everything untouched.
    pub fn move_agent<A: Agent + ?Sized>(&mut self, agent: &mut A, pos: Coord) -> Result<(), GridError> {
        let to = self.resolve(pos)?;
        let from = self.locate(agent)?;
        self.relocate(agent, from, to);
        Ok(())
    }

    /// Take `agent` off the grid and clear its recorded position.
    pub fn remove_agent<A: Agent + ?Sized>(&mut self, agent: &mut A) -> Result<(), GridError> {
        let pos = self.locate(agent)?;
        self.clear_cell(pos);
        agent.set_pos(None);
        tracing::trace!(agent = %agent.unique_id(), pos = ?pos, "removed agent");
        Ok(())
    }

    /// Move `agent` to a uniformly random empty cell drawn with `rng`.
    ///
    /// An unplaced agent is simply placed. Returns the new position.
    /// Fails with [`GridError::GridFull`] when no cell is empty, leaving
    /// the grid unchanged.
    pub fn move_to_empty<A, R>(&mut self, agent: &mut A, rng: &mut R) -> Result<Coord, GridError>
    where
        A: Agent + ?Sized,
        R: Rng + ?Sized,
    {
        let from = match agent.pos() {
            Some(_) => Some(self.locate(agent)?),
            None => None,
        };
        let to = self.find_empty(rng)?;
        match from {
            Some(from) => self.relocate(agent, from, to),
            None => {
                self.write_cell(to, agent.unique_id());
                agent.set_pos(Some(to));
            }
        }
        Ok(to)
    }

    /// Draw a uniformly random empty coordinate.
    pub fn find_empty<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Coord, GridError> {
        if self.empties.is_empty() {
            return Err(GridError::GridFull);
        }
        let i = rng.random_range(0..self.empties.len());
        Ok(self.empties[i])
    }

    // ── Internals ───────────────────────────────────────────────

    /// Read an in-bounds cell.
    fn slot(&self, pos: Coord) -> Option<AgentId> {
        self.cells[geometry::index_of(pos, self.height)]
    }

    fn resolve_all(&self, positions: &[Coord]) -> Result<Vec<Coord>, GridError> {
        positions.iter().map(|&p| self.resolve(p)).collect()
    }

    /// The agent's recorded position, checked against the cell contents.
    pub(crate) fn locate<A: Agent + ?Sized>(&self, agent: &A) -> Result<Coord, GridError> {
        let id = agent.unique_id();
        match agent.pos() {
            Some(pos) if !self.out_of_bounds(pos) && self.slot(pos) == Some(id) => Ok(pos),
            _ => Err(GridError::UnknownAgent { id }),
        }
    }

    /// Move between two resolved cells. `from` must hold the agent.
    pub(crate) fn relocate<A: Agent + ?Sized>(&mut self, agent: &mut A, from: Coord, to: Coord) {
        let id = agent.unique_id();
        self.clear_cell(from);
        if let Some(previous) = self.write_cell(to, id) {
            tracing::warn!(agent = %id, previous = %previous, pos = ?to, "overwriting occupied cell");
        }
        agent.set_pos(Some(to));
        tracing::trace!(agent = %id, from = ?from, to = ?to, "moved agent");
    }

    /// Store `id` at a resolved cell, returning the previous occupant.
    pub(crate) fn write_cell(&mut self, pos: Coord, id: AgentId) -> Option<AgentId> {
        let idx = geometry::index_of(pos, self.height);
        self.empties.swap_remove(&pos);
        self.cells[idx].replace(id)
    }

    /// Empty a resolved cell, returning the previous occupant.
    pub(crate) fn clear_cell(&mut self, pos: Coord) -> Option<AgentId> {
        let idx = geometry::index_of(pos, self.height);
        self.empties.insert(pos);
        self.cells[idx].take()
    }
}
