//! Error types for grid construction and occupancy operations.

use agora_core::{AgentId, Coord};
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction, coordinate resolution, or
/// placement.
///
/// Every variant is fail-fast: the operation that returns it leaves the
/// grid exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate lies outside a non-toroidal grid.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// A random empty cell was requested but every cell is occupied.
    GridFull,
    /// A single-occupancy placement targeted an occupied cell.
    CellOccupied {
        /// The target cell.
        coord: Coord,
        /// The agent already in it.
        occupant: AgentId,
    },
    /// A first-time placement was requested for an agent that is already
    /// on the grid; relocate it with `move_agent` instead.
    AlreadyPlaced {
        /// The agent.
        id: AgentId,
        /// Where it currently is.
        pos: Coord,
    },
    /// The agent is not placed, or its recorded position does not hold it.
    UnknownAgent {
        /// The agent that could not be found.
        id: AgentId,
    },
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension does not fit in the `i32` coordinate space.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                coord,
                width,
                height,
            } => write!(
                f,
                "coordinate {coord:?} out of bounds [0, {width}) x [0, {height}) on a non-toroidal grid"
            ),
            Self::GridFull => write!(f, "no empty cells left on the grid"),
            Self::CellOccupied { coord, occupant } => {
                write!(f, "cell {coord:?} is already occupied by agent {occupant}")
            }
            Self::AlreadyPlaced { id, pos } => {
                write!(f, "agent {id} is already placed at {pos:?}; use move_agent to relocate it")
            }
            Self::UnknownAgent { id } => write!(f, "agent {id} is not placed on this grid"),
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_coordinate_and_bounds() {
        let err = GridError::OutOfBounds {
            coord: (5, -1),
            width: 3,
            height: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("(5, -1)"));
        assert!(msg.contains("[0, 3) x [0, 4)"));
    }

    #[test]
    fn display_names_occupant() {
        let err = GridError::CellOccupied {
            coord: (1, 1),
            occupant: AgentId(9),
        };
        assert_eq!(err.to_string(), "cell (1, 1) is already occupied by agent 9");
    }

    #[test]
    fn display_points_at_move_agent() {
        let err = GridError::AlreadyPlaced {
            id: AgentId(4),
            pos: (0, 2),
        };
        let msg = err.to_string();
        assert!(msg.contains("agent 4"));
        assert!(msg.contains("(0, 2)"));
        assert!(msg.contains("move_agent"));
    }
}
