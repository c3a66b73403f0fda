//! Occupancy invariant helpers shared by the grid test modules.

use crate::grid::Grid;
use agora_core::Agent;
use std::collections::HashSet;

/// Assert the two-sided occupancy invariant.
///
/// For every agent in `placed` with a position, the cell at that position
/// holds the agent and the coordinate is not in the empty set. Every
/// empty-set member holds no agent, every occupied cell is absent from the
/// empty set, and the empty set is exactly the complement of the occupied
/// cells.
pub fn assert_occupancy_consistent(grid: &Grid, placed: &[&dyn Agent]) {
    let empties: HashSet<_> = grid.empties().collect();
    assert_eq!(
        empties.len(),
        grid.empty_count(),
        "empty set contains duplicates"
    );

    for agent in placed {
        if let Some(pos) = agent.pos() {
            assert_eq!(
                grid.cell(pos).unwrap(),
                Some(agent.unique_id()),
                "agent {} claims {pos:?} but the cell disagrees",
                agent.unique_id()
            );
            assert!(
                !empties.contains(&pos),
                "occupied cell {pos:?} listed as empty"
            );
        }
    }

    let mut occupied = 0;
    for (content, x, y) in grid.coord_iter() {
        match content {
            Some(id) => {
                occupied += 1;
                assert!(!empties.contains(&(x, y)), "cell ({x}, {y}) holds {id} but is listed as empty");
            }
            None => assert!(empties.contains(&(x, y)), "empty cell ({x}, {y}) missing from the empty set"),
        }
    }
    assert_eq!(occupied + empties.len(), grid.cell_count());
}
