//! Integration test: grid placement, occupancy and neighborhood queries
//! through the facade.

use std::collections::BTreeSet;

use agora::prelude::*;
use agora_test_utils::{assert_grid_matches_agents, MockAgent};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn coords(n: &Neighborhood) -> BTreeSet<Coord> {
    n.iter().copied().collect()
}

// ── Neighborhoods ────────────────────────────────────────────────────

#[test]
fn torus_von_neumann_corner_wraps_to_far_edges() {
    let grid = Grid::new(3, 3, true).unwrap();
    let hood = grid
        .get_neighborhood((0, 0), Connectivity::Four, false, 1)
        .unwrap();
    let expected: BTreeSet<Coord> = [(1, 0), (2, 0), (0, 1), (0, 2)].into_iter().collect();
    assert_eq!(coords(&hood), expected);
}

#[test]
fn bounded_moore_corner_drops_off_grid_cells() {
    let grid = Grid::new(3, 3, false).unwrap();
    let hood = grid
        .get_neighborhood((0, 0), Connectivity::Eight, false, 1)
        .unwrap();
    let expected: BTreeSet<Coord> = [(1, 0), (0, 1), (1, 1)].into_iter().collect();
    assert_eq!(coords(&hood), expected);
}

#[test]
fn neighborhood_queries_are_memoized() {
    let grid = SingleGrid::new(5, 5, true).unwrap();
    let a = grid
        .get_neighborhood((2, 2), Connectivity::Eight, true, 2)
        .unwrap();
    // (7, -3) resolves to the same centre on a 5x5 torus.
    let b = grid
        .get_neighborhood((7, -3), Connectivity::Eight, true, 2)
        .unwrap();
    assert!(a.ptr_eq(&b));
    assert_eq!(a.len(), 25);
    assert_eq!(grid.neighborhood_cache_len(), 1);
}

#[test]
fn neighbors_reports_only_occupied_cells() {
    let mut grid = SingleGrid::new(4, 4, false).unwrap();
    let mut a = MockAgent::new(1);
    let mut b = MockAgent::new(2);
    let mut far = MockAgent::new(3);
    grid.place_agent(&mut a, (1, 0)).unwrap();
    grid.place_agent(&mut b, (2, 2)).unwrap();
    grid.place_agent(&mut far, (3, 3)).unwrap();

    let mut near: Vec<AgentId> = grid.neighbor_iter((1, 1), Connectivity::Eight).unwrap().collect();
    near.sort();
    assert_eq!(near, vec![AgentId(1), AgentId(2)]);

    let four = grid.get_neighbors((1, 1), Connectivity::Four, false, 1).unwrap();
    assert_eq!(four.as_slice(), &[AgentId(1)]);
}

// ── Placement and movement ───────────────────────────────────────────

#[test]
fn move_to_empty_on_a_full_grid_changes_nothing() {
    let mut grid = SingleGrid::new(2, 2, false).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut agents: Vec<MockAgent> = (0..4).map(MockAgent::new).collect();
    for a in agents.iter_mut() {
        grid.position_agent(a, Placement::Random, Placement::Random, &mut rng)
            .unwrap();
    }
    let before: Vec<Option<AgentId>> = grid.iter().collect();
    let pos = agents[0].pos;

    assert_eq!(
        grid.move_to_empty(&mut agents[0], &mut rng),
        Err(GridError::GridFull)
    );

    assert_eq!(grid.iter().collect::<Vec<_>>(), before);
    assert_eq!(agents[0].pos, pos);
    assert_grid_matches_agents(&grid, &agents);
}

#[test]
fn torus_coordinates_resolve_before_placement() {
    let mut grid = Grid::new(4, 3, true).unwrap();
    let mut a = MockAgent::new(7);
    grid.place_agent(&mut a, (-1, 5)).unwrap();
    assert_eq!(a.pos, Some((3, 2)));
    assert_eq!(grid.cell((3, 2)).unwrap(), Some(AgentId(7)));
}

#[test]
fn bounded_grid_rejects_out_of_range_targets() {
    let mut grid = SingleGrid::new(4, 3, false).unwrap();
    let mut a = MockAgent::new(1);
    assert!(matches!(
        grid.place_agent(&mut a, (4, 0)),
        Err(GridError::OutOfBounds { coord: (4, 0), .. })
    ));
    grid.place_agent(&mut a, (0, 0)).unwrap();
    assert!(matches!(
        grid.move_agent(&mut a, (0, -1)),
        Err(GridError::OutOfBounds { .. })
    ));
    assert_eq!(a.pos, Some((0, 0)));
}

#[test]
fn base_grid_overwrites_but_single_grid_refuses() {
    let mut base = Grid::new(2, 2, false).unwrap();
    let mut single = SingleGrid::new(2, 2, false).unwrap();
    let mut a = MockAgent::new(1);
    let mut b = MockAgent::new(2);

    base.place_agent(&mut a, (0, 0)).unwrap();
    base.place_agent(&mut b, (0, 0)).unwrap();
    assert_eq!(base.cell((0, 0)).unwrap(), Some(AgentId(2)));

    let mut a = MockAgent::new(1);
    let mut b = MockAgent::new(2);
    single.place_agent(&mut a, (0, 0)).unwrap();
    assert_eq!(
        single.place_agent(&mut b, (0, 0)),
        Err(GridError::CellOccupied {
            coord: (0, 0),
            occupant: AgentId(1)
        })
    );
    assert_grid_matches_agents(&single, [&a, &b]);
}

#[test]
fn config_builds_both_grid_kinds() {
    let config = GridConfig {
        width: 7,
        height: 3,
        torus: true,
    };
    let grid = config.build_grid().unwrap();
    let single = config.build_single_grid().unwrap();
    assert_eq!((grid.width(), grid.height(), grid.is_torus()), (7, 3, true));
    assert_eq!(single.cell_count(), 21);
    assert_eq!(single.empty_count(), 21);
}

#[test]
fn empty_grid_is_rejected() {
    assert_eq!(Grid::new(0, 3, false).err(), Some(GridError::EmptyGrid));
    assert_eq!(SingleGrid::new(3, 0, true).err(), Some(GridError::EmptyGrid));
}
