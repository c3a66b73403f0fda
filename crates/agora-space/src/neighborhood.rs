//! Neighborhood enumeration and its per-grid memoization table.
//!
//! A neighborhood is a pure function of `(center, connectivity,
//! include_center, radius)` plus the grid geometry. Geometry is fixed when a
//! grid is constructed, so [`NeighborhoodCache`] never invalidates: an entry
//! compiled once stays correct for the lifetime of the grid that owns it.

use crate::connectivity::Connectivity;
use agora_core::Coord;
use indexmap::IndexSet;
use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

/// Memoization key for a neighborhood query.
///
/// `center` is always the already-resolved (in-bounds) coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NeighborhoodKey {
    /// Resolved centre cell.
    pub center: Coord,
    /// Neighborhood shape.
    pub connectivity: Connectivity,
    /// Whether the centre itself is part of the result.
    pub include_center: bool,
    /// Radius in cells.
    pub radius: u32,
}

/// An immutable, cheaply clonable set of neighborhood coordinates.
///
/// Coordinates are in-bounds, unique, and in scan order (`dy` outer, `dx`
/// inner, both ascending).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    coords: Arc<[Coord]>,
}

impl Neighborhood {
    /// Number of distinct coordinates.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// `true` when no coordinate survived the bounds filter.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Membership test.
    pub fn contains(&self, coord: &Coord) -> bool {
        self.coords.contains(coord)
    }

    /// Borrow the coordinates as a slice.
    pub fn as_slice(&self) -> &[Coord] {
        &self.coords
    }

    /// `true` if both values share the same cached allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.coords, &other.coords)
    }
}

impl Deref for Neighborhood {
    type Target = [Coord];

    fn deref(&self) -> &[Coord] {
        &self.coords
    }
}

impl<'a> IntoIterator for &'a Neighborhood {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

/// Enumerate the neighborhood described by `key` on a `width x height` grid.
///
/// Offsets outside the grid are dropped on a bounded grid and wrapped on a
/// torus; wrapped duplicates collapse. Arithmetic runs in `i64` so large
/// radii cannot overflow the `i32` coordinate space.
///
/// The scanned offset window is clamped per axis so the cost is bounded by
/// the grid, not the radius: on a bounded grid to the offsets that stay on
/// the grid, on a torus to one full period either side of the centre. One
/// period already holds the shortest representative of every wrapped
/// offset, so the resulting set is unchanged.
pub(crate) fn compile(key: &NeighborhoodKey, width: u32, height: u32, torus: bool) -> Neighborhood {
    let r = i64::from(key.radius);
    let (w, h) = (i64::from(width), i64::from(height));
    let (cx, cy) = (i64::from(key.center.0), i64::from(key.center.1));
    let window = |c: i64, n: i64| {
        if torus {
            let p = r.min(n);
            (-p, p)
        } else {
            ((-c).max(-r), (n - 1 - c).min(r))
        }
    };
    let (dx_lo, dx_hi) = window(cx, w);
    let (dy_lo, dy_hi) = window(cy, h);
    let mut coords: IndexSet<Coord> = IndexSet::new();

    for dy in dy_lo..=dy_hi {
        for dx in dx_lo..=dx_hi {
            if dx == 0 && dy == 0 && !key.include_center {
                continue;
            }
            if !key.connectivity.admits(dx, dy, key.radius) {
                continue;
            }
            let (x, y) = (cx + dx, cy + dy);
            let inside = (0..w).contains(&x) && (0..h).contains(&y);
            if !inside && !torus {
                continue;
            }
            coords.insert((x.rem_euclid(w) as i32, y.rem_euclid(h) as i32));
        }
    }

    Neighborhood {
        coords: coords.into_iter().collect(),
    }
}

/// Per-grid memoization table for neighborhood queries.
///
/// Interior mutability lets read-only grid queries populate the cache.
/// The table is private to one grid instance and never shared across
/// threads.
#[derive(Clone, Debug, Default)]
pub(crate) struct NeighborhoodCache {
    entries: RefCell<HashMap<NeighborhoodKey, Neighborhood>>,
}

impl NeighborhoodCache {
    /// Return the cached neighborhood for `key`, compiling it on a miss.
    pub(crate) fn get_or_compile(
        &self,
        key: NeighborhoodKey,
        compile: impl FnOnce(&NeighborhoodKey) -> Neighborhood,
    ) -> Neighborhood {
        let cached = self.entries.borrow().get(&key).cloned();
        if let Some(hit) = cached {
            return hit;
        }
        let fresh = compile(&key);
        tracing::debug!(
            center = ?key.center,
            connectivity = ?key.connectivity,
            include_center = key.include_center,
            radius = key.radius,
            cells = fresh.len(),
            "neighborhood cache miss"
        );
        self.entries.borrow_mut().insert(key, fresh.clone());
        fresh
    }

    /// Number of memoized keys.
    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}
