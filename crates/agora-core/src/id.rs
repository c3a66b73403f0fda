//! Strongly-typed identifiers and the [`Coord`] type alias.

use std::fmt;

/// Stable unique identity of an agent.
///
/// Used as the scheduler registry key and as the non-owning back-reference
/// stored in grid cells. Two agents in the same model must never share an id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u64);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AgentId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A lattice coordinate `(x, y)`.
///
/// Only meaningful inside `[0, width) x [0, height)` of a particular grid,
/// unless resolved through that grid's wrap logic first.
pub type Coord = (i32, i32);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn agent_id_display_is_bare_number() {
        assert_eq!(AgentId(42).to_string(), "42");
    }

    #[test]
    fn agent_id_from_u64() {
        let id: AgentId = 7u64.into();
        assert_eq!(id, AgentId(7));
    }

    #[test]
    fn agent_ids_hash_by_value() {
        let set: HashSet<AgentId> = [AgentId(1), AgentId(2), AgentId(1)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
