//! The agent capability consumed by grids and schedulers.

use crate::id::{AgentId, Coord};

/// What the substrate needs from an agent.
///
/// The grid mirrors every cell assignment into the agent through
/// [`set_pos`](Agent::set_pos), so after any successful grid mutation
/// `grid.cell(agent.pos())` holds `agent.unique_id()` and vice versa.
/// `None` means the agent is not placed on any grid.
///
/// Behaviour is not part of this trait. Schedulers dispatch activation by
/// id through the owning model, which lets an acting agent re-enter the
/// grid or the schedule during its own turn.
///
/// # Examples
///
/// ```
/// use agora_core::{Agent, AgentId, Coord};
///
/// struct Walker {
///     id: AgentId,
///     pos: Option<Coord>,
/// }
///
/// impl Agent for Walker {
///     fn unique_id(&self) -> AgentId { self.id }
///     fn pos(&self) -> Option<Coord> { self.pos }
///     fn set_pos(&mut self, pos: Option<Coord>) { self.pos = pos; }
/// }
///
/// let mut w = Walker { id: AgentId(1), pos: None };
/// w.set_pos(Some((2, 3)));
/// assert_eq!(w.pos(), Some((2, 3)));
/// ```
pub trait Agent {
    /// Stable identity, unique within a model.
    fn unique_id(&self) -> AgentId;

    /// Current grid position, or `None` when not placed.
    fn pos(&self) -> Option<Coord>;

    /// Overwrite the recorded position. Called by grid operations only.
    fn set_pos(&mut self, pos: Option<Coord>);
}

impl<A: Agent + ?Sized> Agent for &mut A {
    fn unique_id(&self) -> AgentId {
        (**self).unique_id()
    }

    fn pos(&self) -> Option<Coord> {
        (**self).pos()
    }

    fn set_pos(&mut self, pos: Option<Coord>) {
        (**self).set_pos(pos)
    }
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn unique_id(&self) -> AgentId {
        (**self).unique_id()
    }

    fn pos(&self) -> Option<Coord> {
        (**self).pos()
    }

    fn set_pos(&mut self, pos: Option<Coord>) {
        (**self).set_pos(pos)
    }
}
