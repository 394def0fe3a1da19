use crate::entity::{StateGroup, UNIVERSAL_STATE};
use crate::graph::StyleGraph;
use crate::id::Id;
use crate::style::{Arena, Style};

/// Leaf of the hierarchy: a boolean flag (the universal state) or a named
/// value within its group.
#[derive(Debug, Clone)]
pub struct State {
    name: String,
    group: Id<StateGroup>,
    base: Option<Id<State>>,
}

impl State {
    pub(crate) fn new(group: Id<StateGroup>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group,
            base: None,
        }
    }

    /// Owning group
    pub fn group(&self) -> Id<StateGroup> {
        self.group
    }

    pub fn is_universal(&self) -> bool {
        self.name == UNIVERSAL_STATE
    }
}

impl Style for State {
    const KIND: &'static str = "state";

    fn name(&self) -> &str {
        &self.name
    }

    fn base(&self) -> Option<Id<Self>> {
        self.base
    }

    fn replace_base(&mut self, base: Option<Id<Self>>) {
        self.base = base;
    }

    fn arena(graph: &StyleGraph) -> &Arena<Self> {
        graph.states()
    }

    fn arena_mut(graph: &mut StyleGraph) -> &mut Arena<Self> {
        graph.states_mut()
    }
}
