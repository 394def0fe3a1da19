use crate::entity::{BlockClass, State, UNIVERSAL_STATE};
use crate::graph::StyleGraph;
use crate::id::Id;
use crate::style::{Arena, Children, Container, Style};

/// A named partition of mutually-related states under one class.
#[derive(Debug, Clone)]
pub struct StateGroup {
    name: String,
    class: Id<BlockClass>,
    base: Option<Id<StateGroup>>,
    states: Children<State>,
}

impl StateGroup {
    pub(crate) fn new(class: Id<BlockClass>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class,
            base: None,
            states: Children::default(),
        }
    }

    /// Owning class
    pub fn class(&self) -> Id<BlockClass> {
        self.class
    }

    /// True when the group defines at least one state other than the universal one
    pub fn has_sub_states(&self) -> bool {
        self.states.names().any(|name| name != UNIVERSAL_STATE)
    }

    pub fn universal_state(&self) -> Option<Id<State>> {
        self.states.get(UNIVERSAL_STATE)
    }

    /// Directly-owned state by name (no inheritance)
    pub fn get_state(&self, name: &str) -> Option<Id<State>> {
        self.states.get(name)
    }

    pub fn states(&self) -> &Children<State> {
        &self.states
    }
}

impl Style for StateGroup {
    const KIND: &'static str = "state group";

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
        graph.groups()
    }

    fn arena_mut(graph: &mut StyleGraph) -> &mut Arena<Self> {
        graph.groups_mut()
    }
}

impl Container for StateGroup {
    type Child = State;

    fn children(&self) -> &Children<State> {
        &self.states
    }

    fn children_mut(&mut self) -> &mut Children<State> {
        &mut self.states
    }

    fn new_child(parent: Id<Self>, name: &str) -> State {
        State::new(parent, name)
    }
}
