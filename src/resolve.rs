//! State Resolver - inheritance-aware lookup and merging
//!
//! Resolution algorithm for merged state sets:
//! 1. Build the class's ancestor chain, farthest ancestor first
//! 2. Append the class itself
//! 3. Fold every matching group's states into one map in chain order
//! 4. Later entries overwrite earlier ones, so the most-derived definition
//!    of a state wins and ancestor-only states survive

use std::collections::BTreeMap;

use crate::entity::{Block, BlockClass, State, StateGroup, UNIVERSAL_STATE};
use crate::graph::StyleGraph;
use crate::id::Id;
use crate::style::Style;

/// Merged states keyed by (group name, state name).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateMap {
    entries: BTreeMap<(String, String), Id<State>>,
}

impl StateMap {
    pub fn get(&self, group: &str, state: &str) -> Option<Id<State>> {
        self.entries
            .get(&(group.to_string(), state.to_string()))
            .copied()
    }

    pub fn contains(&self, group: &str, state: &str) -> bool {
        self.get(group, state).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (group, state, id) triples ordered by group then state name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, Id<State>)> {
        self.entries
            .iter()
            .map(|((group, state), &id)| (group.as_str(), state.as_str(), id))
    }

    /// States of one group, ordered by name
    pub fn states_in<'a>(&'a self, group: &'a str) -> impl Iterator<Item = (&'a str, Id<State>)> + 'a {
        self.iter()
            .filter(move |(g, _, _)| *g == group)
            .map(|(_, state, id)| (state, id))
    }

    fn insert(&mut self, group: &str, state: &str, id: Id<State>) {
        self.entries.insert((group.to_string(), state.to_string()), id);
    }
}

/// Structural queries over a built graph
pub struct Resolver<'a> {
    graph: &'a StyleGraph,
}

impl<'a> Resolver<'a> {
    /// Create a new resolver
    pub fn new(graph: &'a StyleGraph) -> Self {
        Self { graph }
    }

    /// Class by name, local first, then inherited from the block's bases
    pub fn resolve_class(&self, block: Id<Block>, name: &str) -> Option<Id<BlockClass>> {
        self.graph.resolve_child(block, name)
    }

    /// Group by name, local first, then inherited
    pub fn resolve_group(&self, class: Id<BlockClass>, name: &str) -> Option<Id<StateGroup>> {
        self.graph.resolve_child(class, name)
    }

    /// Resolve the group, then the state within it.
    ///
    /// `state = None` asks for the group's universal (boolean) state.
    pub fn resolve_state(
        &self,
        class: Id<BlockClass>,
        group: &str,
        state: Option<&str>,
    ) -> Option<Id<State>> {
        let group = self.resolve_group(class, group)?;
        self.graph
            .resolve_child(group, state.unwrap_or(UNIVERSAL_STATE))
    }

    /// States of `group` (or of every group when `None`) merged across the
    /// whole inheritance chain of `class`.
    ///
    /// A group missing from some link of the chain contributes nothing there.
    pub fn resolve_states(&self, class: Id<BlockClass>, group: Option<&str>) -> StateMap {
        let mut chain = self.graph.inheritance_farthest_first(class);
        chain.push(class);

        let mut resolved = StateMap::default();
        for entity in chain {
            let groups: Vec<Option<Id<StateGroup>>> = match group {
                Some(name) => vec![self.graph.get_child(entity, name)],
                None => self.graph.children(entity).iter().copied().map(Some).collect(),
            };

            for group in groups.into_iter().flatten() {
                let group_name = self.graph.group(group).name();
                for &state in self.graph.children(group) {
                    resolved.insert(group_name, self.graph.state(state).name(), state);
                }
            }
        }
        resolved
    }

    /// Universal states of the class's own groups that have no named substates.
    ///
    /// Inheritance is not consulted.
    pub fn boolean_states(&self, class: Id<BlockClass>) -> Vec<Id<State>> {
        self.graph
            .children(class)
            .iter()
            .map(|&group| self.graph.group(group))
            .filter(|group| !group.has_sub_states())
            .filter_map(|group| group.universal_state())
            .collect()
    }
}
