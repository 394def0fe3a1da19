//! Style Graph - the owning registry of every entity
//!
//! Holds one arena per entity kind. All structural operations are generic
//! over the `Style` / `Container` capabilities, so the same named-child and
//! inheritance logic serves blocks, classes, state groups and states.

use crate::entity::{Block, BlockClass, Rulesets, State, StateGroup, ROOT_CLASS_NAME};
use crate::id::Id;
use crate::style::{Arena, Container, Style};
use crate::{Error, Result};

/// In-memory style hierarchy for one compilation.
///
/// Built by a single writer (the stylesheet loader), then queried read-only
/// during resolution and code generation.
#[derive(Debug, Default, Clone)]
pub struct StyleGraph {
    blocks: Arena<Block>,
    classes: Arena<BlockClass>,
    groups: Arena<StateGroup>,
    states: Arena<State>,
}

impl StyleGraph {
    /// Create a new empty style graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block together with its root class
    pub fn add_block(&mut self, name: impl Into<String>) -> Id<Block> {
        let name = name.into();
        let block_id = Id::new(self.blocks.len());
        let root = self.classes.alloc(BlockClass::new(block_id, ROOT_CLASS_NAME));
        let id = self.blocks.alloc(Block::new(name.as_str(), root));
        debug_assert_eq!(id, block_id);
        tracing::debug!(block = %name, "added block");
        id
    }

    /// First block registered under `name`
    pub fn block_named(&self, name: &str) -> Option<Id<Block>> {
        self.blocks
            .iter()
            .find(|(_, block)| block.name() == name)
            .map(|(id, _)| id)
    }

    /// Entity behind `id`
    pub fn get<S: Style>(&self, id: Id<S>) -> &S {
        S::arena(self).get(id)
    }

    pub fn block(&self, id: Id<Block>) -> &Block {
        self.blocks.get(id)
    }

    pub fn class(&self, id: Id<BlockClass>) -> &BlockClass {
        self.classes.get(id)
    }

    pub fn group(&self, id: Id<StateGroup>) -> &StateGroup {
        self.groups.get(id)
    }

    pub fn state(&self, id: Id<State>) -> &State {
        self.states.get(id)
    }

    pub fn root_class(&self, block: Id<Block>) -> Id<BlockClass> {
        self.block(block).root_class()
    }

    /// Mutable access to a class's declarations
    pub fn rulesets_mut(&mut self, class: Id<BlockClass>) -> &mut Rulesets {
        self.classes.get_mut(class).rulesets_mut()
    }

    // =========================================================================
    // Named children
    // =========================================================================

    /// Directly-owned child with this name; inheritance is not consulted
    pub fn get_child<C: Container>(&self, parent: Id<C>, name: &str) -> Option<Id<C::Child>> {
        self.get(parent).children().get(name)
    }

    /// All directly-owned children in insertion order
    pub fn children<C: Container>(&self, parent: Id<C>) -> &[Id<C::Child>] {
        self.get(parent).children().ids()
    }

    /// Return the child named `name`, creating it if absent
    pub fn ensure_child<C: Container>(&mut self, parent: Id<C>, name: &str) -> Id<C::Child> {
        if let Some(existing) = self.get_child(parent, name) {
            return existing;
        }

        let child = C::new_child(parent, name);
        let id = <C::Child as Style>::arena_mut(self).alloc(child);
        C::arena_mut(self)
            .get_mut(parent)
            .children_mut()
            .insert(name, id);

        let kind = <C::Child as Style>::KIND;
        tracing::debug!(kind, name, parent = self.get(parent).name(), "created");
        id
    }

    /// Look up a child locally, then on each ancestor nearest-first
    pub fn resolve_child<C: Container>(&self, parent: Id<C>, name: &str) -> Option<Id<C::Child>> {
        self.get_child(parent, name).or_else(|| {
            self.inheritance(parent)
                .into_iter()
                .find_map(|ancestor| self.get_child(ancestor, name))
        })
    }

    // =========================================================================
    // Inheritance
    // =========================================================================

    pub fn base<S: Style>(&self, id: Id<S>) -> Option<Id<S>> {
        self.get(id).base()
    }

    /// Set or clear the inheritance base of `id`.
    ///
    /// A link that would make `id` its own ancestor is rejected and the
    /// graph is left unchanged. Every chain in the graph is therefore finite.
    pub fn set_base<S: Style>(&mut self, id: Id<S>, base: Option<Id<S>>) -> Result<()> {
        if let Some(base) = base {
            let mut current = Some(base);
            while let Some(step) = current {
                if step == id {
                    let name = self.get(id).name();
                    let base_name = self.get(base).name();
                    tracing::warn!(kind = S::KIND, name, base = base_name, "rejected inheritance cycle");
                    return Err(Error::InheritanceCycle(format!(
                        "{} '{}' cannot inherit from '{}'",
                        S::KIND,
                        name,
                        base_name
                    )));
                }
                current = self.get(step).base();
            }
        }

        S::arena_mut(self).get_mut(id).replace_base(base);
        if let Some(base) = base {
            tracing::debug!(
                kind = S::KIND,
                name = self.get(id).name(),
                base = self.get(base).name(),
                "linked base"
            );
        }
        Ok(())
    }

    /// Ancestor chain starting at the immediate base
    pub fn inheritance<S: Style>(&self, id: Id<S>) -> Vec<Id<S>> {
        let mut chain = Vec::new();
        let mut current = self.base(id);
        while let Some(ancestor) = current {
            chain.push(ancestor);
            current = self.base(ancestor);
        }
        chain
    }

    /// Ancestor chain starting at the farthest ancestor
    pub fn inheritance_farthest_first<S: Style>(&self, id: Id<S>) -> Vec<Id<S>> {
        let mut chain = self.inheritance(id);
        chain.reverse();
        chain
    }

    // =========================================================================
    // Arenas
    // =========================================================================

    pub fn blocks(&self) -> &Arena<Block> {
        &self.blocks
    }

    pub fn classes(&self) -> &Arena<BlockClass> {
        &self.classes
    }

    pub fn groups(&self) -> &Arena<StateGroup> {
        &self.groups
    }

    pub fn states(&self) -> &Arena<State> {
        &self.states
    }

    pub(crate) fn blocks_mut(&mut self) -> &mut Arena<Block> {
        &mut self.blocks
    }

    pub(crate) fn classes_mut(&mut self) -> &mut Arena<BlockClass> {
        &mut self.classes
    }

    pub(crate) fn groups_mut(&mut self) -> &mut Arena<StateGroup> {
        &mut self.groups
    }

    pub(crate) fn states_mut(&mut self) -> &mut Arena<State> {
        &mut self.states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::UNIVERSAL_STATE;

    #[test]
    fn test_add_block_creates_root_class() {
        let mut graph = StyleGraph::new();
        let block = graph.add_block("nav");

        let root = graph.root_class(block);
        assert!(graph.class(root).is_root());
        assert_eq!(graph.class(root).block(), block);
        assert_eq!(graph.get_child(block, ROOT_CLASS_NAME), Some(root));
        assert_eq!(graph.block_named("nav"), Some(block));
        assert_eq!(graph.block_named("missing"), None);
    }

    #[test]
    fn test_ensure_child_is_idempotent() {
        let mut graph = StyleGraph::new();
        let block = graph.add_block("nav");

        let first = graph.ensure_child(block, "item");
        let second = graph.ensure_child(block, "item");
        assert_eq!(first, second);

        // root + item
        assert_eq!(graph.children(block).len(), 2);
        assert_eq!(graph.get_child(block, "item"), Some(first));
    }

    #[test]
    fn test_children_in_insertion_order() {
        let mut graph = StyleGraph::new();
        let block = graph.add_block("b");
        let class = graph.ensure_child(block, "c");
        let group = graph.ensure_child(class, "size");
        let large = graph.ensure_child(group, "large");
        let small = graph.ensure_child(group, "small");

        assert_eq!(graph.children(group), &[large, small]);
        assert_eq!(graph.state(small).group(), group);
        assert_eq!(graph.group(group).class(), class);
    }

    fn child_names<C: Container>(graph: &StyleGraph, parent: Id<C>) -> Vec<&str> {
        graph
            .children(parent)
            .iter()
            .map(|&child| graph.get(child).name())
            .collect()
    }

    #[test]
    fn test_children_generic_over_every_level() {
        let mut graph = StyleGraph::new();
        let block = graph.add_block("b");
        let class = graph.ensure_child(block, "item");
        let group = graph.ensure_child(class, "size");
        graph.ensure_child(group, "small");
        graph.ensure_child(group, UNIVERSAL_STATE);

        assert_eq!(child_names(&graph, block), vec![ROOT_CLASS_NAME, "item"]);
        assert_eq!(child_names(&graph, class), vec!["size"]);
        assert_eq!(child_names(&graph, group), vec!["small", UNIVERSAL_STATE]);
    }

    #[test]
    fn test_get_child_ignores_inheritance() {
        let mut graph = StyleGraph::new();
        let parent = graph.add_block("parent");
        let child = graph.add_block("child");
        graph.ensure_child(parent, "inherited");
        graph.set_base(child, Some(parent)).unwrap();

        assert!(graph.get_child(child, "inherited").is_none());
        assert!(graph.resolve_child(child, "inherited").is_some());
    }

    #[test]
    fn test_resolve_child_prefers_nearest() {
        let mut graph = StyleGraph::new();
        let far = graph.add_block("far");
        let near = graph.add_block("near");
        let leaf = graph.add_block("leaf");

        let far_item = graph.ensure_child(far, "item");
        let near_item = graph.ensure_child(near, "item");
        let far_only = graph.ensure_child(far, "only");

        graph.set_base(near, Some(far)).unwrap();
        graph.set_base(leaf, Some(near)).unwrap();

        assert_eq!(graph.resolve_child(leaf, "item"), Some(near_item));
        assert_ne!(graph.resolve_child(leaf, "item"), Some(far_item));
        assert_eq!(graph.resolve_child(leaf, "only"), Some(far_only));
        assert_eq!(graph.resolve_child(leaf, "nothing"), None);
    }

    #[test]
    fn test_inheritance_chain_order() {
        let mut graph = StyleGraph::new();
        let a = graph.add_block("a");
        let b = graph.add_block("b");
        let c = graph.add_block("c");
        graph.set_base(b, Some(a)).unwrap();
        graph.set_base(c, Some(b)).unwrap();

        assert_eq!(graph.inheritance(c), vec![b, a]);
        assert_eq!(graph.inheritance_farthest_first(c), vec![a, b]);
        assert!(graph.inheritance(a).is_empty());
    }

    #[test]
    fn test_set_base_rejects_self_link() {
        let mut graph = StyleGraph::new();
        let a = graph.add_block("a");

        let err = graph.set_base(a, Some(a)).unwrap_err();
        assert!(matches!(err, Error::InheritanceCycle(_)));
        assert_eq!(graph.base(a), None);
    }

    #[test]
    fn test_set_base_rejects_longer_cycle() {
        let mut graph = StyleGraph::new();
        let a = graph.add_block("a");
        let b = graph.add_block("b");
        let c = graph.add_block("c");
        let ca = graph.ensure_child(a, "x");
        let cb = graph.ensure_child(b, "x");

        graph.set_base(b, Some(a)).unwrap();
        graph.set_base(c, Some(b)).unwrap();
        assert!(graph.set_base(a, Some(c)).is_err());
        assert_eq!(graph.base(a), None);

        // Classes are checked the same way
        graph.set_base(cb, Some(ca)).unwrap();
        assert!(graph.set_base(ca, Some(cb)).is_err());
    }

    #[test]
    fn test_clearing_base() {
        let mut graph = StyleGraph::new();
        let a = graph.add_block("a");
        let b = graph.add_block("b");
        graph.set_base(b, Some(a)).unwrap();
        graph.set_base(b, None).unwrap();

        assert!(graph.inheritance(b).is_empty());
        // Now the reverse link is legal
        graph.set_base(a, Some(b)).unwrap();
        assert_eq!(graph.inheritance(a), vec![b]);
    }
}
