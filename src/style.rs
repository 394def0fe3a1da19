//! Style capabilities - the shared shape of every hierarchy level
//!
//! Every entity (Block, BlockClass, StateGroup, State) is a `Style`: it has a
//! name unique within its parent and an optional inheritance base of its own
//! kind. Every level except State is also a `Container` of uniquely-named
//! children of the next level down.

use std::collections::HashMap;

use crate::graph::StyleGraph;
use crate::id::Id;

/// Capability shared by all four entity kinds.
pub trait Style: Sized + 'static {
    /// Kind label used in diagnostics
    const KIND: &'static str;

    /// Name, unique among the siblings of this entity
    fn name(&self) -> &str;

    /// Declared inheritance base, if any
    fn base(&self) -> Option<Id<Self>>;

    /// Overwrite the base link. `StyleGraph::set_base` is the checked entry point.
    fn replace_base(&mut self, base: Option<Id<Self>>);

    /// The arena in `graph` that stores entities of this kind
    fn arena(graph: &StyleGraph) -> &Arena<Self>;

    fn arena_mut(graph: &mut StyleGraph) -> &mut Arena<Self>;
}

/// A `Style` that owns a set of uniquely-named children.
pub trait Container: Style {
    type Child: Style;

    fn children(&self) -> &Children<Self::Child>;

    fn children_mut(&mut self) -> &mut Children<Self::Child>;

    /// Construct a fresh child owned by `parent`
    fn new_child(parent: Id<Self>, name: &str) -> Self::Child;
}

/// Insertion-ordered set of uniquely-named children.
///
/// Order carries no meaning beyond making output deterministic.
#[derive(Debug, Clone)]
pub struct Children<T> {
    order: Vec<Id<T>>,
    by_name: HashMap<String, Id<T>>,
}

impl<T> Default for Children<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            by_name: HashMap::new(),
        }
    }
}

impl<T> Children<T> {
    /// Directly-owned child with this name
    pub fn get(&self, name: &str) -> Option<Id<T>> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All children in insertion order
    pub fn ids(&self) -> &[Id<T>] {
        &self.order
    }

    /// Child names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, id: Id<T>) {
        self.by_name.insert(name.into(), id);
        self.order.push(id);
    }
}

/// Append-only storage for one entity kind.
///
/// Entities are never removed; a whole graph is dropped at once.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    nodes: Vec<T>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T> Arena<T> {
    /// Entity behind `id`.
    ///
    /// Panics if `id` was issued by a different graph.
    pub fn get(&self, id: Id<T>) -> &T {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All entities with their ids, in creation order
    pub fn iter(&self) -> impl Iterator<Item = (Id<T>, &T)> {
        self.nodes.iter().enumerate().map(|(i, node)| (Id::new(i), node))
    }

    pub(crate) fn get_mut(&mut self, id: Id<T>) -> &mut T {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn alloc(&mut self, node: T) -> Id<T> {
        let id = Id::new(self.nodes.len());
        self.nodes.push(node);
        id
    }
}
