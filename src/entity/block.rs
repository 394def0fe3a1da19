use crate::entity::BlockClass;
use crate::graph::StyleGraph;
use crate::id::Id;
use crate::style::{Arena, Children, Container, Style};

/// Root of one stylesheet's hierarchy.
///
/// A block always owns its root class (`:scope`), created together with it.
#[derive(Debug, Clone)]
pub struct Block {
    name: String,
    base: Option<Id<Block>>,
    root: Id<BlockClass>,
    classes: Children<BlockClass>,
}

impl Block {
    pub(crate) fn new(name: impl Into<String>, root: Id<BlockClass>) -> Self {
        let mut classes = Children::default();
        classes.insert(super::ROOT_CLASS_NAME, root);
        Self {
            name: name.into(),
            base: None,
            root,
            classes,
        }
    }

    /// The distinguished `:scope` class
    pub fn root_class(&self) -> Id<BlockClass> {
        self.root
    }

    /// Directly-owned class by name (no inheritance)
    pub fn get_class(&self, name: &str) -> Option<Id<BlockClass>> {
        self.classes.get(name)
    }

    pub fn classes(&self) -> &Children<BlockClass> {
        &self.classes
    }
}

impl Style for Block {
    const KIND: &'static str = "block";

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
        graph.blocks()
    }

    fn arena_mut(graph: &mut StyleGraph) -> &mut Arena<Self> {
        graph.blocks_mut()
    }
}

impl Container for Block {
    type Child = BlockClass;

    fn children(&self) -> &Children<BlockClass> {
        &self.classes
    }

    fn children_mut(&mut self) -> &mut Children<BlockClass> {
        &mut self.classes
    }

    fn new_child(parent: Id<Self>, name: &str) -> BlockClass {
        BlockClass::new(parent, name)
    }
}
