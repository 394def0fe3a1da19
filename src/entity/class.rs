use std::sync::OnceLock;

use serde::Serialize;

use crate::entity::{Block, StateGroup, ROOT_CLASS_NAME};
use crate::graph::StyleGraph;
use crate::id::Id;
use crate::naming::{Attribute, AttributeValue};
use crate::style::{Arena, Children, Container, Style};

/// Property declarations attached to a class.
///
/// Stored in authoring order and otherwise left uninterpreted; merging
/// declarations is the job of the ruleset consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rulesets {
    declarations: Vec<(String, String)>,
}

impl Rulesets {
    pub fn add(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.push((property.into(), value.into()));
    }

    /// Last value declared for `property`
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// An authored styling class scoped to its owning block.
#[derive(Debug, Clone)]
pub struct BlockClass {
    name: String,
    block: Id<Block>,
    base: Option<Id<BlockClass>>,
    groups: Children<StateGroup>,
    rulesets: Rulesets,
    /// Filled by the first `as_source_attributes` call, never recomputed
    source_attribute: OnceLock<Attribute>,
}

impl BlockClass {
    pub(crate) fn new(block: Id<Block>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            block,
            base: None,
            groups: Children::default(),
            rulesets: Rulesets::default(),
            source_attribute: OnceLock::new(),
        }
    }

    /// Owning block
    pub fn block(&self) -> Id<Block> {
        self.block
    }

    pub fn is_root(&self) -> bool {
        self.name == ROOT_CLASS_NAME
    }

    pub fn rulesets(&self) -> &Rulesets {
        &self.rulesets
    }

    pub(crate) fn rulesets_mut(&mut self) -> &mut Rulesets {
        &mut self.rulesets
    }

    /// Directly-owned group by name (no inheritance)
    pub fn get_group(&self, name: &str) -> Option<Id<StateGroup>> {
        self.groups.get(name)
    }

    pub fn groups(&self) -> &Children<StateGroup> {
        &self.groups
    }

    /// Authored identifier: `:scope` for the root class, `.name` otherwise.
    pub fn as_source(&self) -> String {
        if self.is_root() {
            ROOT_CLASS_NAME.to_string()
        } else {
            format!(".{}", self.name)
        }
    }

    /// The class attribute this class contributes to an element.
    ///
    /// With `optional_root` set, the root class value becomes "one of
    /// {name, absent}" since the root class is implied by its state
    /// attributes.
    ///
    /// The result is memoized: whichever `optional_root` the first call
    /// passes decides the value for the lifetime of this class.
    pub fn as_source_attributes(&self, optional_root: bool) -> &Attribute {
        self.source_attribute.get_or_init(|| {
            let constant = AttributeValue::Constant(self.name.clone());
            let value = if optional_root && self.is_root() {
                AttributeValue::OneOf(vec![constant, AttributeValue::Absent])
            } else {
                constant
            };
            Attribute::class(value)
        })
    }
}

impl Style for BlockClass {
    const KIND: &'static str = "class";

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
        graph.classes()
    }

    fn arena_mut(graph: &mut StyleGraph) -> &mut Arena<Self> {
        graph.classes_mut()
    }
}

impl Container for BlockClass {
    type Child = StateGroup;

    fn children(&self) -> &Children<StateGroup> {
        &self.groups
    }

    fn children_mut(&mut self) -> &mut Children<StateGroup> {
        &mut self.groups
    }

    fn new_child(parent: Id<Self>, name: &str) -> StateGroup {
        StateGroup::new(parent, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> BlockClass {
        BlockClass::new(Id::new(0), ROOT_CLASS_NAME)
    }

    #[test]
    fn test_as_source() {
        let nav = BlockClass::new(Id::new(0), "nav");
        assert_eq!(nav.as_source(), ".nav");
        assert_eq!(nav.as_source(), nav.as_source());
        assert!(!nav.is_root());

        assert!(root().is_root());
        assert_eq!(root().as_source(), ":scope");
    }

    #[test]
    fn test_optional_root_attribute() {
        let attr = root().as_source_attributes(true).clone();
        assert_eq!(
            attr.value,
            AttributeValue::OneOf(vec![
                AttributeValue::Constant(ROOT_CLASS_NAME.to_string()),
                AttributeValue::Absent,
            ])
        );

        let attr = root().as_source_attributes(false).clone();
        assert_eq!(attr.value, AttributeValue::Constant(ROOT_CLASS_NAME.to_string()));
    }

    #[test]
    fn test_optional_root_ignored_for_plain_class() {
        let nav = BlockClass::new(Id::new(0), "nav");
        assert_eq!(
            nav.as_source_attributes(true).value,
            AttributeValue::Constant("nav".to_string())
        );
    }

    #[test]
    fn test_source_attribute_memoized_by_first_call() {
        let class = root();
        let first = class.as_source_attributes(false).clone();
        let second = class.as_source_attributes(true);

        // The first call's flag wins
        assert_eq!(&first, second);
        assert_eq!(second.value, AttributeValue::Constant(ROOT_CLASS_NAME.to_string()));
    }

    #[test]
    fn test_rulesets_last_declaration_wins() {
        let mut rulesets = Rulesets::default();
        rulesets.add("color", "red");
        rulesets.add("display", "block");
        rulesets.add("color", "blue");

        assert_eq!(rulesets.get("color"), Some("blue"));
        assert_eq!(rulesets.get("margin"), None);
        assert_eq!(rulesets.len(), 3);
    }
}
