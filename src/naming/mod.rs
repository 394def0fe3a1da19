//! Naming & export - authored and generated identifiers
//!
//! Authored identifiers follow the stylesheet syntax (`:scope`, `.nav`,
//! `.nav[state|size=large]`). Generated identifiers follow the configured
//! output convention; for BEM:
//!
//! - root class → `block`
//! - class → `block__class`
//! - boolean state → `block__class--group`
//! - valued state → `block__class--group-value`

pub mod attribute;

pub use attribute::{Attribute, AttributeValue, CLASS_ATTRIBUTE};

use crate::config::{OutputMode, StyleConfig};
use crate::entity::{Block, BlockClass, State};
use crate::graph::StyleGraph;
use crate::id::Id;
use crate::style::Style;

/// Any entity that `all()` can yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRef {
    Class(Id<BlockClass>),
    State(Id<State>),
}

/// Produces identifiers for a graph under one output convention.
pub struct Namer<'a> {
    graph: &'a StyleGraph,
    mode: OutputMode,
}

impl<'a> Namer<'a> {
    pub fn new(graph: &'a StyleGraph, mode: OutputMode) -> Self {
        Self { graph, mode }
    }

    /// Namer using the configured output mode
    pub fn from_config(graph: &'a StyleGraph, config: &StyleConfig) -> Self {
        Self::new(graph, config.output_mode)
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Generated class name for `class`
    pub fn css_class(&self, class: Id<BlockClass>) -> String {
        let class = self.graph.class(class);
        let block = self.graph.block(class.block()).name();
        match self.mode {
            OutputMode::Bem => {
                if class.is_root() {
                    block.to_string()
                } else {
                    format!("{}__{}", block, class.name())
                }
            }
        }
    }

    /// Generated class name for `state`
    pub fn state_css_class(&self, state: Id<State>) -> String {
        let state = self.graph.state(state);
        let group = self.graph.group(state.group());
        let class = self.css_class(group.class());
        match self.mode {
            OutputMode::Bem => {
                if state.is_universal() {
                    format!("{}--{}", class, group.name())
                } else {
                    format!("{}--{}-{}", class, group.name(), state.name())
                }
            }
        }
    }

    /// Authored selector for `state`; root class states omit the `:scope` prefix
    pub fn state_source(&self, state: Id<State>) -> String {
        let state = self.graph.state(state);
        let group = self.graph.group(state.group());
        let class = self.graph.class(group.class());
        let prefix = if class.is_root() {
            String::new()
        } else {
            class.as_source()
        };

        if state.is_universal() {
            format!("{}[state|{}]", prefix, group.name())
        } else {
            format!("{}[state|{}={}]", prefix, group.name(), state.name())
        }
    }

    pub fn source(&self, style: StyleRef) -> String {
        match style {
            StyleRef::Class(class) => self.graph.class(class).as_source(),
            StyleRef::State(state) => self.state_source(state),
        }
    }

    pub fn output(&self, style: StyleRef) -> String {
        match style {
            StyleRef::Class(class) => self.css_class(class),
            StyleRef::State(state) => self.state_css_class(state),
        }
    }

    /// `<source> => <output>` for one entity
    pub fn as_debug(&self, style: StyleRef) -> String {
        format!("{} => {}", self.source(style), self.output(style))
    }

    /// One line per entity of `all(class, false)`
    pub fn debug(&self, class: Id<BlockClass>) -> Vec<String> {
        all(self.graph, class, false)
            .into_iter()
            .map(|style| self.as_debug(style))
            .collect()
    }

    /// Debug lines for every class of `block`, in class order
    pub fn debug_block(&self, block: Id<Block>) -> Vec<String> {
        self.graph
            .children(block)
            .iter()
            .flat_map(|&class| self.debug(class))
            .collect()
    }
}

/// `class` itself, plus every directly-owned state unless `shallow`
pub fn all(graph: &StyleGraph, class: Id<BlockClass>, shallow: bool) -> Vec<StyleRef> {
    let mut result = vec![StyleRef::Class(class)];
    if !shallow {
        result.extend(all_states(graph, class).into_iter().map(StyleRef::State));
    }
    result
}

/// Directly-owned states across all groups of `class`; inherited states are excluded
pub fn all_states(graph: &StyleGraph, class: Id<BlockClass>) -> Vec<Id<State>> {
    graph
        .children(class)
        .iter()
        .flat_map(|&group| graph.children(group).iter().copied())
        .collect()
}

/// Names of the groups `class` owns directly
pub fn group_names(graph: &StyleGraph, class: Id<BlockClass>) -> Vec<&str> {
    graph
        .children(class)
        .iter()
        .map(|&group| graph.group(group).name())
        .collect()
}

/// One source attribute per class of `block`.
///
/// Memoized per class; see `BlockClass::as_source_attributes`.
pub fn block_attributes(graph: &StyleGraph, block: Id<Block>, optional_root: bool) -> Vec<&Attribute> {
    graph
        .children(block)
        .iter()
        .map(|&class| graph.class(class).as_source_attributes(optional_root))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::UNIVERSAL_STATE;

    /// Block `B` with root class and `nav`; `nav` has `size` (small, large)
    /// and boolean `enabled`.
    fn sample() -> (StyleGraph, Id<Block>, Id<BlockClass>) {
        let mut graph = StyleGraph::new();
        let block = graph.add_block("B");
        let nav = graph.ensure_child(block, "nav");
        let size = graph.ensure_child(nav, "size");
        graph.ensure_child(size, "small");
        graph.ensure_child(size, "large");
        let enabled = graph.ensure_child(nav, "enabled");
        graph.ensure_child(enabled, UNIVERSAL_STATE);
        (graph, block, nav)
    }

    #[test]
    fn test_bem_class_names() {
        let (graph, block, nav) = sample();
        let namer = Namer::new(&graph, OutputMode::Bem);

        assert_eq!(namer.css_class(nav), "B__nav");
        assert_eq!(namer.css_class(graph.root_class(block)), "B");
    }

    #[test]
    fn test_bem_state_names() {
        let (graph, block, nav) = sample();
        let namer = Namer::new(&graph, OutputMode::Bem);

        let size = graph.get_child(nav, "size").unwrap();
        let small = graph.get_child(size, "small").unwrap();
        let enabled = graph.get_child(nav, "enabled").unwrap();
        let on = graph.get_child(enabled, UNIVERSAL_STATE).unwrap();

        assert_eq!(namer.state_css_class(small), "B__nav--size-small");
        assert_eq!(namer.state_css_class(on), "B__nav--enabled");
        assert_eq!(namer.state_source(small), ".nav[state|size=small]");
        assert_eq!(namer.state_source(on), ".nav[state|enabled]");

        // Root class states drop the `:scope` prefix
        let mut graph = graph;
        let root = graph.root_class(block);
        let theme = graph.ensure_child(root, "theme");
        let dark = graph.ensure_child(theme, "dark");
        let namer = Namer::new(&graph, OutputMode::Bem);
        assert_eq!(namer.state_source(dark), "[state|theme=dark]");
        assert_eq!(namer.state_css_class(dark), "B--theme-dark");
    }

    #[test]
    fn test_all_and_all_states() {
        let (graph, _, nav) = sample();

        assert_eq!(all(&graph, nav, true), vec![StyleRef::Class(nav)]);

        let everything = all(&graph, nav, false);
        assert_eq!(everything.len(), 4);
        assert_eq!(everything[0], StyleRef::Class(nav));
        assert_eq!(all_states(&graph, nav).len(), 3);
        assert_eq!(group_names(&graph, nav), vec!["size", "enabled"]);
    }

    #[test]
    fn test_all_states_excludes_inherited() {
        let (mut graph, block, nav) = sample();
        let child_block = graph.add_block("C");
        let child_nav = graph.ensure_child(child_block, "nav");
        graph.set_base(child_block, Some(block)).unwrap();
        graph.set_base(child_nav, Some(nav)).unwrap();

        assert!(all_states(&graph, child_nav).is_empty());
        assert!(group_names(&graph, child_nav).is_empty());
    }

    #[test]
    fn test_namer_from_config() {
        let (graph, _, nav) = sample();
        let config = StyleConfig::default();
        let namer = Namer::from_config(&graph, &config);

        assert_eq!(namer.mode(), OutputMode::Bem);
        assert_eq!(namer.css_class(nav), "B__nav");
    }

    #[test]
    fn test_debug_one_line_per_entity() {
        let (graph, _, nav) = sample();
        let namer = Namer::new(&graph, OutputMode::Bem);

        let lines = namer.debug(nav);
        assert_eq!(
            lines,
            vec![
                ".nav => B__nav",
                ".nav[state|size=small] => B__nav--size-small",
                ".nav[state|size=large] => B__nav--size-large",
                ".nav[state|enabled] => B__nav--enabled",
            ]
        );
    }

    #[test]
    fn test_block_attributes_one_per_class() {
        let (graph, block, _) = sample();
        let attrs = block_attributes(&graph, block, true);

        assert_eq!(attrs.len(), 2);
        assert!(attrs[0].value.allows_absent());
        assert_eq!(attrs[1].value, AttributeValue::Constant("nav".to_string()));
    }
}
