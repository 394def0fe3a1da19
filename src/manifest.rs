//! Manifest - TOML description of a style hierarchy
//!
//! Stands in for the stylesheet parser: it declares blocks, their classes,
//! state groups and states, and which block each block extends.
//!
//! ```toml
//! [blocks.base.classes.item]
//! declarations = { color = "red" }
//! states = { size = ["small", "large"], enabled = [] }
//!
//! [blocks.nav]
//! extends = "base"
//! classes.item.states = { size = ["small"] }
//! ```
//!
//! An empty state list declares a boolean group (universal state only).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::OnceLock;

use crate::entity::{Block, ROOT_CLASS_NAME, UNIVERSAL_STATE};
use crate::graph::StyleGraph;
use crate::id::Id;
use crate::style::Style;
use crate::{Error, Result};

static IDENTIFIER: OnceLock<Regex> = OnceLock::new();

fn is_identifier(name: &str) -> bool {
    IDENTIFIER
        .get_or_init(|| Regex::new(r"^-?[_a-zA-Z][_a-zA-Z0-9-]*$").expect("static identifier pattern"))
        .is_match(name)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub blocks: BTreeMap<String, BlockDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDef {
    /// Name of the block this one inherits from
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub classes: BTreeMap<String, ClassDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    /// Group name → state names; empty means boolean group
    #[serde(default)]
    pub states: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub declarations: BTreeMap<String, String>,
}

impl Manifest {
    pub fn parse(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let manifest = Self::parse(&source)?;
        tracing::debug!("Loaded {} blocks from {}", manifest.blocks.len(), path.display());
        Ok(manifest)
    }

    /// Build the graph: create every entity, then wire inheritance
    pub fn build(&self) -> Result<StyleGraph> {
        self.validate()?;

        let mut graph = StyleGraph::new();
        let mut ids: HashMap<&str, Id<Block>> = HashMap::new();

        for (block_name, block_def) in &self.blocks {
            let block = graph.add_block(block_name.as_str());
            ids.insert(block_name.as_str(), block);

            for (class_name, class_def) in &block_def.classes {
                let class = graph.ensure_child(block, class_name);
                for (property, value) in &class_def.declarations {
                    graph.rulesets_mut(class).add(property.as_str(), value.as_str());
                }
                for (group_name, states) in &class_def.states {
                    let group = graph.ensure_child(class, group_name);
                    if states.is_empty() {
                        graph.ensure_child(group, UNIVERSAL_STATE);
                    }
                    for state in states {
                        graph.ensure_child(group, state);
                    }
                }
            }
        }

        // Block links first, so each block's full chain is known
        for (block_name, block_def) in &self.blocks {
            if let Some(extends) = &block_def.extends {
                let base = *ids
                    .get(extends.as_str())
                    .ok_or_else(|| Error::UnknownBlock(format!("'{}' extends unknown block '{}'", block_name, extends)))?;
                graph.set_base(ids[block_name.as_str()], Some(base))?;
            }
        }

        // Ancestors before descendants, so nested links resolve through whole chains
        let mut ordered: Vec<Id<Block>> = ids.values().copied().collect();
        ordered.sort_by_key(|&block| (graph.inheritance(block).len(), block));
        for block in ordered {
            link_inheritance(&mut graph, block)?;
        }

        tracing::info!(
            blocks = graph.blocks().len(),
            classes = graph.classes().len(),
            states = graph.states().len(),
            "Built style graph"
        );
        Ok(graph)
    }

    fn validate(&self) -> Result<()> {
        for (block_name, block_def) in &self.blocks {
            check_identifier("block", block_name)?;
            for (class_name, class_def) in &block_def.classes {
                if class_name != ROOT_CLASS_NAME {
                    check_identifier("class", class_name)?;
                }
                for (group_name, states) in &class_def.states {
                    check_identifier("state group", group_name)?;
                    for state in states {
                        if state != UNIVERSAL_STATE {
                            check_identifier("state", state)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

fn check_identifier(kind: &str, name: &str) -> Result<()> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(Error::InvalidName(format!("{} name '{}' is not a valid identifier", kind, name)))
    }
}

/// Link every class, group and state of `block` to the same-named entity
/// visible from the block's base. A block without a base is left alone.
pub fn link_inheritance(graph: &mut StyleGraph, block: Id<Block>) -> Result<()> {
    let Some(base) = graph.base(block) else {
        return Ok(());
    };

    for class in graph.children(block).to_vec() {
        let class_name = graph.class(class).name().to_string();
        let Some(base_class) = graph.resolve_child(base, &class_name) else {
            continue;
        };
        graph.set_base(class, Some(base_class))?;

        for group in graph.children(class).to_vec() {
            let group_name = graph.group(group).name().to_string();
            let Some(base_group) = graph.resolve_child(base_class, &group_name) else {
                continue;
            };
            graph.set_base(group, Some(base_group))?;

            for state in graph.children(group).to_vec() {
                let state_name = graph.state(state).name().to_string();
                if let Some(base_state) = graph.resolve_child(base_group, &state_name) {
                    graph.set_base(state, Some(base_state))?;
                }
            }
        }
    }
    Ok(())
}
