//! # Styleblocks - Block-scoped style hierarchy
//!
//! Models the named styling primitives of a block-scoped stylesheet and
//! resolves them for code generation.
//!
//! Styleblocks provides:
//! - An owning registry (`StyleGraph`) of Block → Class → StateGroup → State
//! - Declared inheritance between same-kind entities, guarded against cycles
//! - Inheritance-aware lookup and merging of states (`Resolver`)
//! - Authored and generated (BEM) identifiers for every entity
//! - A TOML hierarchy description loader and configuration

pub mod id;
pub mod style;
pub mod entity;
pub mod graph;
pub mod resolve;
pub mod naming;
pub mod config;
pub mod manifest;
pub mod ui;

// Re-exports for convenient access
pub use id::Id;
pub use style::{Children, Container, Style};
pub use entity::{Block, BlockClass, Rulesets, State, StateGroup, ROOT_CLASS_NAME, UNIVERSAL_STATE};
pub use graph::StyleGraph;
pub use resolve::{Resolver, StateMap};
pub use naming::{Attribute, AttributeValue, Namer, StyleRef};
pub use config::{OutputMode, StyleConfig};

/// Result type alias for Styleblocks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Styleblocks operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inheritance cycle: {0}")]
    InheritanceCycle(String),

    #[error("Naming convention not supported: {0}")]
    UnsupportedOutputMode(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Unknown block: {0}")]
    UnknownBlock(String),

    #[error("Manifest error: {0}")]
    Manifest(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
