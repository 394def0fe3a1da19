//! Entity hierarchy - Block → BlockClass → StateGroup → State
//!
//! Ownership is strictly top-down: a Block owns its classes, a class owns its
//! state groups, a group owns its states. Each entity also holds the id of its
//! owner and, optionally, the id of a same-kind entity it inherits from.

pub mod block;
pub mod class;
pub mod group;
pub mod state;

pub use block::Block;
pub use class::{BlockClass, Rulesets};
pub use group::StateGroup;
pub use state::State;

/// Reserved class name of a block's root class
pub const ROOT_CLASS_NAME: &str = ":scope";

/// Reserved state name of a group's boolean (on/off) state
pub const UNIVERSAL_STATE: &str = "::universal";
