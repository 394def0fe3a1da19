//! Analysis attributes - the authored form handed to the optimizer
//!
//! Each class contributes one `class` attribute record to the elements it is
//! applied to. Values serialize as JSON, e.g.
//! `{"name":"class","value":{"oneOf":[{"constant":":scope"},"absent"]}}`.

use serde::{Deserialize, Serialize};

/// Attribute name every class record is filed under
pub const CLASS_ATTRIBUTE: &str = "class";

/// Possible values of an authored attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeValue {
    /// Exactly this token
    Constant(String),
    /// The token is not present
    Absent,
    /// Any one of the listed values
    OneOf(Vec<AttributeValue>),
}

impl AttributeValue {
    /// True if the attribute may be left off the element entirely
    pub fn allows_absent(&self) -> bool {
        match self {
            AttributeValue::Absent => true,
            AttributeValue::Constant(_) => false,
            AttributeValue::OneOf(values) => values.iter().any(AttributeValue::allows_absent),
        }
    }
}

/// One authored attribute record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: AttributeValue,
}

impl Attribute {
    /// A `class` attribute with the given value
    pub fn class(value: AttributeValue) -> Self {
        Self {
            name: CLASS_ATTRIBUTE.to_string(),
            value,
        }
    }
}
