//! Person and Item attribute bags
//!
//! Both sides of a representativeness comparison are immutable collections of
//! named attribute values. Values are heterogeneous (`serde_json::Value`):
//! categorical attributes travel as strings or booleans, ordinal and numeric
//! attributes as numbers. A given attribute key must use the same
//! representation on both the item and the person.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// The requesting individual's consented attribute profile
///
/// The engine only ever receives an already-authorized snapshot; consent
/// management lives outside this crate. Immutable during a scoring session.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    values: Map<String, Value>,
}

impl Person {
    /// Build a person from a JSON object of attribute values
    ///
    /// # Errors
    /// `InvalidAttributeValue` when the value is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(Error::InvalidAttributeValue(format!(
                "person attributes must be a JSON object, got {other}"
            ))),
        }
    }

    /// Get the value for an attribute, if present
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.values.get(attribute)
    }

    /// Iterate attribute keys in sorted order
    pub fn attribute_keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }

    /// Number of attributes in the profile
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the profile holds no attributes
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One candidate result for a query
///
/// Holds a value for each attribute the item exposes. Created by the caller
/// per query result and immutable once scored.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    values: Map<String, Value>,
}

impl Item {
    /// Build an item from a JSON object of attribute values
    ///
    /// # Errors
    /// `InvalidAttributeValue` when the value is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(Error::InvalidAttributeValue(format!(
                "item attributes must be a JSON object, got {other}"
            ))),
        }
    }

    /// Get the value for an attribute, if present
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.values.get(attribute)
    }

    /// Iterate attribute keys in sorted order
    pub fn attribute_keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }
}
