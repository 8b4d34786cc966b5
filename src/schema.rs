//! Attribute schema definitions
//!
//! Defines the declarative configuration for representativeness scoring.
//! The schema specifies, per attribute key, which built-in scoring rule to
//! apply and its parameters. An external configuration surface can hand this
//! in as data (it serializes with a tagged `type` field).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attribute schema version 1
///
/// Maps each attribute key to the scoring rule used to compare an item's
/// value against a person's value for that attribute. Built once at startup
/// and treated as read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeSchema {
    /// Schema version for future compatibility
    #[serde(default = "default_version")]
    pub version: u32,

    /// Scorer configurations keyed by attribute name
    pub attributes: HashMap<String, ScorerKind>,
}

fn default_version() -> u32 {
    1
}

impl AttributeSchema {
    /// Create a new attribute schema with the given scorer configurations
    pub fn new(attributes: HashMap<String, ScorerKind>) -> Self {
        Self {
            version: 1,
            attributes,
        }
    }

    /// Validate the schema
    ///
    /// Rejects an empty schema and any scorer parameters that would make a
    /// computation undefined (e.g. a non-positive `max_range`).
    pub fn validate(&self) -> Result<()> {
        if self.attributes.is_empty() {
            return Err(Error::EmptySchema);
        }

        for (name, kind) in &self.attributes {
            if let ScorerKind::DistanceNormalized { max_range } = kind {
                if !max_range.is_finite() || *max_range <= 0.0 {
                    return Err(Error::InvalidConfig(format!(
                        "attribute '{name}': max_range must be finite and positive, got {max_range}"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Get attribute keys in a deterministic order (sorted)
    pub fn sorted_attribute_keys(&self) -> Vec<&String> {
        let mut names: Vec<_> = self.attributes.keys().collect();
        names.sort();
        names
    }

    /// Get the scorer configuration for an attribute by name
    pub fn get(&self, name: &str) -> Option<&ScorerKind> {
        self.attributes.get(name)
    }
}

/// Built-in scoring rule for a single attribute
///
/// Each variant is a pure, deterministic comparison of an item value against
/// a person value. Higher scores mean better alignment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScorerKind {
    /// 1.0 when the two values are equal, 0.0 otherwise. Range [0, 1].
    ExactMatch,

    /// Literal `item / person` ratio (`person / item` when `invert` is set).
    ///
    /// Not symmetric, and unbounded above 1.0 when the numerator exceeds the
    /// divisor; the published formula carries no upper clamp and is preserved
    /// as-is. Fails on a zero divisor.
    Ratio {
        #[serde(default)]
        invert: bool,
    },

    /// `1 - |item - person| / max_range`, clamped to [0, 1].
    DistanceNormalized { max_range: f64 },
}
