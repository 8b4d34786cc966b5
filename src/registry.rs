//! Scorer registry: attribute key to scoring function
//!
//! An explicit mapping from attribute name to a pure scoring function,
//! replacing reflection-style dispatch (looking up a same-named method by
//! naming convention) with a lookup by key. The registry is populated at
//! startup and read-only afterwards, which keeps every scoring call
//! deterministic and lets callers score independent items in parallel.

use crate::error::{Error, Result};
use crate::schema::{AttributeSchema, ScorerKind};
use crate::scorer;
use ahash::AHashMap;
use serde_json::Value;
use std::sync::Arc;

/// A registered scoring function: `(item_value, person_value) -> score`
///
/// Must be deterministic, stateless, and side-effect free, and must fail
/// (rather than default) when it cannot compute a value.
pub type ScorerFn = dyn Fn(&Value, &Value) -> Result<f64> + Send + Sync;

/// Immutable registry of per-attribute scoring functions
pub struct ScorerRegistry {
    scorers: AHashMap<String, Arc<ScorerFn>>,
}

impl ScorerRegistry {
    /// Start building a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            scorers: AHashMap::new(),
        }
    }

    /// Build a registry from a validated attribute schema
    pub fn from_schema(schema: &AttributeSchema) -> Result<Self> {
        schema.validate()?;

        let mut builder = Self::builder();
        for (name, kind) in &schema.attributes {
            builder = builder.attribute(name.clone(), *kind);
        }
        builder.build()
    }

    /// Score one attribute of an item against the person's value
    ///
    /// # Errors
    /// `UnknownAttribute` when no scorer is registered for `attribute`;
    /// any scorer failure propagates unchanged, annotated with the key.
    pub fn score(&self, attribute: &str, item_value: &Value, person_value: &Value) -> Result<f64> {
        let scorer = self
            .scorers
            .get(attribute)
            .ok_or_else(|| Error::UnknownAttribute(attribute.to_string()))?;

        scorer(item_value, person_value).map_err(|e| match e {
            Error::InvalidAttributeValue(reason) => {
                Error::InvalidAttributeValue(format!("{attribute}: {reason}"))
            }
            other => other,
        })
    }

    /// Whether a scorer is registered for the given attribute
    pub fn contains(&self, attribute: &str) -> bool {
        self.scorers.contains_key(attribute)
    }

    /// Registered attribute keys in sorted order
    pub fn attribute_keys(&self) -> Vec<&String> {
        let mut keys: Vec<_> = self.scorers.keys().collect();
        keys.sort();
        keys
    }

    /// Number of registered scorers
    pub fn len(&self) -> usize {
        self.scorers.len()
    }

    /// Whether the registry holds no scorers
    pub fn is_empty(&self) -> bool {
        self.scorers.is_empty()
    }
}

impl std::fmt::Debug for ScorerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScorerRegistry")
            .field("attributes", &self.attribute_keys())
            .finish()
    }
}

/// Builder for [`ScorerRegistry`]
///
/// Registering the same key twice replaces the earlier entry, so a custom
/// function can override a built-in rule for any attribute.
pub struct RegistryBuilder {
    scorers: AHashMap<String, Arc<ScorerFn>>,
}

impl RegistryBuilder {
    /// Register a built-in scoring rule for an attribute
    pub fn attribute(mut self, name: impl Into<String>, kind: ScorerKind) -> Self {
        let scorer: Arc<ScorerFn> = match kind {
            ScorerKind::ExactMatch => Arc::new(scorer::exact_match),
            ScorerKind::Ratio { invert } => {
                Arc::new(move |item: &Value, person: &Value| scorer::ratio(item, person, invert))
            }
            ScorerKind::DistanceNormalized { max_range } => {
                Arc::new(move |item: &Value, person: &Value| {
                    scorer::distance_normalized(item, person, max_range)
                })
            }
        };
        self.scorers.insert(name.into(), scorer);
        self
    }

    /// Register a custom scoring function for an attribute
    pub fn scorer<F>(mut self, name: impl Into<String>, scorer: F) -> Self
    where
        F: Fn(&Value, &Value) -> Result<f64> + Send + Sync + 'static,
    {
        self.scorers.insert(name.into(), Arc::new(scorer));
        self
    }

    /// Finalize the registry
    ///
    /// # Errors
    /// `EmptySchema` when no scorers were registered.
    pub fn build(self) -> Result<ScorerRegistry> {
        if self.scorers.is_empty() {
            return Err(Error::EmptySchema);
        }

        log::debug!("scorer registry built with {} attributes", self.scorers.len());
        Ok(ScorerRegistry {
            scorers: self.scorers,
        })
    }
}
