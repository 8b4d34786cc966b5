//! Representativeness vector construction
//!
//! Builds per-item score vectors by invoking the registered scorer for every
//! attribute an item and a person share. Vectors built for a set of items all
//! use the same attribute keys in the same order, so they stay comparable
//! position by position.

use crate::error::{Error, Result};
use crate::profile::{Item, Person};
use crate::registry::ScorerRegistry;

/// Ordered per-attribute scores for one item against one person
pub type ScoreVector = Vec<f64>;

/// One score vector per item, in the item-set's original order
pub type ScoreMatrix = Vec<ScoreVector>;

/// Builds score vectors and matrices from a frozen scorer registry
#[derive(Debug, Clone, Copy)]
pub struct VectorBuilder<'a> {
    registry: &'a ScorerRegistry,
}

impl<'a> VectorBuilder<'a> {
    pub fn new(registry: &'a ScorerRegistry) -> Self {
        Self { registry }
    }

    /// Attribute keys present on both the item and the person, sorted
    ///
    /// Attributes present on only one side are skipped, not errored: the
    /// engine only scores what both sides declare.
    pub fn shared_keys(item: &Item, person: &Person) -> Vec<String> {
        person
            .attribute_keys()
            .filter(|key| item.get(key).is_some())
            .cloned()
            .collect()
    }

    /// Attribute keys present on the person and on *every* item, sorted
    ///
    /// This is the key list [`score_matrix`](Self::score_matrix) uses, so an
    /// attribute missing from any single item is excluded consistently for
    /// the whole set rather than partially.
    pub fn matrix_keys(items: &[Item], person: &Person) -> Vec<String> {
        person
            .attribute_keys()
            .filter(|key| items.iter().all(|item| item.get(key).is_some()))
            .cloned()
            .collect()
    }

    /// Score one item against the person over their shared attributes
    ///
    /// The vector is ordered by sorted attribute key. Callers that need a
    /// different ordering, or reproducible cross-item comparison over a fixed
    /// key list, should use [`score_with_keys`](Self::score_with_keys).
    ///
    /// # Errors
    /// Fails atomically: any `UnknownAttribute` or `InvalidAttributeValue`
    /// from a scorer aborts the whole vector, never returning a partial one.
    pub fn score_vector(&self, item: &Item, person: &Person) -> Result<ScoreVector> {
        let keys = Self::shared_keys(item, person);
        let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        self.score_with_keys(item, person, &key_refs)
    }

    /// Score one item against the person over an explicit ordered key list
    ///
    /// # Errors
    /// A listed key missing on either side fails with
    /// `InvalidAttributeValue`; scorer failures propagate unchanged.
    pub fn score_with_keys(
        &self,
        item: &Item,
        person: &Person,
        keys: &[&str],
    ) -> Result<ScoreVector> {
        keys.iter()
            .map(|key| {
                let item_value = item.get(key).ok_or_else(|| {
                    Error::InvalidAttributeValue(format!("{key}: missing on item"))
                })?;
                let person_value = person.get(key).ok_or_else(|| {
                    Error::InvalidAttributeValue(format!("{key}: missing on person"))
                })?;
                self.registry.score(key, item_value, person_value)
            })
            .collect()
    }

    /// Score an item set against the person, one vector per item
    ///
    /// Every vector uses the keys from [`matrix_keys`](Self::matrix_keys) in
    /// the same order, and vectors come back in the item-set's input order.
    ///
    /// # Errors
    /// Fails atomically for the whole matrix on the first scorer failure.
    pub fn score_matrix(&self, items: &[Item], person: &Person) -> Result<ScoreMatrix> {
        let keys = Self::matrix_keys(items, person);
        let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();

        log::debug!(
            "scoring {} items over {} shared attributes",
            items.len(),
            keys.len()
        );

        items
            .iter()
            .map(|item| self.score_with_keys(item, person, &key_refs))
            .collect()
    }
}
