//! Explainability for inclusivity results
//!
//! Provides output structures that show how aggregate results were computed,
//! with per-attribute score breakdowns for transparency. This is a thin
//! convenience layer over the scoring pipeline; all invariants come from the
//! registry, vector builder, and aggregation engine underneath.

use crate::aggregate::Inclusivity;
use crate::error::Result;
use crate::profile::{Item, Person};
use crate::registry::ScorerRegistry;
use crate::vector::VectorBuilder;
use serde::Serialize;
use std::collections::BTreeMap;

/// One item's aggregate result with its per-attribute score breakdown
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedItem {
    /// Position of the item in the input set
    pub index: usize,
    /// Per-attribute representativeness scores
    pub attribute_scores: BTreeMap<String, f64>,
    /// The item's aggregate result under the chosen strategy
    pub aggregate: f64,
}

/// Full inclusivity report for an item set
#[derive(Debug, Clone, Serialize)]
pub struct InclusionReport {
    /// Strategy used to aggregate each item's score vector
    pub strategy: Inclusivity,
    /// One explained entry per item, in input order
    pub items: Vec<ExplainedItem>,
}

impl InclusionReport {
    /// Run the full pipeline for an item set and attach breakdowns
    ///
    /// # Errors
    /// Propagates any scoring or aggregation failure unchanged; no partial
    /// report is returned.
    pub fn compute(
        registry: &ScorerRegistry,
        items: &[Item],
        person: &Person,
        strategy: Inclusivity,
    ) -> Result<Self> {
        let builder = VectorBuilder::new(registry);
        let keys = VectorBuilder::matrix_keys(items, person);
        let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();

        let matrix: Vec<_> = items
            .iter()
            .map(|item| builder.score_with_keys(item, person, &key_refs))
            .collect::<Result<_>>()?;
        let aggregates = strategy.aggregate_matrix(&matrix)?;

        let items = matrix
            .into_iter()
            .zip(aggregates)
            .enumerate()
            .map(|(index, (vector, aggregate))| ExplainedItem {
                index,
                attribute_scores: keys.iter().cloned().zip(vector).collect(),
                aggregate,
            })
            .collect();

        Ok(Self { strategy, items })
    }

    /// Aggregate results in item order, for downstream set comparison
    pub fn aggregates(&self) -> Vec<f64> {
        self.items.iter().map(|item| item.aggregate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ScorerKind;
    use serde_json::json;

    fn demo_registry() -> ScorerRegistry {
        ScorerRegistry::builder()
            .attribute("gender", ScorerKind::ExactMatch)
            .attribute("skin", ScorerKind::Ratio { invert: false })
            .attribute("age", ScorerKind::DistanceNormalized { max_range: 100.0 })
            .build()
            .unwrap()
    }

    fn demo_items() -> Vec<Item> {
        vec![
            Item::from_value(json!({"gender": 1.0, "skin": 5, "age": 31})).unwrap(),
            Item::from_value(json!({"gender": 1.0, "skin": 4, "age": 23})).unwrap(),
        ]
    }

    #[test]
    fn test_report_structure() {
        let registry = demo_registry();
        let person = Person::from_value(json!({"gender": 1.0, "skin": 6, "age": 70})).unwrap();

        let report =
            InclusionReport::compute(&registry, &demo_items(), &person, Inclusivity::Egalitarian)
                .unwrap();

        assert_eq!(report.items.len(), 2);
        assert_eq!(report.items[0].index, 0);
        assert_eq!(report.items[0].attribute_scores.len(), 3);
        assert!((report.items[0].aggregate - 0.61).abs() < 1e-12);
        assert_eq!(report.aggregates().len(), 2);
    }

    #[test]
    fn test_report_serialization() {
        let registry = demo_registry();
        let person = Person::from_value(json!({"gender": 1.0, "skin": 6, "age": 70})).unwrap();

        let report =
            InclusionReport::compute(&registry, &demo_items(), &person, Inclusivity::Utilitarian)
                .unwrap();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"strategy\":\"utilitarian\""));
        assert!(json.contains("\"attribute_scores\""));
        assert!(json.contains("\"aggregate\""));
    }

    #[test]
    fn test_report_fails_atomically() {
        let registry = demo_registry();
        // zero skin on the person makes every ratio divisor zero
        let person = Person::from_value(json!({"gender": 1.0, "skin": 0, "age": 70})).unwrap();

        assert!(InclusionReport::compute(
            &registry,
            &demo_items(),
            &person,
            Inclusivity::Utilitarian
        )
        .is_err());
    }
}
