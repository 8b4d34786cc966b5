//! # repscore
//!
//! Representativeness scoring and inclusivity aggregation for subset selection.
//!
//! Given a set of candidate items returned for a query and the requesting
//! individual's attribute profile, this crate scores how well each item's
//! attributes align with the person's (representativeness), and reduces those
//! per-item score vectors into ranking-comparable statistics under three
//! aggregation strategies (inclusivity). The strategies follow the diversity
//! and inclusion metrics for subset selection of Mitchell et al. (2020). It
//! is a pure scoring library: no retrieval, no persistence, no I/O.
//!
//! ## Features
//!
//! - **Scorer registry**: explicit attribute-key → scoring-function mapping,
//!   with exact-match, ratio, and distance-normalized built-ins, each
//!   independently replaceable by a custom function
//! - **Vector builder**: per-item score vectors over shared attributes, with
//!   consistent ordering and atomic failure across an item set
//! - **Three inclusivity strategies**: utilitarian (mean), Nash (geometric
//!   mean), egalitarian (minimum with full lexicographic set comparison)
//! - **Explainability**: per-attribute score breakdown for every aggregate
//!
//! ## Example
//!
//! ```rust
//! use repscore::{Inclusivity, Item, Person, ScorerKind, ScorerRegistry, VectorBuilder};
//! use serde_json::json;
//!
//! // Register one scoring rule per attribute
//! let registry = ScorerRegistry::builder()
//!     .attribute("gender", ScorerKind::ExactMatch)
//!     .attribute("skin", ScorerKind::Ratio { invert: false })
//!     .attribute("age", ScorerKind::DistanceNormalized { max_range: 100.0 })
//!     .build()
//!     .unwrap();
//!
//! // The person's consented attribute snapshot and the candidate items
//! let person = Person::from_value(json!({"gender": 1.0, "skin": 6, "age": 70})).unwrap();
//! let items = vec![
//!     Item::from_value(json!({"gender": 1.0, "skin": 5, "age": 31})).unwrap(),
//!     Item::from_value(json!({"gender": 1.0, "skin": 4, "age": 23})).unwrap(),
//! ];
//!
//! // Score the set and aggregate each item's vector
//! let builder = VectorBuilder::new(&registry);
//! let matrix = builder.score_matrix(&items, &person).unwrap();
//! let results = Inclusivity::Utilitarian.aggregate_matrix(&matrix).unwrap();
//! assert_eq!(results.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Schema    │────>│  Registry   │<────│   custom    │
//! │ (attributes)│     │ (key → fn)  │     │   scorers   │
//! └─────────────┘     └──────┬──────┘     └─────────────┘
//!                            │
//!                     ┌──────▼──────┐     ┌─────────────┐
//!    Item × Person ──>│   Vector    │────>│  Aggregate  │──> per-item results
//!                     │   Builder   │     │ (3 modes)   │    + set ordering
//!                     └─────────────┘     └─────────────┘
//! ```

pub mod aggregate;
pub mod error;
pub mod explain;
pub mod profile;
pub mod registry;
pub mod schema;
pub mod scorer;
pub mod vector;

// Re-export main types for convenience
pub use aggregate::{egalitarian_cmp, geometric_mean, mean, minimum, Inclusivity};
pub use error::{Error, Result};
pub use explain::{ExplainedItem, InclusionReport};
pub use profile::{Item, Person};
pub use registry::{RegistryBuilder, ScorerFn, ScorerRegistry};
pub use schema::{AttributeSchema, ScorerKind};
pub use vector::{ScoreMatrix, ScoreVector, VectorBuilder};
