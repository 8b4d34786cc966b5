//! Inclusivity aggregation strategies
//!
//! Reduces score vectors to one summary statistic per item under one of three
//! named strategies, and defines the ordering used to rank item-sets:
//!
//! - **Utilitarian**: arithmetic mean; set A beats B when its mean is higher.
//! - **Nash**: geometric mean; a single zero entry collapses the result to 0.
//! - **Egalitarian**: minimum entry; set comparison is lexicographic over
//!   sorted scores, not a single scalar — see [`egalitarian_cmp`].
//!
//! Every strategy is a pure, stateless transform. Errors from a scorer are
//! never caught here; only the aggregation's own domain is checked.

use crate::error::{Error, Result};
use crate::vector::ScoreVector;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Aggregation strategy selecting how a score vector reduces to one scalar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Inclusivity {
    /// Arithmetic mean of the vector's entries
    Utilitarian,
    /// Geometric mean; zero when any entry is zero, undefined over negatives
    Nash,
    /// Minimum entry (maximin); sets compare lexicographically
    Egalitarian,
}

impl Inclusivity {
    /// Reduce one score vector to its aggregate result
    ///
    /// # Errors
    /// `EmptyScoreVector` for a zero-length vector; `InvalidScoreRange` when
    /// Nash aggregation sees a negative entry.
    pub fn aggregate(self, scores: &[f64]) -> Result<f64> {
        match self {
            Self::Utilitarian => mean(scores),
            Self::Nash => geometric_mean(scores),
            Self::Egalitarian => minimum(scores),
        }
    }

    /// Reduce a score matrix to one aggregate result per vector
    ///
    /// Results come back in input order; `result[i]` corresponds to
    /// `matrix[i]`. The first failing vector aborts the whole call.
    pub fn aggregate_matrix(self, matrix: &[ScoreVector]) -> Result<Vec<f64>> {
        matrix.iter().map(|vector| self.aggregate(vector)).collect()
    }
}

/// Arithmetic mean of a score list
pub fn mean(scores: &[f64]) -> Result<f64> {
    if scores.is_empty() {
        return Err(Error::EmptyScoreVector);
    }
    Ok(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Geometric mean of a score list
///
/// Defined only for non-negative entries. A zero entry forces the result to
/// 0.0: any attribute with zero alignment collapses the whole score, which is
/// the intended semantic rather than an error.
///
/// # Errors
/// `InvalidScoreRange` for any negative entry (geometric mean is undefined
/// over negatives); `EmptyScoreVector` for a zero-length list.
pub fn geometric_mean(scores: &[f64]) -> Result<f64> {
    if scores.is_empty() {
        return Err(Error::EmptyScoreVector);
    }
    if let Some(&negative) = scores.iter().find(|score| **score < 0.0) {
        return Err(Error::InvalidScoreRange(negative));
    }
    if scores.contains(&0.0) {
        return Ok(0.0);
    }

    // log-space mean avoids overflow in the raw product
    let log_sum: f64 = scores.iter().map(|score| score.ln()).sum();
    Ok((log_sum / scores.len() as f64).exp())
}

/// Minimum entry of a score list
pub fn minimum(scores: &[f64]) -> Result<f64> {
    if scores.is_empty() {
        return Err(Error::EmptyScoreVector);
    }
    Ok(scores.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Lexicographic egalitarian comparison of two score sets
///
/// Compares the sets' lowest scores first; on a tie, their second-lowest,
/// and so on through every rank. `Ordering::Greater` means `a` is the more
/// inclusive set. Sets that tie at every shared rank are equally inclusive.
///
/// This is the set-ordering contract for [`Inclusivity::Egalitarian`]: ties
/// at the minimum are expected, and "take the min" alone would misrank them.
pub fn egalitarian_cmp(a: &[f64], b: &[f64]) -> Ordering {
    let mut a_sorted = a.to_vec();
    let mut b_sorted = b.to_vec();
    a_sorted.sort_by(f64::total_cmp);
    b_sorted.sort_by(f64::total_cmp);

    for (x, y) in a_sorted.iter().zip(&b_sorted) {
        match x.total_cmp(y) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }
    Ordering::Equal
}
