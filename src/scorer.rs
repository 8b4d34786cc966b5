//! Built-in representativeness scoring functions
//!
//! Each function compares an item's attribute value against a person's value
//! for the same attribute and returns a bounded alignment score where higher
//! means more aligned. All functions are deterministic and stateless, and
//! fail rather than silently defaulting when an input is missing or the
//! computation is undefined.

use crate::error::{Error, Result};
use serde_json::Value;

/// Categorical exact-match scoring
///
/// Returns 1.0 when the two values are equal, 0.0 otherwise. Numbers are
/// compared numerically, so the integer `6` matches the float `6.0`.
///
/// # Returns
/// Score in [0.0, 1.0]
pub fn exact_match(item: &Value, person: &Value) -> Result<f64> {
    if item.is_null() || person.is_null() {
        return Err(Error::InvalidAttributeValue(
            "missing value for exact-match comparison".to_string(),
        ));
    }

    if let (Some(a), Some(b)) = (item.as_f64(), person.as_f64()) {
        return Ok(if a == b { 1.0 } else { 0.0 });
    }

    Ok(if item == person { 1.0 } else { 0.0 })
}

/// Ordinal/ratio alignment scoring
///
/// Returns the literal `item / person` ratio (`person / item` when `invert`
/// is set). The formula is NOT symmetric and is unbounded above 1.0 when the
/// numerator exceeds the divisor; the published formula carries no upper
/// clamp and is preserved as-is rather than corrected here.
///
/// # Errors
/// `InvalidAttributeValue` when either value is non-numeric, the divisor is
/// zero, or the quotient is not finite.
pub fn ratio(item: &Value, person: &Value, invert: bool) -> Result<f64> {
    let item_num = numeric(item)?;
    let person_num = numeric(person)?;

    let (numerator, divisor) = if invert {
        (person_num, item_num)
    } else {
        (item_num, person_num)
    };

    if divisor == 0.0 {
        return Err(Error::InvalidAttributeValue(
            "ratio divisor is zero".to_string(),
        ));
    }

    let score = numerator / divisor;
    if !score.is_finite() {
        return Err(Error::InvalidAttributeValue(format!(
            "ratio {numerator} / {divisor} is not finite"
        )));
    }

    Ok(score)
}

/// Distance-normalized alignment scoring
///
/// Returns `1 - |item - person| / max_range`, clamped to [0.0, 1.0] when the
/// raw value would fall outside the declared bounds.
///
/// # Errors
/// `InvalidAttributeValue` for non-numeric inputs; `InvalidConfig` when
/// `max_range` is not finite and positive.
pub fn distance_normalized(item: &Value, person: &Value, max_range: f64) -> Result<f64> {
    if !max_range.is_finite() || max_range <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "max_range must be finite and positive, got {max_range}"
        )));
    }

    let item_num = numeric(item)?;
    let person_num = numeric(person)?;

    Ok((1.0 - (item_num - person_num).abs() / max_range).clamp(0.0, 1.0))
}

/// Extract a numeric value, failing on anything else
fn numeric(value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| {
        Error::InvalidAttributeValue(format!("expected a numeric value, got {value}"))
    })
}
