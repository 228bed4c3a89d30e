//! Serde helpers for wire numbers

use serde::Serializer;

/// Largest magnitude below which every whole `f64` is an exact integer
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Serialize a number the way clients see it: whole values without a
/// fractional part (`36`, not `36.0`), everything else as a float
pub fn number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() < EXACT_INTEGER_LIMIT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
