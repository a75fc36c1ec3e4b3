//! Typed per-field extraction with the endpoint's falsy-fallback semantics.
//!
//! The endpoint omits most response fields freely. Each extractor returns
//! `Some` only for a usable value; the caller applies the documented default
//! otherwise. A falsy value (empty string, zero, NaN, `false`) counts the
//! same as a missing one.

use crate::types::CreativeId;

/// A string field is usable only when non-empty.
#[must_use]
pub fn non_empty_str(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// A numeric field is usable unless it is zero or NaN.
#[must_use]
pub fn nonzero_f64(value: Option<f64>) -> Option<f64> {
    value.filter(|n| *n != 0.0 && !n.is_nan())
}

/// Strictly positive numbers only; used for the test-CPM override gate.
#[must_use]
pub fn positive_f64(value: Option<f64>) -> Option<f64> {
    value.filter(|n| *n > 0.0)
}

/// A dimension or TTL is usable unless it is zero.
#[must_use]
pub fn nonzero_u64(value: Option<u64>) -> Option<u64> {
    value.filter(|n| *n != 0)
}

/// A boolean field is usable only when `true`: an explicit `false` is
/// indistinguishable from an absent field, and both fall through to the
/// caller's default. The endpoint cannot signal `false` through this path.
#[must_use]
pub fn truthy_bool(value: Option<bool>) -> Option<bool> {
    value.filter(|b| *b)
}

/// A creative id is usable unless it is the empty string or zero.
#[must_use]
pub fn truthy_creative_id(value: Option<&CreativeId>) -> Option<&CreativeId> {
    value.filter(|id| match id {
        CreativeId::Number(n) => *n != 0,
        CreativeId::Text(s) => !s.is_empty(),
    })
}
