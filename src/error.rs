//! Custom error types.

use thiserror::Error;

/// Returned whenever a supplied range is not a bounded half-open interval at
/// least one integer wide (`end - begin >= 1`).
///
/// Validation happens before any mutation, so a rejected [`add`][crate::RangeList::add]
/// or [`remove`][crate::RangeList::remove] call leaves the list completely unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("provided range is invalid: need a bounded range containing at least one integer")]
pub struct InvalidRangeError;
