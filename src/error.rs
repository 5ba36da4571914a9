// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error taxonomy for calendar interval operations.
//!
//! Every failure is reported synchronously at the call that triggers it
//! (construction, rebind, or generator construction).  This is a pure
//! computation library with no transient failure modes; nothing is retried
//! internally.  Callers should treat every variant except [`Range`] as a
//! programming-contract violation — [`Range`] can legitimately surface from
//! user-supplied pentad or month numbers and is worth catching at the
//! boundary.
//!
//! [`Range`]: CalendarError::Range

use thiserror::Error;

/// Errors produced by interval construction, rebinding, and generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// A resolution-class-sensitive operation was applied at the wrong
    /// class, e.g. hour-grain stepping over date-resolution points or a
    /// date truncation that would move a mid-day bound.
    #[error("resolution mismatch: {0}")]
    TypeMismatch(&'static str),

    /// An explicit bound rebind would place the lower bound after the
    /// upper bound.
    #[error("rebind would place the lower bound after the upper bound")]
    OrderingViolation,

    /// A generator was asked to begin stepping from an absent bound.
    #[error("cannot start a cycle at the unbounded {side} bound")]
    UnboundedStart {
        /// Which side of the interval is open: `"lower"` or `"upper"`.
        side: &'static str,
    },

    /// A calendar index fell outside its canonical domain.
    #[error("{what} {value} is outside the valid range {min}..={max}")]
    Range {
        /// The kind of index, e.g. `"pentad"` or `"month"`.
        what: &'static str,
        /// The offending value.
        value: i64,
        /// Inclusive lower edge of the canonical domain.
        min: i64,
        /// Inclusive upper edge of the canonical domain.
        max: i64,
    },

    /// A generator was configured with an unusable parameter.
    #[error("invalid configuration: {0}")]
    Configuration(&'static str),

    /// Checked point arithmetic left the supported calendar range.
    #[error("point arithmetic overflowed the supported calendar range")]
    Overflow,
}
