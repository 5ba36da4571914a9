// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Bounded/unbounded timeline interval.
//!
//! This module provides:
//! - [`Interval<T>`]: generic interval over any [`CalendarPoint`]
//! - [`DateInterval`] / [`InstantInterval`]: resolution-class aliases
//!
//! An `Interval` is a line segment, ray, or line on the arrow of time.  Both
//! endpoints are inclusive when present; an absent endpoint means the
//! interval is unbounded on that side.  Intervals are immutable value
//! objects: every operation returns a new value.

use crate::error::CalendarError;
use crate::point::CalendarPoint;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A bounded-or-unbounded span on the timeline, inclusive of both present
/// endpoints.
///
/// Invariants, enforced at construction:
/// - when both bounds are present, `lower <= upper` (the general
///   constructor silently reorders swapped bounds);
/// - both bounds share the resolution class `T`, which the type system
///   guarantees.
///
/// # Examples
///
/// ```
/// use calspan::Interval;
/// use chrono::NaiveDate;
///
/// let d = |m, d| NaiveDate::from_ymd_opt(2020, m, d).unwrap();
/// let range = Interval::from_bounds(Some(d(1, 1)), Some(d(12, 31)));
///
/// assert!(range.contains(&d(6, 15)));
/// assert_eq!(range.span(), Some(chrono::Duration::days(366)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T: CalendarPoint> {
    lower: Option<T>,
    upper: Option<T>,
}

/// Date-resolution interval alias (1-day quantum).
pub type DateInterval = Interval<NaiveDate>;

/// Instant-resolution interval alias (1-microsecond quantum).
pub type InstantInterval = Interval<NaiveDateTime>;

impl<T: CalendarPoint> Interval<T> {
    /// Create an interval from two optional bounds.
    ///
    /// The bounds need not arrive in chronological order; swapped finite
    /// bounds are reordered.  `from_bounds(None, None)` is the fully open
    /// interval, which contains every point.
    pub fn from_bounds(a: Option<T>, b: Option<T>) -> Self {
        match (a, b) {
            (Some(x), Some(y)) if y < x => Self {
                lower: Some(y),
                upper: Some(x),
            },
            (lower, upper) => Self { lower, upper },
        }
    }

    /// Create an interval from one point and a signed duration.
    ///
    /// The duration is added to the point to derive the other bound; a
    /// negative duration therefore builds the interval *ending* at `point`.
    ///
    /// # Examples
    ///
    /// ```
    /// use calspan::Interval;
    /// use chrono::{Duration, NaiveDate};
    ///
    /// let d = |m, d| NaiveDate::from_ymd_opt(2021, m, d).unwrap();
    /// let range = Interval::from_point_and_duration(d(3, 15), Duration::days(-10)).unwrap();
    /// assert_eq!(range.lower(), Some(d(3, 5)));
    /// assert_eq!(range.upper(), Some(d(3, 15)));
    /// ```
    pub fn from_point_and_duration(point: T, delta: Duration) -> Result<Self, CalendarError> {
        let other = point.shift(delta).ok_or(CalendarError::Overflow)?;
        Ok(Self::from_bounds(Some(point), Some(other)))
    }

    /// The fully open interval, unbounded on both sides.
    pub const fn all_time() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }

    /// Earliest bound, `None` when unbounded below.
    #[inline]
    pub fn lower(&self) -> Option<T> {
        self.lower
    }

    /// Latest bound, `None` when unbounded above.
    #[inline]
    pub fn upper(&self) -> Option<T> {
        self.upper
    }

    /// Whether both bounds are present.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.lower.is_some() && self.upper.is_some()
    }

    /// Inclusive membership test.  Absent bounds are vacuously satisfied.
    pub fn contains(&self, point: &T) -> bool {
        self.lower.map_or(true, |l| l <= *point) && self.upper.map_or(true, |u| *point <= u)
    }

    /// Whether `other` lies entirely within `self`.
    ///
    /// An unbounded side of `other` is only enclosed when the same side of
    /// `self` is also unbounded; a finite interval never encloses an
    /// infinite one.
    pub fn encloses(&self, other: &Self) -> bool {
        let lower_ok = match other.lower {
            Some(l) => self.contains(&l),
            None => self.lower.is_none(),
        };
        let upper_ok = match other.upper {
            Some(u) => self.contains(&u),
            None => self.upper.is_none(),
        };
        lower_ok && upper_ok
    }

    /// The overlap of two intervals.
    ///
    /// Bounds combine as greatest-lower / least-upper with an absent bound
    /// standing in for the matching infinity.  When the computed bounds
    /// invert there is no overlap and `None` is returned; the bounds are
    /// never silently swapped into a fabricated range.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let lower = match (self.lower, other.lower) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        let upper = match (self.upper, other.upper) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        if let (Some(l), Some(u)) = (lower, upper) {
            if u < l {
                return None;
            }
        }
        Some(Self { lower, upper })
    }

    /// Inclusive span: `upper − lower + quantum`.  `None` when either side
    /// is unbounded.
    pub fn span(&self) -> Option<Duration> {
        match (self.lower, self.upper) {
            (Some(l), Some(u)) => Some(u.since(&l) + T::quantum()),
            _ => None,
        }
    }

    /// Whether the whole interval lies strictly before `point`.
    /// Vacuously false when unbounded above.
    #[inline]
    pub fn is_before(&self, point: &T) -> bool {
        self.upper.map_or(false, |u| u < *point)
    }

    /// Whether the whole interval lies strictly after `point`.
    /// Vacuously false when unbounded below.
    #[inline]
    pub fn is_after(&self, point: &T) -> bool {
        self.lower.map_or(false, |l| *point < l)
    }

    /// Strictly before, or containing, `point`.
    #[inline]
    pub fn not_after(&self, point: &T) -> bool {
        self.is_before(point) || self.contains(point)
    }

    /// Strictly after, or containing, `point`.
    #[inline]
    pub fn not_before(&self, point: &T) -> bool {
        self.is_after(point) || self.contains(point)
    }

    /// Rebind the lower bound, `None` unbounding it.
    ///
    /// Rejects a rebind that would place the lower bound after the upper
    /// bound instead of reordering: an explicit rebind asking for an
    /// inverted interval is a contract violation, not a shorthand.
    pub fn with_lower(&self, lower: Option<T>) -> Result<Self, CalendarError> {
        if let (Some(l), Some(u)) = (lower, self.upper) {
            if u < l {
                return Err(CalendarError::OrderingViolation);
            }
        }
        Ok(Self {
            lower,
            upper: self.upper,
        })
    }

    /// Rebind the upper bound, `None` unbounding it.  Same ordering rules
    /// as [`with_lower`](Self::with_lower).
    pub fn with_upper(&self, upper: Option<T>) -> Result<Self, CalendarError> {
        if let (Some(l), Some(u)) = (self.lower, upper) {
            if u < l {
                return Err(CalendarError::OrderingViolation);
            }
        }
        Ok(Self {
            lower: self.lower,
            upper,
        })
    }

    /// Shift both present bounds by the same signed duration.  Absent
    /// bounds remain absent.
    pub fn slide(&self, delta: Duration) -> Result<Self, CalendarError> {
        let shift = |bound: Option<T>| {
            bound
                .map(|p| p.shift(delta).ok_or(CalendarError::Overflow))
                .transpose()
        };
        Ok(Self {
            lower: shift(self.lower)?,
            upper: shift(self.upper)?,
        })
    }
}

impl Interval<NaiveDate> {
    /// Cast to instant resolution.  Always legal: each date bound becomes
    /// the midnight instant of that day.
    pub fn to_instants(&self) -> Interval<NaiveDateTime> {
        let cast = |d: NaiveDate| {
            d.and_hms_opt(0, 0, 0)
                .expect("midnight is always a valid time")
        };
        Interval {
            lower: self.lower.map(cast),
            upper: self.upper.map(cast),
        }
    }
}

impl Interval<NaiveDateTime> {
    /// Cast to date resolution.
    ///
    /// Truncation is only legal when it does not move a bound, i.e. every
    /// present bound already lies on a midnight grid point; anything else
    /// would silently widen or narrow the interval.
    pub fn to_dates(&self) -> Result<Interval<NaiveDate>, CalendarError> {
        let cast = |t: NaiveDateTime| {
            if t.time() == NaiveTime::MIN {
                Ok(t.date())
            } else {
                Err(CalendarError::TypeMismatch(
                    "cannot truncate a mid-day bound to date resolution",
                ))
            }
        };
        Ok(Interval {
            lower: self.lower.map(cast).transpose()?,
            upper: self.upper.map(cast).transpose()?,
        })
    }
}

impl<T: CalendarPoint> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower, self.upper) {
            (Some(l), Some(u)) => write!(f, "Interval({l} to {u})"),
            (Some(l), None) => write!(f, "Interval(Beginning on {l})"),
            (None, Some(u)) => write!(f, "Interval(Ending on {u})"),
            (None, None) => write!(f, "Interval(All Time)"),
        }
    }
}
