// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Resolution classes for points on the timeline.
//!
//! [`CalendarPoint`] is the trait every interval endpoint implements.  Two
//! resolution classes exist:
//!
//! | Implementor | Class | Quantum |
//! |-------------|-------|---------|
//! | [`chrono::NaiveDate`] | `date` | 1 day |
//! | [`chrono::NaiveDateTime`] | `instant` | 1 microsecond |
//!
//! The class of a point is its Rust type, so mixing classes inside one
//! interval is a compile-time error rather than a runtime check.  The
//! quantum is the smallest representable step of the class; it is what makes
//! adjacent tiles contiguous without overlapping.
//!
//! All arithmetic is checked: a shift that would leave chrono's supported
//! calendar range reports `None` instead of panicking.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use std::fmt;

/// A point on the timeline with a fixed resolution class.
///
/// The trait collects the calendar-field access and checked arithmetic the
/// interval and generator machinery needs; callers normally use the chrono
/// types directly and only name `CalendarPoint` in generic bounds.
pub trait CalendarPoint: Copy + Ord + fmt::Debug + fmt::Display + Sized {
    /// Human label for the resolution class (`"date"` or `"instant"`).
    const CLASS: &'static str;

    /// Smallest representable step for this class.
    fn quantum() -> Duration;

    /// Calendar year.
    fn year(&self) -> i32;

    /// Calendar month in `[1, 12]`.
    fn month(&self) -> u32;

    /// Day of year in `[1, 366]`.
    fn ordinal(&self) -> u32;

    /// Canonical grid point for a calendar day (midnight for instants).
    ///
    /// `None` when the triple does not name a real day or the year is
    /// outside chrono's supported range.
    fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self>;

    /// Canonical grid point for a day-of-year (midnight for instants).
    fn from_ordinal(year: i32, ordinal: u32) -> Option<Self>;

    /// Checked shift by a signed duration.
    ///
    /// At date resolution the sub-day part of `delta` is discarded, the
    /// same truncation chrono applies to `NaiveDate + Duration`.
    fn shift(&self, delta: Duration) -> Option<Self>;

    /// Signed duration from `other` to `self`.
    fn since(&self, other: &Self) -> Duration;

    /// Start of the containing calendar day.
    fn floor_day(&self) -> Self;

    /// Start of the containing hour; `None` at date resolution, where the
    /// hour grid is finer than the quantum.
    fn floor_hour(&self) -> Option<Self>;
}

impl CalendarPoint for NaiveDate {
    const CLASS: &'static str = "date";

    #[inline]
    fn quantum() -> Duration {
        Duration::days(1)
    }

    #[inline]
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    #[inline]
    fn month(&self) -> u32 {
        Datelike::month(self)
    }

    #[inline]
    fn ordinal(&self) -> u32 {
        Datelike::ordinal(self)
    }

    #[inline]
    fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    #[inline]
    fn from_ordinal(year: i32, ordinal: u32) -> Option<Self> {
        NaiveDate::from_yo_opt(year, ordinal)
    }

    #[inline]
    fn shift(&self, delta: Duration) -> Option<Self> {
        self.checked_add_signed(delta)
    }

    #[inline]
    fn since(&self, other: &Self) -> Duration {
        self.signed_duration_since(*other)
    }

    #[inline]
    fn floor_day(&self) -> Self {
        *self
    }

    #[inline]
    fn floor_hour(&self) -> Option<Self> {
        None
    }
}

impl CalendarPoint for NaiveDateTime {
    const CLASS: &'static str = "instant";

    #[inline]
    fn quantum() -> Duration {
        Duration::microseconds(1)
    }

    #[inline]
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    #[inline]
    fn month(&self) -> u32 {
        Datelike::month(self)
    }

    #[inline]
    fn ordinal(&self) -> u32 {
        Datelike::ordinal(self)
    }

    #[inline]
    fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    #[inline]
    fn from_ordinal(year: i32, ordinal: u32) -> Option<Self> {
        NaiveDate::from_yo_opt(year, ordinal).and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    #[inline]
    fn shift(&self, delta: Duration) -> Option<Self> {
        self.checked_add_signed(delta)
    }

    #[inline]
    fn since(&self, other: &Self) -> Duration {
        self.signed_duration_since(*other)
    }

    #[inline]
    fn floor_day(&self) -> Self {
        self.date()
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always a valid time")
    }

    #[inline]
    fn floor_hour(&self) -> Option<Self> {
        self.date().and_hms_opt(self.hour(), 0, 0)
    }
}
