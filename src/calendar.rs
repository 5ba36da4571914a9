// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Pure calendar math.
//!
//! Stateless conversions between a point in time and the calendar units the
//! generators step over: day-of-year, the 73 yearly **pentads**, and cyclic
//! index arithmetic shared by hours, months, and pentads.
//!
//! # Pentads
//!
//! A pentad is one of 73 divisions of the year, each nominally five days.
//! Day 366 (leap years only) is folded into pentad 73 rather than creating
//! a 74th pentad, so pentad 73 spans six days in leap years and five
//! otherwise.
//!
//! # Cyclic bounding
//!
//! [`bound_cyclic`] maps any integer index onto the canonical 1-indexed
//! window `[1, period]` and reports how many whole periods were added or
//! subtracted to land there.  The convention is uniform across hours
//! (period 24), months (period 12), and pentads (period 73), and the
//! period's own index maps to itself with zero rollover:
//!
//! ```
//! use calspan::calendar::bound_cyclic;
//!
//! assert_eq!(bound_cyclic(13, 12), (1, 1));
//! assert_eq!(bound_cyclic(0, 12), (-1, 12));
//! assert_eq!(bound_cyclic(24, 24), (0, 24));
//! ```

use crate::error::CalendarError;
use crate::interval::Interval;
use crate::point::CalendarPoint;
use chrono::Duration;

/// Days elapsed since Jan 1 of the point's year, plus one.  In `[1, 366]`.
#[inline]
pub fn day_of_year<T: CalendarPoint>(point: &T) -> u32 {
    point.ordinal()
}

/// Canonical grid point for a day-of-year, at the caller's resolution.
///
/// A day-of-year outside the year's day count is a range error; a year
/// outside the supported calendar range is an overflow.
pub fn from_day_of_year<T: CalendarPoint>(year: i32, doy: u32) -> Result<T, CalendarError> {
    if !(1..=366).contains(&doy) {
        return Err(CalendarError::Range {
            what: "day of year",
            value: doy as i64,
            min: 1,
            max: 366,
        });
    }
    T::from_ordinal(year, doy).ok_or_else(|| {
        // Day 366 of a common year, or the year itself is unrepresentable.
        if T::from_ymd(year, 1, 1).is_some() {
            CalendarError::Range {
                what: "day of year",
                value: doy as i64,
                min: 1,
                max: 365,
            }
        } else {
            CalendarError::Overflow
        }
    })
}

/// Pentad containing a day-of-year.  In `[1, 73]`.
///
/// `doy` is expected in `[1, 366]`; day 366 folds into pentad 73.
#[inline]
pub fn pentad_of_year(doy: u32) -> u32 {
    debug_assert!((1..=366).contains(&doy), "day of year out of range");
    let doy = doy.clamp(1, 365);
    (doy - 1) / 5 + 1
}

/// Pentad containing a point.
#[inline]
pub fn pentad_of<T: CalendarPoint>(point: &T) -> u32 {
    pentad_of_year(point.ordinal())
}

/// First day-of-year of a pentad: `(pentad − 1) · 5 + 1`.
///
/// The mapping is leap-invariant.  Fails with a range error outside
/// `[1, 73]`.
pub fn pentad_to_day_of_year(pentad: i64) -> Result<u32, CalendarError> {
    if !(1..=73).contains(&pentad) {
        return Err(CalendarError::Range {
            what: "pentad",
            value: pentad,
            min: 1,
            max: 73,
        });
    }
    Ok(((pentad - 1) * 5 + 1) as u32)
}

/// Map `index` onto the canonical window `[1, period]`.
///
/// Returns `(rolled, bounded)` where `rolled` is the count of whole periods
/// added or subtracted.  `period` must be positive.
#[inline]
pub fn bound_cyclic(index: i64, period: i64) -> (i64, i64) {
    debug_assert!(period > 0, "cyclic period must be positive");
    let zero_based = index - 1;
    (
        zero_based.div_euclid(period),
        zero_based.rem_euclid(period) + 1,
    )
}

/// Bound an hour index into `[1, 24]`.
#[inline]
pub fn bound_hour(hour: i64) -> (i64, i64) {
    bound_cyclic(hour, 24)
}

/// Bound a month index into `[1, 12]`.
#[inline]
pub fn bound_month(month: i64) -> (i64, i64) {
    bound_cyclic(month, 12)
}

/// Bound a pentad index into `[1, 73]`.
#[inline]
pub fn bound_pentad(pentad: i64) -> (i64, i64) {
    bound_cyclic(pentad, 73)
}

/// Checked year rollover.  The rollover count from [`bound_cyclic`] is
/// unbounded, so the addition must not truncate or wrap.
fn rolled_year(year: i32, dy: i64) -> Result<i32, CalendarError> {
    i32::try_from(i64::from(year) + dy).map_err(|_| CalendarError::Overflow)
}

/// The calendar month as a closed interval, from its first grid point to
/// one quantum before the first grid point of the next month.
///
/// The month following December rolls the year via [`bound_month`].  The
/// input month itself must already be canonical.
pub fn month_interval<T: CalendarPoint>(year: i32, month: u32) -> Result<Interval<T>, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::Range {
            what: "month",
            value: month as i64,
            min: 1,
            max: 12,
        });
    }
    let first = T::from_ymd(year, month, 1).ok_or(CalendarError::Overflow)?;
    let (dy, next) = bound_month(month as i64 + 1);
    let next_year = rolled_year(year, dy)?;
    let last = T::from_ymd(next_year, next as u32, 1)
        .and_then(|p| p.shift(-T::quantum()))
        .ok_or(CalendarError::Overflow)?;
    Ok(Interval::from_bounds(Some(first), Some(last)))
}

/// The pentad as a closed interval, from its first grid point to one
/// quantum before the next pentad's first grid point.
///
/// An out-of-window pentad index rolls the year via [`bound_pentad`].
/// Pentad 73 ends one quantum before Jan 1 of the following year, which
/// gives it six days in leap years and five otherwise.
pub fn pentad_interval<T: CalendarPoint>(
    year: i32,
    pentad: i64,
) -> Result<Interval<T>, CalendarError> {
    let (dy, pentad) = bound_pentad(pentad);
    let year = rolled_year(year, dy)?;
    let first: T = from_day_of_year(year, pentad_to_day_of_year(pentad)?)?;
    let last = if pentad == 73 {
        T::from_ymd(rolled_year(year, 1)?, 1, 1).and_then(|p| p.shift(-T::quantum()))
    } else {
        first.shift(Duration::days(5) - T::quantum())
    }
    .ok_or(CalendarError::Overflow)?;
    Ok(Interval::from_bounds(Some(first), Some(last)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_of_year_roundtrip() {
        let d = date(2021, 3, 15);
        assert_eq!(day_of_year(&d), 74);
        assert_eq!(from_day_of_year::<NaiveDate>(2021, 74).unwrap(), d);
    }

    #[test]
    fn from_day_of_year_rejects_out_of_range() {
        assert!(matches!(
            from_day_of_year::<NaiveDate>(2021, 366),
            Err(CalendarError::Range { what: "day of year", .. })
        ));
        assert!(matches!(
            from_day_of_year::<NaiveDate>(2021, 0),
            Err(CalendarError::Range { what: "day of year", .. })
        ));
        assert!(from_day_of_year::<NaiveDate>(2020, 366).is_ok());
    }

    #[test]
    fn from_day_of_year_reports_overflow_for_unrepresentable_years() {
        assert_eq!(
            from_day_of_year::<NaiveDate>(300_000, 1).err(),
            Some(CalendarError::Overflow)
        );
    }

    #[test]
    fn pentad_roundtrip_over_full_window() {
        for pentad in 1..=73 {
            let doy = pentad_to_day_of_year(pentad).unwrap();
            assert_eq!(pentad_of_year(doy) as i64, pentad);
        }
    }

    #[test]
    fn pentad_folds_leap_day_into_73() {
        assert_eq!(pentad_of_year(365), 73);
        assert_eq!(pentad_of_year(366), 73);
        assert_eq!(pentad_of(&date(2020, 12, 31)), 73);
        assert_eq!(pentad_of(&date(2019, 12, 31)), 73);
    }

    #[test]
    fn pentad_to_day_of_year_rejects_out_of_range() {
        for pentad in [0, -1, 74, 100] {
            assert!(matches!(
                pentad_to_day_of_year(pentad),
                Err(CalendarError::Range { what: "pentad", .. })
            ));
        }
    }

    #[test]
    fn bound_cyclic_canonical_convention() {
        assert_eq!(bound_cyclic(13, 12), (1, 1));
        assert_eq!(bound_cyclic(0, 12), (-1, 12));
        assert_eq!(bound_cyclic(12, 12), (0, 12));
        assert_eq!(bound_cyclic(24, 24), (0, 24));
        assert_eq!(bound_cyclic(25, 24), (1, 1));
        assert_eq!(bound_cyclic(-11, 12), (-1, 1));
        assert_eq!(bound_cyclic(-12, 12), (-2, 12));
        assert_eq!(bound_cyclic(74, 73), (1, 1));
    }

    #[test]
    fn thin_wrappers_share_the_convention() {
        assert_eq!(bound_hour(25), (1, 1));
        assert_eq!(bound_month(14), (1, 2));
        assert_eq!(bound_pentad(74), (1, 1));
    }

    #[test]
    fn month_interval_spans_whole_month() {
        let january = month_interval::<NaiveDate>(2020, 1).unwrap();
        assert_eq!(january.lower(), Some(date(2020, 1, 1)));
        assert_eq!(january.upper(), Some(date(2020, 1, 31)));

        let december = month_interval::<NaiveDateTime>(2020, 12).unwrap();
        assert_eq!(
            december.lower(),
            Some(date(2020, 12, 1).and_hms_opt(0, 0, 0).unwrap())
        );
        // One microsecond before Jan 1 of the rolled year.
        assert_eq!(
            december.upper(),
            Some(date(2020, 12, 31).and_hms_micro_opt(23, 59, 59, 999_999).unwrap())
        );
    }

    #[test]
    fn month_interval_rejects_out_of_range_month() {
        assert!(matches!(
            month_interval::<NaiveDate>(2020, 13),
            Err(CalendarError::Range { what: "month", .. })
        ));
        assert!(matches!(
            month_interval::<NaiveDate>(2020, 0),
            Err(CalendarError::Range { what: "month", .. })
        ));
    }

    #[test]
    fn pentad_73_absorbs_the_leap_day() {
        let leap = pentad_interval::<NaiveDate>(2020, 73).unwrap();
        assert_eq!(leap.lower(), Some(date(2020, 12, 26)));
        assert_eq!(leap.upper(), Some(date(2020, 12, 31)));
        assert_eq!(leap.span(), Some(Duration::days(6)));

        let common = pentad_interval::<NaiveDate>(2019, 73).unwrap();
        assert_eq!(common.lower(), Some(date(2019, 12, 27)));
        assert_eq!(common.upper(), Some(date(2019, 12, 31)));
        assert_eq!(common.span(), Some(Duration::days(5)));
    }

    #[test]
    #[should_panic(expected = "day of year out of range")]
    fn pentad_of_year_rejects_day_zero() {
        pentad_of_year(0);
    }

    #[test]
    fn huge_pentad_index_overflows_instead_of_wrapping() {
        // Rolls the year far past the supported calendar range.
        assert_eq!(
            pentad_interval::<NaiveDate>(2020, 1 + 73 * 3_000_000).err(),
            Some(CalendarError::Overflow)
        );
        // Rollover count itself exceeds i32.
        assert_eq!(
            pentad_interval::<NaiveDate>(2020, 1 + 73 * (1_i64 << 31)).err(),
            Some(CalendarError::Overflow)
        );
    }

    #[test]
    fn pentad_interval_rolls_the_year() {
        let rolled = pentad_interval::<NaiveDate>(2020, 74).unwrap();
        assert_eq!(rolled, pentad_interval::<NaiveDate>(2021, 1).unwrap());

        let back = pentad_interval::<NaiveDate>(2021, 0).unwrap();
        assert_eq!(back, pentad_interval::<NaiveDate>(2020, 73).unwrap());
    }

    #[test]
    fn ordinary_pentad_spans_five_days_at_instant_resolution() {
        let p = pentad_interval::<NaiveDateTime>(2020, 1).unwrap();
        assert_eq!(p.lower(), Some(date(2020, 1, 1).and_hms_opt(0, 0, 0).unwrap()));
        assert_eq!(
            p.upper(),
            Some(date(2020, 1, 5).and_hms_micro_opt(23, 59, 59, 999_999).unwrap())
        );
    }
}
