// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Explicit point collections.
//!
//! [`PointSet`] wraps an ordered list of calendar points.  Unlike an
//! [`Interval`], which describes a contiguous range by its bounds, a point
//! set enumerates its members; order is the caller's and duplicates are
//! permitted.
//!
//! [`PointFilter`] is the common membership surface: both [`Interval`] and
//! [`PointSet`] implement it, so [`PointSet::intersection`] filters against
//! either.

use crate::interval::Interval;
use crate::point::CalendarPoint;
use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A membership predicate over calendar points.
pub trait PointFilter<T: CalendarPoint> {
    /// Whether `point` belongs to the filter.
    fn admits(&self, point: &T) -> bool;
}

impl<T: CalendarPoint> PointFilter<T> for Interval<T> {
    fn admits(&self, point: &T) -> bool {
        self.contains(point)
    }
}

impl<T: CalendarPoint> PointFilter<T> for PointSet<T> {
    fn admits(&self, point: &T) -> bool {
        self.contains(point)
    }
}

/// An ordered collection of calendar points.
///
/// All points share one resolution class by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointSet<T: CalendarPoint> {
    points: Vec<T>,
}

impl<T: CalendarPoint> PointSet<T> {
    /// An empty set.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Number of points, duplicates counted.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points in caller order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.points.iter()
    }

    /// Whether `point` is a member.
    pub fn contains(&self, point: &T) -> bool {
        self.points.contains(point)
    }

    /// The points admitted by `filter`, in this set's order.
    pub fn intersection<F: PointFilter<T>>(&self, filter: &F) -> Self {
        self.points
            .iter()
            .copied()
            .filter(|p| filter.admits(p))
            .collect()
    }
}

impl<T: CalendarPoint> From<Vec<T>> for PointSet<T> {
    fn from(points: Vec<T>) -> Self {
        Self { points }
    }
}

impl<T: CalendarPoint> FromIterator<T> for PointSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<T: CalendarPoint> IntoIterator for PointSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, T: CalendarPoint> IntoIterator for &'a PointSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T: CalendarPoint> Index<usize> for PointSet<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.points[index]
    }
}

impl<T: CalendarPoint> fmt::Display for PointSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => write!(
                f,
                "PointSet({} points from {} to {})",
                self.points.len(),
                first,
                last
            ),
            _ => write!(f, "PointSet(Empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn preserves_caller_order_and_duplicates() {
        let set = PointSet::from(vec![
            date(2020, 3, 1),
            date(2020, 1, 1),
            date(2020, 3, 1),
        ]);
        assert_eq!(set.len(), 3);
        assert_eq!(set[0], date(2020, 3, 1));
        assert_eq!(set[1], date(2020, 1, 1));
        assert_eq!(set[2], date(2020, 3, 1));
    }

    #[test]
    fn membership() {
        let set: PointSet<_> = [date(2020, 1, 1), date(2020, 6, 1)].into_iter().collect();
        assert!(set.contains(&date(2020, 6, 1)));
        assert!(!set.contains(&date(2020, 6, 2)));
    }

    #[test]
    fn intersection_with_an_interval() {
        let set = PointSet::from(vec![
            date(2019, 12, 31),
            date(2020, 1, 1),
            date(2020, 6, 15),
            date(2021, 1, 1),
        ]);
        let year = Interval::from_bounds(Some(date(2020, 1, 1)), Some(date(2020, 12, 31)));
        assert_eq!(
            set.intersection(&year),
            PointSet::from(vec![date(2020, 1, 1), date(2020, 6, 15)])
        );
    }

    #[test]
    fn intersection_with_another_set_keeps_left_order() {
        let left = PointSet::from(vec![date(2020, 3, 1), date(2020, 1, 1), date(2020, 2, 1)]);
        let right = PointSet::from(vec![date(2020, 1, 1), date(2020, 3, 1)]);
        assert_eq!(
            left.intersection(&right),
            PointSet::from(vec![date(2020, 3, 1), date(2020, 1, 1)])
        );
    }

    #[test]
    fn display_forms() {
        let empty: PointSet<NaiveDate> = PointSet::new();
        assert_eq!(empty.to_string(), "PointSet(Empty)");

        let set = PointSet::from(vec![date(2020, 1, 1), date(2020, 12, 31)]);
        assert_eq!(
            set.to_string(),
            "PointSet(2 points from 2020-01-01 to 2020-12-31)"
        );
    }

    #[test]
    fn collects_from_a_generator() {
        let year = Interval::from_bounds(Some(date(2020, 1, 1)), Some(date(2020, 12, 31)));
        let firsts: PointSet<_> = year
            .months(crate::CycleOptions::new().snap())
            .unwrap()
            .collect();
        assert_eq!(firsts.len(), 12);
        assert_eq!(firsts[0], date(2020, 1, 1));
        assert_eq!(firsts[11], date(2020, 12, 1));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let set = PointSet::from(vec![date(2020, 1, 1), date(2020, 6, 15)]);
        let json = serde_json::to_string(&set).unwrap();
        let back: PointSet<NaiveDate> = serde_json::from_str(&json).unwrap();
        assert_eq!(set, back);
    }
}
