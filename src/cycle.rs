// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-aligned point generators.
//!
//! A generator turns an [`Interval`] into a lazy sequence of points stepping
//! by a calendar [`Grain`], starting from the interval's lower bound (or the
//! upper bound when reversed) and continuing while the point stays inside
//! the interval.
//!
//! The cursor is an explicit state machine: a canonical-grid **anchor**
//! plus a fixed **offset**.  Each step recomputes the candidate point from
//! the anchor — never from the previously yielded value — and then advances
//! the anchor on its own grid.  Recomputing from the previous value would
//! under-count whenever the offset exceeds the last unit's length, e.g. an
//! offset past day 5 of a 5-day pentad carried out of a leap year.
//!
//! With `snap` the offset is forced to zero and the sequence runs on the
//! canonical grid itself, first advancing one grid step if the flooring
//! anchor falls outside the interval.

use crate::calendar::{bound_cyclic, pentad_of};
use crate::error::CalendarError;
use crate::interval::Interval;
use crate::point::CalendarPoint;
use chrono::Duration;

/// Calendar grain for point generation and tiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grain {
    /// Start of hour; instant resolution only.
    Hour,
    /// Start of day.
    Day,
    /// Start of one of the 73 yearly pentads.
    Pentad,
    /// First day of month.
    Month,
    /// January 1.
    Year,
}

impl Grain {
    /// Canonical grid point at or below `point` on this grain's grid.
    fn floor<T: CalendarPoint>(self, point: &T) -> Result<T, CalendarError> {
        match self {
            Grain::Hour => point.floor_hour().ok_or(CalendarError::TypeMismatch(
                "hour stepping requires instant resolution",
            )),
            Grain::Day => Ok(point.floor_day()),
            Grain::Pentad => {
                let doy = (pentad_of(point) - 1) * 5 + 1;
                T::from_ordinal(point.year(), doy).ok_or(CalendarError::Overflow)
            }
            Grain::Month => {
                T::from_ymd(point.year(), point.month(), 1).ok_or(CalendarError::Overflow)
            }
            Grain::Year => T::from_ymd(point.year(), 1, 1).ok_or(CalendarError::Overflow),
        }
    }

    /// Next grid point from `anchor`, one grain step in `step`'s direction.
    /// `anchor` must itself be a grid point.  `None` past the calendar edge.
    fn advance<T: CalendarPoint>(self, anchor: &T, step: i64) -> Option<T> {
        match self {
            Grain::Hour => anchor.shift(Duration::hours(step)),
            Grain::Day => anchor.shift(Duration::days(step)),
            Grain::Pentad => {
                let (dy, pentad) = bound_cyclic(pentad_of(anchor) as i64 + step, 73);
                let doy = ((pentad - 1) * 5 + 1) as u32;
                T::from_ordinal(anchor.year().checked_add(dy as i32)?, doy)
            }
            Grain::Month => {
                let (dy, month) = bound_cyclic(anchor.month() as i64 + step, 12);
                T::from_ymd(anchor.year().checked_add(dy as i32)?, month as u32, 1)
            }
            Grain::Year => T::from_ymd(anchor.year().checked_add(step as i32)?, 1, 1),
        }
    }
}

/// Direction and alignment options for point generators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleOptions {
    /// Force points onto the canonical calendar grid.
    pub snap: bool,
    /// Generate in reverse chronological order, starting from the upper
    /// bound.
    pub reverse: bool,
}

impl CycleOptions {
    /// Both flags off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable grid snapping.
    pub fn snap(mut self) -> Self {
        self.snap = true;
        self
    }

    /// Enable reverse stepping.
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

/// Lazy sequence of calendar-aligned points inside an interval.
///
/// Produced by [`Interval::points`] and the per-grain conveniences.  The
/// cursor advances monotonically and is not restartable; construct a fresh
/// generator to iterate again.
#[derive(Debug, Clone)]
pub struct GrainPoints<T: CalendarPoint> {
    interval: Interval<T>,
    grain: Grain,
    step: i64,
    offset: Duration,
    anchor: Option<T>,
    overrun: Option<T>,
}

impl<T: CalendarPoint> GrainPoints<T> {
    pub(crate) fn new(
        interval: &Interval<T>,
        grain: Grain,
        opts: CycleOptions,
    ) -> Result<Self, CalendarError> {
        let start = if opts.reverse {
            interval
                .upper()
                .ok_or(CalendarError::UnboundedStart { side: "upper" })?
        } else {
            interval
                .lower()
                .ok_or(CalendarError::UnboundedStart { side: "lower" })?
        };
        let step = if opts.reverse { -1 } else { 1 };

        let floor = grain.floor(&start)?;
        let mut anchor = Some(floor);
        let mut offset = start.since(&floor);

        if opts.snap {
            offset = Duration::zero();
            if !interval.contains(&floor) {
                // The flooring anchor fell outside; start at the nearest
                // in-range grid point in the stepping direction (or run
                // empty if none exists).
                anchor = grain.advance(&floor, step);
            }
        }

        Ok(Self {
            interval: *interval,
            grain,
            step,
            offset,
            anchor,
            overrun: None,
        })
    }

    /// The first grid candidate past the interval's bound, available once
    /// the sequence is exhausted.  The tiling generator uses it to decide
    /// whether a trailing tile is a whole calendar unit.
    pub fn overrun(&self) -> Option<T> {
        self.overrun
    }
}

impl<T: CalendarPoint> Iterator for GrainPoints<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let anchor = self.anchor?;
        let candidate = anchor.shift(self.offset)?;
        if !self.interval.contains(&candidate) {
            self.anchor = None;
            self.overrun = Some(candidate);
            return None;
        }
        self.anchor = self.grain.advance(&anchor, self.step);
        Some(candidate)
    }
}

/// Fixed-duration stepping sequence, direction taken from the sign of the
/// stride.  Produced by [`Interval::steps`].
#[derive(Debug, Clone)]
pub struct Steps<T: CalendarPoint> {
    interval: Interval<T>,
    delta: Duration,
    cursor: Option<T>,
    overrun: Option<T>,
}

impl<T: CalendarPoint> Steps<T> {
    pub(crate) fn new(interval: &Interval<T>, delta: Duration) -> Result<Self, CalendarError> {
        if delta == Duration::zero() {
            return Err(CalendarError::Configuration(
                "step duration must be nonzero",
            ));
        }
        if delta.abs() < T::quantum() {
            return Err(CalendarError::Configuration(
                "step duration is finer than the resolution quantum",
            ));
        }
        let start = if delta < Duration::zero() {
            interval
                .upper()
                .ok_or(CalendarError::UnboundedStart { side: "upper" })?
        } else {
            interval
                .lower()
                .ok_or(CalendarError::UnboundedStart { side: "lower" })?
        };
        Ok(Self {
            interval: *interval,
            delta,
            cursor: Some(start),
            overrun: None,
        })
    }

    /// See [`GrainPoints::overrun`].
    pub fn overrun(&self) -> Option<T> {
        self.overrun
    }
}

impl<T: CalendarPoint> Iterator for Steps<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let cursor = self.cursor?;
        if !self.interval.contains(&cursor) {
            self.cursor = None;
            self.overrun = Some(cursor);
            return None;
        }
        self.cursor = cursor.shift(self.delta);
        Some(cursor)
    }
}

impl<T: CalendarPoint> Interval<T> {
    /// Calendar-aligned points of `grain` inside this interval.
    ///
    /// Fails with an unbounded-start error when the bound the stepping
    /// direction starts from is absent.
    pub fn points(&self, grain: Grain, opts: CycleOptions) -> Result<GrainPoints<T>, CalendarError> {
        GrainPoints::new(self, grain, opts)
    }

    /// Hour-grain points; instant resolution only.
    pub fn hours(&self, opts: CycleOptions) -> Result<GrainPoints<T>, CalendarError> {
        self.points(Grain::Hour, opts)
    }

    /// Day-grain points.
    pub fn days(&self, opts: CycleOptions) -> Result<GrainPoints<T>, CalendarError> {
        self.points(Grain::Day, opts)
    }

    /// Pentad-grain points.
    pub fn pentads(&self, opts: CycleOptions) -> Result<GrainPoints<T>, CalendarError> {
        self.points(Grain::Pentad, opts)
    }

    /// Month-grain points.
    pub fn months(&self, opts: CycleOptions) -> Result<GrainPoints<T>, CalendarError> {
        self.points(Grain::Month, opts)
    }

    /// Year-grain points.
    pub fn years(&self, opts: CycleOptions) -> Result<GrainPoints<T>, CalendarError> {
        self.points(Grain::Year, opts)
    }

    /// Fixed-duration stepping, direction from the sign of `delta`.
    ///
    /// A zero stride, or one finer than the resolution quantum, is a
    /// configuration error.
    pub fn steps(&self, delta: Duration) -> Result<Steps<T>, CalendarError> {
        Steps::new(self, delta)
    }
}
