// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar interval primitives.
//!
//! This crate provides typed resolution classes, bounded and unbounded
//! intervals over them, and lazy generators that walk calendar-aligned
//! points and tile an interval into contiguous sub-intervals.
//!
//! # Core types
//!
//! - [`Interval<T>`] — an inclusive interval with independently optional
//!   bounds, generic over any [`CalendarPoint`].
//! - [`CalendarPoint`] — trait marking a timeline point with a fixed
//!   resolution class; implemented by [`chrono::NaiveDate`] (1-day
//!   quantum) and [`chrono::NaiveDateTime`] (1-microsecond quantum).
//! - [`PointSet<T>`] — an ordered, explicit point collection.
//! - [`CalendarError`] — the crate's error taxonomy.
//!
//! # Generators
//!
//! - [`Interval::points`] / [`Interval::hours`] / [`Interval::days`] /
//!   [`Interval::pentads`] / [`Interval::months`] / [`Interval::years`] —
//!   calendar-grain point streams, optionally snapped to the canonical
//!   grid and optionally reversed ([`GrainPoints`]).
//! - [`Interval::steps`] — fixed-duration point stream ([`Steps`]).
//! - [`Interval::tiles`] / [`Interval::stride_tiles`] /
//!   [`Interval::tiled_by`] — contiguous sub-interval streams
//!   ([`Tiles`]).
//!
//! # Resolution classes
//!
//! An interval's endpoints share one resolution class by construction:
//! the class is the endpoint's Rust type, so mixing `date` and `instant`
//! points is rejected at compile time.  Conversions between the classes
//! go through [`Interval::to_instants`] (widening, always succeeds) and
//! [`Interval::to_dates`] (narrowing, fails on sub-day remainders).
//!
//! # Example
//!
//! ```
//! use calspan::{Grain, Interval, TileOptions};
//! use chrono::NaiveDate;
//!
//! let d = |m, day| NaiveDate::from_ymd_opt(2020, m, day).unwrap();
//! let year = Interval::from_bounds(Some(d(1, 1)), Some(d(12, 31)));
//!
//! let months: Vec<_> = year
//!     .tiles(Grain::Month, TileOptions::new().snap().full())?
//!     .collect();
//! assert_eq!(months.len(), 12);
//! assert_eq!(months[1].upper(), Some(d(2, 29)));
//! # Ok::<(), calspan::CalendarError>(())
//! ```

pub mod calendar;
mod cycle;
mod error;
mod interval;
mod point;
mod point_set;
mod tile;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use cycle::{CycleOptions, Grain, GrainPoints, Steps};
pub use error::CalendarError;
pub use interval::{DateInterval, InstantInterval, Interval};
pub use point::CalendarPoint;
pub use point_set::{PointFilter, PointSet};
pub use tile::{IterSource, TileOptions, Tiles, TilingSource};
