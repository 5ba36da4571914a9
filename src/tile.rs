// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tiling generator.
//!
//! [`Tiles`] consumes a sequence of calendar-aligned points and emits the
//! sub-intervals tiling the parent [`Interval`]: each tile ends one quantum
//! before the next point (shifted against the stepping direction), so
//! consecutive tiles are contiguous and never overlap.
//!
//! Three orthogonal options steer the sequence:
//! - `reverse` — tile from the upper bound downward;
//! - `snap` — align the underlying points to the canonical calendar grid;
//! - `full` — suppress partial, boundary-truncated tiles.
//!
//! Without `full` the tiles are exhaustive: their union equals the parent.
//! With `full` every tile spans exactly one whole calendar unit and the
//! union may be a strict subset of the parent.  A trailing tile that is a
//! whole unit ending exactly at the parent's bound is still emitted; the
//! generator recognises it through the point source's first out-of-range
//! grid candidate (its *overrun*).  Opaque caller-supplied point sequences
//! carry no overrun knowledge, so under `full` their trailing tile is
//! always suppressed.
//!
//! The multi-branch exhaustion handling is a pure state machine
//! ([`Fresh`] → [`Running`] → [`Done`]), one state transition per pulled
//! tile.
//!
//! [`Fresh`]: TileState::Fresh
//! [`Running`]: TileState::Running
//! [`Done`]: TileState::Done

use crate::cycle::{CycleOptions, Grain, GrainPoints, Steps};
use crate::error::CalendarError;
use crate::interval::Interval;
use crate::point::CalendarPoint;
use chrono::Duration;

/// Direction, alignment, and partial-tile options for tiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileOptions {
    /// Align tiles to the canonical calendar grid.
    pub snap: bool,
    /// Tile in reverse chronological order.
    pub reverse: bool,
    /// Suppress partial tiles on either side.
    pub full: bool,
}

impl TileOptions {
    /// All flags off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable grid snapping.
    pub fn snap(mut self) -> Self {
        self.snap = true;
        self
    }

    /// Enable reverse tiling.
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Keep only whole calendar units.
    pub fn full(mut self) -> Self {
        self.full = true;
        self
    }
}

/// A point source the tiling generator can drain.
///
/// `overrun` reports the first grid candidate past the parent's bound once
/// the source is exhausted; sources that cannot know it return `None` and
/// lose only the trailing whole-tile recognition under `full`.
pub trait TilingSource<T: CalendarPoint> {
    /// Pull the next point, or signal exhaustion.
    fn draw(&mut self) -> Option<T>;

    /// First point past the parent bound, once exhausted.
    fn overrun(&self) -> Option<T> {
        None
    }
}

impl<T: CalendarPoint> TilingSource<T> for GrainPoints<T> {
    fn draw(&mut self) -> Option<T> {
        self.next()
    }

    fn overrun(&self) -> Option<T> {
        GrainPoints::overrun(self)
    }
}

impl<T: CalendarPoint> TilingSource<T> for Steps<T> {
    fn draw(&mut self) -> Option<T> {
        self.next()
    }

    fn overrun(&self) -> Option<T> {
        Steps::overrun(self)
    }
}

/// Adapter lending an arbitrary iterator to the tiling generator.
#[derive(Debug, Clone)]
pub struct IterSource<I>(I);

impl<T: CalendarPoint, I: Iterator<Item = T>> TilingSource<T> for IterSource<I> {
    fn draw(&mut self) -> Option<T> {
        self.0.next()
    }
}

#[derive(Debug, Clone, Copy)]
enum TileState<T> {
    /// No tile pulled yet.
    Fresh,
    /// Mid-sequence; holds the start of the next tile.
    Running(T),
    Done,
}

/// Lazy sequence of sub-intervals tiling a parent interval.
///
/// Produced by [`Interval::tiles`], [`Interval::stride_tiles`], and
/// [`Interval::tiled_by`].  Tiles are
/// always emitted with chronological bounds (`lower <= upper`) regardless
/// of stepping direction.
#[derive(Debug, Clone)]
pub struct Tiles<T: CalendarPoint, S: TilingSource<T>> {
    parent: Interval<T>,
    source: S,
    reverse: bool,
    full: bool,
    state: TileState<T>,
}

impl<T: CalendarPoint, S: TilingSource<T>> Tiles<T, S> {
    fn new(parent: &Interval<T>, source: S, opts: TileOptions) -> Self {
        Self {
            parent: *parent,
            source,
            reverse: opts.reverse,
            full: opts.full,
            state: TileState::Fresh,
        }
    }

    /// The parent bound tiling starts from.
    fn natural_start(&self) -> Option<T> {
        if self.reverse {
            self.parent.upper()
        } else {
            self.parent.lower()
        }
    }

    /// The parent bound tiling runs toward.
    fn natural_end(&self) -> Option<T> {
        if self.reverse {
            self.parent.lower()
        } else {
            self.parent.upper()
        }
    }

    /// End bound of a tile closed by the drawn point `next`: one quantum
    /// short of it, against the stepping direction.
    fn tile_end(&self, next: &T) -> Option<T> {
        if self.reverse {
            next.shift(T::quantum())
        } else {
            next.shift(-T::quantum())
        }
    }

    /// Build a tile with chronological orientation.
    fn oriented(&self, start: Option<T>, end: Option<T>) -> Interval<T> {
        if self.reverse {
            Interval::from_bounds(end, start)
        } else {
            Interval::from_bounds(start, end)
        }
    }

    /// Close one tile from `start` with the drawn point `next`.
    fn close(&mut self, start: Option<T>, next: T) -> Option<Interval<T>> {
        match self.tile_end(&next) {
            Some(end) if self.parent.contains(&end) => {
                self.state = TileState::Running(next);
                Some(self.oriented(start, Some(end)))
            }
            _ => {
                // The computed end fell outside the parent: emit the whole
                // remainder, or nothing when only whole units are wanted.
                self.state = TileState::Done;
                if self.full {
                    None
                } else {
                    Some(self.oriented(self.natural_start(), self.natural_end()))
                }
            }
        }
    }

    /// Trailing tile under `full`: emitted only when the source's overrun
    /// shows the tile ends exactly at the parent bound, which makes it a
    /// whole calendar unit.
    fn whole_trailing(&self, start: T) -> Option<Interval<T>> {
        let over = self.source.overrun()?;
        let end = self.tile_end(&over)?;
        if self.natural_end() == Some(end) {
            Some(self.oriented(Some(start), Some(end)))
        } else {
            None
        }
    }
}

impl<T: CalendarPoint, S: TilingSource<T>> Iterator for Tiles<T, S> {
    type Item = Interval<T>;

    fn next(&mut self) -> Option<Interval<T>> {
        match self.state {
            TileState::Done => None,
            TileState::Fresh => match self.source.draw() {
                // Not a single point: the parent itself is the one
                // leftover tile, unless only whole units are wanted.
                None => {
                    self.state = TileState::Done;
                    if self.full {
                        None
                    } else {
                        Some(self.parent)
                    }
                }
                Some(first) => {
                    if self.full {
                        match self.source.draw() {
                            Some(second) => self.close(Some(first), second),
                            None => {
                                self.state = TileState::Done;
                                self.whole_trailing(first)
                            }
                        }
                    } else if self.natural_start() == Some(first) {
                        match self.source.draw() {
                            Some(second) => self.close(Some(first), second),
                            // Single aligned point: one tile spans the
                            // whole parent.
                            None => {
                                self.state = TileState::Done;
                                Some(self.oriented(Some(first), self.natural_end()))
                            }
                        }
                    } else {
                        // First point is strictly inside: the gap between
                        // the true boundary and the first grid point forms
                        // a partial leading tile.
                        self.close(self.natural_start(), first)
                    }
                }
            },
            TileState::Running(start) => match self.source.draw() {
                Some(next) => self.close(Some(start), next),
                None => {
                    self.state = TileState::Done;
                    if self.full {
                        self.whole_trailing(start)
                    } else if self.parent.contains(&start) {
                        Some(self.oriented(Some(start), self.natural_end()))
                    } else {
                        None
                    }
                }
            },
        }
    }
}

impl<T: CalendarPoint> Interval<T> {
    /// Tile this interval by a calendar grain.
    ///
    /// # Examples
    ///
    /// ```
    /// use calspan::{Grain, Interval, TileOptions};
    /// use chrono::NaiveDate;
    ///
    /// let d = |m, d| NaiveDate::from_ymd_opt(2020, m, d).unwrap();
    /// let year = Interval::from_bounds(Some(d(1, 1)), Some(d(12, 31)));
    ///
    /// let months: Vec<_> = year
    ///     .tiles(Grain::Month, TileOptions::new().snap().full())
    ///     .unwrap()
    ///     .collect();
    /// assert_eq!(months.len(), 12);
    /// assert_eq!(months[0].upper(), Some(d(1, 31)));
    /// ```
    pub fn tiles(
        &self,
        grain: Grain,
        opts: TileOptions,
    ) -> Result<Tiles<T, GrainPoints<T>>, CalendarError> {
        let points = self.points(
            grain,
            CycleOptions {
                snap: opts.snap,
                reverse: opts.reverse,
            },
        )?;
        Ok(Tiles::new(self, points, opts))
    }

    /// Tile this interval by a fixed stride.
    ///
    /// The stepping direction follows the sign of `delta`, so the `reverse`
    /// flag of `opts` is taken from the stride and `snap` has no grid to
    /// act on; only `full` applies.  Unlike [`Interval::tiled_by`] the
    /// stride source knows its first out-of-range point, so a whole
    /// trailing tile survives `full`.
    pub fn stride_tiles(
        &self,
        delta: Duration,
        opts: TileOptions,
    ) -> Result<Tiles<T, Steps<T>>, CalendarError> {
        let steps = self.steps(delta)?;
        let opts = TileOptions {
            snap: false,
            reverse: delta < Duration::zero(),
            full: opts.full,
        };
        Ok(Tiles::new(self, steps, opts))
    }

    /// Tile this interval by a caller-supplied point sequence.
    ///
    /// The points must share the stepping direction given in `opts` and lie
    /// inside the interval; out-of-range points terminate the tiling at the
    /// drawing step that meets them.
    pub fn tiled_by<I>(&self, points: I, opts: TileOptions) -> Tiles<T, IterSource<I>>
    where
        I: Iterator<Item = T>,
    {
        Tiles::new(self, IterSource(points), opts)
    }
}
