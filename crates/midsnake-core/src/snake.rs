//! Middle-snake search: simultaneous forward and backward Myers frontiers
//!
//! The forward search starts at the top-left corner of an [`Area`] and works
//! with `a`/`b`; the backward search starts at the bottom-right corner and
//! works with `ra`/`rb` in its own mirrored frame. Backward diagonal
//! `rdiagonal(k)` is the same line of the edit graph as forward diagonal `k`,
//! so the two searches meet when, on one such pair, the forward x has reached
//! at least `N - backward x`.

use crate::area::Area;
use crate::frontier::Frontier;
use crate::point::Point;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// The segment at which the problem gets split.
///
/// `top..bottom` is a diagonal run (possibly empty). When `approximate` is set
/// the search gave up on its time budget and the segment is the area's
/// geometric midpoint instead; the resulting script stays valid but may not be
/// the shortest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiddleMove {
    pub top: Point,
    pub bottom: Point,
    pub approximate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Finds middle moves, optionally under a time budget.
///
/// [`MiddleMoveFinder::find`] runs the forward and backward steps of each `d`
/// one after the other and works for any `T: PartialEq`.
/// [`MiddleMoveFinder::find_parallel`] forks them with `rayon::join` and needs
/// `T: Sync`; both return the same middle move.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiddleMoveFinder {
    time_budget: Option<Duration>,
}

impl MiddleMoveFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give up on exactness once a single search has run for `budget`
    pub fn with_time_budget(mut self, budget: Option<Duration>) -> Self {
        self.time_budget = budget;
        self
    }

    /// Find the middle move of `area`.
    ///
    /// # Panics
    ///
    /// If the area is empty in either dimension, or if the search runs past
    /// `d = N + M` without the frontiers crossing (which would be a bug).
    pub fn find<T: PartialEq>(&self, area: &Area<'_, T>) -> MiddleMove {
        self.search(area, |forward, backward, d, min_k, max_k| {
            advance(area, forward, d, min_k, max_k, Direction::Forward);
            advance(area, backward, d, min_k, max_k, Direction::Backward);
        })
    }

    /// Like [`MiddleMoveFinder::find`], with the two steps of each `d` on the
    /// rayon pool.
    pub fn find_parallel<T: PartialEq + Sync>(&self, area: &Area<'_, T>) -> MiddleMove {
        self.search(area, |forward, backward, d, min_k, max_k| {
            rayon::join(
                || advance(area, forward, d, min_k, max_k, Direction::Forward),
                || advance(area, backward, d, min_k, max_k, Direction::Backward),
            );
        })
    }

    fn search<T, F>(&self, area: &Area<'_, T>, mut step: F) -> MiddleMove
    where
        F: FnMut(&mut Frontier, &mut Frontier, isize, isize, isize),
    {
        let (n, m) = (area.n(), area.m());
        assert!(n > 0 && m > 0, "middle move of a degenerate {n}x{m} area");

        let max = n + m;
        let mut forward = Frontier::new(max);
        let mut backward = Frontier::new(max);
        let started = Instant::now();

        for d in 0..=max as isize {
            let min_k = -d + 2 * (d - m as isize).max(0);
            let max_k = d - 2 * (d - n as isize).max(0);

            step(&mut forward, &mut backward, d, min_k, max_k);

            if let Some((top, bottom)) = crossing(area, &forward, &backward, d, min_k, max_k) {
                trace!(%top, %bottom, d, "middle move");
                return MiddleMove {
                    top,
                    bottom,
                    approximate: false,
                };
            }

            if let Some(budget) = self.time_budget {
                if n > 2 && m > 2 && started.elapsed() > budget {
                    let top = area.tl().offset((n / 2).max(1), (m / 2).max(1));
                    debug!(
                        ?budget,
                        d,
                        n,
                        m,
                        "middle move search over budget, splitting at midpoint"
                    );
                    return MiddleMove {
                        top,
                        bottom: top.offset(1, 1),
                        approximate: true,
                    };
                }
            }
        }

        panic!(
            "no middle move found in {}..{} after d = {max}",
            area.tl(),
            area.br()
        );
    }
}

/// Advance one frontier from `d - 1` to `d` edits.
fn advance<T: PartialEq>(
    area: &Area<'_, T>,
    frontier: &mut Frontier,
    d: isize,
    min_k: isize,
    max_k: isize,
    direction: Direction,
) {
    let (n, m) = (area.n(), area.m());
    let mut k = min_k;
    while k <= max_k {
        // Down (insert) from k + 1, or right (delete) from k - 1.
        let start = if k == -d || (k != d && frontier.reach(k - 1) < frontier.reach(k + 1)) {
            frontier.reach(k + 1)
        } else {
            frontier.reach(k - 1) + 1
        };
        debug_assert!(start as isize >= k, "negative y on diagonal {k}");

        let mut x = start;
        let mut y = (start as isize - k) as usize;
        match direction {
            Direction::Forward => {
                while x < n && y < m && area.a(x) == area.b(y) {
                    x += 1;
                    y += 1;
                }
            }
            Direction::Backward => {
                while x < n && y < m && area.ra(x) == area.rb(y) {
                    x += 1;
                    y += 1;
                }
            }
        }
        frontier.set(k, start, x);

        if x >= n && y >= m {
            break;
        }
        k += 2;
    }
}

/// Look for a diagonal on which the two frontiers have met, returning the
/// absolute `(top, bottom)` of the snake that got there.
///
/// With an odd `N - M` the forward frontier at `d` meets the backward one at
/// `d - 1`; with an even one the backward frontier at `d` meets the forward
/// one at `d`. Forward diagonals never share parity with the backward
/// diagonals read here, so the test sees the same values whether the two
/// steps ran one after the other or concurrently.
fn crossing<T>(
    area: &Area<'_, T>,
    forward: &Frontier,
    backward: &Frontier,
    d: isize,
    min_k: isize,
    max_k: isize,
) -> Option<(Point, Point)> {
    let n = area.n() as isize;
    let delta = area.n() as isize - area.m() as isize;
    let odd = delta & 1 == 1;

    let mut k = min_k;
    while k <= max_k {
        let rk = area.rdiagonal(k);
        if odd {
            if rk.abs() < d && forward.reach(k) as isize >= n - backward.reach(rk) as isize {
                let top = relative(area, forward.start(k), k);
                let bottom = relative(area, forward.reach(k), k);
                if let (Some(top), Some(bottom)) = (top, bottom) {
                    return Some((area.abs_point(top), area.abs_point(bottom)));
                }
            }
        } else if rk.abs() <= d && backward.reach(k) as isize >= n - forward.reach(rk) as isize {
            let top = relative(area, backward.reach(k), k);
            let bottom = relative(area, backward.start(k), k);
            if let (Some(top), Some(bottom)) = (top, bottom) {
                return Some((area.abs_point_r(top), area.abs_point_r(bottom)));
            }
        }
        k += 2;
    }
    None
}

/// The relative point at `x` on diagonal `k`, if it lies inside the area
fn relative<T>(area: &Area<'_, T>, x: usize, k: isize) -> Option<Point> {
    let y = x as isize - k;
    if y < 0 || x > area.n() || y as usize > area.m() {
        return None;
    }
    Some(Point::new(x, y as usize))
}
