//! Recursive divide-and-conquer over areas

use crate::area::Area;
use crate::edit::{Move, MoveKind};
use crate::point::Point;
use crate::snake::{MiddleMove, MiddleMoveFinder};

/// Append the moves that transform `area`'s slice of the old sequence into
/// its slice of the new one.
///
/// Moves come out ordered by position. A run that starts exactly where the
/// previous move of the same kind ended is folded into it. Insert moves are
/// left without content; see [`crate::edit::fill`].
///
/// Recursion depth is logarithmic for typical inputs and bounded by the edit
/// distance in the worst case.
pub fn build_moves<T: PartialEq>(
    area: Area<'_, T>,
    finder: &MiddleMoveFinder,
    moves: &mut Vec<Move<T>>,
) {
    split_recursive(area, &Sequential(finder), moves);
}

/// [`build_moves`] with every middle-move search forked on the rayon pool.
/// The output is identical.
pub fn build_moves_parallel<T: PartialEq + Sync>(
    area: Area<'_, T>,
    finder: &MiddleMoveFinder,
    moves: &mut Vec<Move<T>>,
) {
    split_recursive(area, &Parallel(finder), moves);
}

/// How a single area gets its middle move
trait Split<T> {
    fn split(&self, area: &Area<'_, T>) -> MiddleMove;
}

struct Sequential<'f>(&'f MiddleMoveFinder);

struct Parallel<'f>(&'f MiddleMoveFinder);

impl<T: PartialEq> Split<T> for Sequential<'_> {
    fn split(&self, area: &Area<'_, T>) -> MiddleMove {
        self.0.find(area)
    }
}

impl<T: PartialEq + Sync> Split<T> for Parallel<'_> {
    fn split(&self, area: &Area<'_, T>) -> MiddleMove {
        self.0.find_parallel(area)
    }
}

fn split_recursive<T, S>(area: Area<'_, T>, splitter: &S, moves: &mut Vec<Move<T>>)
where
    T: PartialEq,
    S: Split<T>,
{
    if area.is_empty() {
        return;
    }
    if area.n() == 0 {
        push_run(moves, MoveKind::Insert, area.tl(), area.br());
        return;
    }
    if area.m() == 0 {
        push_run(moves, MoveKind::Delete, area.tl(), area.br());
        return;
    }

    let middle = splitter.split(&area);
    debug_assert!(
        (middle.top, middle.bottom) != (area.tl(), area.br()),
        "middle move does not split {}..{}",
        area.tl(),
        area.br()
    );
    split_recursive(area.sub(area.tl(), middle.top), splitter, moves);
    split_recursive(area.sub(middle.top, middle.bottom), splitter, moves);
    split_recursive(area.sub(middle.bottom, area.br()), splitter, moves);
}

fn push_run<T>(moves: &mut Vec<Move<T>>, kind: MoveKind, source: Point, target: Point) {
    if let Some(last) = moves.last_mut() {
        if last.kind() == kind && last.target() == source {
            last.set_target(target);
            return;
        }
    }
    moves.push(match kind {
        MoveKind::Insert => Move::insert(source, target),
        MoveKind::Delete => Move::delete(source, target),
        MoveKind::Equal => Move::equal(source, target),
    });
}
