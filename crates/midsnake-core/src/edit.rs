//! Edit script representation and materialization
//!
//! A [`Move`] records where a run sits in both sequences: `x` is the index in
//! the old sequence, `y` the index in the sequence being edited. When a script
//! is applied front to back, the working sequence at a move's source is always
//! `new[..y] ++ old[x..]`, so moves apply at their `y` coordinate and no
//! running offset is needed.

use crate::error::DiffError;
use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    /// Elements of the new sequence are inserted
    Insert,
    /// Elements of the old sequence are removed
    Delete,
    /// Elements are shared by both sequences (no-op)
    Equal,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MoveKind::Insert => "insert",
            MoveKind::Delete => "delete",
            MoveKind::Equal => "equal",
        })
    }
}

/// One run of an edit script, from `source` to `target` in the edit graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Move<T> {
    /// Unchanged run; `target - source` is the same in both coordinates
    Equal { source: Point, target: Point },
    /// Removes `target.x - source.x` elements; `source.y == target.y`
    Delete { source: Point, target: Point },
    /// Inserts `new[source.y..target.y]`; `source.x == target.x`.
    /// `content` stays empty until [`fill`] runs.
    Insert {
        source: Point,
        target: Point,
        #[serde(default)]
        content: Vec<T>,
    },
}

impl<T> Move<T> {
    pub fn insert(source: Point, target: Point) -> Self {
        debug_assert_eq!(source.x, target.x);
        Move::Insert {
            source,
            target,
            content: Vec::new(),
        }
    }

    pub fn delete(source: Point, target: Point) -> Self {
        debug_assert_eq!(source.y, target.y);
        Move::Delete { source, target }
    }

    pub fn equal(source: Point, target: Point) -> Self {
        debug_assert_eq!(source.diagonal(), target.diagonal());
        Move::Equal { source, target }
    }

    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Equal { .. } => MoveKind::Equal,
            Move::Delete { .. } => MoveKind::Delete,
            Move::Insert { .. } => MoveKind::Insert,
        }
    }

    pub fn source(&self) -> Point {
        match self {
            Move::Equal { source, .. } | Move::Delete { source, .. } | Move::Insert { source, .. } => {
                *source
            }
        }
    }

    pub fn target(&self) -> Point {
        match self {
            Move::Equal { target, .. } | Move::Delete { target, .. } | Move::Insert { target, .. } => {
                *target
            }
        }
    }

    pub(crate) fn set_target(&mut self, point: Point) {
        match self {
            Move::Equal { target, .. } | Move::Delete { target, .. } | Move::Insert { target, .. } => {
                *target = point
            }
        }
    }

    /// Number of elements the run covers
    pub fn len(&self) -> usize {
        match self {
            Move::Equal { source, target } | Move::Delete { source, target } => {
                target.x - source.x
            }
            Move::Insert { source, target, .. } => target.y - source.y,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if this is an actual change (not an equal run)
    pub fn is_change(&self) -> bool {
        self.kind() != MoveKind::Equal
    }

    /// Inserted elements; empty for anything but a filled insert
    pub fn content(&self) -> &[T] {
        match self {
            Move::Insert { content, .. } => content,
            _ => &[],
        }
    }

    /// Mirror the move into the frame where old and new swap roles.
    /// Inserts become deletes and vice versa; content is dropped.
    pub fn transposed(self) -> Self {
        match self {
            Move::Equal { source, target } => Move::equal(source.transposed(), target.transposed()),
            Move::Delete { source, target } => {
                Move::insert(source.transposed(), target.transposed())
            }
            Move::Insert { source, target, .. } => {
                Move::delete(source.transposed(), target.transposed())
            }
        }
    }
}

impl<T: Clone> Move<T> {
    /// Apply this move to the working sequence.
    ///
    /// The sequence must be the result of applying every earlier move of the
    /// same script to a copy of the old sequence. On error the sequence is left
    /// untouched.
    pub fn apply(&self, seq: &mut Vec<T>) -> Result<(), DiffError> {
        let at = self.source().y;
        match self {
            Move::Equal { .. } => check_range(MoveKind::Equal, at, self.len(), seq.len()),
            Move::Delete { .. } => {
                let count = self.len();
                check_range(MoveKind::Delete, at, count, seq.len())?;
                seq.drain(at..at + count);
                Ok(())
            }
            Move::Insert { content, .. } => {
                if content.len() != self.len() {
                    return Err(DiffError::Unfilled {
                        at,
                        expected: self.len(),
                        found: content.len(),
                    });
                }
                check_range(MoveKind::Insert, at, 0, seq.len())?;
                seq.splice(at..at, content.iter().cloned());
                Ok(())
            }
        }
    }
}

/// Compact form of a filled move, as produced by [`strip`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Patch<T> {
    Delete { at: usize, count: usize },
    Insert { at: usize, content: Vec<T> },
}

impl<T: Clone> Patch<T> {
    pub fn apply(&self, seq: &mut Vec<T>) -> Result<(), DiffError> {
        match self {
            Patch::Delete { at, count } => {
                check_range(MoveKind::Delete, *at, *count, seq.len())?;
                seq.drain(*at..*at + *count);
            }
            Patch::Insert { at, content } => {
                check_range(MoveKind::Insert, *at, 0, seq.len())?;
                seq.splice(*at..*at, content.iter().cloned());
            }
        }
        Ok(())
    }
}

fn check_range(kind: MoveKind, at: usize, count: usize, len: usize) -> Result<(), DiffError> {
    match at.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(DiffError::OutOfRange {
            kind,
            at,
            count,
            len,
        }),
    }
}

/// Copy the inserted elements of `new` into every insert move.
///
/// # Panics
///
/// If an insert spans past the end of `new`, i.e. the moves were computed
/// against a different sequence.
pub fn fill<T: Clone>(new: &[T], moves: &mut [Move<T>]) {
    for mv in moves.iter_mut() {
        if let Move::Insert {
            source,
            target,
            content,
        } = mv
        {
            assert!(
                target.y <= new.len(),
                "insert {source}..{target} reaches past a sequence of length {}",
                new.len()
            );
            content.clear();
            content.extend_from_slice(&new[source.y..target.y]);
        }
    }
}

/// Collapse filled moves into their compact patch form. Equal runs carry no
/// edit and are dropped.
pub fn strip<T>(moves: Vec<Move<T>>) -> Result<Vec<Patch<T>>, DiffError> {
    let mut patches = Vec::with_capacity(moves.len());
    for mv in moves {
        let expected = mv.len();
        match mv {
            Move::Equal { .. } => {}
            Move::Delete { source, target } => patches.push(Patch::Delete {
                at: source.y,
                count: target.x - source.x,
            }),
            Move::Insert {
                source, content, ..
            } => {
                if content.len() != expected {
                    return Err(DiffError::Unfilled {
                        at: source.y,
                        expected,
                        found: content.len(),
                    });
                }
                patches.push(Patch::Insert {
                    at: source.y,
                    content,
                });
            }
        }
    }
    Ok(patches)
}

/// Apply a whole script in order
pub fn apply_all<T: Clone>(moves: &[Move<T>], seq: &mut Vec<T>) -> Result<(), DiffError> {
    moves.iter().try_for_each(|mv| mv.apply(seq))
}

/// Apply stripped patches in order
pub fn apply_patches<T: Clone>(patches: &[Patch<T>], seq: &mut Vec<T>) -> Result<(), DiffError> {
    patches.iter().try_for_each(|patch| patch.apply(seq))
}

/// Fill the diagonal gaps of a compact script with [`Move::Equal`] runs, so
/// that every move starts where the previous one ended, the first at the
/// origin and the last at `(old_len, new_len)`.
pub fn with_equal_runs<T>(moves: Vec<Move<T>>, old_len: usize, new_len: usize) -> Vec<Move<T>> {
    let mut chained = Vec::with_capacity(moves.len() * 2 + 1);
    let mut cursor = Point::ORIGIN;
    for mv in moves {
        if mv.source() != cursor {
            chained.push(Move::equal(cursor, mv.source()));
        }
        cursor = mv.target();
        chained.push(mv);
    }
    let end = Point::new(old_len, new_len);
    if cursor != end {
        chained.push(Move::equal(cursor, end));
    }
    chained
}
