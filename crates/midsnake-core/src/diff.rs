//! Diff computation engine

use crate::area::Area;
use crate::builder::{build_moves, build_moves_parallel};
use crate::edit::{fill, strip, with_equal_runs, Move, MoveKind, Patch};
use crate::error::DiffError;
use crate::snake::MiddleMoveFinder;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Result of a diff operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffResult<T> {
    /// The edit script, in order
    pub moves: Vec<Move<T>>,
    /// Total number of inserted elements
    pub insertions: usize,
    /// Total number of deleted elements
    pub deletions: usize,
}

impl<T> DiffResult<T> {
    fn new(moves: Vec<Move<T>>) -> Self {
        let count = |kind: MoveKind| -> usize {
            moves
                .iter()
                .filter(|m| m.kind() == kind)
                .map(Move::len)
                .sum()
        };
        let insertions = count(MoveKind::Insert);
        let deletions = count(MoveKind::Delete);
        Self {
            moves,
            insertions,
            deletions,
        }
    }

    /// Inserted plus deleted elements
    pub fn edit_len(&self) -> usize {
        self.insertions + self.deletions
    }

    /// Check if both sides were equal
    pub fn is_identical(&self) -> bool {
        self.edit_len() == 0
    }

    /// Get only the moves that change something
    pub fn changes(&self) -> impl Iterator<Item = &Move<T>> {
        self.moves.iter().filter(|m| m.is_change())
    }

    /// Compact the script into patches
    pub fn into_patches(self) -> Result<Vec<Patch<T>>, DiffError> {
        strip(self.moves)
    }
}

/// A diff for a single file
#[derive(Debug, Clone)]
pub struct FileDiff {
    pub old_path: Option<String>,
    pub new_path: Option<String>,
    pub result: DiffResult<String>,
}

/// The main diff engine
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffEngine {
    /// Per middle-move search budget before falling back to a midpoint split
    time_budget: Option<Duration>,
    /// Search with the shorter sequence as the primary one
    transpose: bool,
    /// Fork the searches of the line entry points on the rayon pool
    parallel: bool,
    /// Interleave equal runs so the script chains from origin to end
    equal_runs: bool,
}

type Builder<T> = fn(Area<'_, T>, &MiddleMoveFinder, &mut Vec<Move<T>>);

impl DiffEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time_budget(mut self, budget: Option<Duration>) -> Self {
        self.time_budget = budget;
        self
    }

    pub fn with_transpose(mut self, enabled: bool) -> Self {
        self.transpose = enabled;
        self
    }

    /// Used by [`DiffEngine::diff_strings`] and [`DiffEngine::diff_files`].
    /// Generic callers with `Sync` elements use [`DiffEngine::diff_parallel`].
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    pub fn with_equal_runs(mut self, enabled: bool) -> Self {
        self.equal_runs = enabled;
        self
    }

    fn script<T: PartialEq>(&self, old: &[T], new: &[T], build: Builder<T>) -> Vec<Move<T>> {
        let finder = MiddleMoveFinder::new().with_time_budget(self.time_budget);
        let transposed = self.transpose && old.len() > new.len();
        let (primary, secondary) = if transposed { (new, old) } else { (old, new) };

        let mut moves = Vec::new();
        build(Area::new(primary, secondary), &finder, &mut moves);

        if transposed {
            moves = moves.into_iter().map(Move::transposed).collect();
        }
        if self.equal_runs {
            moves = with_equal_runs(moves, old.len(), new.len());
        }
        moves
    }

    /// Compute the edit script without copying inserted content
    pub fn diff_unfilled<T: PartialEq>(&self, old: &[T], new: &[T]) -> Vec<Move<T>> {
        self.script(old, new, build_moves)
    }

    /// [`DiffEngine::diff_unfilled`] with forked middle-move searches
    pub fn diff_unfilled_parallel<T: PartialEq + Sync>(
        &self,
        old: &[T],
        new: &[T],
    ) -> Vec<Move<T>> {
        self.script(old, new, build_moves_parallel)
    }

    /// Compute the edit script turning `old` into `new`, inserts filled
    pub fn diff<T: PartialEq + Clone>(&self, old: &[T], new: &[T]) -> Vec<Move<T>> {
        let mut moves = self.diff_unfilled(old, new);
        fill(new, &mut moves);
        moves
    }

    /// [`DiffEngine::diff`] with forked middle-move searches. The script is
    /// the same.
    pub fn diff_parallel<T: PartialEq + Sync + Clone>(
        &self,
        old: &[T],
        new: &[T],
    ) -> Vec<Move<T>> {
        let mut moves = self.diff_unfilled_parallel(old, new);
        fill(new, &mut moves);
        moves
    }

    /// Like [`DiffEngine::diff`], with insertion and deletion totals
    pub fn diff_result<T: PartialEq + Clone>(&self, old: &[T], new: &[T]) -> DiffResult<T> {
        summarize(self.diff(old, new), old.len(), new.len())
    }

    /// Compute a line diff between two strings
    pub fn diff_strings(&self, old: &str, new: &str) -> DiffResult<String> {
        let (old, new) = (split_lines(old), split_lines(new));
        let moves = if self.parallel {
            self.diff_parallel(&old, &new)
        } else {
            self.diff(&old, &new)
        };
        summarize(moves, old.len(), new.len())
    }

    /// Compute a line diff between two files
    pub fn diff_files(&self, old_path: &Path, new_path: &Path) -> Result<FileDiff, DiffError> {
        let old_content = std::fs::read_to_string(old_path)?;
        let new_content = std::fs::read_to_string(new_path)?;

        let result = self.diff_strings(&old_content, &new_content);

        Ok(FileDiff {
            old_path: Some(old_path.to_string_lossy().to_string()),
            new_path: Some(new_path.to_string_lossy().to_string()),
            result,
        })
    }
}

fn summarize<T>(moves: Vec<Move<T>>, old_len: usize, new_len: usize) -> DiffResult<T> {
    let result = DiffResult::new(moves);
    debug!(
        old_len,
        new_len,
        moves = result.moves.len(),
        insertions = result.insertions,
        deletions = result.deletions,
        "diff computed"
    );
    result
}

/// Compute the filled edit script turning `old` into `new`.
///
/// The script is compact: consecutive moves are separated by diagonal runs of
/// equal elements, which are left out. So are leading and trailing equal
/// runs, and identical inputs give an empty script. Use
/// [`DiffEngine::with_equal_runs`] for a script in which every move starts
/// where the previous one ended.
pub fn diff<T: PartialEq + Clone>(
    old: &[T],
    new: &[T],
    time_budget: Option<Duration>,
) -> Vec<Move<T>> {
    DiffEngine::new().with_time_budget(time_budget).diff(old, new)
}

/// Split text into lines, without their terminators
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
