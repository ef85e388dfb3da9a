//! Errors surfaced by the diff engine

use crate::edit::MoveKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("{kind} of {count} at {at} does not fit a sequence of length {len}")]
    OutOfRange {
        kind: MoveKind,
        at: usize,
        count: usize,
        len: usize,
    },
    #[error("insert at {at} spans {expected} elements but carries {found}")]
    Unfilled {
        at: usize,
        expected: usize,
        found: usize,
    },
}
