//! Midsnake Core - linear-space Myers diff with middle-snake splitting
//!
//! This library computes compact edit scripts between two sequences of
//! comparable elements, by recursively splitting the edit graph at the point
//! where a forward and a backward Myers search meet.

pub mod area;
pub mod builder;
pub mod diff;
pub mod edit;
pub mod error;
pub mod frontier;
pub mod point;
pub mod snake;

pub use area::Area;
pub use builder::{build_moves, build_moves_parallel};
pub use diff::{diff, split_lines, DiffEngine, DiffResult, FileDiff};
pub use edit::{
    apply_all, apply_patches, fill, strip, with_equal_runs, Move, MoveKind, Patch,
};
pub use error::DiffError;
pub use frontier::Frontier;
pub use point::Point;
pub use snake::{MiddleMove, MiddleMoveFinder};
