//! `lev-distance` — Levenshtein edit distance over a fixed-size grid.
//!
//! Computes the minimum number of single-character insertions, deletions and
//! substitutions needed to turn one sequence into another, using the classic
//! dynamic-programming table stored in a [`FixedGrid2D`].
//!
//! # Modules
//!
//! - `grid` — dense row-major `columns × rows` buffer with bounds-checked access
//! - `distance` — the edit-distance fill, similarity ratio and `str` extension
//! - `report` — serializable distance/similarity summary
//! - `config` — argument parsing for the `lev-distance` binary
//!
//! ```
//! use lev_distance::LevenshteinExt;
//!
//! assert_eq!(lev_distance::distance("kitten", "sitting"), 3);
//! assert_eq!("flaw".levenshtein_distance("lawn"), 2);
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod grid;
pub mod report;

pub use distance::{LevenshteinExt, distance, distance_by, similarity};
pub use error::{LevError, LevResult};
pub use grid::FixedGrid2D;
pub use report::DistanceReport;
