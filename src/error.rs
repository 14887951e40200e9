//! Error types for the lev-distance crate.

/// Errors surfaced by the grid's checked constructor and accessors, and by report rendering.
#[derive(Debug, thiserror::Error)]
pub enum LevError {
    /// Column index falls outside the grid.
    #[error("column {column} is out of range for grid (columns: {columns}, rows: {rows})")]
    ColumnOutOfRange {
        column: usize,
        columns: usize,
        rows: usize,
    },

    /// Row index falls outside the grid.
    #[error("row {row} is out of range for grid (columns: {columns}, rows: {rows})")]
    RowOutOfRange {
        row: usize,
        columns: usize,
        rows: usize,
    },

    /// `columns * rows` does not fit in `usize`.
    #[error("grid dimensions overflow (columns: {columns}, rows: {rows})")]
    DimensionOverflow { columns: usize, rows: usize },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for lev-distance operations.
pub type LevResult<T> = Result<T, LevError>;
