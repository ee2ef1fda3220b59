//! Error types for cellgrid-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cellgrid-core
#[derive(Debug, Error)]
pub enum Error {
    /// Address text does not match the A1 grammar
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Column label is empty or contains non-alphabetic characters
    #[error("Invalid column label: {0}")]
    InvalidColumn(String),

    /// Range extents are invalid (zero rows or columns)
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Linear cell index outside the range's cell count
    #[error("Cell index {index} out of range for {count} cells")]
    IndexOutOfRange {
        /// The requested index
        index: u64,
        /// Number of cells in the range
        count: u64,
    },

    /// Offset would move the range outside the sheet
    #[error("Offset ({0}, {1}) moves range outside the sheet")]
    OffsetOutOfRange(i64, i64),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// Bounding-box union over an empty sequence of ranges
    #[error("Cannot compute the union of zero ranges")]
    EmptyUnion,

    /// Union over ranges scoped to different sheets
    #[error("Cannot union ranges on different sheets: {0} and {1}")]
    SheetMismatch(String, String),
}
