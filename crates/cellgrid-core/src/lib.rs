//! # cellgrid-core
//!
//! Spreadsheet cell and range addresses as a parseable, composable value
//! type, independent of any live spreadsheet.
//!
//! This crate provides the address algebra:
//! - [`CellAddress`] - A rectangular range (a single cell is a 1x1 range),
//!   parsed from A1-style text and optionally scoped to a named sheet
//! - [`FillDirection`] - The two enumeration orders for walking a range's
//!   cells by linear index
//! - [`column_label`] / [`column_index`] - The bijective base-26 column codec
//!
//! All operations are pure: parsing, offsetting, indexing, union, and
//! rendering allocate no shared state and every derivation returns a new
//! [`CellAddress`].
//!
//! ## Example
//!
//! ```rust
//! use cellgrid_core::{CellAddress, FillDirection};
//!
//! let range = CellAddress::parse("Sheet1!A1:F5").unwrap();
//! assert_eq!(range.count(), 30);
//! assert_eq!(range.local_address(), "$A$1:$F$5");
//!
//! // Offset and index derivations
//! let moved = range.offset(1, 1).unwrap();
//! assert_eq!(moved.local_address(), "$B$2:$G$6");
//!
//! let cell = range.cell_at(2, FillDirection::RowFirst).unwrap();
//! assert_eq!(cell.local_address(), "$A$3");
//! ```

pub mod address;
pub mod column;
pub mod error;
pub mod fill;

// Re-exports for convenience
pub use address::CellAddress;
pub use column::{column_index, column_label};
pub use error::{Error, Result};
pub use fill::{Cells, FillDirection};

/// Maximum number of rows in a sheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a sheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
