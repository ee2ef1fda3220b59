//! # cellgrid
//!
//! A Rust library for spreadsheet cell and range addresses: parsing
//! A1-style text, offsetting, fill-order indexing, bounding-box unions, and
//! canonical rendering — plus a pluggable value-store adapter for reading
//! and writing the cells a range names.
//!
//! The address algebra is pure and host-free. All spreadsheet I/O goes
//! through the [`ValueStore`] trait, injected by the caller; the in-memory
//! [`MemorySheet`] implements it for tests and standalone use.
//!
//! ## Example
//!
//! ```rust
//! use cellgrid::prelude::*;
//!
//! // Parse and derive addresses
//! let range = CellAddress::parse("Sheet1!A1:F5").unwrap();
//! assert_eq!(range.count(), 30);
//! assert_eq!(range.cell_at(1, FillDirection::ColumnFirst).unwrap().local_address(), "$B$1");
//!
//! // Broadcast a value through a store
//! let mut store = MemorySheet::new();
//! store.set_range_value(&range, &CellValue::from(0.0)).unwrap();
//! assert!(store.values(&range).all(|v| !v.unwrap().is_empty()));
//! ```

pub mod prelude;

// Re-export core types
pub use cellgrid_core::{
    column_index,
    column_label,
    // Address types
    CellAddress,
    Cells,
    // Error types
    Error,
    FillDirection,
    Result,
    MAX_COLS,
    MAX_ROWS,
};

// Re-export store types
pub use cellgrid_store::{CellValue, MemoryError, MemorySheet, ValueStore, ValueStoreExt, Values};
