//! # cellgrid-store
//!
//! The value-store side of cellgrid: the capability contract through which
//! single cells are read and written, and the broadcast policy that fans
//! multi-cell operations out per cell.
//!
//! The address algebra in `cellgrid-core` never performs spreadsheet I/O
//! itself; it hands single-cell addresses to a [`ValueStore`] supplied by
//! the caller. A real host binding and the in-memory [`MemorySheet`] satisfy
//! the same contract, so code written against the trait can be exercised
//! without a live spreadsheet.
//!
//! ## Example
//!
//! ```rust
//! use cellgrid_core::CellAddress;
//! use cellgrid_store::{CellValue, MemorySheet, ValueStore, ValueStoreExt};
//!
//! let mut store = MemorySheet::new();
//! let range = CellAddress::parse("B1:B2").unwrap();
//!
//! // The same literal formula is written to every cell of the range
//! store.set_range_formula(&range, "=A1").unwrap();
//! for cell in range.cells() {
//!     assert_eq!(store.formula(&cell).unwrap(), "=A1");
//! }
//! ```

pub mod memory;
pub mod store;
pub mod value;

// Re-exports for convenience
pub use memory::{MemoryError, MemorySheet};
pub use store::{ValueStore, ValueStoreExt, Values};
pub use value::CellValue;
