//! Prelude module - common imports for cellgrid users
//!
//! ```rust
//! use cellgrid::prelude::*;
//! ```

pub use crate::{
    // Address types
    CellAddress,
    Cells,
    // Value types
    CellValue,
    // Error types
    Error,
    FillDirection,
    MemorySheet,
    Result,
    // Store types
    ValueStore,
    ValueStoreExt,
};
