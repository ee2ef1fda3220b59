//! In-memory value store
//!
//! [`MemorySheet`] satisfies the same [`ValueStore`] contract as a real host
//! binding, which makes it both a usable standalone backend and the test
//! double for code built against the adapter.

use std::collections::HashMap;

use cellgrid_core::CellAddress;
use thiserror::Error;

use crate::store::ValueStore;
use crate::value::CellValue;

/// Errors reported by [`MemorySheet`]
#[derive(Debug, Error)]
pub enum MemoryError {
    /// A per-cell operation was handed a multi-cell range
    #[error("Expected a single cell, got range {0}")]
    NotSingleCell(String),
}

#[derive(Debug, Clone, Default)]
struct CellSlot {
    value: CellValue,
    formula: Option<String>,
}

/// An in-memory [`ValueStore`] keyed by sheet name and cell position.
///
/// Addresses without a sheet scope and addresses scoped to different sheets
/// occupy distinct cells, so a single `MemorySheet` can stand in for a whole
/// workbook.
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    cells: HashMap<(Option<String>, u32, u16), CellSlot>,
}

impl MemorySheet {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells holding any contents
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell holds contents
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn key(cell: &CellAddress) -> Result<(Option<String>, u32, u16), MemoryError> {
        if !cell.is_single_cell() {
            return Err(MemoryError::NotSingleCell(cell.to_string()));
        }
        Ok((
            cell.sheet().map(str::to_string),
            cell.row_first(),
            cell.col_first(),
        ))
    }
}

impl ValueStore for MemorySheet {
    type Error = MemoryError;

    fn value(&self, cell: &CellAddress) -> Result<CellValue, Self::Error> {
        let key = Self::key(cell)?;
        Ok(self
            .cells
            .get(&key)
            .map(|slot| slot.value.clone())
            .unwrap_or_default())
    }

    fn set_value(&mut self, cell: &CellAddress, value: CellValue) -> Result<(), Self::Error> {
        let key = Self::key(cell)?;
        if value.is_empty() {
            // An empty value without a formula is the same as no slot at
            // all; keep len() counting only cells holding contents
            match self.cells.get_mut(&key) {
                Some(slot) if slot.formula.is_some() => slot.value = value,
                Some(_) => {
                    self.cells.remove(&key);
                }
                None => {}
            }
        } else {
            self.cells.entry(key).or_default().value = value;
        }
        Ok(())
    }

    fn formula(&self, cell: &CellAddress) -> Result<String, Self::Error> {
        let key = Self::key(cell)?;
        Ok(self
            .cells
            .get(&key)
            .and_then(|slot| slot.formula.clone())
            .unwrap_or_default())
    }

    fn set_formula(&mut self, cell: &CellAddress, formula: &str) -> Result<(), Self::Error> {
        let key = Self::key(cell)?;
        self.cells.entry(key).or_default().formula = Some(formula.to_string());
        Ok(())
    }

    fn clear_contents(&mut self, cell: &CellAddress) -> Result<(), Self::Error> {
        let key = Self::key(cell)?;
        self.cells.remove(&key);
        Ok(())
    }
}
