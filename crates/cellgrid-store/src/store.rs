//! The value-store adapter contract and multi-cell broadcast operations
//!
//! [`ValueStore`] is the capability boundary between the address algebra and
//! a host spreadsheet: the algebra is the caller, the host binding (or an
//! in-memory store) is the implementer. The store is always passed
//! explicitly — there is no ambient "current application" handle.
//!
//! [`ValueStoreExt`] layers the multi-cell broadcast policy on top of any
//! store: a write to a multi-cell range applies the identical literal
//! value/formula/clear to every constituent cell, one adapter call per cell.

use cellgrid_core::{CellAddress, Cells};
use log::debug;

use crate::value::CellValue;

/// Read/write access to cell contents, addressed by single-cell
/// [`CellAddress`].
///
/// Implementations may assume every address passed in is a single cell;
/// multi-cell operations go through [`ValueStoreExt`], which fans out
/// per cell. Calls are synchronous and must not be reordered or
/// parallelized by callers — host spreadsheet engines are generally not
/// re-entrant.
pub trait ValueStore {
    /// Error reported by the host; opaque to the address algebra and
    /// propagated untouched.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a cell's value. An empty cell reads as [`CellValue::Empty`].
    fn value(&self, cell: &CellAddress) -> Result<CellValue, Self::Error>;

    /// Write a cell's value.
    fn set_value(&mut self, cell: &CellAddress, value: CellValue) -> Result<(), Self::Error>;

    /// Read a cell's formula text (empty string if the cell has no formula).
    fn formula(&self, cell: &CellAddress) -> Result<String, Self::Error>;

    /// Write a cell's formula text (e.g. `"=A1"`).
    fn set_formula(&mut self, cell: &CellAddress, formula: &str) -> Result<(), Self::Error>;

    /// Clear a cell's contents (value and formula).
    fn clear_contents(&mut self, cell: &CellAddress) -> Result<(), Self::Error>;
}

/// Broadcast operations over whole ranges, provided for every [`ValueStore`].
///
/// Cells are visited in the default `ColumnFirst` enumeration order. The
/// fan-out is fail-fast and not atomic: an error partway through leaves the
/// cells already visited mutated.
pub trait ValueStoreExt: ValueStore {
    /// Write the same value to every cell of `range`.
    fn set_range_value(&mut self, range: &CellAddress, value: &CellValue) -> Result<(), Self::Error> {
        debug!("broadcasting value to {} cell(s) in {}", range.count(), range);
        for cell in range.cells() {
            self.set_value(&cell, value.clone())?;
        }
        Ok(())
    }

    /// Write the same formula text, verbatim, to every cell of `range`.
    ///
    /// No per-cell relative-reference adjustment is performed: every cell
    /// receives the identical literal text.
    fn set_range_formula(&mut self, range: &CellAddress, formula: &str) -> Result<(), Self::Error> {
        debug!(
            "broadcasting formula {:?} to {} cell(s) in {}",
            formula,
            range.count(),
            range
        );
        for cell in range.cells() {
            self.set_formula(&cell, formula)?;
        }
        Ok(())
    }

    /// Clear the contents of every cell of `range`.
    fn clear_range(&mut self, range: &CellAddress) -> Result<(), Self::Error> {
        debug!("clearing {} cell(s) in {}", range.count(), range);
        for cell in range.cells() {
            self.clear_contents(&cell)?;
        }
        Ok(())
    }

    /// Lazily read every cell of `range`, in enumeration order.
    ///
    /// Values are fetched one at a time as the iterator advances; calling
    /// `values` again restarts the sequence.
    fn values<'a>(&'a self, range: &CellAddress) -> Values<'a, Self> {
        Values {
            store: self,
            cells: range.cells(),
        }
    }
}

impl<S: ValueStore + ?Sized> ValueStoreExt for S {}

/// Lazy iterator over per-cell values of a range (see
/// [`ValueStoreExt::values`])
pub struct Values<'a, S: ValueStore + ?Sized> {
    store: &'a S,
    cells: Cells,
}

impl<'a, S: ValueStore + ?Sized> Iterator for Values<'a, S> {
    type Item = Result<CellValue, S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.cells.next()?;
        Some(self.store.value(&cell))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl<'a, S: ValueStore + ?Sized> ExactSizeIterator for Values<'a, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySheet;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_range_value_hits_every_cell() {
        let mut store = MemorySheet::new();
        let range = CellAddress::parse("A1:A5").unwrap();
        store
            .set_range_value(&range, &CellValue::from("msg"))
            .unwrap();

        for cell in range.cells() {
            assert_eq!(store.value(&cell).unwrap().as_str(), Some("msg"));
        }
    }

    #[test]
    fn test_set_range_formula_is_verbatim() {
        let mut store = MemorySheet::new();
        let range = CellAddress::parse("B1:B2").unwrap();
        store.set_range_formula(&range, "=A1").unwrap();

        // Every cell gets the identical literal text, no reference
        // adjustment
        for cell in range.cells() {
            assert_eq!(store.formula(&cell).unwrap(), "=A1");
        }
    }

    #[test]
    fn test_clear_range() {
        let mut store = MemorySheet::new();
        let range = CellAddress::parse("A1:B2").unwrap();
        store.set_range_value(&range, &CellValue::from(1.0)).unwrap();
        store.clear_range(&range).unwrap();

        assert!(store
            .values(&range)
            .all(|v| v.unwrap().is_empty()));
    }

    #[test]
    fn test_values_order_and_restart() {
        let mut store = MemorySheet::new();
        let range = CellAddress::parse("A1:B2").unwrap();
        for (i, cell) in range.cells().enumerate() {
            store.set_value(&cell, CellValue::from(i as f64)).unwrap();
        }

        let read: Vec<_> = store
            .values(&range)
            .map(|v| v.unwrap().as_number().unwrap())
            .collect();
        assert_eq!(read, [0.0, 1.0, 2.0, 3.0]);

        // Restartable
        assert_eq!(store.values(&range).len(), 4);
        assert_eq!(
            store.values(&range).next().unwrap().unwrap(),
            CellValue::Number(0.0)
        );
    }
}
