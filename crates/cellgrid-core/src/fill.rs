//! Fill order and per-cell enumeration
//!
//! A [`CellAddress`] establishes a total order over its constituent cells.
//! [`FillDirection`] selects which of the two orders is used to map a linear
//! index to a (row, column) offset within the range.

use crate::address::CellAddress;
use crate::error::{Error, Result};

/// The order in which a linear index walks the cells of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillDirection {
    /// Advance across columns before moving to the next row (row-major)
    #[default]
    ColumnFirst,
    /// Advance down rows before moving to the next column (column-major)
    RowFirst,
}

impl CellAddress {
    /// Get the single cell at a linear index within this range
    ///
    /// With `ColumnFirst` the index walks across each row in turn; with
    /// `RowFirst` it walks down each column in turn. The result keeps the
    /// range's sheet scope. Fails with [`Error::IndexOutOfRange`] when
    /// `index >= self.count()`.
    ///
    /// # Examples
    /// ```
    /// use cellgrid_core::{CellAddress, FillDirection};
    ///
    /// let range = CellAddress::parse("A1:F5").unwrap();
    /// let cell = range.cell_at(1, FillDirection::ColumnFirst).unwrap();
    /// assert_eq!(cell.local_address(), "$B$1");
    ///
    /// let cell = range.cell_at(2, FillDirection::RowFirst).unwrap();
    /// assert_eq!(cell.local_address(), "$A$3");
    /// ```
    pub fn cell_at(&self, index: u64, direction: FillDirection) -> Result<CellAddress> {
        let count = self.count();
        if index >= count {
            return Err(Error::IndexOutOfRange { index, count });
        }

        let w = self.col_count as u64;
        let h = self.row_count as u64;
        let (row, col) = match direction {
            FillDirection::ColumnFirst => (index / w, index % w),
            FillDirection::RowFirst => (index % h, index / h),
        };

        Ok(CellAddress {
            sheet: self.sheet.clone(),
            row_first: self.row_first + row as u32,
            col_first: self.col_first + col as u16,
            row_count: 1,
            col_count: 1,
        })
    }

    /// Alias for [`cell_at`](Self::cell_at)
    pub fn next_cell(&self, index: u64, direction: FillDirection) -> Result<CellAddress> {
        self.cell_at(index, direction)
    }

    /// Iterate over the single cells of this range in the default
    /// (`ColumnFirst`) order
    ///
    /// The iterator is lazy and finite; calling `cells()` again restarts it.
    ///
    /// # Examples
    /// ```
    /// use cellgrid_core::CellAddress;
    ///
    /// let range = CellAddress::parse("A1:B2").unwrap();
    /// let names: Vec<_> = range.cells().map(|c| c.local_address()).collect();
    /// assert_eq!(names, ["$A$1", "$B$1", "$A$2", "$B$2"]);
    /// ```
    pub fn cells(&self) -> Cells {
        self.cells_in(FillDirection::ColumnFirst)
    }

    /// Iterate over the single cells of this range in the given order
    pub fn cells_in(&self, direction: FillDirection) -> Cells {
        Cells {
            range: self.clone(),
            index: 0,
            direction,
        }
    }
}

/// Lazy iterator over the single cells of a range
///
/// Positions are computed on demand; the range is never materialized as a
/// collection.
#[derive(Debug, Clone)]
pub struct Cells {
    range: CellAddress,
    index: u64,
    direction: FillDirection,
}

impl Iterator for Cells {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.range.cell_at(self.index, self.direction).ok()?;
        self.index += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.range.count() - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cell_at_column_first() {
        // 6 columns x 5 rows anchored at A1
        let range = CellAddress::parse("A1:F5").unwrap();
        let cell = range.cell_at(1, FillDirection::ColumnFirst).unwrap();
        assert_eq!(cell.local_address(), "$B$1");

        // Wraps to the next row after the sixth cell
        let cell = range.cell_at(6, FillDirection::ColumnFirst).unwrap();
        assert_eq!(cell.local_address(), "$A$2");
    }

    #[test]
    fn test_cell_at_row_first() {
        let range = CellAddress::parse("A1:F5").unwrap();
        let cell = range.cell_at(2, FillDirection::RowFirst).unwrap();
        assert_eq!(cell.local_address(), "$A$3");

        // Wraps to the next column after the fifth cell
        let cell = range.cell_at(5, FillDirection::RowFirst).unwrap();
        assert_eq!(cell.local_address(), "$B$1");
    }

    #[test]
    fn test_cell_at_two_by_two() {
        let range = CellAddress::parse("A1:B2").unwrap();
        assert_eq!(
            range
                .cell_at(1, FillDirection::RowFirst)
                .unwrap()
                .local_address(),
            "$A$2"
        );
        assert_eq!(
            range
                .cell_at(1, FillDirection::ColumnFirst)
                .unwrap()
                .local_address(),
            "$B$1"
        );
    }

    #[test]
    fn test_cell_at_keeps_sheet() {
        let range = CellAddress::parse("Sheet1!A1:B2").unwrap();
        let cell = range.cell_at(3, FillDirection::ColumnFirst).unwrap();
        assert_eq!(cell.sheet(), Some("Sheet1"));
        assert_eq!(cell.local_address(), "$B$2");
        assert!(cell.is_single_cell());
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let range = CellAddress::parse("A1:B2").unwrap();
        assert!(matches!(
            range.cell_at(4, FillDirection::ColumnFirst),
            Err(Error::IndexOutOfRange { index: 4, count: 4 })
        ));
    }

    #[test]
    fn test_next_cell_matches_cell_at() {
        let range = CellAddress::parse("Sheet1!A1:F10").unwrap();
        for i in 0..range.count() {
            for dir in [FillDirection::ColumnFirst, FillDirection::RowFirst] {
                assert_eq!(range.next_cell(i, dir).unwrap(), range.cell_at(i, dir).unwrap());
            }
        }
    }

    #[test]
    fn test_cells_default_order() {
        let range = CellAddress::parse("A1:B2").unwrap();
        let names: Vec<_> = range.cells().map(|c| c.local_address()).collect();
        assert_eq!(names, ["$A$1", "$B$1", "$A$2", "$B$2"]);
    }

    #[test]
    fn test_cells_row_first_order() {
        let range = CellAddress::parse("A1:B2").unwrap();
        let names: Vec<_> = range
            .cells_in(FillDirection::RowFirst)
            .map(|c| c.local_address())
            .collect();
        assert_eq!(names, ["$A$1", "$A$2", "$B$1", "$B$2"]);
    }

    #[test]
    fn test_cells_is_restartable_and_sized() {
        let range = CellAddress::parse("A1:F5").unwrap();
        assert_eq!(range.cells().len(), 30);
        assert_eq!(range.cells().count(), 30);
        // A fresh iterator starts over
        assert_eq!(range.cells().next(), range.cells().next());
    }

    #[test]
    fn test_single_cell_enumeration() {
        let cell = CellAddress::parse("C4").unwrap();
        let all: Vec<_> = cell.cells().collect();
        assert_eq!(all, [cell]);
    }
}
