//! Integration tests for the address algebra: parsing, offsetting,
//! fill-order indexing, bounding-box unions, and ordering.

use cellgrid::prelude::*;
use cellgrid::{column_index, column_label};
use pretty_assertions::assert_eq;

fn addr(s: &str) -> CellAddress {
    CellAddress::parse(s).unwrap()
}

#[test]
fn single_cell_parse_and_render() {
    for (text, rendered) in [("A1", "$A$1"), ("c4", "$C$4"), ("AA100", "$AA$100")] {
        let cell = addr(text);
        assert_eq!(cell.count(), 1);
        assert_eq!(cell.local_address(), rendered);
    }
}

#[test]
fn corner_order_is_irrelevant() {
    assert_eq!(addr("A1:B2"), addr("B2:A1"));
    assert_eq!(addr("A2:B1"), addr("B1:A2"));
    assert_eq!(addr("A1:B2").local_address(), "$A$1:$B$2");
}

#[test]
fn offset_moves_anchor_with_bounds_checks() {
    let cell = addr("C4");
    assert_eq!(cell.offset(1, 0).unwrap().local_address(), "$C$5");
    assert_eq!(cell.offset(0, 1).unwrap().local_address(), "$D$4");
    assert_eq!(cell.offset(1, 1).unwrap().local_address(), "$D$5");
    assert_eq!(cell.offset(-1, -2).unwrap().local_address(), "$A$3");
    assert!(cell.offset(-10, 0).is_err());
}

#[test]
fn index_into_six_by_five_range() {
    let cells = addr("A1:F5");
    let cell = cells.cell_at(1, FillDirection::ColumnFirst).unwrap();
    assert_eq!(cell.local_address(), "$B$1");

    let cell = cells.cell_at(2, FillDirection::RowFirst).unwrap();
    assert_eq!(cell.local_address(), "$A$3");
}

#[test]
fn index_into_two_by_two_range() {
    let cell = addr("Sheet1!A1:B2");
    assert_eq!(cell.count(), 4);
    assert_eq!(cell.col_first(), 0);
    assert_eq!(cell.row_first(), 0);

    let next_down = cell.cell_at(1, FillDirection::RowFirst).unwrap();
    assert_eq!(next_down.local_address(), "$A$2");

    let next_across = cell.cell_at(1, FillDirection::ColumnFirst).unwrap();
    assert_eq!(next_across.local_address(), "$B$1");
}

#[test]
fn next_cell_is_an_alias_for_cell_at() {
    let cell = addr("Sheet1!A1:B2");
    assert_eq!(cell.count(), 4);

    let next_down = cell.next_cell(1, FillDirection::RowFirst).unwrap();
    assert_eq!(next_down.local_address(), "$A$2");

    let next_across = cell.next_cell(1, FillDirection::ColumnFirst).unwrap();
    assert_eq!(next_across.local_address(), "$B$1");
}

#[test]
fn both_orders_cover_every_cell_exactly_once() {
    let range = addr("Sheet1!A1:F10");
    for dir in [FillDirection::ColumnFirst, FillDirection::RowFirst] {
        let mut seen: Vec<String> = (0..range.count())
            .map(|i| range.cell_at(i, dir).unwrap().local_address())
            .collect();
        assert_eq!(seen.len() as u64, range.count());
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len() as u64, range.count());
    }
    assert!(range.cell_at(range.count(), FillDirection::ColumnFirst).is_err());
}

#[test]
fn bounding_box_union() {
    let cells: Vec<CellAddress> = ["A1", "B2", "D5", "F3"].iter().map(|s| addr(s)).collect();
    let bounds = CellAddress::bounding(&cells).unwrap();
    assert_eq!(bounds.local_address(), "$A$1:$F$5");
}

#[test]
fn max_prefers_later_row_then_column() {
    let c1 = addr("A1");
    let c2 = addr("A2");
    assert_eq!(c1.max(&c2), c2);
}

#[test]
fn column_codec_round_trip() {
    for (label, index) in [("A", 0u16), ("Z", 25), ("AA", 26), ("XFD", 16_383)] {
        assert_eq!(column_label(index), label);
        assert_eq!(column_index(label).unwrap(), index);
    }
}
