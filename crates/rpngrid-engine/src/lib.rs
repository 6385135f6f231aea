//! rpngrid_engine - Postfix spreadsheet engine.

pub mod engine;

#[cfg(test)]
mod tests {
    use crate::engine::*;
    use pretty_assertions::assert_eq;

    fn run(rows: &[&[&str]]) -> Grid {
        let mut grid = Grid::from_rows(rows.iter().map(|r| r.iter().copied()));
        recalculate(&mut grid);
        grid
    }

    fn shown(grid: &Grid, name: &str) -> String {
        let cell_ref = CellRef::from_str(name).unwrap();
        grid.get(&cell_ref)
            .and_then(|c| c.value)
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    fn render(grid: &Grid) -> Vec<Vec<String>> {
        grid.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|c| c.value.map(|v| v.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_from_str_single_letter_columns() {
        let a1 = CellRef::from_str("A1").unwrap();
        assert_eq!((a1.col, a1.row), (0, 0));

        let z1 = CellRef::from_str("Z1").unwrap();
        assert_eq!((z1.col, z1.row), (25, 0));
    }

    #[test]
    fn test_from_str_multi_letter_columns() {
        assert_eq!(CellRef::from_str("AA1").unwrap().col, 26);
        assert_eq!(CellRef::from_str("AB1").unwrap().col, 27);
        assert_eq!(CellRef::from_str("AZ1").unwrap().col, 51);
        assert_eq!(CellRef::from_str("BA1").unwrap().col, 52);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        let lower = CellRef::from_str("a1").unwrap();
        assert_eq!((lower.col, lower.row), (0, 0));
        assert_eq!(CellRef::from_str("aA1").unwrap().col, 26);
    }

    #[test]
    fn test_from_str_invalid_inputs() {
        assert!(CellRef::from_str("").is_none());
        assert!(CellRef::from_str("123").is_none());
        assert!(CellRef::from_str("ABC").is_none());
        assert!(CellRef::from_str("A0").is_none());
        assert!(CellRef::from_str("1A").is_none());
        assert!(CellRef::from_str("A 1").is_none());
    }

    #[test]
    fn test_self_reference() {
        let grid = run(&[&["A1"]]);
        let a1 = grid.get(&CellRef::new(0, 0)).unwrap();
        assert!(a1.has_error());
        assert_eq!(shown(&grid, "A1"), ERROR_MARKER);
    }

    #[test]
    fn test_mutual_cycle() {
        let grid = run(&[&["B1", "A1"]]);
        assert!(grid.iter().all(Cell::has_error));
        assert_eq!(shown(&grid, "A1"), "#ERR");
        assert_eq!(shown(&grid, "B1"), "#ERR");
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(shown(&run(&[&["3 4 +"]]), "A1"), "7");
        assert_eq!(shown(&run(&[&["10 4 /"]]), "A1"), "2.5");
    }

    #[test]
    fn test_dependency_ordering() {
        let mut grid = Grid::from_rows([vec!["5", "A1 2 *"]]);
        let order = recalculate(&mut grid);
        let a1 = order.iter().position(|r| *r == CellRef::new(0, 0));
        let b1 = order.iter().position(|r| *r == CellRef::new(1, 0));
        assert!(a1 < b1);
        assert_eq!(shown(&grid, "A1"), "5");
        assert_eq!(shown(&grid, "B1"), "10");
    }

    #[test]
    fn test_reader_before_source_in_row_major() {
        let grid = run(&[&["B2 1 +", "2"], &["B2 B1 *", "3 3 *"]]);
        assert_eq!(
            render(&grid),
            vec![vec!["10", "2"], vec!["18", "9"]]
        );
    }

    #[test]
    fn test_error_propagation() {
        let grid = run(&[&["5", "A1 Q"]]);
        assert!(grid.get(&CellRef::new(1, 0)).unwrap().has_error());
        assert_eq!(shown(&grid, "A1"), "5");
        assert_eq!(shown(&grid, "B1"), "#ERR");
    }

    #[test]
    fn test_evaluation_error_propagates_to_readers() {
        // A1 passes analysis but fails to evaluate; B1 reads it.
        let grid = run(&[&["1 0 /", "A1 1 +", "7"]]);
        assert!(!grid.get(&CellRef::new(1, 0)).unwrap().has_error());
        assert_eq!(render(&grid), vec![vec!["#ERR", "#ERR", "7"]]);
    }

    #[test]
    fn test_large_literal_prints_typed_digits() {
        let grid = run(&[&["100000000000000000000000", "A1 1 +", "0.1 0.2 +"]]);
        assert_eq!(
            render(&grid),
            vec![vec![
                "100000000000000000000000",
                "100000000000000000000000",
                "0.3"
            ]]
        );
    }

    #[test]
    fn test_out_of_bounds_reference() {
        assert_eq!(shown(&run(&[&["Z99"]]), "A1"), "#ERR");
    }

    #[test]
    fn test_malformed_leftover_operand() {
        assert_eq!(shown(&run(&[&["3 4"]]), "A1"), "#ERR");
    }

    #[test]
    fn test_empty_cell_is_error() {
        assert_eq!(shown(&run(&[&["", "1"]]), "A1"), "#ERR");
    }

    #[test]
    fn test_idempotent() {
        let rows: &[&[&str]] = &[
            &["B1 C1 +", "C1 2 *", "1 3 /"],
            &["A1 A2", "A3 1 -", "A2"],
            &["1 0 /", "B3 4 *", "2 2 2 * *"],
        ];
        let first = render(&run(rows));

        let mut grid = Grid::from_rows(rows.iter().map(|r| r.iter().copied()));
        recalculate(&mut grid);
        grid.reset();
        recalculate(&mut grid);
        assert_eq!(render(&grid), first);
    }

    #[test]
    fn test_wide_grid_multi_letter_reference() {
        let mut row = vec!["1"; 30];
        row[0] = "AD1 AA1 +";
        row[26] = "40";
        let grid = run(&[row.as_slice()]);
        assert_eq!(shown(&grid, "A1"), "41");
    }
}
