/// Property tests over arbitrary inputs and digests.
use identicon::digest::{hash_input, Digest};
use identicon::grid::{build_grid, filter_odd_squares, CELL_COUNT};
use identicon::raster::{build_pixel_map, calc_vertices, CANVAS_SIZE};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_hash_is_deterministic(input in ".*") {
        let a = hash_input(&input);
        let b = hash_input(&input);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.as_bytes().len(), 16);
    }

    #[test]
    fn prop_grid_positions_are_complete(bytes in any::<[u8; 16]>()) {
        let grid = build_grid(&Digest::from_bytes(bytes));
        prop_assert_eq!(grid.cells().len(), CELL_COUNT);
        for (i, cell) in grid.cells().iter().enumerate() {
            prop_assert_eq!(cell.position, i);
        }
    }

    #[test]
    fn prop_rows_are_palindromes(bytes in any::<[u8; 16]>()) {
        let grid = build_grid(&Digest::from_bytes(bytes));
        for (i, row) in grid.rows().enumerate() {
            let values: Vec<u8> = row.iter().map(|c| c.value).collect();
            let chunk = &bytes[i * 3..i * 3 + 3];
            prop_assert_eq!(values, vec![chunk[0], chunk[1], chunk[2], chunk[1], chunk[0]]);
        }
    }

    #[test]
    fn prop_filter_partitions_by_parity(bytes in any::<[u8; 16]>()) {
        let grid = build_grid(&Digest::from_bytes(bytes));
        let squares = filter_odd_squares(&grid);
        prop_assert!(squares.len() <= CELL_COUNT);
        prop_assert!(squares.iter().all(|c| c.value % 2 == 0));
        prop_assert!(squares.windows(2).all(|w| w[0].position < w[1].position));

        let discarded = grid.cells().iter().filter(|c| !squares.contains(c));
        for cell in discarded {
            prop_assert_eq!(cell.value % 2, 1);
        }
    }

    #[test]
    fn prop_rectangles_fit_canvas(bytes in any::<[u8; 16]>()) {
        let squares = filter_odd_squares(&build_grid(&Digest::from_bytes(bytes)));
        let map = build_pixel_map(&squares);
        prop_assert_eq!(map.len(), squares.len());
        for (cell, rect) in squares.iter().zip(&map) {
            prop_assert_eq!(*rect, calc_vertices(cell));
            prop_assert_eq!(rect.bottom_right.x - rect.top_left.x, 50);
            prop_assert_eq!(rect.bottom_right.y - rect.top_left.y, 50);
            prop_assert!(rect.bottom_right.x <= CANVAS_SIZE);
            prop_assert!(rect.bottom_right.y <= CANVAS_SIZE);
        }
    }
}
