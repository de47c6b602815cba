mod common;

use common::{find_one_way_wall, id, reachable_from_origin, wall_layout, UnionFind};
use mazewalk::{carve, carve_with_seed, MazeGrid};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SIZES: [(i32, i32); 8] = [(1, 1), (1, 7), (7, 1), (2, 2), (3, 5), (10, 10), (20, 20), (13, 31)];

#[test]
fn every_cell_is_visited() {
    for &(rows, cols) in &SIZES {
        for seed in 0..10 {
            let mut grid = MazeGrid::new(rows, cols).unwrap();
            carve_with_seed(&mut grid, Some(seed)).unwrap();
            for (coord, cell) in grid.iter() {
                assert!(
                    cell.visited,
                    "{}x{} seed {}: ({}, {}) not visited",
                    rows, cols, seed, coord.row, coord.col
                );
            }
        }
    }
}

#[test]
fn opened_passages_form_a_spanning_tree() {
    for &(rows, cols) in &SIZES {
        for seed in 0..25 {
            let mut grid = MazeGrid::new(rows, cols).unwrap();
            let passages = carve_with_seed(&mut grid, Some(seed)).unwrap();
            let expected_edges = (rows * cols - 1) as usize;

            assert_eq!(passages.len(), expected_edges, "{}x{} seed {}", rows, cols, seed);
            assert_eq!(grid.open_passage_count(), expected_edges, "{}x{} seed {}", rows, cols, seed);

            let mut sets = UnionFind::new(grid.len());
            for (a, b) in &passages {
                assert!(
                    sets.union(id(&grid, *a), id(&grid, *b)),
                    "{}x{} seed {}: cycle at ({}, {})-({}, {})",
                    rows, cols, seed, a.row, a.col, b.row, b.col
                );
            }

            assert_eq!(reachable_from_origin(&grid), grid.len());
        }
    }
}

#[test]
fn walls_are_mutual() {
    for &(rows, cols) in &SIZES {
        for seed in 0..50 {
            let mut grid = MazeGrid::new(rows, cols).unwrap();
            carve_with_seed(&mut grid, Some(seed)).unwrap();
            if let Some((coord, dir)) = find_one_way_wall(&grid) {
                panic!(
                    "{}x{} seed {}: one-way wall at ({}, {}) {:?}",
                    rows, cols, seed, coord.row, coord.col, dir
                );
            }
        }
    }
}

#[test]
fn same_seed_same_maze() {
    let mut first = MazeGrid::new(20, 20).unwrap();
    let mut second = MazeGrid::new(20, 20).unwrap();
    carve(&mut first, &mut StdRng::seed_from_u64(1234)).unwrap();
    carve(&mut second, &mut StdRng::seed_from_u64(1234)).unwrap();
    assert_eq!(wall_layout(&first), wall_layout(&second));

    let mut third = MazeGrid::new(20, 20).unwrap();
    let mut fourth = MazeGrid::new(20, 20).unwrap();
    carve_with_seed(&mut third, Some(99)).unwrap();
    carve_with_seed(&mut fourth, Some(99)).unwrap();
    assert_eq!(wall_layout(&third), wall_layout(&fourth));
}

#[test]
fn unseeded_carving_is_still_perfect() {
    let mut grid = MazeGrid::new(15, 15).unwrap();
    let passages = carve_with_seed(&mut grid, None).unwrap();
    assert_eq!(passages.len(), 224);
    assert_eq!(reachable_from_origin(&grid), 225);
    assert!(find_one_way_wall(&grid).is_none());
}
