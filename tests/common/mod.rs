#![allow(dead_code)]

use mazewalk::{Coord, Direction, MazeGrid};
use std::collections::VecDeque;

/// Disjoint-set forest over flat cell indices
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(len: usize) -> Self {
        UnionFind {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut x = x;
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
        root
    }

    /// Join the sets of `a` and `b`. Returns false if they were already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.rank[ra] < self.rank[rb] {
            self.parent[ra] = rb;
        } else if self.rank[ra] > self.rank[rb] {
            self.parent[rb] = ra;
        } else {
            self.parent[rb] = ra;
            self.rank[ra] += 1;
        }
        true
    }
}

pub fn id(grid: &MazeGrid, c: Coord) -> usize {
    (c.row * grid.cols() + c.col) as usize
}

/// Cells reachable from (0, 0) through open passages
pub fn reachable_from_origin(grid: &MazeGrid) -> usize {
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::new();
    let origin = Coord::new(0, 0);
    seen[id(grid, origin)] = true;
    queue.push_back(origin);
    let mut count = 0;

    while let Some(cell) = queue.pop_front() {
        count += 1;
        for dir in Direction::ALL {
            if grid.has_wall(cell.row, cell.col, dir).unwrap() {
                continue;
            }
            if let Some(next) = grid.neighbor(cell, dir) {
                let next_id = id(grid, next);
                if !seen[next_id] {
                    seen[next_id] = true;
                    queue.push_back(next);
                }
            }
        }
    }
    count
}

/// First interior adjacency whose two wall flags disagree, if any
pub fn find_one_way_wall(grid: &MazeGrid) -> Option<(Coord, Direction)> {
    for (coord, cell) in grid.iter() {
        for dir in [Direction::Right, Direction::Bottom] {
            if let Some(next) = grid.neighbor(coord, dir) {
                let back = grid.has_wall(next.row, next.col, dir.opposite()).unwrap();
                if cell.walls.has(dir) != back {
                    return Some((coord, dir));
                }
            }
        }
    }
    None
}

/// Every cell's wall bits, row-major
pub fn wall_layout(grid: &MazeGrid) -> Vec<u8> {
    grid.iter().map(|(_, cell)| cell.walls.bits()).collect()
}
