//! The square cell store shared by the generators and the gazelle.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Orthogonal neighbour offsets (N, E, S, W)
pub const ORTHOGONAL: [(i64, i64); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// True when `(x, y)` lies inside a `size x size` grid
#[inline]
pub fn is_valid_position(x: i64, y: i64, size: usize) -> bool {
    x >= 0 && y >= 0 && (x as u64) < size as u64 && (y as u64) < size as u64
}

/// One grid unit. A cell never holds a tree and food at the same time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub has_tree: bool,
    /// 0 = no food, otherwise the amount available
    pub food: u8,
}

impl Cell {
    /// Neither tree nor food
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.has_tree && self.food == 0
    }

    #[inline]
    pub fn has_food(&self) -> bool {
        self.food > 0
    }

    /// Display character for text views
    pub fn glyph(&self) -> char {
        if self.has_tree {
            'T'
        } else if self.has_food() {
            'F'
        } else {
            '.'
        }
    }
}

/// Square matrix of cells
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    /// cells[y][x]
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Largest amount of food a single cell may carry
    pub const MAX_FOOD: u8 = 10;

    /// Create a grid with every cell empty
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Cell::default(); size]; size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        is_valid_position(x, y, self.size)
    }

    /// Get the cell at a position, `None` when out of bounds
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<&Cell> {
        if self.contains(x, y) {
            Some(&self.cells[y as usize][x as usize])
        } else {
            None
        }
    }

    #[inline]
    fn get_mut(&mut self, x: i64, y: i64) -> Option<&mut Cell> {
        if self.contains(x, y) {
            Some(&mut self.cells[y as usize][x as usize])
        } else {
            None
        }
    }

    /// Mark a cell as a tree. Fails on out-of-bounds, tree or food cells.
    pub fn place_tree(&mut self, x: i64, y: i64) -> bool {
        match self.get_mut(x, y) {
            Some(cell) if cell.is_empty() => {
                cell.has_tree = true;
                true
            }
            _ => false,
        }
    }

    /// Put food on a cell. Fails on out-of-bounds, tree or food cells.
    pub fn place_food(&mut self, x: i64, y: i64, amount: u8) -> bool {
        match self.get_mut(x, y) {
            Some(cell) if cell.is_empty() => {
                cell.food = amount.clamp(1, Self::MAX_FOOD);
                true
            }
            _ => false,
        }
    }

    /// Remove the food on a cell, returning the amount taken
    pub fn take_food(&mut self, x: i64, y: i64) -> u8 {
        self.get_mut(x, y)
            .map(|cell| std::mem::take(&mut cell.food))
            .unwrap_or(0)
    }

    /// Is any of the eight surrounding cells a tree?
    pub fn has_adjacent_tree(&self, x: i64, y: i64) -> bool {
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if self.get(x + dx, y + dy).is_some_and(|c| c.has_tree) {
                    return true;
                }
            }
        }
        false
    }

    /// Iterate over `(x, y, cell)` for every cell
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, cell)| (x, y, cell)))
    }

    /// Positions holding neither tree nor food
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|(_, _, c)| c.is_empty())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    pub fn tree_count(&self) -> usize {
        self.iter().filter(|(_, _, c)| c.has_tree).count()
    }

    pub fn food_cell_count(&self) -> usize {
        self.iter().filter(|(_, _, c)| c.has_food()).count()
    }

    /// Sum of food amounts over the grid
    pub fn total_food(&self) -> u32 {
        self.iter().map(|(_, _, c)| c.food as u32).sum()
    }

    /// Render the grid as text, north at the top
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in self.cells.iter().rev() {
            out.extend(row.iter().map(Cell::glyph));
            out.push('\n');
        }
        out
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    /// Panics on an out-of-range coordinate
    fn index(&self, (x, y): (usize, usize)) -> &Cell {
        assert!(
            x < self.size && y < self.size,
            "cell ({x}, {y}) outside {0}x{0} grid",
            self.size
        );
        &self.cells[y][x]
    }
}
