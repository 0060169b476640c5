//! Fixed-size text window around the gazelle, handed to move policies.

use crate::gazelle::Gazelle;
use crate::grid::Grid;
use std::fmt;

/// Cells before the gazelle on each axis
pub const VIEW_BEFORE: i64 = 5;
/// Cells after the gazelle on each axis
pub const VIEW_AFTER: i64 = 4;
/// Rows and columns in a view
pub const VIEW_EXTENT: usize = (VIEW_BEFORE + VIEW_AFTER + 1) as usize;

/// Glyph for cells beyond the grid edge
pub const OUT_OF_BOUNDS: char = '#';

/// `VIEW_EXTENT x VIEW_EXTENT` glyphs: `T` tree, `F` food, `.` empty, `#` outside.
///
/// Row `r` holds `dy = r - 5`, column `c` holds `dx = c - 5`, so the gazelle
/// sits at row 5, column 5.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurroundingView {
    rows: [[char; VIEW_EXTENT]; VIEW_EXTENT],
}

impl SurroundingView {
    pub fn rows(&self) -> &[[char; VIEW_EXTENT]; VIEW_EXTENT] {
        &self.rows
    }

    /// Glyph at offset `(dx, dy)` from the gazelle, `None` outside the window
    pub fn at(&self, dx: i64, dy: i64) -> Option<char> {
        let range = -VIEW_BEFORE..=VIEW_AFTER;
        if range.contains(&dx) && range.contains(&dy) {
            Some(self.rows[(dy + VIEW_BEFORE) as usize][(dx + VIEW_BEFORE) as usize])
        } else {
            None
        }
    }

    /// Count of a glyph in the window
    pub fn count(&self, glyph: char) -> usize {
        self.rows.iter().flatten().filter(|&&c| c == glyph).count()
    }
}

impl fmt::Display for SurroundingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for c in row {
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Build the window around `gazelle`
pub fn surrounding_view(gazelle: &Gazelle, grid: &Grid) -> SurroundingView {
    let mut rows = [[OUT_OF_BOUNDS; VIEW_EXTENT]; VIEW_EXTENT];
    let (gx, gy) = (gazelle.x as i64, gazelle.y as i64);

    for (r, dy) in (-VIEW_BEFORE..=VIEW_AFTER).enumerate() {
        for (c, dx) in (-VIEW_BEFORE..=VIEW_AFTER).enumerate() {
            if let Some(cell) = grid.get(gx + dx, gy + dy) {
                rows[r][c] = cell.glyph();
            }
        }
    }

    SurroundingView { rows }
}
