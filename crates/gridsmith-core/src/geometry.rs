use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Composite identity of a grid cell: `(row, column)`.
pub type CellKey = (u32, u32);

/// A single grid cell addressed by zero-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    pub row: u32,
    pub column: u32,
}

impl GridCell {
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    pub fn key(&self) -> CellKey {
        (self.row, self.column)
    }
}

impl From<CellKey> for GridCell {
    fn from((row, column): CellKey) -> Self {
        Self { row, column }
    }
}

/// Renders the canonical `"row,column"` form.
impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

/// An axis-aligned block of cells with inclusive bounds on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRect {
    pub row_start: u32,
    pub row_end: u32,
    pub column_start: u32,
    pub column_end: u32,
}

impl CellRect {
    pub fn new(row_start: u32, row_end: u32, column_start: u32, column_end: u32) -> Self {
        Self {
            row_start: row_start.min(row_end),
            row_end: row_start.max(row_end),
            column_start: column_start.min(column_end),
            column_end: column_start.max(column_end),
        }
    }

    /// Bounding box of a cell list, or `None` when the list is empty.
    pub fn from_cells(cells: &[GridCell]) -> Option<Self> {
        let first = cells.first()?;
        let mut rect = Self::new(first.row, first.row, first.column, first.column);
        for cell in &cells[1..] {
            rect.row_start = rect.row_start.min(cell.row);
            rect.row_end = rect.row_end.max(cell.row);
            rect.column_start = rect.column_start.min(cell.column);
            rect.column_end = rect.column_end.max(cell.column);
        }
        Some(rect)
    }

    pub fn row_span(&self) -> u64 {
        u64::from(self.row_end) - u64::from(self.row_start) + 1
    }

    pub fn column_span(&self) -> u64 {
        u64::from(self.column_end) - u64::from(self.column_start) + 1
    }

    /// Cell count, saturating for boxes spanning the whole coordinate range.
    pub fn area(&self) -> u64 {
        self.row_span().saturating_mul(self.column_span())
    }

    pub fn contains(&self, cell: &GridCell) -> bool {
        cell.row >= self.row_start
            && cell.row <= self.row_end
            && cell.column >= self.column_start
            && cell.column <= self.column_end
    }

    pub fn intersects(&self, other: &CellRect) -> bool {
        self.row_start <= other.row_end
            && self.row_end >= other.row_start
            && self.column_start <= other.column_end
            && self.column_end >= other.column_start
    }

    /// Every cell of the rectangle in row-major order.
    pub fn cells(&self) -> Vec<GridCell> {
        let mut out = Vec::with_capacity(usize::try_from(self.area()).unwrap_or(0));
        for row in self.row_start..=self.row_end {
            for column in self.column_start..=self.column_end {
                out.push(GridCell::new(row, column));
            }
        }
        out
    }
}

// ── Selection geometry ───────────────────────────────────────────────

pub fn cell_key(cell: &GridCell) -> CellKey {
    cell.key()
}

/// Lookup set over a cell list. Duplicate cells collapse.
pub fn cell_key_set(cells: &[GridCell]) -> BTreeSet<CellKey> {
    cells.iter().map(cell_key).collect()
}

/// True when the cells cover their bounding box exactly, with no holes.
///
/// Duplicates are collapsed before the count is compared against the box
/// area, so a repeated cell can never stand in for a missing one.
pub fn is_rectangular_selection(cells: &[GridCell]) -> bool {
    let Some(rect) = CellRect::from_cells(cells) else {
        return false;
    };
    cell_key_set(cells).len() as u64 == rect.area()
}

/// Replace a selection by the full rectangle that bounds it.
pub fn expand_to_bounding_box(cells: &[GridCell]) -> Vec<GridCell> {
    CellRect::from_cells(cells)
        .map(|rect| rect.cells())
        .unwrap_or_default()
}

/// Partition an arbitrary cell set into disjoint rectangles.
///
/// Greedy sweep: the smallest remaining cell (row, then column) seeds each
/// rectangle, which grows right as far as the row allows and then down while
/// every cell of the next row segment is still present. The result covers the
/// input exactly but is not guaranteed to use the fewest rectangles.
pub fn split_into_rectangles(cells: &[GridCell]) -> Vec<CellRect> {
    let mut remaining = cell_key_set(cells);
    let mut rects = Vec::new();

    while let Some(&(row, column)) = remaining.iter().next() {
        let mut column_end = column;
        while column_end < u32::MAX && remaining.contains(&(row, column_end + 1)) {
            column_end += 1;
        }

        let mut row_end = row;
        while row_end < u32::MAX
            && (column..=column_end).all(|c| remaining.contains(&(row_end + 1, c)))
        {
            row_end += 1;
        }

        let rect = CellRect::new(row, row_end, column, column_end);
        for cell in rect.cells() {
            remaining.remove(&cell.key());
        }
        rects.push(rect);
    }

    rects
}
