use crate::engine::xorshift::XorshiftLanes;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Categorical value of one grid cell.
pub enum Cell {
    /// Painted with the background color.
    Background,
    /// Painted with the foreground color.
    Foreground,
    /// Painted with the spot (accent) color.
    Spot,
}

impl Cell {
    /// Map one engine draw to a cell: `floor(draw * 2.3)` buckets.
    ///
    /// 0 is background, 1 is foreground, and anything above is spot (draws
    /// can reach [1, 2), so the product can exceed 2).
    fn from_draw(draw: f64) -> Self {
        match (draw * 2.3) as u32 {
            0 => Self::Background,
            1 => Self::Foreground,
            _ => Self::Spot,
        }
    }
}

/// A size×size grid of cells, horizontally mirror-symmetric in every row.
///
/// Built once per generation and read-only afterward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconGrid {
    size: u32,
    cells: Vec<Cell>,
}

impl IconGrid {
    /// Synthesize a mirrored grid, consuming `size * ceil(size / 2)` draws.
    ///
    /// Per row, `ceil(size / 2)` cells are drawn left to right, then the
    /// first `floor(size / 2)` of them are appended in reverse. Odd sizes
    /// keep an exact center column; even sizes mirror fully. Rows are
    /// independent and drawn row-major.
    pub fn synthesize(engine: &mut XorshiftLanes, size: u32) -> Self {
        let n = size as usize;
        let data_width = n.div_ceil(2);
        let mirror_width = n - data_width;

        let mut cells = Vec::with_capacity(n * n);
        let mut row = Vec::with_capacity(data_width);
        for _ in 0..n {
            row.clear();
            for _ in 0..data_width {
                row.push(Cell::from_draw(engine.next_f64()));
            }
            cells.extend_from_slice(&row);
            cells.extend(row[..mirror_width].iter().rev());
        }

        Self { size, cells }
    }

    /// Grid width and height in cells.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The cell at (row, col). Panics when out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Cell {
        assert!(row < self.size && col < self.size, "cell out of bounds");
        self.cells[(row * self.size + col) as usize]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
#[path = "../../tests/unit/icon/grid.rs"]
mod tests;
