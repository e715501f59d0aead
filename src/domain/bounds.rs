use super::Cell;

/// Axis-aligned bounding box over a set of cells, inclusive on both ends.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoundingBox {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl BoundingBox {
    /// Box around a single cell
    pub const fn around(cell: Cell) -> Self {
        Self {
            min_x: cell.x,
            min_y: cell.y,
            max_x: cell.x,
            max_y: cell.y,
        }
    }

    /// Bounding box of every cell yielded, or `None` when there are none.
    pub fn from_cells<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Option<Self> {
        let mut cells = cells.into_iter();
        let first = cells.next()?;

        Some(cells.fold(Self::around(*first), |mut b, c| {
            b.add(*c);
            b
        }))
    }

    /// Grow the box to include `cell`
    pub fn add(&mut self, cell: Cell) {
        self.min_x = self.min_x.min(cell.x);
        self.min_y = self.min_y.min(cell.y);
        self.max_x = self.max_x.max(cell.x);
        self.max_y = self.max_y.max(cell.y);
    }

    /// Integer midpoint, rounded toward negative infinity
    pub const fn center(&self) -> (i64, i64) {
        (
            (self.min_x + self.max_x).div_euclid(2),
            (self.min_y + self.max_y).div_euclid(2),
        )
    }

    /// Same box grown by `margin` on every side
    pub const fn expanded(&self, margin: i64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.min_x && cell.x <= self.max_x && cell.y >= self.min_y && cell.y <= self.max_y
    }
}
