//! Occupancy grid backed by a summed-area table.
//!
//! https://blog.demofox.org/2018/04/16/prefix-sums-and-summed-area-tables/

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

#[derive(Debug)]
pub struct Occupancy {
    width: usize,
    height: usize,
    cells: Vec<u32>,
    // one extra leading row and column of zeros
    table: Vec<u32>,
}

impl Occupancy {
    pub fn new(width: usize, height: usize) -> Self {
        Occupancy {
            width,
            height,
            cells: vec![0; width * height],
            table: vec![0; (width + 1) * (height + 1)],
        }
    }

    pub fn contains(&self, rect: &Rect) -> bool {
        rect.x + rect.width <= self.width && rect.y + rect.height <= self.height
    }

    /// `rect` must lie inside the grid.
    pub fn region_is_empty(&self, rect: &Rect) -> bool {
        let stride = self.width + 1;
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.x + rect.width, rect.y + rect.height);

        let tl = self.table[y0 * stride + x0];
        let tr = self.table[y0 * stride + x1];
        let bl = self.table[y1 * stride + x0];
        let br = self.table[y1 * stride + x1];

        tl as i64 + br as i64 - tr as i64 - bl as i64 == 0
    }

    /// Marks `rect` as taken. Only rows from `rect.y` down are recomputed.
    pub fn fill(&mut self, rect: &Rect) {
        for y in rect.y..rect.y + rect.height {
            let row = y * self.width;
            self.cells[row + rect.x..row + rect.x + rect.width].fill(1);
        }

        to_summed_area_table(&self.cells, &mut self.table, self.width, rect.y);
    }
}

/// Rebuilds `table` rows below `start_row` from `cells`.
fn to_summed_area_table(cells: &[u32], table: &mut [u32], width: usize, start_row: usize) {
    let stride = width + 1;
    cells
        .chunks_exact(width)
        .enumerate()
        .skip(start_row)
        .for_each(|(y, row)| {
            let mut sum = 0;
            for (x, cell) in row.iter().enumerate() {
                sum += cell;
                table[(y + 1) * stride + x + 1] = table[y * stride + x + 1] + sum;
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_has_room_everywhere() {
        let grid = Occupancy::new(10, 8);
        let whole = Rect { x: 0, y: 0, width: 10, height: 8 };
        assert!(grid.contains(&whole));
        assert!(grid.region_is_empty(&whole));
    }

    #[test]
    fn filled_region_blocks_overlaps_only() {
        let mut grid = Occupancy::new(10, 10);
        grid.fill(&Rect { x: 2, y: 3, width: 3, height: 2 });

        assert!(!grid.region_is_empty(&Rect { x: 0, y: 0, width: 10, height: 10 }));
        assert!(!grid.region_is_empty(&Rect { x: 4, y: 4, width: 1, height: 1 }));
        assert!(grid.region_is_empty(&Rect { x: 5, y: 3, width: 5, height: 2 }));
        assert!(grid.region_is_empty(&Rect { x: 0, y: 5, width: 10, height: 5 }));
        assert!(grid.region_is_empty(&Rect { x: 0, y: 0, width: 10, height: 3 }));
    }

    #[test]
    fn later_fills_above_earlier_ones_keep_table_consistent() {
        let mut grid = Occupancy::new(6, 6);
        grid.fill(&Rect { x: 0, y: 4, width: 2, height: 2 });
        grid.fill(&Rect { x: 4, y: 0, width: 2, height: 2 });

        assert!(!grid.region_is_empty(&Rect { x: 0, y: 4, width: 1, height: 1 }));
        assert!(!grid.region_is_empty(&Rect { x: 5, y: 1, width: 1, height: 1 }));
        assert!(grid.region_is_empty(&Rect { x: 2, y: 2, width: 2, height: 2 }));
        assert!(!grid.contains(&Rect { x: 5, y: 5, width: 2, height: 1 }));
    }
}
