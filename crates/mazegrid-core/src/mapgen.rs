//! Random obstacle-map generation.
//!
//! Two generators for test and demo maps:
//! - **scatter**: mark cells blocked independently with a fixed probability.
//! - **random walk cave**: drunk-walk carving of open space out of a solid
//!   grid.

use crate::geom::Point;
use crate::grid::{Cell, Grid};
use rand::Rng;
use rand::RngExt;

/// Map generator operating on a [`Grid`] of [`Cell`] markers.
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MapGen<R> {
    /// Create a new MapGen with the given grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Consume the generator and return the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Mark each cell `blocked` independently with probability `density`
    /// (0.0–1.0). Cells that miss the roll are left untouched.
    ///
    /// Returns the number of cells blocked.
    pub fn scatter(&mut self, blocked: Cell, density: f64) -> usize {
        let mut n = 0;
        for p in self.grid.bounds().iter() {
            if self.rng.random_bool(density) {
                self.grid.set(p, blocked);
                n += 1;
            }
        }
        n
    }

    /// Carve a cave using random walk.
    ///
    /// Starting from the center of the grid, perform `walks` random walks.
    /// Each walk carves out cells by setting them to `cell`. The walk
    /// continues until the proportion of `cell` cells reaches `fill_pct`
    /// (0.0–1.0) of the total area.
    ///
    /// Returns the number of cells carved.
    pub fn random_walk_cave(&mut self, cell: Cell, fill_pct: f64, walks: usize) -> usize {
        let sz = self.grid.size();
        let total = (sz.x * sz.y) as usize;
        let target = (total as f64 * fill_pct) as usize;
        let bounds = self.grid.bounds();
        let mut carved = 0usize;

        // Start at center.
        let start = Point::new(bounds.min.x + sz.x / 2, bounds.min.y + sz.y / 2);

        for _ in 0..walks {
            let mut pos = start;
            let step_limit = total * 4; // safety limit per walk

            for _ in 0..step_limit {
                if carved >= target {
                    return carved;
                }

                if self.grid.at(pos) != Some(cell) {
                    self.grid.set(pos, cell);
                    carved += 1;
                }

                // Step to a cardinal neighbor, clamped to bounds.
                let next = match self.rng.random_range(0..4u32) {
                    0 => Point::new(pos.x + 1, pos.y),
                    1 => Point::new(pos.x - 1, pos.y),
                    2 => Point::new(pos.x, pos.y + 1),
                    _ => Point::new(pos.x, pos.y - 1),
                };
                if bounds.contains(next) {
                    pos = next;
                }
                // else stay put
            }
        }

        carved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_density_extremes() {
        let mut mg = MapGen::with_grid(Grid::new(10, 10), StdRng::seed_from_u64(1));
        assert_eq!(mg.scatter(Cell(1), 0.0), 0);
        assert_eq!(mg.grid.count(Cell::FREE), 100);

        let mut mg = MapGen::with_grid(Grid::new(10, 10), StdRng::seed_from_u64(1));
        assert_eq!(mg.scatter(Cell(1), 1.0), 100);
        assert_eq!(mg.grid.count(Cell(1)), 100);
    }

    #[test]
    fn random_walk_carves_cells() {
        let mut grid = Grid::new(20, 20);
        grid.fill(Cell(1)); // all walls
        let mut mg = MapGen::with_grid(grid, StdRng::seed_from_u64(7));
        let carved = mg.random_walk_cave(Cell::FREE, 0.4, 10);
        assert!(carved > 0);
        assert_eq!(mg.grid.count(Cell::FREE), carved);
        // Carving starts from the center, which must be open afterwards.
        assert!(mg.grid.is_free(Point::new(10, 10)));
    }
}
