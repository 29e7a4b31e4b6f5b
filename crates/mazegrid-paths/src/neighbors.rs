use mazegrid_core::Point;

/// Cached cardinal-neighbor expansion, the single neighbor rule shared by
/// all search strategies.
///
/// Candidates are generated in up, down, left, right order and kept only
/// when `keep` accepts them; no diagonals.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the 4-directional (cardinal) neighbors of `p`, keeping only
    /// those for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        const DIRS: [Point; 4] = [
            Point::new(0, -1), // up
            Point::new(0, 1),  // down
            Point::new(-1, 0), // left
            Point::new(1, 0),  // right
        ];
        for d in DIRS {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
