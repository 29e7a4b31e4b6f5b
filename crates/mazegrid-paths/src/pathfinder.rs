//! Pathfinder construction, algorithm dispatch, and shared search plumbing.

use std::fmt;
use std::str::FromStr;

use mazegrid_core::{Grid, Point};

/// Search strategy selector.
///
/// A closed enumeration: dispatch in [`GridPathfinder::solve`] is exhaustive,
/// so an unsupported strategy cannot reach the engine through the typed API.
/// Textual selector tags are parsed via [`FromStr`], where an unknown tag
/// surfaces [`UnsupportedAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Breadth-first search: shortest path by edge count.
    #[default]
    Bfs,
    /// Depth-first search: some path, not necessarily the shortest.
    Dfs,
    /// A* with Manhattan heuristic: shortest path, informed.
    Astar,
}

impl Algorithm {
    /// The selector tag for this algorithm.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Astar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = UnsupportedAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "astar" => Ok(Self::Astar),
            _ => Err(UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Error for a selector tag that names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedAlgorithm(pub String);

impl fmt::Display for UnsupportedAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported algorithm \u{201c}{}\u{201d}: expected \"bfs\", \"dfs\" or \"astar\"",
            self.0
        )
    }
}

impl std::error::Error for UnsupportedAlgorithm {}

/// Sentinel for "no parent recorded" in the parent array; the start node
/// keeps it, terminating the reconstruction walk.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Sentinel g-score for coordinates not yet discovered by A*.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Open-set heap entry, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A pathfinder between two cells of a borrowed [`Grid`].
///
/// Holds the endpoints and the selected [`Algorithm`]. Every [`solve`]
/// call builds its frontier, visited flags, parent array, and score arrays
/// from scratch and drops them on return, so successive solves are fully
/// independent and nothing is retained on the instance.
///
/// [`solve`]: GridPathfinder::solve
pub struct GridPathfinder<'a> {
    pub(crate) grid: &'a Grid,
    pub(crate) start: Point,
    pub(crate) goal: Point,
    algorithm: Algorithm,
}

impl<'a> GridPathfinder<'a> {
    /// Create a pathfinder from `start` to `goal` on `grid`.
    ///
    /// The endpoints are not validated: an out-of-bounds endpoint solves to
    /// `None`, and blocked endpoints are taken as given (a blocked start is
    /// still expanded; a blocked goal is unreachable unless equal to start).
    pub fn new(grid: &'a Grid, start: Point, goal: Point, algorithm: Algorithm) -> Self {
        Self {
            grid,
            start,
            goal,
            algorithm,
        }
    }

    /// The selected algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Compute a path from start to goal.
    ///
    /// Returns the full path including both endpoints (a single-element path
    /// when start equals goal), or `None` if no sequence of free cells
    /// connects them.
    pub fn solve(&self) -> Option<Vec<Point>> {
        match self.algorithm {
            Algorithm::Bfs => self.bfs(),
            Algorithm::Dfs => self.dfs(),
            Algorithm::Astar => self.astar(),
        }
    }

    // -----------------------------------------------------------------------
    // Shared search plumbing
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        let bounds = self.grid.bounds();
        if !bounds.contains(p) {
            return None;
        }
        let x = (p.x - bounds.min.x) as usize;
        let y = (p.y - bounds.min.y) as usize;
        Some(y * bounds.width() as usize + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let bounds = self.grid.bounds();
        let w = bounds.width() as usize;
        let x = (idx % w) as i32 + bounds.min.x;
        let y = (idx / w) as i32 + bounds.min.y;
        Point::new(x, y)
    }

    /// Walk the parent array backward from the goal and reverse the result
    /// into a start→goal path. Only invoked after the goal was reached.
    pub(crate) fn reconstruct(&self, parent: &[usize], goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = parent[ci];
        }
        path.reverse();
        path
    }
}

/// Parse `selector` and solve in one step — the boundary for collaborators
/// that hand over textual algorithm tags.
///
/// An unrecognized tag returns [`UnsupportedAlgorithm`] before any traversal
/// work is done.
pub fn solve_selector(
    grid: &Grid,
    start: Point,
    goal: Point,
    selector: &str,
) -> Result<Option<Vec<Point>>, UnsupportedAlgorithm> {
    let algorithm = selector.parse::<Algorithm>()?;
    Ok(GridPathfinder::new(grid, start, goal, algorithm).solve())
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_round_trip() {
        for (alg, json) in [
            (Algorithm::Bfs, r#""bfs""#),
            (Algorithm::Dfs, r#""dfs""#),
            (Algorithm::Astar, r#""astar""#),
        ] {
            assert_eq!(serde_json::to_string(&alg).unwrap(), json);
            let back: Algorithm = serde_json::from_str(json).unwrap();
            assert_eq!(back, alg);
        }
    }
}
