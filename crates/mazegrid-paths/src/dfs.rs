use mazegrid_core::Point;

use crate::GridPathfinder;
use crate::neighbors::Neighbors;
use crate::pathfinder::NO_PARENT;

impl GridPathfinder<'_> {
    /// Depth-first traversal: some path, not necessarily the shortest.
    ///
    /// Structurally identical to [`bfs`](Self::bfs) with a LIFO stack in
    /// place of the queue — the same visited-on-discovery and
    /// goal-test-on-pop discipline, a different exploration order.
    pub(crate) fn dfs(&self) -> Option<Vec<Point>> {
        let start_idx = self.idx(self.start)?;
        let goal_idx = self.idx(self.goal)?;

        let len = self.grid.bounds().len();
        let mut visited = vec![false; len];
        let mut parent = vec![NO_PARENT; len];
        let mut stack: Vec<usize> = Vec::new();
        let mut neighbors = Neighbors::new();

        visited[start_idx] = true;
        stack.push(start_idx);

        while let Some(ci) = stack.pop() {
            if ci == goal_idx {
                return Some(self.reconstruct(&parent, goal_idx));
            }

            let cp = self.point(ci);
            for &np in neighbors.cardinal(cp, |n| self.grid.is_free(n)) {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if visited[ni] {
                    continue;
                }
                visited[ni] = true;
                parent[ni] = ci;
                stack.push(ni);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Algorithm;
    use mazegrid_core::Grid;

    fn dfs_path(map: &str, start: Point, goal: Point) -> Option<Vec<Point>> {
        let grid = Grid::from_ascii(map).unwrap();
        GridPathfinder::new(&grid, start, goal, Algorithm::Dfs).solve()
    }

    #[test]
    fn finds_a_valid_path() {
        let map = "....\n\
                   .##.\n\
                   ....";
        let grid = Grid::from_ascii(map).unwrap();
        let path = dfs_path(map, Point::new(0, 0), Point::new(3, 2)).unwrap();
        assert_eq!(path[0], Point::new(0, 0));
        assert_eq!(*path.last().unwrap(), Point::new(3, 2));
        for w in path.windows(2) {
            let d = w[1] - w[0];
            assert_eq!(d.x.abs() + d.y.abs(), 1);
        }
        for &p in &path {
            assert!(grid.is_free(p));
        }
    }

    #[test]
    fn path_may_exceed_shortest() {
        // Open 4x4 room: shortest is 7 cells, DFS is free to wander longer
        // but must still connect the endpoints.
        let path = dfs_path(
            "....\n\
             ....\n\
             ....\n\
             ....",
            Point::new(0, 0),
            Point::new(3, 3),
        )
        .unwrap();
        assert!(path.len() >= 7);
    }

    #[test]
    fn walled_off_goal() {
        let found = dfs_path(
            "..#.\n\
             ..#.\n\
             ..#.",
            Point::new(0, 0),
            Point::new(3, 1),
        );
        assert_eq!(found, None);
    }

    #[test]
    fn single_cell() {
        let path = dfs_path(".", Point::new(0, 0), Point::new(0, 0)).unwrap();
        assert_eq!(path, vec![Point::new(0, 0)]);
    }
}
