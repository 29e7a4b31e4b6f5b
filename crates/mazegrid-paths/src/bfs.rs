use std::collections::VecDeque;

use mazegrid_core::Point;

use crate::GridPathfinder;
use crate::neighbors::Neighbors;
use crate::pathfinder::NO_PARENT;

impl GridPathfinder<'_> {
    /// Breadth-first traversal: shortest path by edge count.
    ///
    /// The frontier is expanded in strict FIFO discovery order and every
    /// coordinate is marked visited the instant it is enqueued, so nothing
    /// enters the queue twice. The goal test happens when a node is
    /// dequeued.
    pub(crate) fn bfs(&self) -> Option<Vec<Point>> {
        let start_idx = self.idx(self.start)?;
        let goal_idx = self.idx(self.goal)?;

        let len = self.grid.bounds().len();
        let mut visited = vec![false; len];
        let mut parent = vec![NO_PARENT; len];
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut neighbors = Neighbors::new();

        visited[start_idx] = true;
        queue.push_back(start_idx);

        while let Some(ci) = queue.pop_front() {
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
                queue.push_back(ni);
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

    fn bfs_path(map: &str, start: Point, goal: Point) -> Option<Vec<Point>> {
        let grid = Grid::from_ascii(map).unwrap();
        GridPathfinder::new(&grid, start, goal, Algorithm::Bfs).solve()
    }

    #[test]
    fn straight_corridor() {
        let path = bfs_path("....", Point::new(0, 0), Point::new(3, 0)).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0),
            ]
        );
    }

    #[test]
    fn shortest_around_obstacle() {
        // Two routes around the block; BFS must take a 5-cell one.
        let path = bfs_path(
            "...\n\
             .#.\n\
             ...",
            Point::new(0, 1),
            Point::new(2, 1),
        )
        .unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], Point::new(0, 1));
        assert_eq!(path[4], Point::new(2, 1));
    }

    #[test]
    fn walled_off_goal() {
        let found = bfs_path(
            ".#.\n\
             .#.\n\
             .#.",
            Point::new(0, 0),
            Point::new(2, 2),
        );
        assert_eq!(found, None);
    }

    #[test]
    fn single_cell() {
        let path = bfs_path(".", Point::new(0, 0), Point::new(0, 0)).unwrap();
        assert_eq!(path, vec![Point::new(0, 0)]);
    }
}
