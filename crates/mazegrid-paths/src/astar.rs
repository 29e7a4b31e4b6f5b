use std::collections::BinaryHeap;

use mazegrid_core::Point;

use crate::GridPathfinder;
use crate::distance::manhattan;
use crate::neighbors::Neighbors;
use crate::pathfinder::{NO_PARENT, NodeRef, UNREACHABLE};

impl GridPathfinder<'_> {
    /// A* traversal: shortest path by edge count, informed by the Manhattan
    /// heuristic.
    ///
    /// The open set is a binary heap of `(idx, f)` entries popping minimum
    /// `f` first. Improving a node pushes a fresh entry rather than
    /// re-keying the heap, so stale duplicates are expected and skipped on
    /// pop via the live open flags — heap contents are never trusted alone.
    pub(crate) fn astar(&self) -> Option<Vec<Point>> {
        let start_idx = self.idx(self.start)?;
        let goal_idx = self.idx(self.goal)?;

        if start_idx == goal_idx {
            return Some(vec![self.start]);
        }

        let len = self.grid.bounds().len();
        // g is the exact edge count from start; UNREACHABLE means
        // "not yet discovered", distinct from any real score.
        let mut g = vec![UNREACHABLE; len];
        let mut parent = vec![NO_PARENT; len];
        let mut in_open = vec![false; len];
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut neighbors = Neighbors::new();

        g[start_idx] = 0;
        in_open[start_idx] = true;
        open.push(NodeRef {
            idx: start_idx,
            f: manhattan(self.start, self.goal),
        });

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries for nodes already expanded.
            if !in_open[ci] {
                continue;
            }

            if ci == goal_idx {
                return Some(self.reconstruct(&parent, goal_idx));
            }

            in_open[ci] = false;
            let current_g = g[ci];
            let cp = self.point(ci);

            for &np in neighbors.cardinal(cp, |n| self.grid.is_free(n)) {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;
                // Strict improvement only; ties never overwrite.
                if tentative_g >= g[ni] {
                    continue;
                }

                g[ni] = tentative_g;
                parent[ni] = ci;
                in_open[ni] = true;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + manhattan(np, self.goal),
                });
            }
        }

        None
    }
}
