//! Pathfinding over mazegrid obstacle grids.
//!
//! Three interchangeable search strategies between two cells of a
//! free/blocked [`Grid`](mazegrid_core::Grid):
//!
//! - **BFS** — shortest path by edge count ([`Algorithm::Bfs`])
//! - **DFS** — some path, not necessarily shortest ([`Algorithm::Dfs`])
//! - **A\*** — shortest path, informed by Manhattan distance
//!   ([`Algorithm::Astar`])
//!
//! All three share one neighbor rule (the four cardinal moves onto free
//! cells, via [`Neighbors`]) and one parent-walk path reconstruction.
//! [`GridPathfinder::solve`] returns the start→goal path inclusive of both
//! endpoints, or `None` when they are not connected. Textual selector tags
//! enter through [`Algorithm`]'s `FromStr` or [`solve_selector`], where
//! unknown tags surface [`UnsupportedAlgorithm`].

mod astar;
mod bfs;
mod dfs;
mod distance;
mod neighbors;
mod pathfinder;

pub use distance::manhattan;
pub use neighbors::Neighbors;
pub use pathfinder::{Algorithm, GridPathfinder, UnsupportedAlgorithm, solve_selector};
