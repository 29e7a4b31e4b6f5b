//! Carve a random cave, then find a shortest route across it.
//!
//! Run: cargo run --bin cave

use mazegrid_core::{Cell, Grid, MapGen, Point};
use mazegrid_paths::{Algorithm, GridPathfinder};

const WIDTH: i32 = 40;
const HEIGHT: i32 = 16;

fn main() {
    let mut grid = Grid::new(WIDTH, HEIGHT);
    grid.fill(Cell(1)); // solid rock
    let mut mg = MapGen::with_grid(grid, rand::rng());
    mg.random_walk_cave(Cell::FREE, 0.45, 8);
    let grid = mg.into_grid();

    // Route between the first and last carved cells in row-major order.
    let open: Vec<Point> = grid
        .iter()
        .filter(|&(_, c)| c.is_free())
        .map(|(p, _)| p)
        .collect();
    let (Some(&start), Some(&goal)) = (open.first(), open.last()) else {
        eprintln!("Error: cave carving produced no open cells");
        std::process::exit(1);
    };

    let pathfinder = GridPathfinder::new(&grid, start, goal, Algorithm::Astar);
    let path = pathfinder.solve();

    for y in 0..grid.height() {
        let mut line = String::new();
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let ch = if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if path.as_deref().is_some_and(|path| path.contains(&p)) {
                '*'
            } else if grid.is_free(p) {
                '.'
            } else {
                '#'
            };
            line.push(ch);
        }
        println!("{line}");
    }

    match path {
        Some(path) => println!("astar: {} cells from {start} to {goal}", path.len()),
        None => println!("astar: no path from {start} to {goal}"),
    }
}
