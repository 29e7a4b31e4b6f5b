//! Solve a fixed ASCII maze with each algorithm and print the results.
//!
//! Run: cargo run --bin maze [bfs|dfs|astar]
//!
//! With no argument, all three algorithms are run in turn.

use mazegrid_core::{Grid, Point};
use mazegrid_paths::solve_selector;

const MAZE: &str = "\
..........
.########.
.#......#.
.#.####.#.
.#.#..#.#.
.#.#.##.#.
.#.#....#.
.#.######.
.#........
..........";

fn render(grid: &Grid, path: &[Point], start: Point, goal: Point) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let ch = if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if path.contains(&p) {
                '*'
            } else if grid.is_free(p) {
                '.'
            } else {
                '#'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn main() {
    let grid = match Grid::from_ascii(MAZE) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let start = Point::new(0, 0);
    let goal = Point::new(grid.width() - 1, grid.height() - 1);

    let arg = std::env::args().nth(1);
    let selectors: Vec<String> = match arg {
        Some(s) => vec![s],
        None => ["bfs", "dfs", "astar"].iter().map(|s| s.to_string()).collect(),
    };

    for selector in selectors {
        match solve_selector(&grid, start, goal, &selector) {
            Ok(Some(path)) => {
                println!("{selector}: {} cells", path.len());
                println!("{}", render(&grid, &path, start, goal));
            }
            Ok(None) => println!("{selector}: no path"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}
