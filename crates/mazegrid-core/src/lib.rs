//! **mazegrid-core** — grid and geometry types for the mazegrid workspace.
//!
//! This crate provides the inputs the pathfinding engine consumes: the
//! coordinate model ([`Point`], [`Range`]), the free/blocked obstacle grid
//! ([`Grid`], [`Cell`]) with ASCII map parsing, and random map generation
//! ([`MapGen`]) for demos and tests.

pub mod geom;
pub mod grid;
pub mod mapgen;

pub use geom::{Point, Range};
pub use grid::{Cell, Grid, GridError};
pub use mapgen::MapGen;
