use mazegrid_core::Point;

/// Manhattan (L1) distance between two points.
///
/// The A* heuristic: admissible and consistent on a unit-cost grid without
/// diagonal movement.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(0, 0)), 0);
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, 4)), 7);
        assert_eq!(manhattan(Point::new(2, -1), Point::new(-1, 1)), 5);
        assert_eq!(
            manhattan(Point::new(5, 2), Point::new(1, 9)),
            manhattan(Point::new(1, 9), Point::new(5, 2))
        );
    }
}
