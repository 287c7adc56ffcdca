use super::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    tiles: i32,
}

impl Grid {
    pub fn new(tiles: u32) -> Self {
        let tiles = i32::try_from(tiles.max(1)).unwrap_or(i32::MAX);
        Self { tiles }
    }

    pub fn tiles(&self) -> u32 {
        self.tiles as u32
    }

    pub fn in_bounds(&self, pos: Point) -> bool {
        (0..self.tiles).contains(&pos.x) && (0..self.tiles).contains(&pos.y)
    }

    /// Steps of one tile only: anything below zero becomes the last index,
    /// anything past the edge becomes zero.
    pub fn wrap(&self, coordinate: i32) -> i32 {
        if coordinate < 0 {
            self.tiles - 1
        } else if coordinate >= self.tiles {
            0
        } else {
            coordinate
        }
    }

    pub fn wrap_point(&self, pos: Point) -> Point {
        Point::new(self.wrap(pos.x), self.wrap(pos.y))
    }

    pub fn center(&self) -> Point {
        Point::new(self.tiles / 2, self.tiles / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds_edges() {
        let grid = Grid::new(10);
        assert!(grid.in_bounds(Point::new(0, 0)));
        assert!(grid.in_bounds(Point::new(9, 9)));
        assert!(!grid.in_bounds(Point::new(-1, 5)));
        assert!(!grid.in_bounds(Point::new(5, -1)));
        assert!(!grid.in_bounds(Point::new(10, 5)));
        assert!(!grid.in_bounds(Point::new(5, 10)));
    }

    #[test]
    fn test_wrap() {
        let grid = Grid::new(10);
        assert_eq!(grid.wrap(-1), 9);
        assert_eq!(grid.wrap(10), 0);
        assert_eq!(grid.wrap(4), 4);
        assert_eq!(grid.wrap_point(Point::new(-1, 10)), Point::new(9, 0));
    }

    #[test]
    fn test_center_and_minimum_size() {
        let grid = Grid::new(20);
        assert_eq!(grid.center(), Point::new(10, 10));
        assert_eq!(Grid::new(0).tiles(), 1);
    }
}
