#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }
}

/// Inclusive box test; `origin` is the top-left corner.
pub fn contains(origin: Point, size: Size, point: Point) -> bool {
    (origin.x..=origin.x + size.width).contains(&point.x)
        && (origin.y..=origin.y + size.height).contains(&point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_min_side() {
        let size = Size::new(800.0, 600.0);
        assert_eq!(size.center(), Point::new(400.0, 300.0));
        assert_eq!(size.min_side(), 600.0);
    }

    #[test]
    fn test_contains_edges() {
        let origin = Point::new(10.0, 10.0);
        let size = Size::new(20.0, 10.0);
        assert!(contains(origin, size, Point::new(10.0, 10.0)));
        assert!(contains(origin, size, Point::new(30.0, 20.0)));
        assert!(!contains(origin, size, Point::new(30.1, 15.0)));
        assert!(!contains(origin, size, Point::new(15.0, 9.9)));
    }

    #[test]
    fn test_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }
}
