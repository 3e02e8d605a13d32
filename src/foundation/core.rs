pub use kurbo::{Point, Rect, Size, Vec2};

/// Named anchor points and offset helpers for screen-space rectangles.
///
/// Screen space has its origin at the top-left corner with `y` growing downwards, so the
/// "top" edge of a rect is `y0` and the "bottom" edge is `y1`.
pub trait RectExt {
    /// Rect of `size` anchored at the origin.
    fn from_size(size: Size) -> Self;
    /// Top-left corner (the origin).
    fn top_left(&self) -> Point;
    /// Midpoint of the top edge.
    fn top_center(&self) -> Point;
    /// Top-right corner.
    fn top_right(&self) -> Point;
    /// Bottom-left corner.
    fn bottom_left(&self) -> Point;
    /// Midpoint of the bottom edge.
    fn bottom_center(&self) -> Point;
    /// Bottom-right corner.
    fn bottom_right(&self) -> Point;
    /// Same size, origin moved by `delta`.
    fn offset_by(&self, delta: Vec2) -> Self;
    /// Same size, origin moved by `(x, y)`.
    fn offset(&self, x: f64, y: f64) -> Self;
    /// Same size, anchored at the origin.
    fn bounds(&self) -> Self;
    /// Whether the two rects overlap or share an edge.
    fn touches(&self, other: &Self) -> bool;
}

impl RectExt for Rect {
    fn from_size(size: Size) -> Self {
        Rect::from_origin_size(Point::ORIGIN, size)
    }

    fn top_left(&self) -> Point {
        self.origin()
    }

    fn top_center(&self) -> Point {
        Point::new(self.center().x, self.min_y())
    }

    fn top_right(&self) -> Point {
        Point::new(self.max_x(), self.min_y())
    }

    fn bottom_left(&self) -> Point {
        Point::new(self.min_x(), self.max_y())
    }

    fn bottom_center(&self) -> Point {
        Point::new(self.center().x, self.max_y())
    }

    fn bottom_right(&self) -> Point {
        Point::new(self.max_x(), self.max_y())
    }

    fn offset_by(&self, delta: Vec2) -> Self {
        *self + delta
    }

    fn offset(&self, x: f64, y: f64) -> Self {
        self.offset_by(Vec2::new(x, y))
    }

    fn bounds(&self) -> Self {
        Rect::from_size(self.size())
    }

    fn touches(&self, other: &Self) -> bool {
        self.min_x() <= other.max_x()
            && other.min_x() <= self.max_x()
            && self.min_y() <= other.max_y()
            && other.min_y() <= self.max_y()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
