//! Integer 2D geometry primitives.
//!
//! Coordinates use (0, 0) as the top-left corner with x growing to the right
//! and y growing downward. Positions are signed so widgets can sit partially
//! off-screen; sizes are unsigned cell counts.

use std::ops::{Add, Sub};

/// A 2D point with signed integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// The x coordinate (column).
    pub x: i32,
    /// The y coordinate (row).
    pub y: i32,
}

impl Point {
    /// The origin point (0, 0).
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Creates a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point moved by the given offset.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.offset(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A 2D size in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// The width in columns.
    pub width: u16,
    /// The height in rows.
    pub height: u16,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Creates a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Returns the number of cells covered.
    #[inline]
    pub const fn area(self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Returns whether either dimension is zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Clamps this size component-wise into `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self {
            width: self.width.max(min.width).min(max.width.max(min.width)),
            height: self.height.max(min.height).min(max.height.max(min.height)),
        }
    }
}

impl From<(u16, u16)> for Size {
    #[inline]
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(width, height)
    }
}

/// An axis-aligned rectangle with a signed origin and unsigned size.
///
/// ```
/// use cortex_render_core::geometry::Rect;
///
/// let a = Rect::new(0, 0, 10, 10);
/// let b = Rect::new(20, 20, 5, 5);
/// assert!(a.intersection(b).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// The x coordinate of the left edge.
    pub x: i32,
    /// The y coordinate of the top edge.
    pub y: i32,
    /// The width of the rectangle.
    pub width: u16,
    /// The height of the rectangle.
    pub height: u16,
}

impl Rect {
    /// A zero-sized rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Creates a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle at the origin covering `size`.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Returns the top-left corner.
    #[inline]
    pub const fn position(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the size.
    #[inline]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the exclusive right edge.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.width as i32)
    }

    /// Returns the exclusive bottom edge.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.height as i32)
    }

    /// Returns the number of cells covered.
    #[inline]
    pub const fn area(self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Returns whether the rectangle has zero area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns whether the point lies inside the rectangle.
    #[inline]
    pub const fn contains(self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Returns whether the two rectangles share at least one cell.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Returns the overlapping region.
    ///
    /// Disjoint rectangles produce a zero-area rectangle, never a negative size.
    #[inline]
    pub fn intersection(self, other: Self) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Self {
            x,
            y,
            width: (right - x).max(0) as u16,
            height: (bottom - y).max(0) as u16,
        }
    }

    /// Returns the rectangle moved by the given offset.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the rectangle shrunk by the given amount on every side.
    ///
    /// Dimensions saturate at zero.
    #[inline]
    pub const fn inset(self, amount: u16) -> Self {
        Self {
            x: self.x.saturating_add(amount as i32),
            y: self.y.saturating_add(amount as i32),
            width: self.width.saturating_sub(amount.saturating_mul(2)),
            height: self.height.saturating_sub(amount.saturating_mul(2)),
        }
    }

    /// Iterates over the row coordinates covered.
    pub fn rows(self) -> impl Iterator<Item = i32> {
        self.y..self.bottom()
    }

    /// Iterates over the column coordinates covered.
    pub fn columns(self) -> impl Iterator<Item = i32> {
        self.x..self.right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_point_arithmetic() {
        assert_eq!(Point::new(10, 20) + Point::new(5, 5), Point::new(15, 25));
        assert_eq!(Point::new(10, 20) - Point::new(5, 5), Point::new(5, 15));
        assert_eq!(Point::new(i32::MAX, 0).offset(1, 0), Point::new(i32::MAX, 0));
    }

    #[test]
    fn test_size_clamp() {
        let size = Size::new(100, 2);
        let clamped = size.clamp(Size::new(10, 5), Size::new(50, 50));
        assert_eq!(clamped, Size::new(50, 5));
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10, 20, 80, 24);
        assert_eq!(rect.right(), 90);
        assert_eq!(rect.bottom(), 44);
        assert_eq!(rect.area(), 1920);
        assert!(rect.contains(Point::new(10, 20)));
        assert!(!rect.contains(Point::new(90, 20)));
    }

    #[test]
    fn test_rect_intersection_overlapping() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(b), Rect::new(5, 5, 5, 5));
        assert!(a.intersects(b));
    }

    #[test]
    fn test_rect_intersection_disjoint_is_zero_area() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(50, -30, 4, 4);
        let overlap = a.intersection(b);
        assert!(overlap.is_empty());
        assert_eq!(overlap.area(), 0);
        assert!(!a.intersects(b));
    }

    #[test]
    fn test_rect_intersection_touching_edges() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(a.intersection(b).is_empty());
    }

    #[test]
    fn test_rect_inset_saturates() {
        assert_eq!(Rect::new(0, 0, 10, 6).inset(2), Rect::new(2, 2, 6, 2));
        assert_eq!(Rect::new(0, 0, 3, 3).inset(2), Rect::new(2, 2, 0, 0));
    }

    #[test]
    fn test_rect_offset() {
        assert_eq!(Rect::new(1, 1, 4, 4).offset(-3, 2), Rect::new(-2, 3, 4, 4));
    }
}
