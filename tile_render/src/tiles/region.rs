use crate::scene::*;

use std::ops::{Range};

///
/// An axis-aligned rectangle on the canvas
///
/// Regions are half-open: a region covers the pixels from `x0` up to but not including `x1` (and
/// likewise for y), so two regions that share an edge don't overlap.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    pub x0:     i32,
    pub y0:     i32,
    pub width:  i32,
    pub height: i32,
}

impl Region {
    #[inline]
    pub fn new(x0: i32, y0: i32, width: i32, height: i32) -> Region {
        Region { x0, y0, width, height }
    }

    /// The x coordinate just past the right-hand edge of this region
    #[inline]
    pub fn x1(&self) -> i32 {
        self.x0 + self.width
    }

    /// The y coordinate just past the bottom edge of this region
    #[inline]
    pub fn y1(&self) -> i32 {
        self.y0 + self.height
    }

    /// The number of pixels covered by this region
    #[inline]
    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// True if the pixel at `(x, y)` is inside this region
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1() && y >= self.y0 && y < self.y1()
    }

    ///
    /// True if a bounding box (as returned by `Circle::bounding_box()`) overlaps this region by a non-zero area
    ///
    /// A box that only touches one of the edges of this region is not considered to overlap it.
    ///
    #[inline]
    pub fn overlaps_bounds(&self, bounds: ((i32, i32), (i32, i32))) -> bool {
        let ((min_x, min_y), (max_x, max_y)) = bounds;

        max_x > self.x0 && max_y > self.y0 && self.x1() > min_x && self.y1() > min_y
    }

    /// True if the bounding box of a circle overlaps this region
    #[inline]
    pub fn overlaps_circle(&self, circle: &Circle) -> bool {
        self.overlaps_bounds(circle.bounding_box())
    }

    /// True if two regions share at least one pixel
    #[inline]
    pub fn overlaps(&self, other: &Region) -> bool {
        self.x0 < other.x1() && other.x0 < self.x1() && self.y0 < other.y1() && other.y0 < self.y1()
    }

    ///
    /// The columns of a span `[start, end)` that are also inside this region
    ///
    #[inline]
    pub fn clip_x(&self, span: Range<i32>) -> Range<i32> {
        span.start.max(self.x0)..span.end.min(self.x1())
    }

    ///
    /// The rows of a span `[start, end)` that are also inside this region
    ///
    #[inline]
    pub fn clip_y(&self, span: Range<i32>) -> Range<i32> {
        span.start.max(self.y0)..span.end.min(self.y1())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bounds_are_exclusive() {
        let region = Region::new(10, 20, 5, 5);

        assert!(region.x1() == 15 && region.y1() == 25);
        assert!(region.contains(10, 20));
        assert!(region.contains(14, 24));
        assert!(!region.contains(15, 24));
        assert!(!region.contains(14, 25));
    }

    #[test]
    fn touching_bounds_do_not_overlap() {
        let region = Region::new(10, 10, 10, 10);

        assert!(!region.overlaps_bounds(((0, 12), (10, 14))));
        assert!(region.overlaps_bounds(((0, 12), (11, 14))));
        assert!(!region.overlaps_bounds(((20, 12), (30, 14))));
        assert!(region.overlaps_bounds(((19, 12), (30, 14))));
        assert!(!region.overlaps_bounds(((12, 0), (14, 10))));
        assert!(!region.overlaps_bounds(((12, 20), (14, 30))));
    }

    #[test]
    fn adjacent_regions_do_not_overlap() {
        let left    = Region::new(0, 0, 8, 8);
        let right   = Region::new(8, 0, 8, 8);
        let inside  = Region::new(7, 7, 2, 2);

        assert!(!left.overlaps(&right));
        assert!(left.overlaps(&inside) && right.overlaps(&inside));
    }
}
