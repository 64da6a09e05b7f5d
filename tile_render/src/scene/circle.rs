use crate::pixel::*;

///
/// A filled circle with a depth value, as drawn by the tile renderer
///
/// Circles are plain values: they're copied into every tile they overlap rather than being shared
/// between threads. The alignment keeps each circle in its own cache line, so the copies held by
/// different workers never share a line.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C, align(64))]
pub struct Circle {
    x:      i32,
    y:      i32,
    radius: i32,
    depth:  i32,
    color:  ArgbPixel,
}

impl Circle {
    ///
    /// Creates a new circle centred at `(x, y)`
    ///
    /// Larger depth values are further away. Negative radii are treated as 0.
    ///
    #[inline]
    pub fn new(x: i32, y: i32, radius: i32, depth: i32, color: ArgbPixel) -> Circle {
        Circle {
            x:      x,
            y:      y,
            radius: radius.max(0),
            depth:  depth,
            color:  color,
        }
    }

    /// The centre of this circle
    #[inline]
    pub fn center(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// The painter's order key for this circle (larger values are drawn first)
    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    #[inline]
    pub fn color(&self) -> ArgbPixel {
        self.color
    }

    ///
    /// The axis-aligned bounding box of this circle, as `((min_x, min_y), (max_x, max_y))`
    ///
    #[inline]
    pub fn bounding_box(&self) -> ((i32, i32), (i32, i32)) {
        let radius = self.radius;

        ((self.x.saturating_sub(radius), self.y.saturating_sub(radius)), (self.x.saturating_add(radius), self.y.saturating_add(radius)))
    }

    ///
    /// True if the pixel at `(x, y)` is inside this circle
    ///
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let dx = (x as i64) - (self.x as i64);
        let dy = (y as i64) - (self.y as i64);
        let r  = self.radius as i64;

        dx*dx + dy*dy <= r*r
    }
}
