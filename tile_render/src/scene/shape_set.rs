use super::circle::*;

use std::iter::{FromIterator};
use std::ops::{Deref};

///
/// An ordered collection of circles making up a scene
///
/// Shapes have to be sorted by depth before they can be rendered: `into_depth_sorted()` performs the
/// sort and produces a `DepthSortedShapes` which is what the renderers accept.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeSet {
    circles: Vec<Circle>,
}

///
/// A set of shapes ordered from the furthest to the nearest
///
/// Drawing the shapes in this order and letting nearer shapes overwrite further ones is the painter's
/// algorithm: no depth buffer is needed.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DepthSortedShapes {
    circles: Vec<Circle>,
}

impl ShapeSet {
    /// Creates an empty shape set
    pub fn new() -> Self {
        ShapeSet { circles: vec![] }
    }

    /// Adds a circle to the end of this set
    pub fn push(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    ///
    /// Adds a circle, returning the updated set
    ///
    pub fn with_circle(mut self, circle: Circle) -> Self {
        self.circles.push(circle);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// The circles in the order they were added
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    ///
    /// Sorts the shapes from furthest to nearest (descending depth)
    ///
    /// The sort is stable, so shapes with equal depths are drawn in the order they were added.
    ///
    pub fn into_depth_sorted(self) -> DepthSortedShapes {
        let mut circles = self.circles;
        circles.sort_by(|a, b| b.depth().cmp(&a.depth()));

        DepthSortedShapes { circles }
    }
}

impl DepthSortedShapes {
    /// The sorted circles, furthest first
    #[inline]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Converts back to an unsorted shape set (eg, to add more shapes)
    pub fn into_shape_set(self) -> ShapeSet {
        ShapeSet { circles: self.circles }
    }
}

impl Deref for DepthSortedShapes {
    type Target = [Circle];

    #[inline]
    fn deref(&self) -> &[Circle] {
        &self.circles
    }
}

impl FromIterator<Circle> for ShapeSet {
    fn from_iter<T: IntoIterator<Item=Circle>>(iter: T) -> Self {
        ShapeSet { circles: iter.into_iter().collect() }
    }
}

impl Extend<Circle> for ShapeSet {
    fn extend<T: IntoIterator<Item=Circle>>(&mut self, iter: T) {
        self.circles.extend(iter)
    }
}

impl From<Vec<Circle>> for ShapeSet {
    fn from(circles: Vec<Circle>) -> ShapeSet {
        ShapeSet { circles }
    }
}
