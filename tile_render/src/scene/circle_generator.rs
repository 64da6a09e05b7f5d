use super::circle::*;
use super::shape_set::*;
use crate::pixel::*;

use rand::{Rng};

use std::ops::{RangeInclusive};

///
/// Generates scenes made up of randomly placed circles
///
/// The defaults produce the test scene used for measuring the tile renderer: circles centred anywhere on
/// the canvas (including its far edges), with a radius of 50-60 pixels, a depth between 1 and 30 and a
/// random opaque colour.
///
#[derive(Clone, Debug)]
pub struct CircleGenerator {
    canvas_size:    i32,
    radius:         RangeInclusive<i32>,
    depth:          RangeInclusive<i32>,
}

impl CircleGenerator {
    ///
    /// Creates a generator for a square canvas of the specified size
    ///
    pub fn new(canvas_size: i32) -> Self {
        CircleGenerator {
            canvas_size:    canvas_size.max(0),
            radius:         50..=60,
            depth:          1..=30,
        }
    }

    /// Changes the range of radii that circles are generated with
    pub fn with_radius(mut self, radius: RangeInclusive<i32>) -> Self {
        self.radius = radius;
        self
    }

    /// Changes the range of depths that circles are generated with
    pub fn with_depth(mut self, depth: RangeInclusive<i32>) -> Self {
        self.depth = depth;
        self
    }

    ///
    /// Generates a single random circle
    ///
    pub fn circle(&self, rng: &mut impl Rng) -> Circle {
        let x       = rng.gen_range(0..=self.canvas_size);
        let y       = rng.gen_range(0..=self.canvas_size);
        let radius  = rng.gen_range(self.radius.clone());
        let depth   = rng.gen_range(self.depth.clone());
        let color   = ArgbPixel::rgb(rng.gen(), rng.gen(), rng.gen());

        Circle::new(x, y, radius, depth, color)
    }

    ///
    /// Generates a shape set containing `count` random circles
    ///
    pub fn generate(&self, count: usize, rng: &mut impl Rng) -> ShapeSet {
        (0..count).map(|_| self.circle(rng)).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use rand::prelude::*;

    #[test]
    fn generated_circles_use_the_configured_ranges() {
        let mut rng     = StdRng::seed_from_u64(42);
        let generator   = CircleGenerator::new(256);
        let shapes      = generator.generate(500, &mut rng);

        assert!(shapes.len() == 500);

        for circle in shapes.circles() {
            let (x, y) = circle.center();

            assert!(x >= 0 && x <= 256 && y >= 0 && y <= 256, "{:?}", circle);
            assert!(circle.radius() >= 50 && circle.radius() <= 60, "{:?}", circle);
            assert!(circle.depth() >= 1 && circle.depth() <= 30, "{:?}", circle);
            assert!(circle.color().alpha() == 255, "{:?}", circle);
        }
    }

    #[test]
    fn same_seed_same_scene() {
        let generator   = CircleGenerator::new(1024).with_radius(5..=10).with_depth(0..=3);
        let first       = generator.generate(100, &mut StdRng::seed_from_u64(7));
        let second      = generator.generate(100, &mut StdRng::seed_from_u64(7));

        assert!(first == second);
    }
}
