use super::region::*;
use super::tile_grid::*;
use crate::scene::*;

use std::ops::{Deref};

///
/// The circles that need to be drawn into a single tile, in painter's order
///
/// Work lists hold copies of the circles rather than references, so each worker only ever touches
/// its own memory while rasterizing.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkList {
    circles: Vec<Circle>,
}

impl WorkList {
    pub fn new() -> Self {
        WorkList { circles: vec![] }
    }

    /// Removes every circle from this list, keeping its allocation for the next frame
    pub fn clear(&mut self) {
        self.circles.clear();
    }

    ///
    /// Appends a copy of each of the sorted shapes whose bounding box overlaps a region
    ///
    /// Shapes are added in the order they're supplied, so the list stays in painter's order.
    ///
    pub fn collect_for_region(&mut self, region: &Region, shapes: &DepthSortedShapes) {
        self.circles.extend(shapes.iter().filter(|circle| region.overlaps_circle(circle)).copied());
    }

    /// The circles in this list
    #[inline]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }
}

impl Deref for WorkList {
    type Target = [Circle];

    #[inline]
    fn deref(&self) -> &[Circle] {
        &self.circles
    }
}

///
/// Builds the work list for every tile in a grid, in tile index order
///
/// Each list holds the circles whose bounding box overlaps that tile. A circle near a tile boundary ends up
/// in the list for every tile it overlaps.
///
pub fn distribute_work(shapes: &DepthSortedShapes, grid: &TileGrid) -> Vec<WorkList> {
    grid.regions()
        .map(|region| {
            let mut work_list = WorkList::new();
            work_list.collect_for_region(&region, shapes);
            work_list
        })
        .collect()
}
