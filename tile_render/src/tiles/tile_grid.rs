use super::region::*;
use super::tile::*;
use crate::config::*;
use crate::error::*;
use crate::pixel::*;
use crate::scene::*;

use itertools::*;
use smallvec::*;

///
/// Describes how a square canvas is divided into a square grid of equal, square tiles
///
/// Tiles are indexed in row-major order, so the tile in `column` and `row` has the index
/// `column + row*side`. If the canvas size isn't a multiple of the grid side, the strip along the
/// right and bottom edges that's left over isn't covered by any tile.
///
/// The grid is fixed once created: it's shared, read-only, between all of the workers.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    canvas_size:    usize,
    side:           usize,
    tile_edge:      usize,
}

impl TileGrid {
    ///
    /// Creates the tile grid for a render configuration
    ///
    /// The grid has `floor(sqrt(worker_count))` tiles along each side, each `floor(canvas_size / side)` pixels across.
    ///
    pub fn from_config(config: &RenderConfig) -> Result<TileGrid, TileRenderError> {
        config.validate()?;

        let side        = config.grid_side();
        let tile_edge   = config.canvas_size / side;

        Ok(TileGrid {
            canvas_size:    config.canvas_size,
            side:           side,
            tile_edge:      tile_edge,
        })
    }

    ///
    /// Creates a tile grid for a canvas size and a number of workers, using the default settings for everything else
    ///
    pub fn from_worker_count(canvas_size: usize, worker_count: usize) -> Result<TileGrid, TileRenderError> {
        Self::from_config(&RenderConfig::default().with_canvas_size(canvas_size).with_worker_count(worker_count))
    }

    /// The width and height of the canvas this grid divides up
    #[inline]
    pub fn canvas_size(&self) -> usize {
        self.canvas_size
    }

    /// The number of tiles along each side of the grid
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// The width and height of each tile
    #[inline]
    pub fn tile_edge(&self) -> usize {
        self.tile_edge
    }

    #[inline]
    pub fn tile_count(&self) -> usize {
        self.side * self.side
    }

    /// The width and height of the part of the canvas covered by tiles
    #[inline]
    pub fn covered_size(&self) -> usize {
        self.side * self.tile_edge
    }

    /// The width of the strip along the right and bottom edges of the canvas that isn't covered by any tile
    #[inline]
    pub fn remainder(&self) -> usize {
        self.canvas_size - self.covered_size()
    }

    /// The index of the tile at a particular column and row
    #[inline]
    pub fn tile_index(&self, column: usize, row: usize) -> usize {
        column + row*self.side
    }

    ///
    /// The region covered by the tile with the specified index
    ///
    pub fn region(&self, index: usize) -> Option<Region> {
        if index >= self.tile_count() {
            return None;
        }

        let column  = index % self.side;
        let row     = index / self.side;
        let edge    = self.tile_edge as i32;

        Some(Region::new((column as i32) * edge, (row as i32) * edge, edge, edge))
    }

    ///
    /// The regions of every tile, in index order
    ///
    pub fn regions(&self) -> impl '_ + Iterator<Item=Region> {
        (0..self.tile_count()).flat_map(move |index| self.region(index))
    }

    ///
    /// Allocates the tiles for this grid, with their buffers filled with a background colour
    ///
    pub fn create_tiles(&self, background: ArgbPixel) -> Vec<Tile> {
        iproduct!(0..self.side, 0..self.side)
            .flat_map(|(row, column)| {
                self.region(self.tile_index(column, row))
                    .map(|region| Tile::new(column, row, region, background))
            })
            .collect()
    }

    ///
    /// Finds the index of the tile containing a pixel, or `None` if the pixel is outside of every tile
    ///
    pub fn tile_index_at(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }

        let column  = (x as usize) / self.tile_edge;
        let row     = (y as usize) / self.tile_edge;

        if column >= self.side || row >= self.side {
            None
        } else {
            Some(self.tile_index(column, row))
        }
    }

    ///
    /// The range of tile columns or rows overlapped by a bounding box span `[min, max]`, using the same
    /// rule as `Region::overlaps_bounds()` (a span that just touches a tile edge doesn't overlap it)
    ///
    fn overlapped_cells(&self, min: i32, max: i32) -> Option<(usize, usize)> {
        let edge        = self.tile_edge as i64;
        let last_cell   = (self.side as i64) - 1;

        let first       = (min as i64).div_euclid(edge).max(0);
        let last        = ((max as i64) - 1).div_euclid(edge).min(last_cell);

        if first > last {
            None
        } else {
            Some((first as usize, last as usize))
        }
    }

    ///
    /// The indexes of the tiles that a circle's bounding box overlaps
    ///
    /// This works out the tiles directly from the circle's position instead of testing every tile. A circle
    /// no larger than a tile will overlap at most 4 tiles.
    ///
    pub fn tiles_overlapping(&self, circle: &Circle) -> SmallVec<[usize; 4]> {
        let ((min_x, min_y), (max_x, max_y)) = circle.bounding_box();

        let columns = self.overlapped_cells(min_x, max_x);
        let rows    = self.overlapped_cells(min_y, max_y);

        match (columns, rows) {
            (Some((first_column, last_column)), Some((first_row, last_row))) => {
                iproduct!(first_row..=last_row, first_column..=last_column)
                    .map(|(row, column)| self.tile_index(column, row))
                    .collect()
            }

            _ => smallvec![]
        }
    }
}
