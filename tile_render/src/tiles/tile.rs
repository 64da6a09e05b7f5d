use super::region::*;
use crate::pixel::*;

///
/// One cell of the tile grid, with its own pixel buffer
///
/// A tile's buffer is only ever written by one worker at a time: the rasterizer owns it while the circles
/// are drawn, then the compositor reads it to copy it into the output canvas.
///
#[derive(Clone, Debug)]
pub struct Tile {
    region:     Region,
    column:     usize,
    row:        usize,
    background: ArgbPixel,
    pixels:     PixelBuffer,
}

impl Tile {
    ///
    /// Creates a tile covering a region, with its buffer filled with the background colour
    ///
    pub fn new(column: usize, row: usize, region: Region, background: ArgbPixel) -> Tile {
        let width   = region.width.max(0) as usize;
        let height  = region.height.max(0) as usize;

        Tile {
            region:     region,
            column:     column,
            row:        row,
            background: background,
            pixels:     PixelBuffer::new(width, height, background),
        }
    }

    /// The part of the canvas this tile covers
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    /// The position of this tile in the grid, as `(column, row)`
    #[inline]
    pub fn grid_position(&self) -> (usize, usize) {
        (self.column, self.row)
    }

    /// The rendered pixels for this tile, in tile-local coordinates
    #[inline]
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }

    ///
    /// Resets the tile to its background colour, ready to render a new frame
    ///
    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
    }
}
