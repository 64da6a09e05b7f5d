use super::argb_pixel::*;

use std::slice::{ChunksExact, ChunksExactMut};

///
/// A row-major buffer of ARGB pixels with its origin at the top-left
///
/// Individual pixels are accessed through `get` and `set`, which clip against the edges of the
/// buffer instead of panicking. Bulk operations work on whole rows at a time: `blit` copies
/// another buffer in row by row, which is how tiles are combined into the output canvas.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width:  usize,
    height: usize,
    pixels: Vec<ArgbPixel>,
}

impl PixelBuffer {
    ///
    /// Creates a new pixel buffer of the specified size, with every pixel set to `fill`
    ///
    pub fn new(width: usize, height: usize, fill: ArgbPixel) -> Self {
        PixelBuffer {
            width:  width,
            height: height,
            pixels: vec![fill; width*height],
        }
    }

    ///
    /// Wraps an existing set of pixels (returns `None` if the pixel count doesn't match the size)
    ///
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<ArgbPixel>) -> Option<Self> {
        if pixels.len() != width*height {
            None
        } else {
            Some(PixelBuffer { width, height, pixels })
        }
    }

    /// The width of this buffer in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of this buffer in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All of the pixels in this buffer, in row-major order
    #[inline]
    pub fn pixels(&self) -> &[ArgbPixel] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [ArgbPixel] {
        &mut self.pixels
    }

    /// Releases the pixels from this buffer
    pub fn into_pixels(self) -> Vec<ArgbPixel> {
        self.pixels
    }

    ///
    /// Returns the offset of a pixel in the buffer, or `None` if the coordinates are outside the buffer
    ///
    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            None
        } else {
            Some(x + y*self.width)
        }
    }

    ///
    /// Reads the pixel at the specified position, or `None` if it's outside the buffer
    ///
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<ArgbPixel> {
        self.offset(x, y).map(|offset| self.pixels[offset])
    }

    ///
    /// Writes a pixel, returning false if the position was clipped
    ///
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, pixel: ArgbPixel) -> bool {
        if let Some(offset) = self.offset(x, y) {
            self.pixels[offset] = pixel;
            true
        } else {
            false
        }
    }

    ///
    /// Sets every pixel in the buffer to the same value
    ///
    pub fn fill(&mut self, pixel: ArgbPixel) {
        self.pixels.iter_mut().for_each(|existing| *existing = pixel);
    }

    ///
    /// Retrieves a row of pixels
    ///
    /// Panics if `y` is beyond the end of the buffer
    ///
    #[inline]
    pub fn row(&self, y: usize) -> &[ArgbPixel] {
        let start = y * self.width;
        &self.pixels[start..(start + self.width)]
    }

    ///
    /// Retrieves a row of pixels for writing
    ///
    /// Panics if `y` is beyond the end of the buffer
    ///
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [ArgbPixel] {
        let start = y * self.width;
        &mut self.pixels[start..(start + self.width)]
    }

    /// Iterates over the rows of this buffer
    pub fn rows(&self) -> ChunksExact<'_, ArgbPixel> {
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Iterates over the rows of this buffer for writing
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, ArgbPixel> {
        self.pixels.chunks_exact_mut(self.width.max(1))
    }

    ///
    /// Copies the contents of `source` into this buffer with its top-left corner at `(x, y)`
    ///
    /// The copy is performed a row at a time. Any part of the source that falls outside this buffer is
    /// clipped. Returns the number of rows that were copied.
    ///
    pub fn blit(&mut self, source: &PixelBuffer, x: usize, y: usize) -> usize {
        if x >= self.width || y >= self.height {
            return 0;
        }

        let copy_width  = source.width.min(self.width - x);
        let copy_height = source.height.min(self.height - y);

        for source_y in 0..copy_height {
            let source_row  = &source.row(source_y)[0..copy_width];
            let dest_row    = &mut self.row_mut(y + source_y)[x..(x + copy_width)];

            dest_row.copy_from_slice(source_row);
        }

        copy_height
    }
}
