use super::renderer::*;

use crate::pixel::*;
use crate::scene::*;
use crate::tiles::*;

///
/// Rasterizes a list of circles into a pixel buffer covering a region of the canvas
///
/// The destination buffer's top-left pixel is at `(region.x0, region.y0)` on the canvas, so the same
/// renderer draws into a single tile or, with a region covering the whole canvas, directly into the
/// output canvas.
///
/// Circles are drawn in the order they're supplied and each one overwrites whatever is already in the
/// buffer: with a depth-sorted list this is the painter's algorithm. A circle covers the pixels
/// `(x, y)` in the half-open box `[cx-r, cx+r) × [cy-r, cy+r)` where `(x-cx)² + (y-cy)² <= r²`.
///
/// This differs from the closed box `[cx-r, cx+r]` on purpose: the right-most and bottom-most points of
/// the disc are never drawn, and a circle with a radius of 0 draws nothing. With a closed box, a circle
/// that only touches a tile's edge would paint a pixel in a tile it isn't distributed to, and the tiled
/// output would no longer match `render_serial`.
///
#[derive(Copy, Clone, Debug, Default)]
pub struct CircleRenderer;

impl CircleRenderer {
    ///
    /// Draws a single circle, clipped to the region
    ///
    #[inline]
    pub fn draw_circle(&self, region: &Region, circle: &Circle, dest: &mut PixelBuffer) {
        let ((min_x, min_y), (max_x, max_y)) = circle.bounding_box();

        let x_range = region.clip_x(min_x..max_x);
        let y_range = region.clip_y(min_y..max_y);
        let color   = circle.color();

        for y in y_range {
            let row = dest.row_mut((y - region.y0) as usize);

            for x in x_range.clone() {
                if circle.contains(x, y) {
                    row[(x - region.x0) as usize] = color;
                }
            }
        }
    }
}

impl Renderer for CircleRenderer {
    type Region = Region;
    type Source = [Circle];
    type Dest   = PixelBuffer;

    fn render(&self, region: &Region, source: &[Circle], dest: &mut PixelBuffer) {
        // The buffer has to be large enough to hold the whole region
        if (dest.width() as i64) < (region.width as i64) || (dest.height() as i64) < (region.height as i64) {
            panic!("Cannot render: region is {}x{} but the buffer is only {}x{}", region.width, region.height, dest.width(), dest.height());
        }

        for circle in source.iter() {
            self.draw_circle(region, circle, dest);
        }
    }
}
