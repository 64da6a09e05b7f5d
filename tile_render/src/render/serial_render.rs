use super::circle_renderer::*;
use super::renderer::*;

use crate::pixel::*;
use crate::scene::*;
use crate::tiles::*;

///
/// Renders a set of shapes directly onto a canvas on the current thread, without dividing it into tiles
///
/// This applies the same clipping and overwriting rules as the tiled pipeline, so for a canvas that divides
/// evenly into tiles the two produce identical pixels. It's used as a reference and for comparing
/// performance.
///
pub fn render_serial(shapes: &DepthSortedShapes, canvas: &mut PixelBuffer) {
    let region = Region::new(0, 0, canvas.width() as i32, canvas.height() as i32);

    CircleRenderer.render(&region, shapes.circles(), canvas);
}
