///
/// Draws a source into a destination buffer that covers one region of the canvas
///
/// `CircleRenderer` draws a list of circles into the buffer for a `Region`, and `TileCompositor` copies a
/// slice of tiles into the canvas laid out by a `TileGrid`. Implementations must be `Send + Sync` so the
/// pipeline can share one renderer between all of its workers.
///
pub trait Renderer : Send + Sync {
    /// Where the destination sits on the canvas (a `Region` for a tile, a `TileGrid` for the whole canvas)
    type Region: ?Sized;

    /// What gets drawn (depth-sorted circles, or rendered tiles)
    type Source: ?Sized;

    /// The buffer that receives the pixels
    type Dest: ?Sized;

    ///
    /// Draws `source` into `dest`, which must be at least as large as `region`
    ///
    fn render(&self, region: &Self::Region, source: &Self::Source, dest: &mut Self::Dest);
}
