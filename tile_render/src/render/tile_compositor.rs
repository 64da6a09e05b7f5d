use super::renderer::*;

use crate::pixel::*;
use crate::tiles::*;

///
/// Copies rendered tiles into their place on the output canvas
///
/// Tiles are copied a whole row at a time. The canvas is first cut up into the row segments each tile
/// covers: the segments are disjoint, so every tile can be copied on a separate thread.
///
/// Pixels in the strip that isn't covered by any tile are left untouched.
///
#[derive(Copy, Clone, Debug, Default)]
pub struct TileCompositor;

///
/// Splits the canvas into the row segments covered by each tile, in tile index order
///
/// Each entry in the result holds `tile_edge` slices of `tile_edge` pixels, from the top of the tile to the bottom.
///
pub fn tile_destinations<'a>(grid: &TileGrid, canvas: &'a mut PixelBuffer) -> Vec<Vec<&'a mut [ArgbPixel]>> {
    let side            = grid.side();
    let edge            = grid.tile_edge();
    let covered         = grid.covered_size();
    let mut destinations = (0..grid.tile_count()).map(|_| Vec::with_capacity(edge)).collect::<Vec<_>>();

    for (y, row) in canvas.rows_mut().take(covered).enumerate() {
        let tile_row        = y / edge;
        let (covered_row, _) = row.split_at_mut(covered);

        for (column, segment) in covered_row.chunks_exact_mut(edge).enumerate() {
            destinations[column + tile_row*side].push(segment);
        }
    }

    destinations
}

impl TileCompositor {
    ///
    /// Copies the rows of a single tile into its destination segments
    ///
    #[inline]
    pub fn copy_tile(&self, tile: &Tile, destination: Vec<&mut [ArgbPixel]>) {
        let pixels = tile.pixels();

        for (y, dest_row) in destination.into_iter().enumerate() {
            dest_row.copy_from_slice(pixels.row(y));
        }
    }

    ///
    /// Checks that the canvas matches the grid
    ///
    fn check_canvas(grid: &TileGrid, tiles: &[Tile], canvas: &PixelBuffer) {
        if canvas.width() < grid.canvas_size() || canvas.height() < grid.canvas_size() {
            panic!("Cannot composite: the grid covers {} pixels but the canvas is only {}x{}", grid.canvas_size(), canvas.width(), canvas.height());
        }

        if tiles.len() != grid.tile_count() {
            panic!("Cannot composite: expected {} tiles but found {}", grid.tile_count(), tiles.len());
        }
    }
}

#[cfg(not(feature="multithreading"))]
impl Renderer for TileCompositor {
    type Region = TileGrid;
    type Source = [Tile];
    type Dest   = PixelBuffer;

    fn render(&self, grid: &TileGrid, tiles: &[Tile], canvas: &mut PixelBuffer) {
        Self::check_canvas(grid, tiles, canvas);

        for tile in tiles.iter() {
            let region = tile.region();
            canvas.blit(tile.pixels(), region.x0 as usize, region.y0 as usize);
        }
    }
}

#[cfg(feature="multithreading")]
impl Renderer for TileCompositor {
    type Region = TileGrid;
    type Source = [Tile];
    type Dest   = PixelBuffer;

    fn render(&self, grid: &TileGrid, tiles: &[Tile], canvas: &mut PixelBuffer) {
        use rayon::prelude::*;

        Self::check_canvas(grid, tiles, canvas);

        let destinations = tile_destinations(grid, canvas);

        tiles.par_iter()
            .zip(destinations.into_par_iter())
            .for_each(|(tile, destination)| self.copy_tile(tile, destination));
    }
}
