use super::circle_renderer::*;
use super::render_stats::*;
use super::renderer::*;
use super::tile_compositor::*;

use crate::config::*;
use crate::error::*;
use crate::pixel::*;
use crate::scene::*;
use crate::tiles::*;

use log::{debug, info, trace, log_enabled, Level};

use std::time::{Instant};

///
/// Renders depth-sorted scenes by dividing the canvas into tiles and drawing every tile in parallel
///
/// A frame is rendered in three phases, each of which runs once per tile:
///
///  * distribution collects the circles that overlap each tile into that tile's work list
///  * rasterization draws each work list into its tile's private buffer
///  * compositing copies each tile into its place on the output canvas
///
/// Every phase finishes for all of the tiles before the next one starts. Between phases, a tile and its work
/// list are only ever touched by one worker, so no locking is needed.
///
/// The pipeline owns the tiles and the work lists, so they're allocated once and reused for every frame.
///
pub struct TilePipeline {
    config:         RenderConfig,
    grid:           TileGrid,
    tiles:          Vec<Tile>,
    work_lists:     Vec<WorkList>,
    rasterizer:     CircleRenderer,
    compositor:     TileCompositor,

    #[cfg(feature="multithreading")]
    thread_pool:    rayon::ThreadPool,
}

impl TilePipeline {
    ///
    /// Creates a pipeline from a configuration, allocating the tiles
    ///
    pub fn new(config: RenderConfig) -> Result<TilePipeline, TileRenderError> {
        let grid        = TileGrid::from_config(&config)?;
        let tiles       = grid.create_tiles(config.tile_background);
        let work_lists  = (0..grid.tile_count()).map(|_| WorkList::new()).collect();

        info!("Tile pipeline: {}x{} canvas, {}x{} grid of {} pixel tiles ({} of {} workers used, {} pixel remainder)",
            grid.canvas_size(), grid.canvas_size(), grid.side(), grid.side(), grid.tile_edge(), grid.tile_count(), config.worker_count, grid.remainder());

        #[cfg(feature="multithreading")]
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.worker_count)
            .thread_name(|idx| format!("tile-worker-{}", idx))
            .build()?;

        Ok(TilePipeline {
            config:         config,
            grid:           grid,
            tiles:          tiles,
            work_lists:     work_lists,
            rasterizer:     CircleRenderer,
            compositor:     TileCompositor,

            #[cfg(feature="multithreading")]
            thread_pool:    thread_pool,
        })
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The layout of the tiles on the canvas
    #[inline]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// The tiles, in index order (these hold the pixels from the most recent rasterization)
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The work lists from the most recent distribution, in tile index order
    #[inline]
    pub fn work_lists(&self) -> &[WorkList] {
        &self.work_lists
    }

    ///
    /// Creates an output canvas of the right size for this pipeline, filled with the canvas background
    ///
    pub fn create_canvas(&self) -> PixelBuffer {
        let size = self.grid.canvas_size();
        PixelBuffer::new(size, size, self.config.canvas_background)
    }

    ///
    /// Replaces the work lists with the circles that overlap each tile
    ///
    pub fn distribute(&mut self, shapes: &DepthSortedShapes) {
        let grid            = &self.grid;
        let work_lists      = &mut self.work_lists;
        let distribute_tile = |(index, work_list): (usize, &mut WorkList)| {
            work_list.clear();

            if let Some(region) = grid.region(index) {
                work_list.collect_for_region(&region, shapes);
            }
        };

        #[cfg(feature="multithreading")]
        {
            use rayon::prelude::*;
            self.thread_pool.install(|| work_lists.par_iter_mut().enumerate().for_each(distribute_tile));
        }

        #[cfg(not(feature="multithreading"))]
        {
            work_lists.iter_mut().enumerate().for_each(distribute_tile);
        }
    }

    ///
    /// Clears every tile and draws its work list into it
    ///
    pub fn rasterize(&mut self) {
        let rasterizer      = &self.rasterizer;
        let tiles           = &mut self.tiles;
        let work_lists      = &self.work_lists;
        let rasterize_tile  = |(tile, work_list): (&mut Tile, &WorkList)| {
            let region = tile.region();

            tile.clear();
            rasterizer.render(&region, work_list.circles(), tile.pixels_mut());
        };

        #[cfg(feature="multithreading")]
        {
            use rayon::prelude::*;
            self.thread_pool.install(|| tiles.par_iter_mut().zip(work_lists.par_iter()).for_each(rasterize_tile));
        }

        #[cfg(not(feature="multithreading"))]
        {
            tiles.iter_mut().zip(work_lists.iter()).for_each(rasterize_tile);
        }
    }

    ///
    /// Copies the tiles into an output canvas (which must be the size set in the configuration)
    ///
    pub fn composite(&self, canvas: &mut PixelBuffer) -> Result<(), TileRenderError> {
        let expected = self.grid.canvas_size();

        if canvas.width() != expected || canvas.height() != expected {
            return Err(TileRenderError::CanvasSizeMismatch { expected, width: canvas.width(), height: canvas.height() });
        }

        #[cfg(feature="multithreading")]
        {
            self.thread_pool.install(|| self.compositor.render(&self.grid, &self.tiles, canvas));
        }

        #[cfg(not(feature="multithreading"))]
        {
            self.compositor.render(&self.grid, &self.tiles, canvas);
        }

        Ok(())
    }

    ///
    /// Renders a frame: distributes the shapes, draws the tiles and copies them to the canvas
    ///
    pub fn render(&mut self, shapes: &DepthSortedShapes, canvas: &mut PixelBuffer) -> Result<RenderStats, TileRenderError> {
        let expected = self.grid.canvas_size();
        if canvas.width() != expected || canvas.height() != expected {
            return Err(TileRenderError::CanvasSizeMismatch { expected, width: canvas.width(), height: canvas.height() });
        }

        let start_time = Instant::now();

        self.distribute(shapes);
        let distributed_time = Instant::now();

        self.rasterize();
        let rasterized_time = Instant::now();

        self.composite(canvas)?;
        let composited_time = Instant::now();

        let stats = RenderStats {
            shape_count:        shapes.len(),
            work_list_sizes:    self.work_lists.iter().map(|work_list| work_list.len()).collect(),
            straddling_shapes:  if log_enabled!(Level::Trace) { Some(self.count_straddling_shapes(shapes)) } else { None },
            distribute_time:    distributed_time.duration_since(start_time),
            rasterize_time:     rasterized_time.duration_since(distributed_time),
            composite_time:     composited_time.duration_since(rasterized_time),
            total_time:         composited_time.duration_since(start_time),
        };

        debug!("Rendered {} shapes ({} copies) in {:?}: distribute {:?}, rasterize {:?}, composite {:?}",
            stats.shape_count, stats.shape_copies(), stats.total_time, stats.distribute_time, stats.rasterize_time, stats.composite_time);

        if log_enabled!(Level::Trace) {
            for (index, (size, share)) in stats.work_list_sizes.iter().zip(stats.work_share()).enumerate() {
                let (column, row) = self.tiles[index].grid_position();
                trace!("Tile [{}][{}]: {} shapes ({:.1}%)", column, row, size, share * 100.0);
            }

            if let Some(straddling) = stats.straddling_shapes {
                trace!("{} shapes overlap more than one tile", straddling);
            }
        }

        Ok(stats)
    }

    ///
    /// Renders a frame into a newly allocated canvas
    ///
    pub fn render_frame(&mut self, shapes: &DepthSortedShapes) -> Result<(PixelBuffer, RenderStats), TileRenderError> {
        let mut canvas  = self.create_canvas();
        let stats       = self.render(shapes, &mut canvas)?;

        Ok((canvas, stats))
    }

    ///
    /// Counts the shapes that are copied into more than one tile
    ///
    fn count_straddling_shapes(&self, shapes: &DepthSortedShapes) -> usize {
        shapes.iter()
            .filter(|circle| self.grid.tiles_overlapping(circle).len() > 1)
            .count()
    }
}
