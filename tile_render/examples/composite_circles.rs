//!
//! Renders a scene of random circles with the tile pipeline and saves it as `circles.tga` and `circles.png`
//!
//! Run with `RUST_LOG=trace` to see how the circles were shared out between the tiles. The size of the canvas
//! and the number of workers can be set with `FLO_TILES_CANVAS_SIZE` and `FLO_TILES_WORKERS`.
//!

use flo_render_tiles::*;
use flo_render_tiles::output::*;
use flo_render_tiles::render::*;
use flo_render_tiles::scene::*;

use log::{info};

fn main() -> Result<(), TileRenderError> {
    env_logger::init();

    let config          = RenderConfig::from_env()?;
    let mut rng         = rand::thread_rng();
    let shapes          = CircleGenerator::new(config.canvas_size as i32).generate(5000, &mut rng).into_depth_sorted();

    let mut pipeline    = TilePipeline::new(config)?;
    let (canvas, stats) = pipeline.render_frame(&shapes)?;

    info!("Rendered {} circles in {:?} (distribute {:?}, rasterize {:?}, composite {:?})",
        stats.shape_count, stats.total_time, stats.distribute_time, stats.rasterize_time, stats.composite_time);

    for (index, share) in stats.work_share().into_iter().enumerate() {
        info!("  Tile {}: {:.1}% of the work", index, share * 100.0);
    }

    save_tga24("circles.tga", &canvas, true)?;

    #[cfg(feature="render_png")]
    {
        save_png("circles.png", &canvas)?;
    }

    Ok(())
}
