//!
//! Measures how long each stage of the tile renderer takes, compared to drawing the whole scene in one pass
//!
//! Every stage of the pipeline can be run on its own, so it's possible to see where the time goes as the number
//! of workers changes. Set `FLO_TILES_CANVAS_SIZE` to change the size of the canvas.
//!

use flo_render_tiles::*;
use flo_render_tiles::pixel::*;
use flo_render_tiles::render::*;
use flo_render_tiles::scene::*;
use flo_render_tiles::tiles::*;

use rand::prelude::*;

use std::hint::{black_box};
use std::time::{Instant, Duration};

struct Timing {
    /// How many times the action was run
    iterations: usize,

    /// Time taken for all of the iterations
    total_time: Duration,
}

fn format_seconds(seconds: f64) -> String {
    if seconds < 1e-6 {
        format!("{:.1}ns", seconds * 1e9)
    } else if seconds < 1e-3 {
        format!("{:.1}µs", seconds * 1e6)
    } else if seconds < 1.0 {
        format!("{:.1}ms", seconds * 1e3)
    } else {
        format!("{:.1}s", seconds)
    }
}

impl Timing {
    fn seconds_per_call(&self) -> f64 {
        self.total_time.as_secs_f64() / (self.iterations as f64)
    }

    ///
    /// Describes the time per call and the equivalent frame rate
    ///
    fn summary(&self) -> String {
        let per_call = self.seconds_per_call();

        format!("{} per call over {} calls ({:.1} fps)", format_seconds(per_call), self.iterations, 1.0 / per_call)
    }
}

///
/// Runs an action a few times to warm up, then times `iterations` calls to it
///
fn time<T>(iterations: usize, action: impl FnMut() -> T) -> Timing {
    let mut action = action;

    for _ in 0..(iterations/10).max(1) {
        black_box(action());
    }

    let start_time = Instant::now();
    for _ in 0..iterations {
        black_box(action());
    }

    Timing {
        iterations: iterations,
        total_time: Instant::now().duration_since(start_time),
    }
}

fn print_header(name: &str) {
    println!("\n\x1b[1m{}\x1b[22m", name);
}

fn main() {
    env_logger::init();

    let base_config = match RenderConfig::from_env() {
        Ok(config)  => config,
        Err(err)    => { eprintln!("{}", err); return; }
    };

    let canvas_size = base_config.canvas_size;
    let mut rng     = StdRng::seed_from_u64(42);
    let shapes      = CircleGenerator::new(canvas_size as i32).generate(5000, &mut rng).into_depth_sorted();

    print_header(&format!("{} circles on a {}x{} canvas", shapes.len(), canvas_size, canvas_size));

    let sort = time(100, || CircleGenerator::new(canvas_size as i32).generate(5000, &mut rng).into_depth_sorted());
    println!("  Generate and sort: {}", sort.summary());

    let mut canvas  = PixelBuffer::new(canvas_size, canvas_size, base_config.tile_background);
    let serial      = time(20, || render_serial(&shapes, &mut canvas));
    println!("  Single pass: {}", serial.summary());

    for worker_count in [1, 2, 4, 9, 16].iter().copied() {
        let config = base_config.with_worker_count(worker_count);

        let mut pipeline = match TilePipeline::new(config) {
            Ok(pipeline)    => pipeline,
            Err(err)        => { println!("  {} workers: {}", worker_count, err); continue; }
        };

        print_header(&format!("{} workers ({}x{} tiles of {} pixels)", worker_count, pipeline.grid().side(), pipeline.grid().side(), pipeline.grid().tile_edge()));

        let mut canvas  = pipeline.create_canvas();
        let grid        = pipeline.grid().clone();

        let distribute_serial   = time(100, || distribute_work(&shapes, &grid));
        let distribute          = time(100, || pipeline.distribute(&shapes));
        let rasterize           = time(20, || pipeline.rasterize());
        let composite           = time(100, || pipeline.composite(&mut canvas));
        let full_frame          = time(20, || pipeline.render(&shapes, &mut canvas));

        println!("  Distribute (one thread): {}", distribute_serial.summary());
        println!("  Distribute: {}", distribute.summary());
        println!("  Rasterize: {}", rasterize.summary());
        println!("  Composite: {}", composite.summary());
        println!("  Full frame: {}", full_frame.summary());
        println!("  Speedup over single pass: {:.2}x", serial.seconds_per_call() / full_frame.seconds_per_call());

        if let Ok(stats) = pipeline.render(&shapes, &mut canvas) {
            println!("  {} circles drawn, {:.2} copies per circle", stats.shape_copies(), (stats.shape_copies() as f64) / (stats.shape_count.max(1) as f64));
        }
    }
}
