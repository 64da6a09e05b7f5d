//!
//! # flo_render_tiles
//!
//! A software renderer that divides a square canvas into a grid of tiles and renders the tiles in parallel.
//!
//! A scene is a set of circles, each with a depth. Rendering a scene happens in a few stages:
//!
//!  * the scene is sorted from the furthest shape to the nearest (`ShapeSet::into_depth_sorted()`)
//!  * each tile collects the shapes that overlap it into a work list
//!  * each tile draws its work list into its own pixel buffer
//!  * the tiles are copied into the output canvas
//!
//! The last three stages are performed by a `TilePipeline`, which runs each stage for every tile at once.
//!
//! ```
//! # use flo_render_tiles::*;
//! # use flo_render_tiles::pixel::*;
//! # use flo_render_tiles::scene::*;
//! # use flo_render_tiles::render::*;
//! let shapes = ShapeSet::new()
//!     .with_circle(Circle::new(512, 512, 10, 1, ArgbPixel::rgb(255, 0, 0)))
//!     .into_depth_sorted();
//!
//! let mut pipeline        = TilePipeline::new(RenderConfig::default()).unwrap();
//! let (canvas, _stats)    = pipeline.render_frame(&shapes).unwrap();
//!
//! assert!(canvas.get(512, 512) == Some(ArgbPixel::rgb(255, 0, 0)));
//! ```
//!

mod config;
mod error;

/// Packed ARGB pixels and the buffers that hold them
pub mod pixel;

/// The shapes that make up a scene, and the painter's algorithm sort that orders them
pub mod scene;

/// Division of the canvas into tiles, and distribution of the shapes between the tiles
pub mod tiles;

/// Renderers that draw shapes into tiles and combine tiles into a finished canvas
pub mod render;

/// Writers for saving rendered canvases as image files
pub mod output;

pub use config::*;
pub use error::*;
