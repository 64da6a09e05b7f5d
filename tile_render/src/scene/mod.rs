mod circle;
mod shape_set;
#[cfg(feature="scene_generation")] mod circle_generator;

pub use circle::*;
pub use shape_set::*;
#[cfg(feature="scene_generation")] pub use circle_generator::*;
