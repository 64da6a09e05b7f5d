mod region;
mod tile;
mod tile_grid;
mod work_list;

pub use region::*;
pub use tile::*;
pub use tile_grid::*;
pub use work_list::*;
