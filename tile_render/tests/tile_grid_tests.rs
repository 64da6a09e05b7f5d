use flo_render_tiles::*;
use flo_render_tiles::pixel::*;
use flo_render_tiles::scene::*;
use flo_render_tiles::tiles::*;

use rand::prelude::*;

#[test]
fn four_workers_make_two_by_two_grid() {
    let grid = TileGrid::from_worker_count(1024, 4).unwrap();

    assert!(grid.side() == 2);
    assert!(grid.tile_count() == 4);
    assert!(grid.tile_edge() == 512);
    assert!(grid.remainder() == 0);

    assert!(grid.region(0) == Some(Region::new(0, 0, 512, 512)));
    assert!(grid.region(1) == Some(Region::new(512, 0, 512, 512)));
    assert!(grid.region(2) == Some(Region::new(0, 512, 512, 512)));
    assert!(grid.region(3) == Some(Region::new(512, 512, 512, 512)));
    assert!(grid.region(4).is_none());
}

#[test]
fn excess_workers_are_unused() {
    let grid = TileGrid::from_worker_count(900, 14).unwrap();

    assert!(grid.side() == 3, "{:?}", grid);
    assert!(grid.tile_count() == 9);
    assert!(grid.tile_edge() == 300);
}

#[test]
fn zero_workers_is_an_error() {
    let grid = TileGrid::from_worker_count(1024, 0);

    assert!(matches!(grid, Err(TileRenderError::NoWorkers)), "{:?}", grid);
}

#[test]
fn uneven_canvas_leaves_a_remainder() {
    let grid = TileGrid::from_worker_count(1000, 9).unwrap();

    assert!(grid.tile_edge() == 333);
    assert!(grid.covered_size() == 999);
    assert!(grid.remainder() == 1);
}

#[test]
fn tiles_are_allocated_with_background() {
    let grid    = TileGrid::from_worker_count(96, 9).unwrap();
    let tiles   = grid.create_tiles(ArgbPixel::OPAQUE_BLACK);

    assert!(tiles.len() == 9);

    for (index, tile) in tiles.iter().enumerate() {
        let (column, row) = tile.grid_position();

        assert!(grid.tile_index(column, row) == index, "Tile {} is at ({}, {})", index, column, row);
        assert!(Some(tile.region()) == grid.region(index), "Tile {} has region {:?}", index, tile.region());
        assert!(tile.pixels().width() == 32 && tile.pixels().height() == 32);
        assert!(tile.pixels().pixels().iter().all(|pixel| *pixel == ArgbPixel::OPAQUE_BLACK));
    }
}

#[test]
fn tiles_match_grid_regions() {
    for (canvas_size, workers) in [(10, 4), (9, 4), (17, 9), (1000, 9), (5, 1), (31, 6)].iter().copied() {
        let grid    = TileGrid::from_worker_count(canvas_size, workers).unwrap();
        let tiles   = grid.create_tiles(ArgbPixel::TRANSPARENT);
        let regions = grid.regions().collect::<Vec<_>>();

        assert!(tiles.len() == regions.len(), "{} tiles for {} regions (canvas {}, {} workers)", tiles.len(), regions.len(), canvas_size, workers);

        for (index, (tile, region)) in tiles.iter().zip(regions.iter()).enumerate() {
            let (column, row) = tile.grid_position();

            assert!(tile.region() == *region, "Tile {} is {:?}, expected {:?} (canvas {}, {} workers)", index, tile.region(), region, canvas_size, workers);
            assert!(grid.tile_index(column, row) == index);
        }
    }
}

#[test]
fn regions_partition_the_canvas() {
    for (canvas_size, workers) in [(10, 4), (9, 4), (17, 9), (64, 16), (5, 1), (31, 6)].iter().copied() {
        let grid    = TileGrid::from_worker_count(canvas_size, workers).unwrap();
        let regions = grid.regions().collect::<Vec<_>>();
        let covered = grid.covered_size() as i32;

        assert!(regions.len() == grid.tile_count());

        for (first_idx, first) in regions.iter().enumerate() {
            assert!(first.width == first.height, "Tile {} is not square: {:?}", first_idx, first);

            for second in regions.iter().skip(first_idx+1) {
                assert!(!first.overlaps(second), "{:?} overlaps {:?} (canvas {}, {} workers)", first, second, canvas_size, workers);
            }
        }

        for y in 0..(canvas_size as i32) {
            for x in 0..(canvas_size as i32) {
                let containing  = regions.iter().filter(|region| region.contains(x, y)).count();
                let expected    = if x < covered && y < covered { 1 } else { 0 };

                assert!(containing == expected, "({}, {}) is in {} regions (canvas {}, {} workers)", x, y, containing, canvas_size, workers);
            }
        }
    }
}

#[test]
fn tile_index_at_position() {
    let grid = TileGrid::from_worker_count(1024, 4).unwrap();

    assert!(grid.tile_index_at(0, 0) == Some(0));
    assert!(grid.tile_index_at(511, 511) == Some(0));
    assert!(grid.tile_index_at(512, 0) == Some(1));
    assert!(grid.tile_index_at(0, 512) == Some(2));
    assert!(grid.tile_index_at(1023, 1023) == Some(3));
    assert!(grid.tile_index_at(1024, 0).is_none());
    assert!(grid.tile_index_at(-1, 0).is_none());

    let uneven = TileGrid::from_worker_count(9, 4).unwrap();
    assert!(uneven.tile_index_at(7, 7) == Some(3));
    assert!(uneven.tile_index_at(8, 0).is_none());
}

#[test]
fn overlapping_tiles_for_circle_on_corner() {
    let grid    = TileGrid::from_worker_count(1024, 4).unwrap();
    let circle  = Circle::new(512, 512, 10, 1, ArgbPixel::WHITE);

    assert!(grid.tiles_overlapping(&circle).as_slice() == &[0, 1, 2, 3]);

    let inside = Circle::new(256, 700, 10, 1, ArgbPixel::WHITE);
    assert!(grid.tiles_overlapping(&inside).as_slice() == &[2]);

    let touching = Circle::new(502, 100, 10, 1, ArgbPixel::WHITE);
    assert!(grid.tiles_overlapping(&touching).as_slice() == &[0]);

    let off_canvas = Circle::new(-100, -100, 10, 1, ArgbPixel::WHITE);
    assert!(grid.tiles_overlapping(&off_canvas).is_empty());
}

#[test]
fn overlapping_tiles_match_region_test() {
    let mut rng = StdRng::seed_from_u64(1234);

    for (canvas_size, workers) in [(1024, 4), (300, 9), (97, 16), (50, 2)].iter().copied() {
        let grid    = TileGrid::from_worker_count(canvas_size, workers).unwrap();
        let limit   = canvas_size as i32;

        for _ in 0..500 {
            let circle = Circle::new(rng.gen_range(-limit..2*limit), rng.gen_range(-limit..2*limit), rng.gen_range(0..limit), 0, ArgbPixel::WHITE);

            let by_index    = grid.tiles_overlapping(&circle).to_vec();
            let by_region   = grid.regions().enumerate()
                .filter(|(_, region)| region.overlaps_circle(&circle))
                .map(|(index, _)| index)
                .collect::<Vec<_>>();

            assert!(by_index == by_region, "{:?}: {:?} != {:?} (canvas {}, {} workers)", circle, by_index, by_region, canvas_size, workers);
        }
    }
}
