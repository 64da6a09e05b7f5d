use flo_render_tiles::pixel::*;
use flo_render_tiles::render::*;
use flo_render_tiles::scene::*;
use flo_render_tiles::tiles::*;

const RED: ArgbPixel    = ArgbPixel::rgb(255, 0, 0);
const GREEN: ArgbPixel  = ArgbPixel::rgb(0, 255, 0);
const BLUE: ArgbPixel   = ArgbPixel::rgb(0, 0, 255);

#[test]
fn draw_circle_in_region_local_coordinates() {
    let region      = Region::new(100, 200, 50, 50);
    let mut buffer  = PixelBuffer::new(50, 50, ArgbPixel::OPAQUE_BLACK);
    let circle      = Circle::new(125, 225, 10, 1, RED);

    CircleRenderer.render(&region, &[circle], &mut buffer);

    // Centre is at (25, 25) in the buffer
    assert!(buffer.get(25, 25) == Some(RED));
    assert!(buffer.get(15, 25) == Some(RED), "Left-most point should be filled");
    assert!(buffer.get(25, 15) == Some(RED), "Top-most point should be filled");
    assert!(buffer.get(35, 25) == Some(ArgbPixel::OPAQUE_BLACK), "Right-most point is outside the half-open bounds");
    assert!(buffer.get(25, 35) == Some(ArgbPixel::OPAQUE_BLACK), "Bottom-most point is outside the half-open bounds");
    assert!(buffer.get(17, 17) == Some(ArgbPixel::OPAQUE_BLACK), "Corner of the bounding box should not be filled");

    for y in 0..50 {
        for x in 0..50 {
            let canvas_x = x + 100;
            let canvas_y = y + 200;
            let inside   = canvas_x < 135 && canvas_y < 235 && circle.contains(canvas_x, canvas_y);
            let expected = if inside { RED } else { ArgbPixel::OPAQUE_BLACK };

            assert!(buffer.get(x, y) == Some(expected), "({}, {}) should be {:?}", x, y, expected);
        }
    }
}

#[test]
fn circle_is_clipped_to_region() {
    let region      = Region::new(0, 0, 16, 16);
    let mut buffer  = PixelBuffer::new(16, 16, ArgbPixel::TRANSPARENT);
    let circle      = Circle::new(16, 8, 4, 1, GREEN);

    CircleRenderer.render(&region, &[circle], &mut buffer);

    let filled = buffer.pixels().iter().filter(|pixel| **pixel == GREEN).count();

    // The part of the circle left of x=16: columns 12-15
    let expected = (0..16).flat_map(|y| (12..16).map(move |x| (x, y)))
        .filter(|(x, y)| circle.contains(*x, *y) && *y < 12)
        .count();

    assert!(filled == expected, "{} != {}", filled, expected);
    assert!(buffer.get(12, 8) == Some(GREEN));
    assert!(buffer.get(15, 8) == Some(GREEN));
}

#[test]
fn circle_outside_region_draws_nothing() {
    let region      = Region::new(64, 64, 32, 32);
    let mut buffer  = PixelBuffer::new(32, 32, ArgbPixel::TRANSPARENT);

    CircleRenderer.render(&region, &[Circle::new(10, 10, 20, 1, RED), Circle::new(-400, 80, 100, 1, RED)], &mut buffer);

    assert!(buffer.pixels().iter().all(|pixel| *pixel == ArgbPixel::TRANSPARENT));
}

#[test]
fn later_circles_overwrite_earlier_ones() {
    let region      = Region::new(0, 0, 64, 64);
    let mut buffer  = PixelBuffer::new(64, 64, ArgbPixel::TRANSPARENT);
    let far         = Circle::new(32, 32, 20, 10, BLUE);
    let near        = Circle::new(32, 32, 8, 1, GREEN);

    CircleRenderer.render(&region, &[far, near], &mut buffer);

    assert!(buffer.get(32, 32) == Some(GREEN));
    assert!(buffer.get(32, 18) == Some(BLUE));
    assert!(buffer.get(0, 0) == Some(ArgbPixel::TRANSPARENT));

    // Drawing in the opposite order hides the near circle completely
    CircleRenderer.render(&region, &[near, far], &mut buffer);
    assert!(buffer.pixels().iter().all(|pixel| *pixel != GREEN));
}

#[test]
fn zero_radius_draws_nothing() {
    let region      = Region::new(0, 0, 8, 8);
    let mut buffer  = PixelBuffer::new(8, 8, ArgbPixel::TRANSPARENT);

    CircleRenderer.render(&region, &[Circle::new(4, 4, 0, 1, RED)], &mut buffer);

    assert!(buffer.pixels().iter().all(|pixel| *pixel == ArgbPixel::TRANSPARENT));
}

#[test]
#[should_panic]
fn buffer_smaller_than_region_panics() {
    let region      = Region::new(0, 0, 8, 8);
    let mut buffer  = PixelBuffer::new(4, 4, ArgbPixel::TRANSPARENT);

    CircleRenderer.render(&region, &[Circle::new(4, 4, 2, 1, RED)], &mut buffer);
}

#[test]
fn serial_render_covers_whole_canvas() {
    let shapes = ShapeSet::new()
        .with_circle(Circle::new(10, 10, 5, 1, GREEN))
        .with_circle(Circle::new(10, 10, 8, 5, BLUE))
        .into_depth_sorted();

    let mut canvas = PixelBuffer::new(20, 20, ArgbPixel::TRANSPARENT);
    render_serial(&shapes, &mut canvas);

    assert!(canvas.get(10, 10) == Some(GREEN));
    assert!(canvas.get(10, 3) == Some(BLUE));
    assert!(canvas.get(19, 19) == Some(ArgbPixel::TRANSPARENT));
}
