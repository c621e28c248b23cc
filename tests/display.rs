//! Display conversion tests: stack frames back to RGB arrays and images.

use frametab::{display_array, display_image};
use ndarray::Array3;

/// A 2x3 frame with one saturated primary per pixel, plus padding pixels.
fn sample_frame() -> Array3<f64> {
    let mut frame = Array3::zeros((2, 3, 6));
    // (0,0) pure blue, (0,1) pure green, (0,2) pure red, in BGR channels.
    frame[(0, 0, 0)] = 255.0;
    frame[(0, 1, 1)] = 255.0;
    frame[(0, 2, 2)] = 255.0;
    // (1,0) a mixed color.
    frame[(1, 0, 0)] = 10.0;
    frame[(1, 0, 1)] = 20.0;
    frame[(1, 0, 2)] = 30.0;
    // HSV channels hold junk that display code must ignore.
    frame[(1, 2, 3)] = 179.0;
    frame[(1, 2, 4)] = 255.0;
    frame[(1, 2, 5)] = 255.0;
    frame
}

// ── array output ───────────────────────────────────────────────────

#[test]
fn reorders_bgr_to_rgb() {
    let frame = sample_frame();
    let rgb = display_array(frame.view());

    assert_eq!(rgb.dim(), (2, 3, 3));
    assert_eq!((rgb[(0, 0, 0)], rgb[(0, 0, 1)], rgb[(0, 0, 2)]), (0, 0, 255));
    assert_eq!((rgb[(0, 1, 0)], rgb[(0, 1, 1)], rgb[(0, 1, 2)]), (0, 255, 0));
    assert_eq!((rgb[(0, 2, 0)], rgb[(0, 2, 1)], rgb[(0, 2, 2)]), (255, 0, 0));
    assert_eq!((rgb[(1, 0, 0)], rgb[(1, 0, 1)], rgb[(1, 0, 2)]), (30, 20, 10));
}

#[test]
fn hsv_channels_do_not_leak_into_output() {
    let frame = sample_frame();
    let rgb = display_array(frame.view());
    // Pixel (1,2) has zero BGR but saturated HSV.
    assert_eq!((rgb[(1, 2, 0)], rgb[(1, 2, 1)], rgb[(1, 2, 2)]), (0, 0, 0));
}

#[test]
fn fractional_values_truncate() {
    let mut frame = Array3::zeros((1, 1, 6));
    frame[(0, 0, 0)] = 200.9;
    frame[(0, 0, 1)] = 100.5;
    frame[(0, 0, 2)] = 50.1;

    let rgb = display_array(frame.view());
    assert_eq!((rgb[(0, 0, 0)], rgb[(0, 0, 1)], rgb[(0, 0, 2)]), (50, 100, 200));
}

// ── image output ───────────────────────────────────────────────────

#[test]
fn image_dimensions_follow_width_then_height() {
    let frame = sample_frame();
    let image = display_image(frame.view());
    assert_eq!(image.width(), 3);
    assert_eq!(image.height(), 2);
}

#[test]
fn image_pixels_match_array_output() {
    let frame = sample_frame();
    let rgb = display_array(frame.view());
    let image = display_image(frame.view());

    for i in 0..2 {
        for j in 0..3 {
            let pixel = image.get_pixel(j as u32, i as u32);
            assert_eq!(
                pixel.0,
                [rgb[(i, j, 0)], rgb[(i, j, 1)], rgb[(i, j, 2)]],
                "pixel ({i},{j})",
            );
        }
    }
}
