//! Turning stack frames back into viewable images.
//!
//! Stack frames store BGR in channels 0 to 2; screens and image files want
//! RGB bytes. These helpers reorder the channels and narrow the values back
//! to `u8` for display or export.

use image::{Rgb, RgbImage};
use ndarray::{Array3, ArrayView3};

/// Convert a `(height, width, channel)` stack frame to an RGB byte array.
///
/// Only the first three channels are read, reordered from BGR to RGB. The
/// `f64` values are narrowed with `as`, truncating any fractional part;
/// frames produced by decoding hold exact 8-bit values, so nothing is lost.
///
/// # Example
///
/// ```
/// use frametab::display_array;
/// use ndarray::Array3;
///
/// // One blue pixel: B=255, G=0, R=0, HSV=(120, 255, 255).
/// let frame = Array3::from_shape_vec(
///     (1, 1, 6),
///     vec![255.0, 0.0, 0.0, 120.0, 255.0, 255.0],
/// )
/// .unwrap();
/// let rgb = display_array(frame.view());
/// assert_eq!(rgb[(0, 0, 0)], 0); // R
/// assert_eq!(rgb[(0, 0, 2)], 255); // B
/// ```
pub fn display_array(frame: ArrayView3<'_, f64>) -> Array3<u8> {
    let (height, width, _) = frame.dim();
    Array3::from_shape_fn((height, width, 3), |(i, j, channel)| {
        frame[(i, j, 2 - channel)] as u8
    })
}

/// Convert a `(height, width, channel)` stack frame to an [`RgbImage`].
///
/// Channel handling matches [`display_array`]; the result can be saved in
/// any format the `image` crate writes.
pub fn display_image(frame: ArrayView3<'_, f64>) -> RgbImage {
    let (height, width, _) = frame.dim();
    RgbImage::from_fn(width as u32, height as u32, |x, y| {
        let i = y as usize;
        let j = x as usize;
        Rgb([
            frame[(i, j, 2)] as u8,
            frame[(i, j, 1)] as u8,
            frame[(i, j, 0)] as u8,
        ])
    })
}
