//! BGR to HSV color conversion.
//!
//! The frame stack stores two representations of every pixel: the decoded
//! BGR triple and an HSV triple derived from it. The conversion follows the
//! 8-bit convention popularised by OpenCV's `COLOR_BGR2HSV`, which is what
//! downstream clustering notebooks expect: hue in half-degrees `[0, 180)`,
//! saturation and value in `[0, 255]`.

/// Convert one 8-bit BGR pixel to 8-bit HSV.
///
/// Output ranges: `H ∈ [0, 180)` (half-degrees), `S ∈ [0, 255]`,
/// `V ∈ [0, 255]`. Hue is 0 for achromatic pixels (all channels equal,
/// including black). Saturation and hue are rounded to the nearest integer.
///
/// # Example
///
/// ```
/// use frametab::bgr_to_hsv;
///
/// // Pure red: BGR (0, 0, 255).
/// assert_eq!(bgr_to_hsv([0, 0, 255]), [0, 255, 255]);
/// // Pure blue sits at 240°, stored as 120 half-degrees.
/// assert_eq!(bgr_to_hsv([255, 0, 0]), [120, 255, 255]);
/// ```
pub fn bgr_to_hsv(bgr: [u8; 3]) -> [u8; 3] {
    let [b, g, r] = bgr;
    let value = b.max(g).max(r);
    let minimum = b.min(g).min(r);
    let delta = value - minimum;

    if delta == 0 {
        // Achromatic: hue undefined (reported as 0), saturation 0.
        return [0, 0, value];
    }

    let delta_f = f64::from(delta);
    let saturation = (255.0 * delta_f / f64::from(value)).round() as u8;

    // Branch priority matches the reference convention: red wins ties with
    // green, green wins ties with blue.
    let raw_hue = if value == r {
        30.0 * (f64::from(g) - f64::from(b)) / delta_f
    } else if value == g {
        60.0 + 30.0 * (f64::from(b) - f64::from(r)) / delta_f
    } else {
        120.0 + 30.0 * (f64::from(r) - f64::from(g)) / delta_f
    };

    let mut hue = raw_hue.round();
    if hue < 0.0 {
        hue += 180.0;
    }

    [hue as u8, saturation, value]
}
