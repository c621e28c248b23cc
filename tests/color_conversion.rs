//! BGR to HSV conversion tests.
//!
//! Expected values follow OpenCV's 8-bit conventions: hue in half-degrees
//! below 180, saturation and value in 0..=255.

use frametab::bgr_to_hsv;

// ── primaries and secondaries ──────────────────────────────────────

#[test]
fn pure_red() {
    assert_eq!(bgr_to_hsv([0, 0, 255]), [0, 255, 255]);
}

#[test]
fn pure_green() {
    assert_eq!(bgr_to_hsv([0, 255, 0]), [60, 255, 255]);
}

#[test]
fn pure_blue() {
    assert_eq!(bgr_to_hsv([255, 0, 0]), [120, 255, 255]);
}

#[test]
fn yellow_cyan_magenta() {
    assert_eq!(bgr_to_hsv([0, 255, 255]), [30, 255, 255]);
    assert_eq!(bgr_to_hsv([255, 255, 0]), [90, 255, 255]);
    assert_eq!(bgr_to_hsv([255, 0, 255]), [150, 255, 255]);
}

// ── achromatic pixels ──────────────────────────────────────────────

#[test]
fn black_white_and_grays_have_zero_hue_and_saturation() {
    assert_eq!(bgr_to_hsv([0, 0, 0]), [0, 0, 0]);
    assert_eq!(bgr_to_hsv([255, 255, 255]), [0, 0, 255]);
    assert_eq!(bgr_to_hsv([128, 128, 128]), [0, 0, 128]);
    assert_eq!(bgr_to_hsv([7, 7, 7]), [0, 0, 7]);
}

// ── mixed colors ───────────────────────────────────────────────────

#[test]
fn orange_tone() {
    // B=0, G=128, R=255: hue lands between red and yellow.
    assert_eq!(bgr_to_hsv([0, 128, 255]), [15, 255, 255]);
}

#[test]
fn muted_tones_round_saturation() {
    // delta = 128, value = 192: saturation rounds 170.0 to 170.
    assert_eq!(bgr_to_hsv([64, 128, 192]), [15, 170, 192]);
    assert_eq!(bgr_to_hsv([64, 192, 128]), [45, 170, 192]);
    assert_eq!(bgr_to_hsv([192, 128, 64]), [105, 170, 192]);
}

#[test]
fn negative_hue_wraps_below_180() {
    // Red max with blue above green gives a negative raw hue, which wraps
    // up by 180 half-degrees.
    assert_eq!(bgr_to_hsv([254, 0, 255]), [150, 255, 255]);
    assert_eq!(bgr_to_hsv([128, 0, 255]), [165, 255, 255]);
}

#[test]
fn tiny_negative_hue_rounds_to_zero() {
    // Raw hue of about -0.12 rounds to zero rather than wrapping to 180.
    assert_eq!(bgr_to_hsv([1, 0, 255])[0], 0);
}

// ── whole-range properties ─────────────────────────────────────────

#[test]
fn hue_always_below_180() {
    for b in (0..=255).step_by(17) {
        for g in (0..=255).step_by(17) {
            for r in (0..=255).step_by(17) {
                let [h, _, _] = bgr_to_hsv([b as u8, g as u8, r as u8]);
                assert!(h < 180, "hue {h} out of range for BGR({b},{g},{r})");
            }
        }
    }
}

#[test]
fn value_is_channel_maximum() {
    for b in (0..=255).step_by(51) {
        for g in (0..=255).step_by(51) {
            for r in (0..=255).step_by(51) {
                let (b, g, r) = (b as u8, g as u8, r as u8);
                let [_, _, v] = bgr_to_hsv([b, g, r]);
                assert_eq!(v, b.max(g).max(r));
            }
        }
    }
}

#[test]
fn equal_channels_always_give_zero_hue_and_saturation() {
    for level in 0..=255 {
        let [h, s, v] = bgr_to_hsv([level, level, level]);
        assert_eq!((h, s), (0, 0), "achromatic level {level}");
        assert_eq!(v, level);
    }
}
