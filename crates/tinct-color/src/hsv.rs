//! RGB ↔ HSV conversion.
//!
//! Hue is expressed in degrees `[0, 360)`, saturation and value in percent
//! `[0, 100]`. Hue is `0` whenever saturation is `0` (grays).

/// A color in HSV space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation in percent, `[0, 100]`.
    pub s: f64,
    /// Value (brightness) in percent, `[0, 100]`.
    pub v: f64,
}

impl Hsv {
    /// Create an HSV triple, normalizing hue and clamping saturation/value.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_percent(s),
            v: clamp_percent(v),
        }
    }
}

/// Convert 8-bit RGB channels to HSV.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let s = if max == 0.0 { 0.0 } else { delta / max * 100.0 };

    Hsv {
        h: normalize_hue(h),
        s,
        v: max * 100.0,
    }
}

/// Convert HSV back to 8-bit RGB channels.
///
/// Out-of-range inputs are normalized first: hue wraps, saturation and value
/// clamp to `[0, 100]`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let h = normalize_hue(h);
    let s = clamp_percent(s) / 100.0;
    let v = clamp_percent(v) / 100.0;

    let c = v * s;
    let sector = h / 60.0;
    let x = c * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = match sector.floor() as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (to_channel(r1 + m), to_channel(g1 + m), to_channel(b1 + m))
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn gray_has_zero_hue_and_saturation() {
        let hsv = rgb_to_hsv(128, 128, 128);
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 0.0);
        assert!(approx(hsv.v, 50.196));
    }

    #[test]
    fn black_and_white() {
        assert_eq!(rgb_to_hsv(0, 0, 0), Hsv { h: 0.0, s: 0.0, v: 0.0 });
        assert_eq!(rgb_to_hsv(255, 255, 255), Hsv { h: 0.0, s: 0.0, v: 100.0 });
    }

    #[test]
    fn primaries_and_secondaries() {
        assert!(approx(rgb_to_hsv(255, 0, 0).h, 0.0));
        assert!(approx(rgb_to_hsv(255, 255, 0).h, 60.0));
        assert!(approx(rgb_to_hsv(0, 255, 0).h, 120.0));
        assert!(approx(rgb_to_hsv(0, 255, 255).h, 180.0));
        assert!(approx(rgb_to_hsv(0, 0, 255).h, 240.0));
        assert!(approx(rgb_to_hsv(255, 0, 255).h, 300.0));
    }

    #[test]
    fn red_sector_wraps_below_360() {
        // Magenta-ish red: max is red, g < b so the raw sector is negative.
        let hsv = rgb_to_hsv(255, 0, 10);
        assert!(hsv.h > 350.0 && hsv.h < 360.0, "hue {}", hsv.h);
    }

    #[test]
    fn inverse_each_sector() {
        assert_eq!(hsv_to_rgb(0.0, 100.0, 100.0), (255, 0, 0));
        assert_eq!(hsv_to_rgb(60.0, 100.0, 100.0), (255, 255, 0));
        assert_eq!(hsv_to_rgb(120.0, 100.0, 100.0), (0, 255, 0));
        assert_eq!(hsv_to_rgb(180.0, 100.0, 100.0), (0, 255, 255));
        assert_eq!(hsv_to_rgb(240.0, 100.0, 100.0), (0, 0, 255));
        assert_eq!(hsv_to_rgb(300.0, 100.0, 100.0), (255, 0, 255));
    }

    #[test]
    fn inverse_normalizes_inputs() {
        assert_eq!(hsv_to_rgb(360.0, 100.0, 100.0), (255, 0, 0));
        assert_eq!(hsv_to_rgb(-120.0, 100.0, 100.0), (0, 0, 255));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 150.0), (255, 255, 255));
        assert_eq!(hsv_to_rgb(0.0, -5.0, -5.0), (0, 0, 0));
    }

    #[test]
    fn new_clamps() {
        let hsv = Hsv::new(725.0, 120.0, -3.0);
        assert!(approx(hsv.h, 5.0));
        assert_eq!(hsv.s, 100.0);
        assert_eq!(hsv.v, 0.0);
    }
}
