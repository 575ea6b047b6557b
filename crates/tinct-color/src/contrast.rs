//! WCAG contrast computation and enforcement.
//!
//! Luminance and contrast follow the WCAG 2.1 definitions. Enforcement
//! adjusts the foreground through the HSV value channel in fixed steps, so
//! the search is bounded and deterministic.

use crate::color::Color;

/// Contrast required for body text (WCAG AA).
pub const MIN_TEXT_CONTRAST: f64 = 4.5;

/// Contrast required for non-text UI such as borders (WCAG 1.4.11).
pub const MIN_UI_CONTRAST: f64 = 3.0;

/// Size of one walk step, in HSV percent.
const STEP: f64 = 1.0;

/// Upper bound on walk steps: a full value sweep plus a full saturation sweep.
const MAX_STEPS: usize = 201;

/// Convert an sRGB channel in `[0, 1]` to linear light.
#[inline]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Alpha is ignored. Returns a value in `[0.0, 1.0]` where 0 is black and
/// 1 is white.
pub fn relative_luminance(color: Color) -> f64 {
    let r = srgb_to_linear(f64::from(color.red()) / 255.0);
    let g = srgb_to_linear(f64::from(color.green()) / 255.0);
    let b = srgb_to_linear(f64::from(color.blue()) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in `[1.0, 21.0]`:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result does not depend on argument order.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Adjust `foreground` until it reaches `min_ratio` against `background`.
///
/// Returns `foreground` unchanged when it already meets the ratio.
/// Otherwise the HSV value is walked toward whichever extreme moves away
/// from the background's luminance; lightening continues by draining
/// saturation once value reaches 100 so that white is reachable. If that
/// direction cannot meet the ratio the opposite direction is tried. When
/// neither can, pure black or pure white is returned, whichever contrasts
/// more with the background.
pub fn ensure_minimum_contrast(foreground: Color, background: Color, min_ratio: f64) -> Color {
    if contrast_ratio(foreground, background) >= min_ratio {
        return foreground;
    }

    let darken_first = relative_luminance(foreground) <= relative_luminance(background);

    let adjusted = walk(foreground, background, min_ratio, darken_first)
        .or_else(|| walk(foreground, background, min_ratio, !darken_first));

    match adjusted {
        Some(color) => {
            tracing::debug!(
                from = %foreground,
                to = %color,
                against = %background,
                min_ratio,
                "adjusted foreground to reach minimum contrast"
            );
            color
        }
        None => {
            let extreme = most_contrasting_extreme(background);
            tracing::debug!(
                against = %background,
                min_ratio,
                fallback = %extreme,
                "minimum contrast unreachable, using extreme"
            );
            extreme
        }
    }
}

/// Pure black or pure white, whichever contrasts more with `background`.
pub fn most_contrasting_extreme(background: Color) -> Color {
    if contrast_ratio(Color::BLACK, background) >= contrast_ratio(Color::WHITE, background) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

fn walk(foreground: Color, background: Color, min_ratio: f64, toward_dark: bool) -> Option<Color> {
    let mut hsv = foreground.hsv();

    for _ in 0..MAX_STEPS {
        if toward_dark {
            if hsv.v <= 0.0 {
                return None;
            }
            hsv.v = (hsv.v - STEP).max(0.0);
        } else if hsv.v < 100.0 {
            hsv.v = (hsv.v + STEP).min(100.0);
        } else if hsv.s > 0.0 {
            hsv.s = (hsv.s - STEP).max(0.0);
        } else {
            return None;
        }

        let candidate = foreground.with_hsv(hsv);
        if contrast_ratio(candidate, background) >= min_ratio {
            return Some(candidate);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
    }

    #[test]
    fn luminance_white_is_one() {
        assert_eq!(relative_luminance(Color::WHITE), 1.0);
    }

    #[test]
    fn luminance_primaries() {
        assert!(approx_eq(relative_luminance(hex("#FF0000")), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance(hex("#00FF00")), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance(hex("#0000FF")), 0.0722, 1e-9));
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = relative_luminance(hex("#808080"));
        // sRGB 0.5 linearizes to ~0.216
        assert!(lum > 0.20 && lum < 0.23, "Mid-gray luminance: {lum}");
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        assert_eq!(contrast_ratio(Color::BLACK, Color::WHITE), 21.0);
        assert_eq!(contrast_ratio(Color::WHITE, Color::BLACK), 21.0);
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = hex("#3B82F6");
        assert_eq!(contrast_ratio(c, c), 1.0);
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = hex("#CC3344");
        let b = hex("#1A1A66");
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    // ── ensure_minimum_contrast ─────────────────────────────────────

    #[test]
    fn already_readable_is_unchanged() {
        let fg = hex("#212529");
        assert_eq!(ensure_minimum_contrast(fg, Color::WHITE, 4.5), fg);
    }

    #[test]
    fn light_gray_on_white_is_darkened() {
        let fg = hex("#CCCCCC");
        let adjusted = ensure_minimum_contrast(fg, Color::WHITE, 4.5);
        assert_ne!(adjusted, fg);
        assert!(contrast_ratio(adjusted, Color::WHITE) >= 4.5);
        assert!(adjusted.value() < fg.value());
    }

    #[test]
    fn dark_text_on_dark_surface_is_lightened() {
        let fg = hex("#333344");
        let bg = hex("#1C1C1E");
        let adjusted = ensure_minimum_contrast(fg, bg, 4.5);
        assert!(contrast_ratio(adjusted, bg) >= 4.5);
        assert!(adjusted.value() > fg.value());
    }

    #[test]
    fn saturated_blue_on_black_reaches_ratio_by_desaturating() {
        // Pure blue at full value only reaches ~2.4:1 against black.
        let fg = hex("#0000FF");
        let adjusted = ensure_minimum_contrast(fg, Color::BLACK, 7.0);
        assert!(contrast_ratio(adjusted, Color::BLACK) >= 7.0);
    }

    #[test]
    fn walk_preserves_hue_when_possible() {
        let fg = hex("#F0A0A0");
        let adjusted = ensure_minimum_contrast(fg, Color::WHITE, 4.5);
        assert!(approx_eq(adjusted.hue(), fg.hue(), 3.0), "hue {}", adjusted.hue());
    }

    #[test]
    fn unreachable_ratio_returns_extreme() {
        let gray = hex("#777777");
        let adjusted = ensure_minimum_contrast(gray, gray, 21.0);
        assert!(adjusted == Color::BLACK || adjusted == Color::WHITE);
        assert_eq!(adjusted, most_contrasting_extreme(gray));
    }

    #[test]
    fn extreme_choice_follows_background() {
        assert_eq!(most_contrasting_extreme(Color::WHITE), Color::BLACK);
        assert_eq!(most_contrasting_extreme(Color::BLACK), Color::WHITE);
    }
}
