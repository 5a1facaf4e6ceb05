use serde::{Deserialize, Serialize};

use super::color_parse::ColorSource;
use crate::types::RgbColor;

pub const AA_NORMAL_MIN: f64 = 4.5;
pub const AA_LARGE_MIN: f64 = 3.0;
pub const AAA_NORMAL_MIN: f64 = 7.0;
pub const AAA_LARGE_MIN: f64 = 4.5;
/// WCAG SC 1.4.11 non-text contrast.
pub const UI_COMPONENT_MIN: f64 = 3.0;

/// Linearization cut-off from the WCAG 2.x relative-luminance definition.
const LINEAR_THRESHOLD: f64 = 0.03928;

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= LINEAR_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.x.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: RgbColor) -> f64 {
    let (r, g, b) = color.channels();
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Calculate WCAG contrast ratio between two parsed colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio_rgb(a: RgbColor, b: RgbColor) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two colors given as text or [`RgbColor`].
/// None if either side fails to parse.
pub fn contrast_ratio<A: ColorSource, B: ColorSource>(a: A, b: B) -> Option<f64> {
    Some(contrast_ratio_rgb(a.resolve()?, b.resolve()?))
}

/// AA: 4.5:1 for body text, 3:1 for large text (>=18pt, or >=14pt bold).
pub fn meets_aa(ratio: f64, is_large_text: bool) -> bool {
    ratio >= if is_large_text { AA_LARGE_MIN } else { AA_NORMAL_MIN }
}

/// AAA: 7:1 for body text, 4.5:1 for large text.
pub fn meets_aaa(ratio: f64, is_large_text: bool) -> bool {
    ratio >= if is_large_text { AAA_LARGE_MIN } else { AAA_NORMAL_MIN }
}

/// Non-text UI components (control borders, focus rings, icons): 3:1 at any size.
pub fn meets_ui_component_contrast(ratio: f64) -> bool {
    ratio >= UI_COMPONENT_MIN
}

/// Determine pass/fail for all WCAG thresholds.
pub fn check_wcag_thresholds(ratio: f64, is_large_text: bool) -> WcagResult {
    WcagResult {
        pass_aa: meets_aa(ratio, is_large_text),
        pass_aa_large: meets_aa(ratio, true),
        pass_aaa: meets_aaa(ratio, is_large_text),
        pass_aaa_large: meets_aaa(ratio, true),
        pass_ui_component: meets_ui_component_contrast(ratio),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WcagResult {
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
    pub pass_ui_component: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ratio(a: &str, b: &str) -> f64 {
        contrast_ratio(a, b).unwrap()
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = ratio("#000000", "#ffffff");
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn identical_colors_are_1() {
        assert_eq!(ratio("#777777", "#777777"), 1.0);
        assert_eq!(ratio("#ffffff", "#ffffff"), 1.0);
    }

    #[test]
    fn gray_on_white() {
        // colord: 4.54
        let ratio = ratio("#767676", "#ffffff");
        assert!((ratio - 4.54).abs() < 0.1);
    }

    #[test]
    fn order_independent() {
        let r1 = ratio("#ff0000", "#ffffff");
        let r2 = ratio("#ffffff", "#ff0000");
        assert_eq!(r1, r2);
    }

    #[test]
    fn red_on_white() {
        // colord: 3.99
        let ratio = ratio("#ff0000", "#ffffff");
        assert!((ratio - 3.99).abs() < 0.1);
    }

    #[test]
    fn slate_on_white() {
        // colord: 14.62
        let ratio = ratio("#1e293b", "#ffffff");
        assert!((ratio - 14.62).abs() < 0.1);
    }

    #[test]
    fn zinc_400_on_zinc_950() {
        // colord: 7.76
        let ratio = ratio("#a1a1aa", "#09090b");
        assert!((ratio - 7.76).abs() < 0.1);
    }

    #[test]
    fn accepts_mixed_sources() {
        let white: &RgbColor = &RgbColor::WHITE;
        let from_text = contrast_ratio("black", white).unwrap();
        let from_rgb = contrast_ratio(RgbColor::BLACK, String::from("#fff")).unwrap();
        assert_eq!(from_text, from_rgb);
    }

    #[test]
    fn unparseable_side_is_none() {
        assert_eq!(contrast_ratio("not-a-color", "#ffffff"), None);
        assert_eq!(contrast_ratio(RgbColor::BLACK, "#12"), None);
    }

    #[test]
    fn luminance_endpoints() {
        assert_eq!(relative_luminance(RgbColor::BLACK), 0.0);
        assert!((relative_luminance(RgbColor::WHITE) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn luminance_linear_segment() {
        // 10/255 = 0.0392 sits below the 0.03928 cut-off
        let expected = (10.0 / 255.0) / 12.92;
        let l = relative_luminance(RgbColor::new(10, 10, 10));
        assert!((l - expected).abs() < 1e-12);
    }

    #[test]
    fn aa_boundaries() {
        assert!(meets_aa(4.5, false));
        assert!(!meets_aa(4.49, false));
        assert!(meets_aa(3.0, true));
        assert!(!meets_aa(2.99, true));
    }

    #[test]
    fn aaa_boundaries() {
        assert!(meets_aaa(7.0, false));
        assert!(!meets_aaa(6.99, false));
        assert!(meets_aaa(4.5, true));
        assert!(!meets_aaa(4.49, true));
    }

    #[test]
    fn ui_component_ignores_text_size() {
        assert!(meets_ui_component_contrast(3.0));
        assert!(!meets_ui_component_contrast(2.99));
    }

    #[test]
    fn aa_normal_requires_4_5() {
        let r = check_wcag_thresholds(4.5, false);
        assert!(r.pass_aa);
        assert!(!r.pass_aaa);
        assert!(r.pass_aaa_large);
        assert!(r.pass_ui_component);
    }

    #[test]
    fn aa_large_requires_3() {
        let r = check_wcag_thresholds(3.0, true);
        assert!(r.pass_aa); // AA large = 3:1
        assert!(!r.pass_aaa); // AAA large = 4.5:1
    }

    #[test]
    fn aaa_normal_requires_7() {
        let r = check_wcag_thresholds(7.0, false);
        assert!(r.pass_aa);
        assert!(r.pass_aaa);
    }

    fn any_color() -> impl Strategy<Value = RgbColor> {
        any::<(u8, u8, u8)>().prop_map(|(r, g, b)| RgbColor::new(r, g, b))
    }

    proptest! {
        #[test]
        fn luminance_in_unit_range(c in any_color()) {
            let l = relative_luminance(c);
            prop_assert!((0.0..=1.0 + 1e-12).contains(&l));
        }

        #[test]
        fn ratio_is_symmetric(a in any_color(), b in any_color()) {
            prop_assert_eq!(contrast_ratio_rgb(a, b), contrast_ratio_rgb(b, a));
        }

        #[test]
        fn ratio_bounded(a in any_color(), b in any_color()) {
            let r = contrast_ratio_rgb(a, b);
            prop_assert!(r >= 1.0);
            prop_assert!(r <= 21.0 + 1e-9);
        }

        #[test]
        fn identical_colors_give_exactly_one(c in any_color()) {
            prop_assert_eq!(contrast_ratio_rgb(c, c), 1.0);
        }

        #[test]
        fn hex_text_matches_rgb(c in any_color()) {
            let expected = contrast_ratio_rgb(c, RgbColor::WHITE);
            prop_assert_eq!(contrast_ratio(c.to_hex(), RgbColor::WHITE), Some(expected));
        }
    }
}
