//! WCAG 2.x contrast engine: color parsing, relative luminance, contrast
//! ratio, AA/AAA/UI-component classification, accessible-color search and a
//! parallel batch audit. The `node` feature adds napi bindings.

pub mod engine;
pub mod error;
pub mod math;
pub mod types;

#[cfg(feature = "node")]
mod bindings;

pub use error::ContrastError;
pub use math::color_parse::{parse_color, parse_color_with, parse_css_color, ColorSource};
pub use math::named::NamedColors;
pub use math::search::{
    suggest_accessible_colors, suggest_accessible_colors_rgb, suggest_for_ratio,
    suggest_with_strategy,
};
pub use math::wcag::{
    check_wcag_thresholds, contrast_ratio, contrast_ratio_rgb, meets_aa, meets_aaa,
    meets_ui_component_contrast, relative_luminance, WcagResult,
};
pub use types::{ComplianceResult, Level, RgbColor, SearchOutcome, SearchStrategy};
