//! Node entry points, compiled with the `node` feature.

use napi_derive::napi;

use crate::math::{color_parse, search, wcag};
use crate::types::{ComplianceResult, Level, SearchOutcome, SearchStrategy};

#[napi(object)]
#[derive(Debug, Clone)]
pub struct WcagResultJs {
    pub ratio: f64,
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
    pub pass_ui_component: bool,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct SuggestionJs {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub meets_target: bool,
    /// "already-compliant" | "darkened" | "lightened" | "fallback"
    pub outcome: String,
    pub steps: Option<u32>,
}

fn to_napi_error(err: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(err.to_string())
}

#[napi]
pub fn health_check() -> String {
    "wcag-contrast-native ok".to_string()
}

/// Normalized `#rrggbb`, or null when the text is not a supported color.
#[napi]
pub fn parse_color(text: String) -> Option<String> {
    color_parse::parse_color(&text).map(|c| c.to_hex())
}

#[napi]
pub fn contrast_ratio(a: String, b: String) -> Option<f64> {
    wcag::contrast_ratio(&a, &b)
}

#[napi]
pub fn check_contrast(
    foreground: String,
    background: String,
    is_large_text: bool,
) -> Option<WcagResultJs> {
    let ratio = wcag::contrast_ratio(&foreground, &background)?;
    let r = wcag::check_wcag_thresholds(ratio, is_large_text);
    Some(WcagResultJs {
        ratio: (ratio * 100.0).round() / 100.0,
        pass_aa: r.pass_aa,
        pass_aa_large: r.pass_aa_large,
        pass_aaa: r.pass_aaa,
        pass_aaa_large: r.pass_aaa_large,
        pass_ui_component: r.pass_ui_component,
    })
}

/// Throws on an unknown level; returns null when a color does not parse.
#[napi]
pub fn suggest_accessible_colors(
    foreground: String,
    background: String,
    level: String,
    is_large_text: bool,
    bidirectional: Option<bool>,
) -> napi::Result<Option<SuggestionJs>> {
    let level: Level = level.parse().map_err(to_napi_error)?;
    let strategy = if bidirectional.unwrap_or(false) {
        SearchStrategy::Bidirectional
    } else {
        SearchStrategy::DarkenOnly
    };

    let (Some(fg), Some(bg)) = (
        color_parse::parse_color(&foreground),
        color_parse::parse_color(&background),
    ) else {
        return Ok(None);
    };

    let result = search::suggest_with_strategy(fg, bg, level, is_large_text, strategy);
    Ok(Some(suggestion_to_js(&result)))
}

fn suggestion_to_js(result: &ComplianceResult) -> SuggestionJs {
    let (outcome, steps) = match result.outcome {
        SearchOutcome::AlreadyCompliant => ("already-compliant", None),
        SearchOutcome::Darkened { steps } => ("darkened", Some(steps)),
        SearchOutcome::Lightened { steps } => ("lightened", Some(steps)),
        SearchOutcome::Fallback => ("fallback", None),
    };

    SuggestionJs {
        foreground: result.foreground.to_hex(),
        background: result.background.to_hex(),
        ratio: result.ratio,
        meets_target: result.meets_target,
        outcome: outcome.to_string(),
        steps,
    }
}

/// Run a batch audit from a JSON `AuditOptions` document; returns the report as JSON.
#[napi]
pub fn audit_pairs(options_json: String) -> napi::Result<String> {
    let report = crate::engine::audit_json(&options_json).map_err(to_napi_error)?;
    serde_json::to_string(&report).map_err(to_napi_error)
}
