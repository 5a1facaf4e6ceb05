use tracing::debug;

use super::color_parse::parse_color;
use super::search::suggest_for_ratio;
use super::wcag::{
    check_wcag_thresholds, contrast_ratio_rgb, meets_ui_component_contrast, UI_COMPONENT_MIN,
};
use crate::error::ContrastError;
use crate::types::{
    AuditOptions, AuditReport, ColorPair, Level, PairKind, PairResult, SkippedPair,
};

/// Check contrast for a single color pair.
///
/// The foreground must parse. An unparseable background is replaced by
/// `options.default_background` when that parses; otherwise the pair is skipped.
pub fn check_pair(pair: &ColorPair, options: &AuditOptions) -> Result<PairResult, SkippedPair> {
    let skip = |err: ContrastError| SkippedPair {
        label: pair.label.clone(),
        reason: err.to_string(),
    };

    let foreground = parse_color(&pair.foreground)
        .ok_or_else(|| skip(ContrastError::UnparseableColor(pair.foreground.clone())))?;

    let (background, used_default_background) = match parse_color(&pair.background) {
        Some(bg) => (bg, false),
        None => {
            let fallback = options.default_background.as_deref().and_then(parse_color);
            match fallback {
                Some(bg) => (bg, true),
                None => {
                    let err = ContrastError::UnparseableColor(pair.background.clone());
                    return Err(skip(err));
                }
            }
        }
    };

    let ratio_raw = contrast_ratio_rgb(foreground, background);
    let ratio = (ratio_raw * 100.0).round() / 100.0;
    let wcag = check_wcag_thresholds(ratio_raw, pair.is_large_text);

    // Non-text elements are held to the 3:1 UI-component minimum regardless of level
    let passes = match pair.kind {
        PairKind::Text => options.level.is_met(ratio_raw, pair.is_large_text),
        PairKind::NonText => meets_ui_component_contrast(ratio_raw),
    };

    let suggestion = (options.suggest_fixes && !passes).then(|| {
        let target = match pair.kind {
            PairKind::Text => options.level.min_ratio(pair.is_large_text),
            PairKind::NonText => UI_COMPONENT_MIN,
        };
        suggest_for_ratio(foreground, background, target, options.strategy)
    });

    Ok(PairResult {
        label: pair.label.clone(),
        foreground,
        background,
        used_default_background,
        ratio,
        wcag,
        kind: pair.kind,
        is_large_text: pair.is_large_text,
        passes,
        ignored: pair.ignored,
        ignore_reason: pair.ignore_reason.clone(),
        suggestion,
    })
}

/// Sort checked pairs into violations/passed/ignored/skipped, keeping input order.
/// A pair only lands in `ignored` if it would otherwise be a violation.
pub fn categorize<I>(outcomes: I, level: Level) -> AuditReport
where
    I: IntoIterator<Item = Result<PairResult, SkippedPair>>,
{
    let mut report = AuditReport {
        level,
        ..AuditReport::default()
    };

    for outcome in outcomes {
        match outcome {
            Ok(result) if result.passes => report.passed.push(result),
            Ok(result) if result.ignored => report.ignored.push(result),
            Ok(result) => report.violations.push(result),
            Err(skipped) => {
                debug!(label = %skipped.label, reason = %skipped.reason, "pair skipped");
                report.skipped.push(skipped);
            }
        }
    }

    report
}

/// Check all pairs on the current thread. See [`crate::engine::audit`] for
/// the parallel version.
pub fn check_all_pairs(pairs: &[ColorPair], options: &AuditOptions) -> AuditReport {
    categorize(pairs.iter().map(|pair| check_pair(pair, options)), options.level)
}
