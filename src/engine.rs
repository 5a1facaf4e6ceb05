use rayon::prelude::*;
use tracing::debug;

use crate::error::ContrastError;
use crate::math::checker::{categorize, check_pair};
use crate::types::{AuditOptions, AuditReport};

/// Check every pair in `options` in parallel and categorize the results.
///
/// Uses Rayon's `par_iter()`; each pair is checked independently (no shared
/// mutable state). Output order matches input order.
pub fn audit(options: &AuditOptions) -> AuditReport {
    let outcomes: Vec<_> = options
        .pairs
        .par_iter()
        .map(|pair| check_pair(pair, options))
        .collect();

    let report = categorize(outcomes, options.level);
    debug!(
        level = %report.level,
        pairs = options.pairs.len(),
        violations = report.violations.len(),
        passed = report.passed.len(),
        ignored = report.ignored.len(),
        skipped = report.skipped.len(),
        "audit complete"
    );
    report
}

/// Parse `AuditOptions` from JSON and run [`audit`].
pub fn audit_json(json: &str) -> Result<AuditReport, ContrastError> {
    let options: AuditOptions = serde_json::from_str(json)?;
    Ok(audit(&options))
}
