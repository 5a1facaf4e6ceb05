use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContrastError;
use crate::math::wcag::{self, WcagResult};

/// An opaque sRGB color with 8 bits per channel.
///
/// Channels are private so a constructed color never changes; use
/// [`RgbColor::darken`] / [`RgbColor::lighten`] to derive a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    r: u8,
    g: u8,
    b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }

    pub const fn channels(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Step every channel toward 0, saturating.
    pub fn darken(&self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }

    /// Step every channel toward 255, saturating.
    pub fn lighten(&self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }

    /// Lowercase 6-digit hex, e.g. `#1e293b`.
    pub fn to_hex(&self) -> String {
        crate::math::hex::format_hex_rgb(self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::math::color_parse::parse_color(s)
            .ok_or_else(|| ContrastError::UnparseableColor(s.to_string()))
    }
}

/// WCAG 2.x conformance level a search or audit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl Level {
    /// Minimum contrast ratio text must reach at this level.
    pub fn min_ratio(self, is_large_text: bool) -> f64 {
        match (self, is_large_text) {
            (Level::Aaa, true) => wcag::AAA_LARGE_MIN,
            (Level::Aaa, false) => wcag::AAA_NORMAL_MIN,
            (Level::Aa, true) => wcag::AA_LARGE_MIN,
            (Level::Aa, false) => wcag::AA_NORMAL_MIN,
        }
    }

    pub fn is_met(self, ratio: f64, is_large_text: bool) -> bool {
        match self {
            Level::Aa => wcag::meets_aa(ratio, is_large_text),
            Level::Aaa => wcag::meets_aaa(ratio, is_large_text),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Aa => f.write_str("AA"),
            Level::Aaa => f.write_str("AAA"),
        }
    }
}

impl FromStr for Level {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AA" => Ok(Level::Aa),
            "AAA" => Ok(Level::Aaa),
            _ => Err(ContrastError::UnknownLevel(s.to_string())),
        }
    }
}

/// How the accessible-color search explores candidate foregrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Only darken the foreground, then fall back to black/white.
    #[default]
    DarkenOnly,
    /// Alternate darkening and lightening by the same step count.
    Bidirectional,
}

/// Which branch of the search produced a [`ComplianceResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SearchOutcome {
    AlreadyCompliant,
    Darkened { steps: u32 },
    Lightened { steps: u32 },
    Fallback,
}

/// Output of the accessible-color search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub foreground: RgbColor,
    pub background: RgbColor,
    pub ratio: f64,
    pub meets_target: bool,
    pub outcome: SearchOutcome,
}

/// Text pairs are judged against AA/AAA; non-text pairs (borders, focus
/// rings, icons) against the UI-component minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PairKind {
    #[default]
    Text,
    NonText,
}

/// One foreground/background declaration handed in by a scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorPair {
    pub label: String,
    pub foreground: String,
    pub background: String,
    #[serde(default)]
    pub is_large_text: bool,
    #[serde(default)]
    pub kind: PairKind,
    #[serde(default)]
    pub ignored: bool,
    #[serde(default)]
    pub ignore_reason: Option<String>,
}

/// Batch audit configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditOptions {
    #[serde(default)]
    pub level: Level,
    /// Substituted when a pair's own background does not parse.
    #[serde(default)]
    pub default_background: Option<String>,
    #[serde(default)]
    pub suggest_fixes: bool,
    #[serde(default)]
    pub strategy: SearchStrategy,
    #[serde(default)]
    pub pairs: Vec<ColorPair>,
}

/// A pair that was parsed and checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairResult {
    pub label: String,
    pub foreground: RgbColor,
    pub background: RgbColor,
    pub used_default_background: bool,
    /// Rounded to 2 decimals; verdicts are computed on the raw ratio.
    pub ratio: f64,
    pub wcag: WcagResult,
    pub kind: PairKind,
    pub is_large_text: bool,
    pub passes: bool,
    pub ignored: bool,
    pub ignore_reason: Option<String>,
    pub suggestion: Option<ComplianceResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedPair {
    pub label: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditReport {
    pub level: Level,
    pub violations: Vec<PairResult>,
    pub passed: Vec<PairResult>,
    pub ignored: Vec<PairResult>,
    pub skipped: Vec<SkippedPair>,
}

impl AuditReport {
    pub fn total(&self) -> usize {
        self.violations.len() + self.passed.len() + self.ignored.len() + self.skipped.len()
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}
