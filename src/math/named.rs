use std::collections::HashMap;
use std::sync::OnceLock;

use crate::types::RgbColor;

const STANDARD_NAMES: [(&str, RgbColor); 8] = [
    ("black", RgbColor::new(0, 0, 0)),
    ("white", RgbColor::new(255, 255, 255)),
    ("red", RgbColor::new(255, 0, 0)),
    ("green", RgbColor::new(0, 128, 0)),
    ("blue", RgbColor::new(0, 0, 255)),
    ("yellow", RgbColor::new(255, 255, 0)),
    ("gray", RgbColor::new(128, 128, 128)),
    ("grey", RgbColor::new(128, 128, 128)),
];

/// Read-only name -> color table used by the strict parser.
///
/// Keys are stored lowercased; lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct NamedColors {
    table: HashMap<String, RgbColor>,
}

impl NamedColors {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, RgbColor)>,
        S: AsRef<str>,
    {
        let table = entries
            .into_iter()
            .map(|(name, color)| (name.as_ref().to_ascii_lowercase(), color))
            .collect();
        Self { table }
    }

    /// The built-in table (CSS values for the eight basic names), built on first use.
    pub fn standard() -> &'static NamedColors {
        static STANDARD: OnceLock<NamedColors> = OnceLock::new();
        STANDARD.get_or_init(|| NamedColors::new(STANDARD_NAMES))
    }

    pub fn lookup(&self, name: &str) -> Option<RgbColor> {
        self.table.get(&name.trim().to_ascii_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_has_basic_names() {
        let named = NamedColors::standard();
        assert_eq!(named.len(), 8);
        assert_eq!(named.lookup("red"), Some(RgbColor::new(255, 0, 0)));
        assert_eq!(named.lookup("green"), Some(RgbColor::new(0, 128, 0)));
        assert_eq!(named.lookup("gray"), named.lookup("grey"));
    }

    #[test]
    fn lookup_ignores_case() {
        let named = NamedColors::standard();
        assert_eq!(named.lookup("WHITE"), Some(RgbColor::WHITE));
        assert_eq!(named.lookup("Yellow"), Some(RgbColor::new(255, 255, 0)));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(NamedColors::standard().lookup("rebeccapurple"), None);
    }

    #[test]
    fn custom_table_keys_are_normalized() {
        let brand = NamedColors::new([("BrandInk", RgbColor::new(0x1e, 0x29, 0x3b))]);
        assert_eq!(brand.lookup("brandink"), Some(RgbColor::new(30, 41, 59)));
        assert_eq!(brand.lookup("black"), None);
    }
}
