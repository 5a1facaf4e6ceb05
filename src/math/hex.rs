/// Parse a 3- or 6-digit hex string to RGB channels (0-255).
/// Leading `#` is optional; 3-digit codes double each digit (`abc` -> `aabbcc`).
/// Returns None on anything else, including 4- and 8-digit forms.
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    // ASCII-only from here on, so byte slicing below is safe
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let pair = |i: usize| u8::from_str_radix(&raw[i..i + 2], 16).ok();
    let digit = |i: usize| u8::from_str_radix(&raw[i..i + 1], 16).ok().map(|d| d * 17);

    match raw.len() {
        3 => Some((digit(0)?, digit(1)?, digit(2)?)),
        6 => Some((pair(0)?, pair(2)?, pair(4)?)),
        _ => None,
    }
}

pub fn format_hex_rgb(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_6digit_hex() {
        assert_eq!(parse_hex_rgb("#ff0000"), Some((255, 0, 0)));
        assert_eq!(parse_hex_rgb("#00ff00"), Some((0, 255, 0)));
        assert_eq!(parse_hex_rgb("#1e293b"), Some((30, 41, 59)));
    }

    #[test]
    fn parse_without_hash() {
        assert_eq!(parse_hex_rgb("1e293b"), Some((30, 41, 59)));
        assert_eq!(parse_hex_rgb("fff"), Some((255, 255, 255)));
    }

    #[test]
    fn parse_3digit_doubles_each_digit() {
        assert_eq!(parse_hex_rgb("#abc"), Some((0xaa, 0xbb, 0xcc)));
        assert_eq!(parse_hex_rgb("#abc"), parse_hex_rgb("#aabbcc"));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(parse_hex_rgb("#ABCDEF"), parse_hex_rgb("#abcdef"));
    }

    #[test]
    fn parse_malformed_returns_none() {
        assert_eq!(parse_hex_rgb("not-a-color"), None);
        assert_eq!(parse_hex_rgb("#xyz"), None);
        assert_eq!(parse_hex_rgb("#"), None);
        assert_eq!(parse_hex_rgb(""), None);
    }

    #[test]
    fn alpha_forms_are_rejected() {
        assert_eq!(parse_hex_rgb("#ff000080"), None);
        assert_eq!(parse_hex_rgb("#f008"), None);
    }

    #[test]
    fn format_pads_channels() {
        assert_eq!(format_hex_rgb(0, 10, 255), "#000aff");
    }
}
