use std::fmt;
use std::str::FromStr;

/// An opaque sRGB color. Transparency is applied by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Returned when a color string is neither a known name nor `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised color `{0}`")]
pub struct ParseColorError(pub String);

// Single-letter codes and the handful of names the harness plots used.
const NAMED: &[(&str, Rgb)] = &[
    ("b", Rgb::new(0, 0, 255)),
    ("g", Rgb::new(0, 128, 0)),
    ("r", Rgb::new(255, 0, 0)),
    ("c", Rgb::new(0, 191, 191)),
    ("m", Rgb::new(191, 0, 191)),
    ("y", Rgb::new(191, 191, 0)),
    ("k", Rgb::new(0, 0, 0)),
    ("w", Rgb::new(255, 255, 255)),
    ("orange", Rgb::new(255, 165, 0)),
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 128, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("purple", Rgb::new(128, 0, 128)),
    ("brown", Rgb::new(165, 42, 42)),
    ("pink", Rgb::new(255, 192, 203)),
    ("gray", Rgb::new(128, 128, 128)),
    ("grey", Rgb::new(128, 128, 128)),
    ("olive", Rgb::new(128, 128, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
];

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ParseColorError(s.to_string()));
        }

        // Single letters are case-sensitive ("b" is blue, "B" is not a color).
        if trimmed.len() == 1 {
            return NAMED
                .iter()
                .find(|(name, _)| *name == trimmed)
                .map(|(_, rgb)| *rgb)
                .ok_or_else(|| ParseColorError(s.to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        NAMED
            .iter()
            .find(|(name, _)| name.len() > 1 && *name == lower)
            .map(|(_, rgb)| *rgb)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter_codes() {
        assert_eq!("r".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 0));
        assert_eq!("g".parse::<Rgb>().unwrap(), Rgb::new(0, 128, 0));
        assert_eq!("b".parse::<Rgb>().unwrap(), Rgb::new(0, 0, 255));
        assert!("B".parse::<Rgb>().is_err(), "single letters are case-sensitive");
    }

    #[test]
    fn test_named_and_hex() {
        assert_eq!("orange".parse::<Rgb>().unwrap(), Rgb::new(255, 165, 0));
        assert_eq!("Orange".parse::<Rgb>().unwrap(), Rgb::new(255, 165, 0));
        assert_eq!("#1a2B3c".parse::<Rgb>().unwrap(), Rgb::new(0x1a, 0x2b, 0x3c));
        assert_eq!(Rgb::new(0x1a, 0x2b, 0x3c).to_string(), "#1a2b3c");
    }

    #[test]
    fn test_rejects_unknown() {
        for bad in ["", "chartreuse", "#12345", "#gg0000", "#ééé"] {
            let err = bad.parse::<Rgb>().unwrap_err();
            assert_eq!(err, ParseColorError(bad.to_string()));
        }
    }
}
