//! Message/color table indexed by strength level.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Strength table needs at least one message and one color")]
    Empty,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color {0:?}, expected #RRGGBB or #AARRGGBB")]
    Invalid(String),
}

/// ARGB color, `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::Invalid(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            6 => Ok(Color(0xFF00_0000 | value)),
            8 => Ok(Color(value)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

pub const DEFAULT_MESSAGES: [&str; 4] = [
    "Weak password",
    "Unsafe password",
    "Good password",
    "Strong password",
];

/// Dark red, orange, green and blue.
pub const DEFAULT_COLORS: [Color; 4] = [
    Color(0xFFCC_0000),
    Color(0xFFFF_8800),
    Color(0xFF66_9900),
    Color(0xFF00_99CC),
];

/// Parallel message and color sequences.
///
/// The usable size is `min(messages.len(), colors.len())`; surplus entries in
/// the longer list are kept but never displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthTable {
    messages: Vec<String>,
    colors: Vec<Color>,
}

impl StrengthTable {
    pub fn new(messages: Vec<String>, colors: Vec<Color>) -> Result<Self, TableError> {
        if messages.is_empty() || colors.is_empty() {
            return Err(TableError::Empty);
        }
        #[cfg(feature = "tracing")]
        if messages.len() != colors.len() {
            tracing::warn!(
                "Strength table size mismatch: {} messages, {} colors; using {}",
                messages.len(),
                colors.len(),
                messages.len().min(colors.len())
            );
        }
        Ok(Self { messages, colors })
    }

    /// Number of displayable levels. Always at least 1.
    pub fn len(&self) -> usize {
        self.messages.len().min(self.colors.len())
    }

    /// Always `false`: [`StrengthTable::new`] rejects empty lists.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Maps a raw score to a level, clamping to the last level.
    pub fn level_for(&self, score: usize) -> usize {
        score.min(self.len() - 1)
    }

    /// Returns message and color for `level`, or `None` past the bound.
    pub fn entry(&self, level: usize) -> Option<(&str, Color)> {
        if level >= self.len() {
            return None;
        }
        Some((self.messages[level].as_str(), self.colors[level]))
    }
}

impl Default for StrengthTable {
    fn default() -> Self {
        Self {
            messages: DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect(),
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parse_rgb_adds_opaque_alpha() {
        let color: Color = "#4CAF50".parse().unwrap();
        assert_eq!(color, Color(0xFF4CAF50));
        assert_eq!(color.alpha(), 0xFF);
    }

    #[test]
    fn test_color_parse_argb() {
        let color: Color = "#804CAF50".parse().unwrap();
        assert_eq!(color.argb(), 0x804CAF50);
        assert_eq!(color.to_string(), "#804CAF50");
    }

    #[test]
    fn test_color_parse_invalid() {
        for bad in ["4CAF50", "#4CAF5", "#GGGGGG", "#+4CAF50", ""] {
            assert!(
                matches!(bad.parse::<Color>(), Err(ColorError::Invalid(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_table_empty_rejected() {
        assert_eq!(
            StrengthTable::new(vec![], vec![Color(0)]),
            Err(TableError::Empty)
        );
        assert_eq!(
            StrengthTable::new(vec!["a".into()], vec![]),
            Err(TableError::Empty)
        );
    }

    #[test]
    fn test_table_size_is_shorter_list() {
        let table = StrengthTable::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![Color(1), Color(2)],
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entry(1), Some(("b", Color(2))));
        assert_eq!(table.entry(2), None);
    }

    #[test]
    fn test_level_for_clamps() {
        let table = StrengthTable::default();
        assert_eq!(table.len(), 4);
        assert_eq!(table.level_for(0), 0);
        assert_eq!(table.level_for(3), 3);
        assert_eq!(table.level_for(4), 3);

        let single = StrengthTable::new(vec!["only".into()], vec![Color(0)]).unwrap();
        assert_eq!(single.level_for(4), 0);
    }
}
