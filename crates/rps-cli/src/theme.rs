//! Colour themes.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("Invalid colour {0:?}: expected six hex digits")]
    InvalidColor(String),

    #[error("Unknown theme: {0} (expected bright, easter or metal)")]
    UnknownTheme(String),
}

/// 24-bit colour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl FromStr for Rgb {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        let bytes = hex::decode(digits).map_err(|_| ThemeError::InvalidColor(s.to_string()))?;
        match bytes.as_slice() {
            [r, g, b] => Ok(Rgb(*r, *g, *b)),
            _ => Err(ThemeError::InvalidColor(s.to_string())),
        }
    }
}

/// Resolved colours for one theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub text: Rgb,
    pub error: Rgb,
    pub title: Rgb,
}

impl Palette {
    /// Parse `[background, text, error, title]` hex codes
    pub fn from_hex(codes: [&str; 4]) -> Result<Self, ThemeError> {
        let [background, text, error, title] = codes;
        Ok(Self {
            background: background.parse()?,
            text: text.parse()?,
            error: error.parse()?,
            title: title.parse()?,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Bright,
    Easter,
    Metal,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Bright, Theme::Easter, Theme::Metal];

    /// Background, text, error and title colours
    fn codes(&self) -> [&'static str; 4] {
        match self {
            Theme::Bright => ["F8DCB0", "FC5E70", "FF0000", "FBBC54"],
            Theme::Easter => ["EFF1DB", "D3B5E5", "FF0000", "FFD4DB"],
            Theme::Metal => ["ADB3BD", "10151B", "4B5C74", "7C7E7E"],
        }
    }

    pub fn palette(&self) -> Result<Palette, ThemeError> {
        Palette::from_hex(self.codes())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Bright => "Bright",
            Theme::Easter => "Easter",
            Theme::Metal => "Metal",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ThemeError::UnknownTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!("F8DCB0".parse::<Rgb>().unwrap(), Rgb(0xF8, 0xDC, 0xB0));
        assert_eq!("#10151b".parse::<Rgb>().unwrap(), Rgb(0x10, 0x15, 0x1B));
    }

    #[test]
    fn test_rgb_rejects_bad_input() {
        assert!("F8DC".parse::<Rgb>().is_err());
        assert!("GGGGGG".parse::<Rgb>().is_err());
        assert!("F8DCB0AA".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_all_palettes_parse() {
        for theme in Theme::ALL {
            assert!(theme.palette().is_ok(), "{theme} palette failed to parse");
        }
    }

    #[test]
    fn test_bright_palette_colours() {
        let palette = Theme::Bright.palette().unwrap();
        assert_eq!(palette.background, Rgb(0xF8, 0xDC, 0xB0));
        assert_eq!(palette.error, Rgb(0xFF, 0x00, 0x00));
        assert_eq!(palette.title, Rgb(0xFB, 0xBC, 0x54));
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("metal".parse::<Theme>().unwrap(), Theme::Metal);
        assert_eq!("EASTER".parse::<Theme>().unwrap(), Theme::Easter);
        assert!("neon".parse::<Theme>().is_err());
    }

    #[test]
    fn test_default_theme_is_bright() {
        assert_eq!(Theme::default(), Theme::Bright);
    }
}
