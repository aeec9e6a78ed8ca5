use crate::color::Color;
use crate::error::ConfigError;
use crate::name::DEFAULT_SEPARATOR;

/// Raw style configuration matching the TOML format.
///
/// ```toml
/// background = "#ffffff"
/// separator = "_"
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct StyleConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub background: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub separator: Option<String>,
}

/// Validated rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Canvas color behind the painted squares.
    pub background: Color,
    /// Replaces whitespace in output file names.
    pub separator: char,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            background: Color::WHITE,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl Style {
    /// Validate a raw config, filling unset fields with defaults.
    pub fn from_config(config: &StyleConfig) -> Result<Style, ConfigError> {
        let mut style = Style::default();
        if let Some(bg) = &config.background {
            style.background = bg.parse()?;
        }
        if let Some(sep) = &config.separator {
            style.separator = parse_separator(sep)?;
        }
        Ok(style)
    }

    /// Parse a TOML style string.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(toml_str: &str) -> Result<Style, ConfigError> {
        let config: StyleConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Style::from_config(&config)
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

/// Accept exactly one character.
pub fn parse_separator(s: &str) -> Result<char, ConfigError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidSeparator(s.to_string())),
    }
}
