//! Booklet configuration: card palette, RNG seed and document metadata.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BookletError, BookletResult};

/// A process color for print output, each component in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f32,
    pub m: f32,
    pub y: f32,
    pub k: f32,
}

impl Cmyk {
    pub const fn new(c: f32, m: f32, y: f32, k: f32) -> Self {
        Self { c, m, y, k }
    }
}

pub const BLACK: Cmyk = Cmyk::new(0.0, 0.0, 0.0, 1.0);
pub const LIGHT_GREY: Cmyk = Cmyk::new(0.0, 0.0, 0.0, 0.3);

/// Card colors as two parallel lists: `borders[i]` goes with `fills[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub borders: Vec<Cmyk>,
    pub fills: Vec<Cmyk>,
}

/// Fewest colors that still leave a choice when two neighbors differ.
pub const MIN_PALETTE_LEN: usize = 3;

impl Palette {
    pub fn len(&self) -> usize {
        self.borders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.borders.is_empty()
    }

    /// The (border, fill) pair at `index`.
    pub fn pair(&self, index: usize) -> (Cmyk, Cmyk) {
        (self.borders[index], self.fills[index])
    }

    pub fn validate(&self) -> BookletResult<()> {
        if self.borders.len() != self.fills.len() {
            return Err(BookletError::config(format!(
                "palette has {} border colors but {} fill colors",
                self.borders.len(),
                self.fills.len()
            )));
        }
        if self.borders.len() < MIN_PALETTE_LEN {
            return Err(BookletError::config(format!(
                "palette needs at least {MIN_PALETTE_LEN} colors, got {}",
                self.borders.len()
            )));
        }
        Ok(())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            borders: vec![
                Cmyk::new(0.0, 0.98, 0.98, 0.0),   // red
                Cmyk::new(0.0, 0.47, 0.98, 0.01),  // orange
                Cmyk::new(0.69, 0.23, 0.0, 0.32),  // blue
                Cmyk::new(0.74, 0.0, 0.63, 0.20),  // green
                Cmyk::new(0.0, 1.0, 0.0, 0.0),     // pink
            ],
            fills: vec![
                Cmyk::new(0.0, 0.16, 0.12, 0.01),  // pink
                Cmyk::new(0.0, 0.06, 0.15, 0.01),  // yellow
                Cmyk::new(0.10, 0.03, 0.0, 0.04),  // teal
                Cmyk::new(0.10, 0.0, 0.07, 0.04),  // green
                Cmyk::new(0.0, 0.16, 0.13, 0.01),  // rose
            ],
        }
    }
}

/// Settings for one booklet run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookletConfig {
    pub palette: Palette,
    /// Random redraws per card before falling back to a fixed color choice
    pub max_color_draws: u32,
    /// Fixed RNG seed for reproducible color layouts
    pub seed: Option<u64>,
    /// PDF document title
    pub title: Option<String>,
}

impl Default for BookletConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            max_color_draws: 64,
            seed: None,
            title: Some("Jukebox Booklet".into()),
        }
    }
}

impl BookletConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_json_str(json: &str) -> BookletResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BookletError::config(format!("invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> BookletResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            BookletError::config(format!("failed to read '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> BookletResult<()> {
        self.palette.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_is_valid() {
        let config = BookletConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.palette.len(), 5);
    }

    #[test]
    fn short_palette_rejected() {
        let mut palette = Palette::default();
        palette.borders.truncate(2);
        palette.fills.truncate(2);
        assert!(matches!(palette.validate(), Err(BookletError::Config(_))));
    }

    #[test]
    fn mismatched_palette_rejected() {
        let mut palette = Palette::default();
        palette.fills.pop();
        assert!(matches!(palette.validate(), Err(BookletError::Config(_))));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config = BookletConfig::from_json_str(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_color_draws, 64);
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn json_palette_validated() {
        let json = r#"{ "palette": {
            "borders": [{"c":0,"m":1,"y":0,"k":0}],
            "fills": [{"c":0,"m":0.1,"y":0,"k":0}]
        } }"#;
        assert!(BookletConfig::from_json_str(json).is_err());
    }
}
