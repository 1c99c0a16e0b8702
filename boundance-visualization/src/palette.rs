//! Stroke color palettes

use rand::seq::SliceRandom;
use rand::Rng;

/// Eighteen shades running from white to a deep purple
pub const PURPLES: [&str; 18] = [
    "#ffffff", "#f2edf8", "#e5dbf0", "#d8c9e9", "#cbb7e1", "#bea4da", "#b192d3",
    "#a580cb", "#986ec4", "#8b5cbc", "#7e4ab5", "#7143a3", "#673d94", "#653b91",
    "#58347f", "#4b2c6d", "#3f255b", "#321e48",
];

/// A fixed set of CSS colors to draw from
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Create a palette; an empty list falls back to black
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            colors.push("#000000".to_string());
        }
        Self { colors }
    }

    pub fn purples() -> Self {
        Self::new(PURPLES)
    }

    /// Pick a color uniformly at random
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.colors.choose(rng).map(String::as_str).unwrap_or("#000000")
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::purples()
    }
}
