//! Theming for the quizforge TUI

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A color theme for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent: Color,

    // Semantic colors
    pub success: Color,
    pub error: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
}

impl Theme {
    /// The built-in forge palette (warm accents on a dark background)
    pub fn forge() -> Self {
        Self {
            name: "Forge".to_string(),
            bg_primary: Color::Rgb(26, 27, 38),
            bg_secondary: Color::Rgb(36, 40, 59),
            fg_primary: Color::Rgb(192, 202, 245),
            fg_secondary: Color::Rgb(169, 177, 214),
            fg_muted: Color::Rgb(86, 95, 137),
            accent: Color::Rgb(224, 175, 104),
            success: Color::Rgb(158, 206, 106),
            error: Color::Rgb(247, 118, 142),
            border: Color::Rgb(41, 46, 66),
            border_focused: Color::Rgb(224, 175, 104),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::forge()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_forge() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Forge");
    }
}
