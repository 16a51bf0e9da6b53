//! Theme support for the TUI.
//!
//! Three built-in palettes selected by name from `[ui] theme`.

use ratatui::style::Color;

/// A complete color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name for display and configuration
    pub name: &'static str,
    /// Headings, active sidebar entry, focused borders
    pub primary: Color,
    /// Actions and success states
    pub secondary: Color,
    /// Highlights inside content (bullets, AI labels)
    pub accent: Color,
    /// Main text color
    pub text: Color,
    /// Dimmed text color (help text, descriptions)
    pub text_dim: Color,
    /// Muted text color (placeholders, hints)
    pub text_muted: Color,
    /// Background color (Reset uses terminal default)
    pub background: Color,
    /// Selected item background
    pub selected_bg: Color,
    /// Unfocused border color
    pub border: Color,
    /// Success indicator color
    pub success: Color,
    /// Warning indicator color
    pub warning: Color,
    /// Error indicator color
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    /// Built-in theme names.
    pub const NAMES: [&'static str; 3] = ["default", "dracula", "nord"];

    /// Default theme. Blue and emerald on the terminal's own background.
    pub fn default_theme() -> Self {
        Self {
            name: "default",
            primary: Color::Rgb(37, 99, 235),      // Blue-600
            secondary: Color::Rgb(16, 185, 129),   // Emerald
            accent: Color::Rgb(14, 165, 233),      // Sky
            text: Color::White,
            text_dim: Color::Rgb(156, 163, 175),   // Gray-400
            text_muted: Color::Rgb(107, 114, 128), // Gray-500
            background: Color::Reset,
            selected_bg: Color::Rgb(30, 58, 138),  // Blue-900
            border: Color::Rgb(75, 85, 99),        // Gray-600
            success: Color::Rgb(34, 197, 94),
            warning: Color::Rgb(245, 158, 11),     // Amber
            error: Color::Rgb(239, 68, 68),
        }
    }

    /// Dracula palette.
    pub fn dracula() -> Self {
        Self {
            name: "dracula",
            primary: Color::Rgb(189, 147, 249),
            secondary: Color::Rgb(80, 250, 123),
            accent: Color::Rgb(139, 233, 253),
            text: Color::Rgb(248, 248, 242),
            text_dim: Color::Rgb(189, 147, 249),
            text_muted: Color::Rgb(98, 114, 164),
            background: Color::Rgb(40, 42, 54),
            selected_bg: Color::Rgb(68, 71, 90),
            border: Color::Rgb(68, 71, 90),
            success: Color::Rgb(80, 250, 123),
            warning: Color::Rgb(255, 184, 108),
            error: Color::Rgb(255, 85, 85),
        }
    }

    /// Nord palette.
    pub fn nord() -> Self {
        Self {
            name: "nord",
            primary: Color::Rgb(136, 192, 208),
            secondary: Color::Rgb(163, 190, 140),
            accent: Color::Rgb(129, 161, 193),
            text: Color::Rgb(236, 239, 244),
            text_dim: Color::Rgb(216, 222, 233),
            text_muted: Color::Rgb(76, 86, 106),
            background: Color::Rgb(46, 52, 64),
            selected_bg: Color::Rgb(59, 66, 82),
            border: Color::Rgb(67, 76, 94),
            success: Color::Rgb(163, 190, 140),
            warning: Color::Rgb(235, 203, 139),
            error: Color::Rgb(191, 97, 106),
        }
    }

    /// Look up a built-in theme, case-insensitively.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_theme()),
            "dracula" => Some(Self::dracula()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }
}
