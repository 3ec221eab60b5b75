//! Terminal color theme system
//!
//! Provides adaptive color palettes for dark and light terminal
//! backgrounds. Auto-detects via COLORFGBG env var, or manual override
//! with the --light flag or CZ_LIGHT_BG=1 environment variable.

use ratatui::style::Color;

/// Colors the orbit chart cycles through, one per plotted orbit.
/// Mirrors the tab10-style palette the original plots used.
const ORBIT_CYCLE_DARK: [Color; 8] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::LightBlue,
    Color::LightRed,
    Color::LightGreen,
    Color::White,
];

const ORBIT_CYCLE_LIGHT: [Color; 8] = [
    Color::Blue,
    Color::Red,
    Color::Green,
    Color::Magenta,
    Color::DarkGray,
    Color::Yellow,
    Color::Cyan,
    Color::Black,
];

/// Color theme for terminal UI.
/// All UI code should use theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, key bindings)
    pub text_dim: Color,
    /// Default border color
    pub border: Color,
    /// Informational border (help overlay)
    pub border_accent: Color,
    /// Action border (input prompts)
    pub border_action: Color,
    /// Section headers, accent text
    pub accent: Color,
    /// Error/skip messages
    pub bad: Color,
    /// Observed-frequency bars in the histogram
    pub hist_bar: Color,
    /// Benford reference overlay in the histogram
    pub hist_benford: Color,
    /// Chart axes and axis labels
    pub axis: Color,
    /// Per-orbit line colors, cycled
    orbit_cycle: [Color; 8],
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            border_accent: Color::Cyan,
            border_action: Color::Yellow,
            accent: Color::Cyan,
            bad: Color::Red,
            hist_bar: Color::LightBlue,
            hist_benford: Color::Red,
            axis: Color::Gray,
            orbit_cycle: ORBIT_CYCLE_DARK,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::Gray,
            border: Color::Black,
            border_accent: Color::Blue,
            border_action: Color::Magenta,
            accent: Color::Blue,
            bad: Color::Red,
            hist_bar: Color::Blue,
            hist_benford: Color::Red,
            axis: Color::DarkGray,
            orbit_cycle: ORBIT_CYCLE_LIGHT,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and CZ_LIGHT_BG override.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Line color for the i-th orbit on screen (cyclic, never runs out)
    pub fn orbit_color(&self, index: usize) -> Color {
        self.orbit_cycle[index % self.orbit_cycle.len()]
    }

    fn is_light_background() -> bool {
        // Explicit override via environment variable
        if let Ok(val) = std::env::var("CZ_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is set by many terminals (xterm, rxvt, iTerm2, etc.)
        // Format: "fg;bg" where values are color indices (0-15)
        // Light backgrounds typically have bg index >= 7 (excluding 8 which is bright black)
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_text_is_white() {
        let theme = Theme::dark();
        assert_eq!(theme.text, Color::White);
    }

    #[test]
    fn test_light_theme_text_is_black() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
    }

    #[test]
    fn test_orbit_colors_cycle() {
        let theme = Theme::dark();
        assert_eq!(theme.orbit_color(0), theme.orbit_color(8));
        assert_eq!(theme.orbit_color(3), theme.orbit_color(11));
    }
}
