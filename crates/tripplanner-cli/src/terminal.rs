//! Terminal styling and color detection.

use std::io::IsTerminal;

use tripplanner_lib::TravelMode;

/// ANSI escape codes used by the text renderer.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for headings and city names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary details.
    pub const GRAY: &str = "\x1b[90m";
    /// Green for ground legs and costs.
    pub const GREEN: &str = "\x1b[32m";
    /// Cyan for air legs.
    pub const CYAN: &str = "\x1b[36m";
    /// Orange (256-color) for "nothing found" notices.
    pub const ORANGE: &str = "\x1b[38;5;208m";
}

/// Resolved color codes, either ANSI sequences or empty strings.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
    pub cyan: &'static str,
    pub orange: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            green: colors::GREEN,
            cyan: colors::CYAN,
            orange: colors::ORANGE,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            green: "",
            cyan: "",
            orange: "",
        }
    }

    /// `colored()` when stdout supports ANSI colors, otherwise `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Color associated with a travel regime.
    pub fn mode(&self, mode: TravelMode) -> &'static str {
        match mode {
            TravelMode::Ground => self.green,
            TravelMode::Air => self.cyan,
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Whether ANSI colors should be written to stdout.
///
/// Respects `NO_COLOR` (https://no-color.org/), `TERM=dumb`, and redirected
/// output.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}
