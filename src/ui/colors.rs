//! Theme and color palette definitions for the terminal UI.

use std::fmt;

use ratatui::style::{palette::tailwind, Color};

/// Color palette derived from the current theme.
#[derive(Clone, Debug)]
pub struct Colors {
    pub buffer_bg: Color,
    pub border_color: Color,
    pub label: Color,
    pub text: Color,
    pub row_fg: Color,
    pub row_header_bg: Color,
    pub selected_row_fg: Color,
    pub scroll_bar_fg: Color,
    pub input_editing: Color,
    pub accent: Color,
    pub error: Color,
}

impl Colors {
    /// Creates a color palette from the given tailwind palette, falling back
    /// to basic colors if true color is not supported.
    pub fn new(color: &tailwind::Palette, true_color_enabled: bool) -> Self {
        let basic_colors = Self {
            buffer_bg: Color::Black,
            border_color: color.c400,
            label: color.c400,
            text: Color::White,
            row_fg: Color::White,
            row_header_bg: color.c900,
            selected_row_fg: color.c400,
            scroll_bar_fg: Color::Gray,
            input_editing: Color::LightYellow,
            accent: Color::LightGreen,
            error: Color::Red,
        };

        let tw_colors = Self {
            buffer_bg: tailwind::SLATE.c950,
            border_color: color.c400,
            label: color.c600,
            text: tailwind::SLATE.c200,
            row_fg: tailwind::SLATE.c200,
            row_header_bg: color.c900,
            selected_row_fg: color.c400,
            scroll_bar_fg: tailwind::SLATE.c500,
            input_editing: tailwind::AMBER.c600,
            accent: tailwind::EMERALD.c400,
            error: tailwind::RED.c600,
        };

        if true_color_enabled {
            tw_colors
        } else {
            basic_colors
        }
    }
}

/// Available color themes for the application.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Theme {
    Blue,
    Emerald,
    Indigo,
    Red,
}

// Fallback palette for terminals without true color support.
const fn basic_palette(light: Color, dark: Color) -> tailwind::Palette {
    tailwind::Palette {
        c50: light,
        c100: light,
        c200: light,
        c300: light,
        c400: light,
        c500: dark,
        c600: dark,
        c700: dark,
        c800: dark,
        c900: dark,
        c950: dark,
    }
}

const BASIC_BLUE_PALETTE: tailwind::Palette = basic_palette(Color::LightCyan, Color::Cyan);
const BASIC_RED_PALETTE: tailwind::Palette = basic_palette(Color::LightRed, Color::Red);
const BASIC_GREEN_PALETTE: tailwind::Palette = basic_palette(Color::LightGreen, Color::Green);
const BASIC_MAGENTA_PALETTE: tailwind::Palette = basic_palette(Color::LightMagenta, Color::Magenta);

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Blue => write!(f, "Blue"),
            Theme::Emerald => write!(f, "Emerald"),
            Theme::Indigo => write!(f, "Indigo"),
            Theme::Red => write!(f, "Red"),
        }
    }
}

impl Theme {
    /// Parses a theme from its string name, defaulting to Blue.
    pub fn from_string(value: &str) -> Theme {
        match value {
            "Blue" => Theme::Blue,
            "Emerald" => Theme::Emerald,
            "Indigo" => Theme::Indigo,
            "Red" => Theme::Red,
            _ => Theme::Blue,
        }
    }

    /// Returns the tailwind palette for this theme, using basic colors if
    /// true color is not supported.
    pub fn to_palette(self, true_color_enabled: bool) -> &'static tailwind::Palette {
        if true_color_enabled {
            match self {
                Theme::Blue => &tailwind::BLUE,
                Theme::Emerald => &tailwind::EMERALD,
                Theme::Indigo => &tailwind::INDIGO,
                Theme::Red => &tailwind::RED,
            }
        } else {
            match self {
                Theme::Blue => &BASIC_BLUE_PALETTE,
                Theme::Red => &BASIC_RED_PALETTE,
                Theme::Indigo => &BASIC_MAGENTA_PALETTE,
                Theme::Emerald => &BASIC_GREEN_PALETTE,
            }
        }
    }
}
