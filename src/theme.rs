// Theme support for the TUI
//
// Provides color palettes that can be selected via config file or CLI.
// "auto" uses the terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub background: Color,
    pub foreground: Color,

    // UI element colors
    pub border: Color,
    pub title: Color,
    pub number: Color,
    pub status_bar: Color,
    pub highlight: Color,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            background: Color::Reset,
            foreground: Color::White,
            border: Color::White,
            title: Color::Cyan,
            number: Color::Yellow,
            status_bar: Color::Green,
            highlight: Color::Yellow,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            border: Color::Rgb(0x62, 0x72, 0xa4), // comment
            title: Color::Rgb(0x8b, 0xe9, 0xfd),  // cyan
            number: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b), // green
            highlight: Color::Rgb(0xff, 0x79, 0xc6), // pink
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            foreground: Color::Rgb(0xd8, 0xde, 0xe9),
            border: Color::Rgb(0x4c, 0x56, 0x6a),
            title: Color::Rgb(0x88, 0xc0, 0xd0),
            number: Color::Rgb(0xeb, 0xcb, 0x8b),
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c),
            highlight: Color::Rgb(0xb4, 0x8e, 0xad),
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            border: Color::Rgb(0x92, 0x83, 0x74),
            title: Color::Rgb(0x83, 0xa5, 0x98),
            number: Color::Rgb(0xfa, 0xbd, 0x2f),
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26),
            highlight: Color::Rgb(0xd3, 0x86, 0x9b),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_finds_known_themes() {
        assert_eq!(Theme::by_name("dracula").name, "dracula");
        assert_eq!(Theme::by_name("Nord").name, "nord");
        assert_eq!(Theme::by_name("GRUVBOX").name, "gruvbox");
    }

    #[test]
    fn by_name_falls_back_to_auto() {
        assert_eq!(Theme::by_name("auto").name, "auto");
        assert_eq!(Theme::by_name("no-such-theme").name, "auto");
    }
}
