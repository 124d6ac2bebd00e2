use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub input_bg: Color,
    pub error_fg: Color,
    pub error_bg: Color,
    pub success: Color,
}

impl Palette {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    fn dark() -> Self {
        Self {
            bg: Color::Rgb(17, 24, 39),
            fg: Color::Rgb(243, 244, 246),
            muted: Color::Rgb(156, 163, 175),
            accent: Color::Rgb(196, 181, 253),
            border: Color::Rgb(55, 65, 81),
            input_bg: Color::Rgb(31, 41, 55),
            error_fg: Color::Rgb(185, 28, 28),
            error_bg: Color::Rgb(254, 226, 226),
            success: Color::Rgb(34, 197, 94),
        }
    }

    fn light() -> Self {
        Self {
            bg: Color::Rgb(243, 244, 246),
            fg: Color::Rgb(17, 24, 39),
            muted: Color::Rgb(107, 114, 128),
            accent: Color::Rgb(107, 33, 168),
            border: Color::Rgb(209, 213, 219),
            input_bg: Color::Rgb(255, 255, 255),
            error_fg: Color::Rgb(185, 28, 28),
            error_bg: Color::Rgb(254, 226, 226),
            success: Color::Rgb(22, 163, 74),
        }
    }
}

// Scanners expect dark modules on a light field whatever the theme.
pub const MODULE_DARK: Color = Color::Rgb(0, 0, 0);
pub const MODULE_LIGHT: Color = Color::Rgb(255, 255, 255);
