use iced::theme::Palette;
use iced::{Color, Theme};

#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) overlay: String,
    pub(crate) red: String,
    pub(crate) green: String,
    pub(crate) yellow: String,
    pub(crate) blue: String,
    pub(crate) bright_foreground: String,
    pub(crate) dim_foreground: String,
    pub(crate) dim_blue: String,
    pub(crate) dim_white: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#C0C5CE"),
            background: String::from("#161822"),
            surface: String::from("#1C1F2B"),
            overlay: String::from("#232530"),
            red: String::from("#E06C75"),
            green: String::from("#98C379"),
            yellow: String::from("#E5C07B"),
            blue: String::from("#4FA6ED"),
            bright_foreground: String::from("#ECEFF4"),
            dim_foreground: String::from("#6B7280"),
            dim_blue: String::from("#2F638F"),
            dim_white: String::from("#6C7385"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) overlay: Color,
    pub(crate) red: Color,
    pub(crate) green: Color,
    pub(crate) yellow: Color,
    pub(crate) blue: Color,
    pub(crate) bright_foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) dim_blue: Color,
    pub(crate) dim_white: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        let color = |value: &str| parse_hex_color(value).unwrap_or(Color::BLACK);

        Self {
            foreground: color(&p.foreground),
            background: color(&p.background),
            surface: color(&p.surface),
            overlay: color(&p.overlay),
            red: color(&p.red),
            green: color(&p.green),
            yellow: color(&p.yellow),
            blue: color(&p.blue),
            bright_foreground: color(&p.bright_foreground),
            dim_foreground: color(&p.dim_foreground),
            dim_blue: color(&p.dim_blue),
            dim_white: color(&p.dim_white),
        }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into a color.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
        return None;
    }

    let channel = |index: usize| {
        u8::from_str_radix(&hex[index * 2..index * 2 + 2], 16).ok()
    };
    let alpha = if hex.len() == 8 { channel(3)? } else { u8::MAX };

    Some(Color::from_rgba8(
        channel(0)?,
        channel(1)?,
        channel(2)?,
        f32::from(alpha) / 255.0,
    ))
}

/// Application theme built from the single dark palette.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            id: String::from("backoffice-dark"),
            iced_palette: IcedColorPalette::from(&ColorPalette::default()),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.blue,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed from the app root down to widget views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}
