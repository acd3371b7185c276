use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Theme};

use super::theme::{IcedColorPalette, ThemeProps};

const PANEL_RADIUS: f32 = 6.0;

/// Return a scrollbar style closure with thin rails and reduced alpha.
pub(crate) fn thin_scroll_style(
    palette: IcedColorPalette,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(0.0);

        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;

        let mut scroller_color = match style.vertical_rail.scroller.background
        {
            Background::Color(color) => color,
            _ => palette.dim_foreground,
        };
        scroller_color.a = (scroller_color.a * 0.7).min(1.0);
        style.vertical_rail.scroller.background =
            Background::Color(scroller_color);

        style
    }
}

/// Container style for menu rows.
///
/// The active row gets the accent background; its ancestors only get the
/// bright text color so the active path stays readable when collapsed.
pub(crate) fn menu_row_style(
    palette: &IcedColorPalette,
    is_selected: bool,
    is_on_active_path: bool,
    is_hovered: bool,
) -> container::Style {
    let background = if is_selected {
        let mut color = palette.dim_blue;
        color.a = 0.7;
        Some(color.into())
    } else if is_hovered {
        let mut color = palette.overlay;
        color.a = 0.6;
        Some(color.into())
    } else {
        None
    };

    let text_color = if is_on_active_path {
        palette.bright_foreground
    } else {
        palette.foreground
    };

    container::Style {
        background,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Return a container style closure for raised panels and cards.
pub(crate) fn panel_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &Theme| container::Style {
        background: Some(palette.surface.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 1.0,
            color: palette.overlay,
            radius: iced::border::Radius::new(PANEL_RADIUS),
        },
        ..Default::default()
    }
}

/// Flat action button colors with a hover accent.
pub(crate) fn action_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    enabled: bool,
) -> button::Style {
    let base_color = if enabled {
        match status {
            ButtonStatus::Hovered | ButtonStatus::Pressed => palette.dim_blue,
            _ => palette.overlay,
        }
    } else {
        let mut color = palette.overlay;
        color.a = 0.4;
        color
    };

    let text_color = if enabled {
        palette.foreground
    } else {
        palette.dim_foreground
    };

    button::Style {
        background: Some(base_color.into()),
        text_color,
        border: Border {
            width: 0.0,
            radius: iced::border::Radius::new(4.0),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Default text input style with the accent selection color.
pub(crate) fn text_input_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |base: &Theme, status| {
        let mut style = text_input::default(base, status);
        style.selection = palette.blue;
        style
    }
}
