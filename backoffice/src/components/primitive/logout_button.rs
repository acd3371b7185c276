use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, row, svg, text};
use iced::{Border, Element, Length, Theme, alignment};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const BUTTON_HEIGHT: f32 = 28.0;
const ICON_SIZE: f32 = 14.0;
const PADDING_X: f32 = 10.0;
const HOVER_ALPHA: f32 = 0.15;

/// Props for the header sign-out button.
pub(crate) struct LogoutButtonProps<'a, Message> {
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) on_press: Message,
}

/// Render the "Sign out" action shown next to the signed-in user.
pub(crate) fn view<'a, Message: Clone + 'a>(
    props: LogoutButtonProps<'a, Message>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();
    let icon_color = palette.red;

    let icon = svg::Svg::new(svg::Handle::from_memory(icons::LOGOUT))
        .width(Length::Fixed(ICON_SIZE))
        .height(Length::Fixed(ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(icon_color),
        });

    let content = row![
        icon,
        text("Sign out")
            .font(props.fonts.ui.font_type)
            .size(props.fonts.ui.size)
    ]
    .spacing(6.0)
    .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(props.on_press)
        .padding([0.0, PADDING_X])
        .height(Length::Fixed(BUTTON_HEIGHT))
        .style(move |_, status| logout_style(&palette, status))
        .into()
}

fn logout_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
) -> button::Style {
    let is_active =
        matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);

    let background = is_active.then(|| {
        let mut tint = palette.red;
        tint.a = HOVER_ALPHA;
        tint.into()
    });
    let text_color = if is_active {
        palette.red
    } else {
        palette.dim_foreground
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: iced::border::Radius::new(4.0),
            ..Default::default()
        },
        ..Default::default()
    }
}
