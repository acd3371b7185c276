use iced::widget::{column, container, svg, text};
use iced::{Element, Length, Theme, alignment};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::style::panel_style;
use crate::shared::ui::theme::ThemeProps;

const ICON_SIZE: f32 = 32.0;
const PAGE_PADDING: f32 = 24.0;

/// Props for a section that has no dedicated page yet.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SectionPlaceholderProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) icon: Option<&'static [u8]>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render a titled empty panel for `props.title`.
pub(crate) fn view<'a, Message: 'a>(
    props: SectionPlaceholderProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();
    let icon_color = palette.dim_foreground;
    let caption_color = palette.dim_foreground;

    let icon = svg::Svg::new(svg::Handle::from_memory(
        props.icon.unwrap_or(icons::BOX),
    ))
    .width(Length::Fixed(ICON_SIZE))
    .height(Length::Fixed(ICON_SIZE))
    .style(move |_, _| svg::Style {
        color: Some(icon_color),
    });

    let body = column![
        icon,
        text(props.title)
            .font(props.fonts.heading.font_type)
            .size(props.fonts.heading.size),
        text("This section has no content yet.")
            .size(props.fonts.ui.size)
            .style(move |_| text::Style {
                color: Some(caption_color),
            }),
    ]
    .spacing(10.0)
    .align_x(alignment::Horizontal::Center);

    let panel = container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(panel_style(props.theme));

    container(panel)
        .padding(PAGE_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
