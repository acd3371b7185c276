use backoffice_ui_menu::{
    MenuNode, MenuRowContext, MenuView, is_active_or_ancestor_of_active,
};
use iced::widget::text::Wrapping;
use iced::widget::{
    Column, Row, Space, button, column, container, row, scrollable, svg, text,
};
use iced::{Border, Color, Element, Length, Theme, alignment};

use crate::shared::ui::icons;
use crate::shared::ui::style::{menu_row_style, thin_scroll_style};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::sidebar::event::SidebarIntent;
use crate::widgets::sidebar::model::{
    SIDEBAR_RAIL_WIDTH, SIDEBAR_WIDTH, SidebarViewModel, rail_items,
};

const HEADER_HEIGHT: f32 = 48.0;
const HEADER_PADDING_X: f32 = 12.0;
const LOGO_SIZE: f32 = 22.0;
const TITLE_SIZE: f32 = 15.0;
const TOGGLE_ICON_SIZE: f32 = 16.0;

const ROW_HEIGHT: f32 = 32.0;
const ROW_PADDING_X: f32 = 10.0;
const ROW_ICON_SIZE: f32 = 16.0;
const ROW_FONT_SIZE: f32 = 13.0;
const CHEVRON_SIZE: f32 = 12.0;
const INDENT_WIDTH: f32 = 14.0;
const DIVIDER_HEIGHT: f32 = 1.0;
const DIVIDER_PADDING_Y: f32 = 6.0;
const DIVIDER_ALPHA: f32 = 0.3;

const RAIL_BUTTON_SIZE: f32 = 44.0;
const RAIL_ICON_SIZE: f32 = 20.0;
const RAIL_BUTTON_PADDING: f32 = 8.0;
const ACTIVE_BORDER_WIDTH: f32 = 2.0;
const SCROLLBAR_WIDTH: f32 = 4.0;

/// Props for the sidebar menu view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarMenuProps<'a> {
    pub(crate) vm: SidebarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the full menu tree or the collapsed icon rail.
pub(crate) fn view(
    props: SidebarMenuProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();
    let content = if props.vm.collapsed {
        rail(props)
    } else {
        menu(props)
    };

    let width = if props.vm.collapsed {
        SIDEBAR_RAIL_WIDTH
    } else {
        SIDEBAR_WIDTH
    };

    container(content)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        })
        .into()
}

fn menu(
    props: SidebarMenuProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();

    let logo = svg::Svg::new(svg::Handle::from_memory(icons::LOGO_SMALL))
        .width(Length::Fixed(LOGO_SIZE))
        .height(Length::Fixed(LOGO_SIZE));
    let header = row![
        logo,
        text("Backoffice").size(TITLE_SIZE),
        Space::new().width(Length::Fill),
        toggle_button(icons::SIDEBAR_COLLAPSE, &palette),
    ]
    .spacing(8.0)
    .padding([0.0, HEADER_PADDING_X])
    .height(Length::Fixed(HEADER_HEIGHT))
    .align_y(alignment::Vertical::Center);

    let row_palette = palette.clone();
    let style_palette = palette.clone();
    let tree = MenuView::new(props.vm.menu, props.vm.expansion, move |context| {
        menu_row(context, &row_palette)
    })
    .active(props.vm.active)
    .hovered(props.vm.hovered)
    .on_select(|id| SidebarIntent::Select { id })
    .on_toggle(|id| SidebarIntent::ToggleExpansion { id })
    .on_hover(|id| SidebarIntent::Hovered { id })
    .row_style(move |context| {
        menu_row_style(
            &style_palette,
            context.is_selected,
            context.is_on_active_path,
            context.is_hovered,
        )
    })
    .indent_width(INDENT_WIDTH)
    .spacing(2.0)
    .view();

    let tree = scrollable(tree)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(SCROLLBAR_WIDTH)
                .scroller_width(SCROLLBAR_WIDTH),
        ))
        .style(thin_scroll_style(palette))
        .width(Length::Fill)
        .height(Length::Fill);

    column![header, tree]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn menu_row<'a>(
    context: &MenuRowContext<'a>,
    palette: &IcedColorPalette,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let node = context.row.node;
    if node.is_divider() {
        return divider(palette);
    }

    let icon_color = if context.is_on_active_path {
        palette.bright_foreground
    } else {
        palette.dim_foreground
    };

    let mut line = Row::new()
        .spacing(8.0)
        .align_y(alignment::Vertical::Center);
    if let Some(icon) = node.icon().and_then(icons::by_key) {
        line = line.push(tinted_svg(icon, ROW_ICON_SIZE, icon_color));
    }
    line = line.push(
        text(node.label())
            .size(ROW_FONT_SIZE)
            .wrapping(Wrapping::None)
            .width(Length::Fill),
    );
    if node.has_children() {
        let chevron = if context.row.expanded {
            icons::CHEVRON_DOWN
        } else {
            icons::CHEVRON_RIGHT
        };
        line = line.push(tinted_svg(chevron, CHEVRON_SIZE, palette.dim_foreground));
    }

    container(line)
        .padding([0.0, ROW_PADDING_X])
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .into()
}

fn divider<'a>(
    palette: &IcedColorPalette,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let mut color = palette.dim_white;
    color.a = DIVIDER_ALPHA;

    let line = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(DIVIDER_HEIGHT))
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..Default::default()
        });

    container(line)
        .padding([DIVIDER_PADDING_Y, ROW_PADDING_X])
        .width(Length::Fill)
        .into()
}

fn rail(
    props: SidebarMenuProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();

    let mut items = Column::new().width(Length::Fill);
    for node in rail_items(props.vm.menu) {
        let is_active = props
            .vm
            .active
            .is_some_and(|active| is_active_or_ancestor_of_active(node, active));
        items = items.push(rail_button(node, is_active, &palette));
    }

    let toggle = container(toggle_button(icons::SIDEBAR_EXPAND, &palette))
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let items = scrollable(items)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new().width(0).scroller_width(0).margin(0),
        ))
        .width(Length::Fill)
        .height(Length::Fill);

    column![toggle, items]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn rail_button<'a>(
    node: &'a MenuNode,
    is_active: bool,
    palette: &IcedColorPalette,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let base_color = palette.dim_foreground;
    let accent = palette.blue;
    let icon = node.icon().and_then(icons::by_key).unwrap_or(icons::BOX);

    let icon_svg = svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(RAIL_ICON_SIZE))
        .height(Length::Fixed(RAIL_ICON_SIZE))
        .style(move |_, status| {
            let color = if is_active || status == svg::Status::Hovered {
                accent
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon_svg)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(RAIL_BUTTON_PADDING);

    let border_color = if is_active { accent } else { Color::TRANSPARENT };
    let border_strip = container(Space::new())
        .width(Length::Fixed(ACTIVE_BORDER_WIDTH))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(border_color.into()),
            ..Default::default()
        });

    let content = row![border_strip, icon_container]
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(SidebarIntent::Select {
            id: node.id().to_owned(),
        })
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(RAIL_BUTTON_SIZE))
        .style(|_, _| button::Style {
            background: None,
            border: Border::default(),
            ..Default::default()
        })
        .into()
}

fn toggle_button<'a>(
    icon: &'static [u8],
    palette: &IcedColorPalette,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    button(tinted_svg(icon, TOGGLE_ICON_SIZE, palette.dim_foreground))
        .on_press(SidebarIntent::ToggleCollapsed)
        .padding(4)
        .style(|_, _| button::Style {
            background: None,
            border: Border::default(),
            ..Default::default()
        })
        .into()
}

fn tinted_svg<'a>(
    icon: &'static [u8],
    size: f32,
    color: Color,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_, _| svg::Style { color: Some(color) })
        .into()
}
