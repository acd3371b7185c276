use iced::widget::button::Status as ButtonStatus;
use iced::widget::text::Wrapping;
use iced::widget::{
    Column, Row, Space, button, column, container, mouse_area, row, svg, text,
};
use iced::{Border, Color, Element, Length, Theme, alignment, mouse};

use crate::shared::ui::icons;
use crate::shared::ui::style::action_button_style;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps, parse_hex_color};
use crate::widgets::modules::event::ModulesIntent;
use crate::widgets::modules::model::{Module, ModulesViewModel};

const GRID_COLUMNS: usize = 3;
const GRID_SPACING: f32 = 16.0;
const GRID_PADDING: f32 = 24.0;

const TOOLBAR_HEIGHT: f32 = 32.0;
const TOOLBAR_FONT_SIZE: f32 = 12.0;
const TOOLBAR_BUTTON_PADDING_X: f32 = 10.0;

const TILE_HEIGHT: f32 = 112.0;
const TILE_PADDING: f32 = 14.0;
const TILE_RADIUS: f32 = 8.0;
const TILE_ICON_SIZE: f32 = 28.0;
const TILE_TITLE_SIZE: f32 = 15.0;
const TILE_CAPTION_SIZE: f32 = 11.0;
const HANDLE_SIZE: f32 = 18.0;
const DROP_BORDER_WIDTH: f32 = 2.0;
const DRAGGED_ALPHA: f32 = 0.45;

/// Props for the module grid view.
pub(crate) struct ModuleGridProps<'a> {
    pub(crate) vm: ModulesViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the toolbar and the reorderable tile grid.
pub(crate) fn view(
    props: ModuleGridProps<'_>,
) -> Element<'_, ModulesIntent, Theme, iced::Renderer> {
    let toolbar = toolbar(&props);

    let mut grid = Column::new().spacing(GRID_SPACING);
    for chunk in props.vm.modules.chunks(GRID_COLUMNS) {
        let mut line = Row::new().spacing(GRID_SPACING);
        for module in chunk {
            line = line.push(tile(module, &props));
        }
        for _ in chunk.len()..GRID_COLUMNS {
            line = line.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(line);
    }

    let content = column![toolbar, grid]
        .spacing(GRID_SPACING)
        .padding(GRID_PADDING)
        .width(Length::Fill)
        .height(Length::Fill);

    mouse_area(content)
        .on_move(|position| ModulesIntent::CursorMoved { position })
        .on_release(ModulesIntent::BackgroundReleased)
        .into()
}

fn toolbar<'a>(
    props: &ModuleGridProps<'a>,
) -> Element<'a, ModulesIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();
    let label = if props.vm.drag_enabled {
        "Lock layout"
    } else {
        "Rearrange"
    };

    let toggle = button(
        container(text(label).size(TOOLBAR_FONT_SIZE))
            .align_y(alignment::Vertical::Center)
            .height(Length::Fill),
    )
    .on_press(ModulesIntent::ToggleDragEnabled)
    .padding([0.0, TOOLBAR_BUTTON_PADDING_X])
    .height(Length::Fixed(TOOLBAR_HEIGHT - 8.0))
    .style(move |_, status| action_button_style(&palette, status, true));

    let title = text("Modules").size(TILE_TITLE_SIZE);

    row![title, Space::new().width(Length::Fill), toggle]
        .height(Length::Fixed(TOOLBAR_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .into()
}

fn tile<'a>(
    module: &'a Module,
    props: &ModuleGridProps<'a>,
) -> Element<'a, ModulesIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();
    let accent = parse_hex_color(&module.color).unwrap_or(palette.blue);
    let is_dragged = props.vm.dragging == Some(module.id.as_str());
    let is_drop_target = props.vm.drop_target == Some(module.id.as_str());
    let is_hovered = props.vm.hovered == Some(module.id.as_str());

    let icon = icons::by_key(&module.icon).unwrap_or(icons::BOX);
    let icon = svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(TILE_ICON_SIZE))
        .height(Length::Fixed(TILE_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(accent),
        });

    let handle: Element<'a, ModulesIntent, Theme, iced::Renderer> =
        if props.vm.drag_enabled {
            drag_handle(&module.id, palette.dim_foreground)
        } else {
            Space::new().width(Length::Fixed(HANDLE_SIZE)).into()
        };

    let header = row![icon, Space::new().width(Length::Fill), handle]
        .align_y(alignment::Vertical::Center);

    let title = text(module.title.as_str())
        .size(TILE_TITLE_SIZE)
        .wrapping(Wrapping::None);
    let caption_color = palette.dim_foreground;
    let caption = text(format!("Open {}", module.section))
        .size(TILE_CAPTION_SIZE)
        .wrapping(Wrapping::None)
        .style(move |_| text::Style {
            color: Some(caption_color),
        });

    let body = column![header, Space::new().height(Length::Fill), title, caption]
        .spacing(4.0)
        .width(Length::Fill)
        .height(Length::Fill);

    let card = button(body)
        .on_press(ModulesIntent::TileActivated {
            id: module.id.clone(),
        })
        .padding(TILE_PADDING)
        .width(Length::Fill)
        .height(Length::Fixed(TILE_HEIGHT))
        .style(move |_, status| {
            tile_style(
                &palette,
                accent,
                status,
                TileFlags {
                    is_dragged,
                    is_drop_target,
                    is_hovered,
                },
            )
        });

    mouse_area(card)
        .on_enter(ModulesIntent::TileEntered {
            id: module.id.clone(),
        })
        .on_exit(ModulesIntent::TileExited {
            id: module.id.clone(),
        })
        .on_release(ModulesIntent::TileReleased {
            id: module.id.clone(),
        })
        .into()
}

fn drag_handle<'a>(
    id: &str,
    color: Color,
) -> Element<'a, ModulesIntent, Theme, iced::Renderer> {
    let grip = svg::Svg::new(svg::Handle::from_memory(icons::DRAG_HANDLE))
        .width(Length::Fixed(HANDLE_SIZE))
        .height(Length::Fixed(HANDLE_SIZE))
        .style(move |_, _| svg::Style { color: Some(color) });

    mouse_area(grip)
        .on_press(ModulesIntent::HandlePressed { id: id.to_owned() })
        .interaction(mouse::Interaction::Grab)
        .into()
}

#[derive(Debug, Clone, Copy)]
struct TileFlags {
    is_dragged: bool,
    is_drop_target: bool,
    is_hovered: bool,
}

fn tile_style(
    palette: &IcedColorPalette,
    accent: Color,
    status: ButtonStatus,
    flags: TileFlags,
) -> button::Style {
    let mut background = if flags.is_hovered
        || matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed)
    {
        palette.overlay
    } else {
        palette.surface
    };
    let mut text_color = palette.bright_foreground;
    if flags.is_dragged {
        background.a = DRAGGED_ALPHA;
        text_color.a = DRAGGED_ALPHA;
    }

    let border = if flags.is_drop_target {
        Border {
            width: DROP_BORDER_WIDTH,
            color: accent,
            radius: iced::border::Radius::new(TILE_RADIUS),
        }
    } else {
        Border {
            width: 1.0,
            color: palette.overlay,
            radius: iced::border::Radius::new(TILE_RADIUS),
        }
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border,
        ..Default::default()
    }
}
