use iced::widget::text::Wrapping;
use iced::widget::{
    Column, Space, button, column, container, row, scrollable, text,
    text_input,
};
use iced::{Element, Length, Theme, alignment};

use crate::services::auth::Role;
use crate::shared::ui::style::{
    action_button_style, panel_style, text_input_style, thin_scroll_style,
};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::users::event::UsersIntent;
use crate::widgets::users::model::{UserRecord, UsersViewModel};

const PAGE_PADDING: f32 = 24.0;
const PAGE_SPACING: f32 = 16.0;
const TITLE_SIZE: f32 = 18.0;
const HEADER_SIZE: f32 = 11.0;
const CELL_SIZE: f32 = 13.0;
const ROW_HEIGHT: f32 = 36.0;
const ROW_PADDING_X: f32 = 12.0;
const FILTER_WIDTH: f32 = 260.0;
const SCROLLBAR_WIDTH: f32 = 4.0;

/// Props for the users table view.
pub(crate) struct UsersTableProps<'a> {
    pub(crate) vm: UsersViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the filter toolbar and the read-only users table.
pub(crate) fn view(
    props: UsersTableProps<'_>,
) -> Element<'_, UsersIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();

    let title = text("Users").size(TITLE_SIZE);
    let counter = text(format!("{} of {}", props.vm.rows.len(), props.vm.total))
        .size(HEADER_SIZE)
        .style({
            let color = palette.dim_foreground;
            move |_| text::Style { color: Some(color) }
        });

    let filter = text_input("Filter by name, email or role", props.vm.filter)
        .on_input(UsersIntent::FilterChanged)
        .size(CELL_SIZE)
        .width(Length::Fixed(FILTER_WIDTH))
        .style(text_input_style(props.theme));

    let clear_palette = palette.clone();
    let has_filter = !props.vm.filter.is_empty();
    let clear = button(text("Clear").size(CELL_SIZE))
        .on_press_maybe(has_filter.then_some(UsersIntent::ClearFilter))
        .style(move |_, status| {
            action_button_style(&clear_palette, status, has_filter)
        });

    let toolbar = row![
        title,
        counter,
        Space::new().width(Length::Fill),
        filter,
        clear
    ]
    .spacing(12.0)
    .align_y(alignment::Vertical::Center);

    let mut table = Column::new().push(header_row(&palette));
    if props.vm.rows.is_empty() {
        table = table.push(
            container(text("No users match the filter").size(CELL_SIZE))
                .padding([0.0, ROW_PADDING_X])
                .height(Length::Fixed(ROW_HEIGHT))
                .align_y(alignment::Vertical::Center),
        );
    }
    for record in props.vm.rows.iter().copied() {
        table = table.push(record_row(record, &palette));
    }

    let body = scrollable(table)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(SCROLLBAR_WIDTH)
                .scroller_width(SCROLLBAR_WIDTH),
        ))
        .style(thin_scroll_style(palette))
        .width(Length::Fill)
        .height(Length::Fill);

    let card = container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(panel_style(props.theme));

    column![toolbar, card]
        .spacing(PAGE_SPACING)
        .padding(PAGE_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn header_row<'a>(
    palette: &IcedColorPalette,
) -> Element<'a, UsersIntent, Theme, iced::Renderer> {
    let color = palette.dim_foreground;
    let cell = move |label: &'static str, portion: u16| {
        text(label)
            .size(HEADER_SIZE)
            .style(move |_| text::Style { color: Some(color) })
            .width(Length::FillPortion(portion))
    };

    container(
        row![
            cell("NAME", 3),
            cell("EMAIL", 4),
            cell("ROLE", 2),
            cell("STATUS", 2)
        ]
        .align_y(alignment::Vertical::Center),
    )
    .padding([0.0, ROW_PADDING_X])
    .height(Length::Fixed(ROW_HEIGHT))
    .align_y(alignment::Vertical::Center)
    .into()
}

fn record_row<'a>(
    record: &'a UserRecord,
    palette: &IcedColorPalette,
) -> Element<'a, UsersIntent, Theme, iced::Renderer> {
    let (status, status_color) = if record.active {
        ("Active", palette.green)
    } else {
        ("Disabled", palette.dim_foreground)
    };
    let role_color = match record.role {
        Role::Admin => palette.yellow,
        Role::Manager => palette.blue,
        Role::Viewer => palette.foreground,
    };

    let cell = |value: &'a str, portion: u16| {
        text(value)
            .size(CELL_SIZE)
            .wrapping(Wrapping::None)
            .width(Length::FillPortion(portion))
    };

    let line = row![
        cell(&record.name, 3),
        cell(&record.email, 4),
        text(record.role.label())
            .size(CELL_SIZE)
            .style(move |_| text::Style {
                color: Some(role_color)
            })
            .width(Length::FillPortion(2)),
        text(status)
            .size(CELL_SIZE)
            .style(move |_| text::Style {
                color: Some(status_color)
            })
            .width(Length::FillPortion(2)),
    ]
    .align_y(alignment::Vertical::Center);

    container(line)
        .padding([0.0, ROW_PADDING_X])
        .height(Length::Fixed(ROW_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .into()
}
