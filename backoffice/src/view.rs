use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::components::primitive::{logout_button, section_placeholder};
use crate::route::{Page, Route};
use crate::shared::ui::icons;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::auth::view::login_form;
use crate::widgets::auth::{AuthEvent, AuthIntent};
use crate::widgets::modules::ModulesEvent;
use crate::widgets::modules::view::module_grid;
use crate::widgets::sidebar::SidebarEvent;
use crate::widgets::sidebar::view::sidebar_menu;
use crate::widgets::users::UsersEvent;
use crate::widgets::users::view::users_table;

const HEADER_HEIGHT: f32 = 48.0;
const HEADER_PADDING_X: f32 = 16.0;
const HEADER_SEPARATOR_HEIGHT: f32 = 1.0;
const SEPARATOR_ALPHA: f32 = 0.3;
const USER_CAPTION_SIZE: f32 = 11.0;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(&app.theme);

    let content = match &app.route {
        Route::Login => view_login(app, theme_props),
        Route::Dashboard { section } => {
            view_dashboard(app, section, theme_props)
        },
    };

    let palette = theme_props.theme.iced_palette().clone();
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.background.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        })
        .into()
}

fn view_login<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    login_form::view(login_form::LoginFormProps {
        vm: app.widgets.auth.vm(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|intent| AppEvent::Auth(AuthEvent::Intent(intent)))
}

fn view_dashboard<'a>(
    app: &'a App,
    section: &'a str,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let sidebar = sidebar_menu::view(sidebar_menu::SidebarMenuProps {
        vm: app.widgets.sidebar.vm(),
        theme: theme_props,
    })
    .map(|intent| AppEvent::Sidebar(SidebarEvent::Intent(intent)));

    let main = column![
        view_header(app, section, theme_props),
        view_separator(theme_props),
        view_page(app, section, theme_props),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    row![sidebar, main]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the header: section title, signed-in user and logout.
fn view_header<'a>(
    app: &'a App,
    section: &'a str,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme_props.theme.iced_palette();
    let title = app.widgets.sidebar.label_of(section).unwrap_or(section);

    let mut header = row![
        text(title)
            .font(app.fonts.heading.font_type)
            .size(app.fonts.ui.size + 3.0),
        Space::new().width(Length::Fill),
    ]
    .spacing(12.0)
    .padding([0.0, HEADER_PADDING_X])
    .height(Length::Fixed(HEADER_HEIGHT))
    .align_y(alignment::Vertical::Center);

    if let Some(user) = app.widgets.auth.current_user() {
        let caption_color = palette.dim_foreground;
        let identity = column![
            text(user.name.as_str()).size(app.fonts.ui.size),
            text(format!("{} - {}", user.email, user.role.label()))
                .size(USER_CAPTION_SIZE)
                .style(move |_| text::Style {
                    color: Some(caption_color),
                }),
        ]
        .align_x(alignment::Horizontal::Right);

        let logout = logout_button::view(logout_button::LogoutButtonProps {
            theme: theme_props,
            fonts: &app.fonts,
            on_press: AppEvent::Auth(AuthEvent::Intent(AuthIntent::Logout)),
        });

        header = header.push(identity).push(logout);
    }

    header.into()
}

fn view_separator<'a>(
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme_props.theme.iced_palette();
    let mut background = palette.dim_white;
    background.a = SEPARATOR_ALPHA;

    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_SEPARATOR_HEIGHT))
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

/// Render the page selected by the active section.
fn view_page<'a>(
    app: &'a App,
    section: &'a str,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    match Page::for_section(section) {
        Page::Modules => module_grid::view(module_grid::ModuleGridProps {
            vm: app.widgets.modules.vm(),
            theme: theme_props,
        })
        .map(|intent| AppEvent::Modules(ModulesEvent::Intent(intent))),
        Page::Users => users_table::view(users_table::UsersTableProps {
            vm: app.widgets.users.vm(),
            theme: theme_props,
        })
        .map(|intent| AppEvent::Users(UsersEvent::Intent(intent))),
        Page::Placeholder => {
            section_placeholder::view(section_placeholder::SectionPlaceholderProps {
                title: app.widgets.sidebar.label_of(section).unwrap_or(section),
                icon: app
                    .widgets
                    .sidebar
                    .icon_of(section)
                    .and_then(icons::by_key),
                theme: theme_props,
                fonts: &app.fonts,
            })
        },
    }
}
