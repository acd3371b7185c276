#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::sync::Arc;

use iced::{Element, Subscription, Task, Theme};

use crate::config::{Catalog, CatalogLoadStatus, load_catalog};
use crate::route::Route;
use crate::services::auth::{AuthProvider, DemoAuthProvider};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::AppTheme;
use crate::widgets::Widgets;
use crate::widgets::auth::{AuthEvent, AuthWidget};
use crate::widgets::modules::{ModulesEvent, ModulesWidget};
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};
use crate::widgets::users::{UsersEvent, UsersWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 960.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 640.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Auth widget
    Auth(AuthEvent),
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Modules widget
    Modules(ModulesEvent),
    // Users widget
    Users(UsersEvent),
    // Cross-widget workflows
    Navigate { section: String },
    // Direct operations
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme: AppTheme,
    pub(crate) fonts: FontsConfig,
    pub(crate) route: Route,
    pub(crate) default_section: String,
    pub(crate) provider: Arc<dyn AuthProvider>,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        (Self::with_catalog(initial_catalog()), Task::none())
    }

    /// Build a signed-out app seeded from `catalog`.
    pub(crate) fn with_catalog(catalog: Catalog) -> Self {
        let Catalog {
            menu,
            modules,
            default_section,
            accounts,
            users,
        } = catalog;

        let widgets = Widgets {
            auth: AuthWidget::new(),
            sidebar: SidebarWidget::new(menu),
            modules: ModulesWidget::new(modules),
            users: UsersWidget::new(users),
        };

        App {
            theme: AppTheme::default(),
            fonts: FontsConfig::default(),
            route: Route::Login,
            default_section,
            provider: Arc::new(DemoAuthProvider::new(accounts)),
            widgets,
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        let section = self
            .route
            .section()
            .and_then(|id| self.widgets.sidebar.label_of(id));

        match section {
            Some(label) => format!("Backoffice - {label}"),
            None => String::from("Backoffice"),
        }
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::from(&self.theme)
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

/// Load the catalog file, falling back to the built-in data on any error.
fn initial_catalog() -> Catalog {
    match load_catalog() {
        Ok(load) => {
            let (catalog, status) = load.into_parts();
            match status {
                CatalogLoadStatus::Loaded => log::info!("catalog loaded"),
                CatalogLoadStatus::Missing => {
                    log::info!("catalog file missing, using defaults")
                },
                CatalogLoadStatus::Invalid(message) => {
                    log::warn!("catalog file invalid: {message}")
                },
            }
            catalog
        },
        Err(err) => {
            log::warn!("catalog load failed: {err}");
            Catalog::default()
        },
    }
}
