use iced::Task;

use super::{App, AppEvent};
use crate::guards::{SessionGuard, session_guard};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    let is_authenticated = app.widgets.auth.is_authenticated();
    if session_guard(&event, is_authenticated) == SessionGuard::Ignore {
        log::debug!("event dropped without session: {event:?}");
        return Task::none();
    }

    route(app, event)
}

fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Auth widget
        AppEvent::Auth(event) => routers::auth::route(app, event),
        // Sidebar widget
        AppEvent::Sidebar(event) => routers::sidebar::route(app, event),
        // Modules widget
        AppEvent::Modules(event) => routers::modules::route(app, event),
        // Users widget
        AppEvent::Users(event) => routers::users::route(app, event),
        // Cross-widget workflows
        AppEvent::Navigate { section } => {
            routers::navigation::navigate(app, section)
        },
        // Direct operations
        AppEvent::Keyboard(event) => routers::keyboard::handle(app, event),
        AppEvent::Window(event) => routers::window::handle(app, event),
    }
}
