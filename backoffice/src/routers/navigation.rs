use iced::Task;

use crate::app::{App, AppEvent};
use crate::route::{Page, Route};
use crate::widgets::modules::{ModulesEvent, ModulesIntent};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Resolve a navigation request and sync the sidebar with the result.
pub(crate) fn navigate(app: &mut App, section: String) -> Task<AppEvent> {
    Task::batch(follow_up(app, section).into_iter().map(Task::done))
}

/// Apply the resolved route and list the events that keep widgets in step
/// with it. Nothing is emitted when the route does not change.
fn follow_up(app: &mut App, section: String) -> Vec<AppEvent> {
    let route = Route::resolve(section, app.widgets.auth.is_authenticated());
    if app.route == route {
        return Vec::new();
    }

    log::debug!("navigate: {:?} -> {route:?}", app.route);
    app.route = route;

    let Some(section) = app.route.section() else {
        return Vec::new();
    };

    let mut events = vec![AppEvent::Sidebar(SidebarEvent::Intent(
        SidebarIntent::ActiveSectionChanged {
            id: section.to_owned(),
        },
    ))];

    if Page::for_section(section) != Page::Modules
        && app.widgets.modules.has_gesture()
    {
        events.push(AppEvent::Modules(ModulesEvent::Intent(
            ModulesIntent::CancelDrag,
        )));
    }

    events
}
