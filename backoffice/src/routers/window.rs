use iced::{Task, window};

use crate::app::{App, AppEvent};
use crate::widgets::modules::{ModulesEvent, ModulesIntent};

/// Handle window events that affect app state.
pub(crate) fn handle(app: &App, event: window::Event) -> Task<AppEvent> {
    follow_up(app, &event).map_or_else(Task::none, Task::done)
}

fn follow_up(app: &App, event: &window::Event) -> Option<AppEvent> {
    match event {
        window::Event::Unfocused if app.widgets.modules.has_gesture() => {
            log::debug!("window lost focus, cancelling drag");
            Some(AppEvent::Modules(ModulesEvent::Intent(
                ModulesIntent::CancelDrag,
            )))
        },
        _ => None,
    }
}
