use iced::Task;
use iced::keyboard::{self, Key, key};

use crate::app::{App, AppEvent};
use crate::widgets::modules::{ModulesEvent, ModulesIntent};

/// Handle global keyboard shortcuts.
pub(crate) fn handle(app: &App, event: keyboard::Event) -> Task<AppEvent> {
    match event {
        keyboard::Event::KeyPressed { key, .. } => {
            shortcut(app, &key).map_or_else(Task::none, Task::done)
        },
        _ => Task::none(),
    }
}

fn shortcut(app: &App, key: &Key) -> Option<AppEvent> {
    match key {
        Key::Named(key::Named::Escape) if app.widgets.modules.has_gesture() => {
            Some(AppEvent::Modules(ModulesEvent::Intent(
                ModulesIntent::CancelDrag,
            )))
        },
        _ => None,
    }
}
