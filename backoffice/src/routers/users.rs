use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::users::UsersEvent;

/// Route a users table event into widget reduction.
pub(crate) fn route(app: &mut App, event: UsersEvent) -> Task<AppEvent> {
    match event {
        UsersEvent::Intent(intent) => {
            app.widgets.users.reduce(intent).map(AppEvent::Users)
        },
    }
}
