use iced::Task;

use super::event::{UsersEvent, UsersIntent};
use super::state::UsersState;

/// Reduce a users table intent into state updates.
pub(super) fn reduce(
    state: &mut UsersState,
    intent: UsersIntent,
) -> Task<UsersEvent> {
    match intent {
        UsersIntent::FilterChanged(filter) => state.set_filter(filter),
        UsersIntent::ClearFilter => state.set_filter(String::new()),
    }

    Task::none()
}
