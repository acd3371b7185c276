mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{UsersEvent, UsersIntent};
use iced::Task;
use model::{UserRecord, UsersViewModel};
use state::UsersState;

/// Read-only users table with a text filter.
pub(crate) struct UsersWidget {
    state: UsersState,
}

impl UsersWidget {
    pub(crate) fn new(rows: Vec<UserRecord>) -> Self {
        Self {
            state: UsersState::new(rows),
        }
    }

    /// Reduce an intent event into state updates.
    pub(crate) fn reduce(&mut self, intent: UsersIntent) -> Task<UsersEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> UsersViewModel<'_> {
        UsersViewModel {
            rows: self.state.visible_rows(),
            total: self.state.rows().len(),
            filter: self.state.filter(),
        }
    }
}
