mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{AuthEffect, AuthEvent, AuthIntent};
use iced::Task;
use model::AuthViewModel;
pub(crate) use reducer::AuthCtx;
use state::AuthState;

use crate::services::auth::User;

/// Login form and current session holder.
pub(crate) struct AuthWidget {
    state: AuthState,
}

impl AuthWidget {
    /// Construct a signed-out widget with an empty form.
    pub(crate) fn new() -> Self {
        Self {
            state: AuthState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: AuthIntent,
        ctx: &AuthCtx<'_>,
    ) -> Task<AuthEvent> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> AuthViewModel<'_> {
        AuthViewModel {
            email: self.state.email(),
            password: self.state.password(),
            error: self.state.error(),
            is_loading: self.state.is_loading(),
        }
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.state.session().is_some()
    }

    pub(crate) fn current_user(&self) -> Option<&User> {
        self.state.session().map(|session| session.user())
    }
}
