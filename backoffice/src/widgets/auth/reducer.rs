use std::sync::Arc;

use iced::Task;

use super::event::{AuthEffect, AuthEvent, AuthIntent};
use super::state::AuthState;
use crate::services::auth::{AuthProvider, Credentials};

/// Read-only context for auth reduction.
pub(crate) struct AuthCtx<'a> {
    pub(crate) provider: &'a Arc<dyn AuthProvider>,
}

/// Outcome of applying one intent to the auth state.
#[derive(Debug)]
enum Step {
    Idle,
    Effect(AuthEffect),
    Login {
        attempt: u64,
        credentials: Credentials,
    },
}

/// Reduce an auth intent into state updates, provider calls and effects.
pub(super) fn reduce(
    state: &mut AuthState,
    intent: AuthIntent,
    ctx: &AuthCtx<'_>,
) -> Task<AuthEvent> {
    match apply(state, intent) {
        Step::Idle => Task::none(),
        Step::Effect(effect) => Task::done(AuthEvent::Effect(effect)),
        Step::Login {
            attempt,
            credentials,
        } => {
            let provider = Arc::clone(ctx.provider);
            Task::perform(
                async move {
                    provider
                        .login(&credentials)
                        .map_err(|err| err.to_string())
                },
                move |result| {
                    AuthEvent::Intent(AuthIntent::LoginFinished {
                        attempt,
                        result,
                    })
                },
            )
        },
    }
}

fn apply(state: &mut AuthState, intent: AuthIntent) -> Step {
    use AuthIntent::*;

    match intent {
        EmailChanged(email) => {
            state.set_email(email);
            Step::Idle
        },
        PasswordChanged(password) => {
            state.set_password(password);
            Step::Idle
        },
        Submit => submit(state),
        LoginFinished { attempt, result } => {
            if !state.is_pending(attempt) {
                log::debug!("stale result of login attempt {attempt} dropped");
                return Step::Idle;
            }

            match result {
                Ok(session) => {
                    log::info!("session {} opened", session.id());
                    let user = state.complete_login(session);
                    Step::Effect(AuthEffect::Authenticated { user })
                },
                Err(message) => {
                    log::warn!("login failed: {message}");
                    state.fail(message);
                    Step::Idle
                },
            }
        },
        Logout => {
            if state.logout() {
                Step::Effect(AuthEffect::LoggedOut)
            } else {
                Step::Idle
            }
        },
    }
}

fn submit(state: &mut AuthState) -> Step {
    if state.is_loading() || state.session().is_some() {
        return Step::Idle;
    }

    let (attempt, credentials) = state.begin_login();
    if let Err(err) = credentials.validate() {
        state.fail(err.to_string());
        return Step::Idle;
    }

    Step::Login {
        attempt,
        credentials,
    }
}
