use crate::services::auth::{Session, User};

/// Intent events handled by the login form.
#[derive(Debug, Clone)]
pub(crate) enum AuthIntent {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    /// Provider answer for login `attempt`; errors arrive already rendered
    /// for display.
    LoginFinished {
        attempt: u64,
        result: Result<Session, String>,
    },
    Logout,
}

/// Effect events produced by the auth reducer.
#[derive(Debug, Clone)]
pub(crate) enum AuthEffect {
    Authenticated { user: User },
    LoggedOut,
}

/// Auth event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum AuthEvent {
    /// Intent event reduced by the auth widget.
    Intent(AuthIntent),
    /// External effect orchestrated by app-level routing.
    Effect(AuthEffect),
}
