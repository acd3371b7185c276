use secrecy::{ExposeSecret, SecretString};

use crate::services::auth::{Credentials, Session, User};

#[derive(Debug)]
pub(super) struct AuthState {
    email: String,
    password: SecretString,
    error: Option<String>,
    /// Attempt whose provider answer is still awaited.
    pending: Option<u64>,
    attempts: u64,
    session: Option<Session>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: empty_secret(),
            error: None,
            pending: None,
            attempts: 0,
            session: None,
        }
    }
}

impl AuthState {
    pub(super) fn email(&self) -> &str {
        &self.email
    }

    pub(super) fn password(&self) -> &str {
        self.password.expose_secret()
    }

    pub(super) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(super) fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether `attempt` is the login currently awaited.
    pub(super) fn is_pending(&self, attempt: u64) -> bool {
        self.pending == Some(attempt)
    }

    pub(super) fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub(super) fn set_email(&mut self, email: String) {
        self.email = email;
        self.error = None;
    }

    pub(super) fn set_password(&mut self, password: String) {
        self.password = SecretString::from(password);
        self.error = None;
    }

    pub(super) fn fail(&mut self, message: String) {
        self.pending = None;
        self.error = Some(message);
    }

    /// Snapshot the form into provider credentials and enter loading.
    ///
    /// Returns the id of the new attempt alongside the credentials.
    pub(super) fn begin_login(&mut self) -> (u64, Credentials) {
        self.attempts += 1;
        self.pending = Some(self.attempts);
        self.error = None;
        let credentials = Credentials::new(
            self.email.clone(),
            SecretString::from(self.password.expose_secret().to_owned()),
        );
        (self.attempts, credentials)
    }

    /// Store the session and wipe the password field.
    pub(super) fn complete_login(&mut self, session: Session) -> User {
        let user = session.user().clone();
        self.pending = None;
        self.password = empty_secret();
        self.session = Some(session);
        user
    }

    /// Drop the session and any pending login. Returns `false` when there
    /// was nothing to drop.
    pub(super) fn logout(&mut self) -> bool {
        let had_session = self.session.take().is_some();
        let was_loading = self.pending.take().is_some();
        self.password = empty_secret();
        self.error = None;
        had_session || was_loading
    }
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}
