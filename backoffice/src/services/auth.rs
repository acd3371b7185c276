use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

/// Access level of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Role {
    Admin,
    Manager,
    Viewer,
}

impl Role {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Viewer => "Viewer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct User {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) role: Role,
}

/// Authenticated session returned by an [`AuthProvider`].
#[derive(Debug, Clone)]
pub(crate) struct Session {
    id: Uuid,
    user: User,
}

impl Session {
    pub(crate) fn new(user: User) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
        }
    }

    pub(crate) fn id(&self) -> Uuid {
        self.id
    }

    pub(crate) fn user(&self) -> &User {
        &self.user
    }
}

/// Login form payload handed to the provider.
#[derive(Debug)]
pub(crate) struct Credentials {
    email: String,
    password: SecretString,
}

impl Credentials {
    pub(crate) fn new(email: impl Into<String>, password: SecretString) -> Self {
        Self {
            email: email.into().trim().to_owned(),
            password,
        }
    }

    pub(crate) fn email(&self) -> &str {
        &self.email
    }

    pub(crate) fn password(&self) -> &SecretString {
        &self.password
    }

    /// Client-side checks run before the provider is called.
    pub(crate) fn validate(&self) -> Result<(), AuthError> {
        if !self.email.contains('@') {
            return Err(AuthError::Validation {
                message: String::from("Enter a valid email address"),
            });
        }

        if self.password.expose_secret().is_empty() {
            return Err(AuthError::Validation {
                message: String::from("Password is required"),
            });
        }

        Ok(())
    }
}

/// Errors surfaced by the login flow.
#[derive(Debug, Error)]
pub(crate) enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("{message}")]
    Validation { message: String },
}

/// External authentication collaborator.
pub(crate) trait AuthProvider: Send + Sync {
    fn login(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}

/// Account accepted by [`DemoAuthProvider`].
#[derive(Debug, Deserialize)]
pub(crate) struct DemoAccount {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password: SecretString,
    pub(crate) role: Role,
}

impl DemoAccount {
    pub(crate) fn new(
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Self {
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
            password: SecretString::from(password.to_owned()),
            role,
        }
    }
}

/// In-memory provider backed by the catalog's demo accounts.
#[derive(Debug)]
pub(crate) struct DemoAuthProvider {
    accounts: Vec<DemoAccount>,
}

impl DemoAuthProvider {
    pub(crate) fn new(accounts: Vec<DemoAccount>) -> Self {
        Self { accounts }
    }
}

impl AuthProvider for DemoAuthProvider {
    fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        credentials.validate()?;

        let account = self
            .accounts
            .iter()
            .find(|account| {
                account.email.eq_ignore_ascii_case(credentials.email())
            })
            .filter(|account| {
                account.password.expose_secret()
                    == credentials.password().expose_secret()
            })
            .ok_or(AuthError::InvalidCredentials)?;

        log::info!("demo login accepted for {}", account.email);

        Ok(Session::new(User {
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role,
        }))
    }
}
