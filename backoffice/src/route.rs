/// Section that renders the module grid.
pub(crate) const DASHBOARD_SECTION: &str = "dashboard";
/// Section that renders the users table.
pub(crate) const USERS_SECTION: &str = "users";

/// Top-level screen shown by the root view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Login,
    Dashboard { section: String },
}

impl Route {
    /// Resolve a navigation request against the session state.
    ///
    /// Without a session every request lands on [`Route::Login`].
    pub(crate) fn resolve(section: String, is_authenticated: bool) -> Self {
        if is_authenticated {
            Route::Dashboard { section }
        } else {
            Route::Login
        }
    }

    /// Active section, if the route shows the dashboard shell.
    pub(crate) fn section(&self) -> Option<&str> {
        match self {
            Route::Login => None,
            Route::Dashboard { section } => Some(section.as_str()),
        }
    }
}

/// Content rendered next to the sidebar for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Page {
    Modules,
    Users,
    Placeholder,
}

impl Page {
    pub(crate) fn for_section(section: &str) -> Self {
        match section {
            DASHBOARD_SECTION => Page::Modules,
            USERS_SECTION => Page::Users,
            _ => Page::Placeholder,
        }
    }
}
