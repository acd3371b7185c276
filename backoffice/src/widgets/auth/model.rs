/// Read-only view model for the login form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AuthViewModel<'a> {
    pub(crate) email: &'a str,
    pub(crate) password: &'a str,
    pub(crate) error: Option<&'a str>,
    pub(crate) is_loading: bool,
}
