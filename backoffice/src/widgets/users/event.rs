/// Intent events handled by the users table.
#[derive(Debug, Clone)]
pub(crate) enum UsersIntent {
    FilterChanged(String),
    ClearFilter,
}

/// Users table event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum UsersEvent {
    Intent(UsersIntent),
}
