pub(crate) mod auth;
pub(crate) mod keyboard;
pub(crate) mod modules;
pub(crate) mod navigation;
pub(crate) mod sidebar;
pub(crate) mod users;
pub(crate) mod window;

#[cfg(test)]
pub(crate) mod testing;
