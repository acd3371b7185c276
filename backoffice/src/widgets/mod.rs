pub(crate) mod auth;
pub(crate) mod modules;
pub(crate) mod sidebar;
pub(crate) mod users;

pub(crate) struct Widgets {
    pub(crate) auth: auth::AuthWidget,
    pub(crate) sidebar: sidebar::SidebarWidget,
    pub(crate) modules: modules::ModulesWidget,
    pub(crate) users: users::UsersWidget,
}
