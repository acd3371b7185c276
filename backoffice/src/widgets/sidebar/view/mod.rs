pub(crate) mod sidebar_menu;
