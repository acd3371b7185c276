use backoffice_ui_menu::{ExpansionState, MenuNode};

/// Width of the expanded sidebar.
pub(crate) const SIDEBAR_WIDTH: f32 = 240.0;
/// Width of the collapsed icon rail.
pub(crate) const SIDEBAR_RAIL_WIDTH: f32 = 56.0;

/// Read-only view model for the sidebar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewModel<'a> {
    pub(crate) menu: &'a [MenuNode],
    pub(crate) expansion: &'a ExpansionState,
    pub(crate) active: Option<&'a str>,
    pub(crate) hovered: Option<&'a str>,
    pub(crate) collapsed: bool,
}

/// Root-level items shown on the collapsed rail.
pub(crate) fn rail_items(
    menu: &[MenuNode],
) -> impl Iterator<Item = &MenuNode> {
    menu.iter().filter(|node| !node.is_divider())
}
