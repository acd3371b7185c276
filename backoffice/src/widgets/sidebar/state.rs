use backoffice_ui_menu::{ExpansionState, MenuNode, find_node};

#[derive(Debug, Default)]
pub(super) struct SidebarState {
    menu: Vec<MenuNode>,
    expansion: ExpansionState,
    active_section: Option<String>,
    collapsed: bool,
    hovered: Option<String>,
}

impl SidebarState {
    pub(super) fn new(menu: Vec<MenuNode>) -> Self {
        Self {
            menu,
            ..Self::default()
        }
    }

    pub(super) fn menu(&self) -> &[MenuNode] {
        &self.menu
    }

    pub(super) fn node(&self, id: &str) -> Option<&MenuNode> {
        find_node(&self.menu, id)
    }

    pub(super) fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub(super) fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub(super) fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub(super) fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Flip the expansion flag of a parent item. Leaves are ignored.
    pub(super) fn toggle_expansion(&mut self, id: &str) -> bool {
        if !self.node(id).is_some_and(MenuNode::has_children) {
            return false;
        }

        self.expansion.toggle(id);
        true
    }

    /// Leave the rail and make sure the parent `id` is open.
    pub(super) fn expand_from_rail(&mut self, id: &str) {
        self.collapsed = false;
        if !self.expansion.is_expanded(id) {
            self.expansion.toggle(id);
        }
    }

    /// Record the active section and rebuild the expansion map around it.
    pub(super) fn set_active_section(&mut self, id: String) {
        self.expansion.follow_active(&self.menu, &id);
        self.active_section = Some(id);
    }

    pub(super) fn set_hovered(&mut self, id: Option<String>) {
        self.hovered = id;
    }

    pub(super) fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
        self.hovered = None;
    }

    pub(super) fn reset(&mut self) {
        self.expansion.clear();
        self.active_section = None;
        self.collapsed = false;
        self.hovered = None;
    }
}
