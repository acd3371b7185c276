mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use backoffice_ui_menu::MenuNode;
pub(crate) use event::{SidebarEffect, SidebarEvent, SidebarIntent};
use iced::Task;
use model::SidebarViewModel;
use state::SidebarState;

/// Navigation sidebar driven by the catalog menu tree.
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    /// Construct the sidebar with every item collapsed.
    pub(crate) fn new(menu: Vec<MenuNode>) -> Self {
        Self {
            state: SidebarState::new(menu),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: SidebarIntent,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SidebarViewModel<'_> {
        SidebarViewModel {
            menu: self.state.menu(),
            expansion: self.state.expansion(),
            active: self.state.active_section(),
            hovered: self.state.hovered(),
            collapsed: self.state.is_collapsed(),
        }
    }

    /// Return whether the sidebar is reduced to the icon rail.
    pub(crate) fn is_collapsed(&self) -> bool {
        self.state.is_collapsed()
    }

    /// Label of the menu item `id`, if it exists.
    pub(crate) fn label_of(&self, id: &str) -> Option<&str> {
        self.state.node(id).map(MenuNode::label)
    }

    /// Icon key of the menu item `id`, if it has one.
    pub(crate) fn icon_of(&self, id: &str) -> Option<&str> {
        self.state.node(id).and_then(MenuNode::icon)
    }
}
