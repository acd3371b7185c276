use backoffice_ui_reorder::Reorderable;
use serde::Deserialize;

/// Shortcut tile shown on the dashboard grid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Module {
    pub(crate) id: String,
    pub(crate) title: String,
    /// Accent color as `#RRGGBB`.
    pub(crate) color: String,
    /// Icon key resolved by `shared::ui::icons::by_key`.
    pub(crate) icon: String,
    /// Menu id opened when the tile is activated.
    pub(crate) section: String,
}

impl Module {
    pub(crate) fn new(
        id: &str,
        title: &str,
        color: &str,
        icon: &str,
        section: &str,
    ) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            color: color.to_owned(),
            icon: icon.to_owned(),
            section: section.to_owned(),
        }
    }
}

impl Reorderable for Module {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Read-only view model for the module grid.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModulesViewModel<'a> {
    pub(crate) modules: &'a [Module],
    pub(crate) drag_enabled: bool,
    /// Source tile of an engaged drag.
    pub(crate) dragging: Option<&'a str>,
    /// Tile that would receive the drop.
    pub(crate) drop_target: Option<&'a str>,
    pub(crate) hovered: Option<&'a str>,
}
