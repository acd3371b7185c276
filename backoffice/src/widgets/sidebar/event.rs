/// Intent events handled by the sidebar widget.
#[derive(Debug, Clone)]
pub(crate) enum SidebarIntent {
    /// Flip the expansion flag of a parent item.
    ToggleExpansion { id: String },
    /// Left press on a menu row or rail icon.
    Select { id: String },
    /// The app accepted a navigation to `id`.
    ActiveSectionChanged { id: String },
    Hovered { id: Option<String> },
    ToggleCollapsed,
    /// Forget the active section and every expansion flag.
    Reset,
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEffect {
    SectionSelected { id: String },
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
