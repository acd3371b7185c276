use iced::Point;

/// Intent events handled by the module grid.
#[derive(Debug, Clone)]
pub(crate) enum ModulesIntent {
    ToggleDragEnabled,
    HandlePressed { id: String },
    TileEntered { id: String },
    TileExited { id: String },
    TileReleased { id: String },
    BackgroundReleased,
    CursorMoved { position: Point },
    CancelDrag,
    TileActivated { id: String },
}

/// Effect events produced by the module grid reducer.
#[derive(Debug, Clone)]
pub(crate) enum ModulesEffect {
    OpenSection { id: String },
    OrderChanged { order: Vec<String> },
}

/// Module grid event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ModulesEvent {
    /// Intent event reduced by the modules widget.
    Intent(ModulesIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ModulesEffect),
}
