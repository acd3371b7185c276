mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{ModulesEffect, ModulesEvent, ModulesIntent};
use iced::Task;
use model::{Module, ModulesViewModel};
use state::ModulesState;

/// Dashboard grid of reorderable shortcut modules.
pub(crate) struct ModulesWidget {
    state: ModulesState,
}

impl ModulesWidget {
    /// Create the grid with drag-and-drop enabled.
    pub(crate) fn new(modules: Vec<Module>) -> Self {
        Self {
            state: ModulesState::new(modules),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: ModulesIntent,
    ) -> Task<ModulesEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> ModulesViewModel<'_> {
        let gesture = self.state.gesture();

        ModulesViewModel {
            modules: self.state.modules(),
            drag_enabled: self.state.is_drag_enabled(),
            dragging: gesture
                .filter(|gesture| gesture.is_engaged())
                .map(|gesture| gesture.source()),
            drop_target: gesture.and_then(|gesture| gesture.drop_target()),
            hovered: self.state.hovered(),
        }
    }

    /// Return whether a drag gesture is in progress.
    pub(crate) fn has_gesture(&self) -> bool {
        self.state.gesture().is_some()
    }
}
