use backoffice_ui_reorder::{DragGesture, DragOutcome, ReorderableCollection};
use iced::Point;

use super::model::Module;

/// Internal state of the module grid.
#[derive(Debug, Default)]
pub(super) struct ModulesState {
    collection: ReorderableCollection<Module>,
    drag_enabled: bool,
    gesture: Option<DragGesture>,
    cursor: Point,
    hovered: Option<String>,
}

impl ModulesState {
    pub(super) fn new(modules: Vec<Module>) -> Self {
        Self {
            collection: ReorderableCollection::new(modules),
            drag_enabled: true,
            ..Self::default()
        }
    }

    pub(super) fn modules(&self) -> &[Module] {
        self.collection.items()
    }

    pub(super) fn module(&self, id: &str) -> Option<&Module> {
        self.collection.get(id)
    }

    pub(super) fn order(&self) -> Vec<String> {
        self.collection.order()
    }

    pub(super) fn is_drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    pub(super) fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub(super) fn gesture(&self) -> Option<&DragGesture> {
        self.gesture.as_ref()
    }

    pub(super) fn is_dragging(&self) -> bool {
        self.gesture.as_ref().is_some_and(DragGesture::is_engaged)
    }

    pub(super) fn toggle_drag_enabled(&mut self) {
        self.drag_enabled = !self.drag_enabled;
        if !self.drag_enabled {
            self.gesture = None;
        }
    }

    /// Start a gesture on `id`. Ignored while dragging is disabled.
    pub(super) fn press_handle(&mut self, id: String) -> bool {
        if !self.drag_enabled || self.collection.index_of(&id).is_none() {
            return false;
        }

        let mut gesture = DragGesture::press(id, self.cursor);
        if let Some(hovered) = &self.hovered {
            gesture.enter(hovered.clone());
        }
        self.gesture = Some(gesture);
        true
    }

    /// Track the pointer. Returns `true` on the move that engages a drag.
    pub(super) fn move_cursor(&mut self, position: Point) -> bool {
        self.cursor = position;
        self.gesture
            .as_mut()
            .is_some_and(|gesture| gesture.cursor_moved(position))
    }

    pub(super) fn enter_tile(&mut self, id: String) {
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.enter(id.clone());
        }
        self.hovered = Some(id);
    }

    pub(super) fn exit_tile(&mut self, id: &str) {
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.exit(id);
        }
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
    }

    /// Target an engaged gesture would drop on if released off-tile.
    pub(super) fn hover_target(&self) -> Option<String> {
        self.gesture
            .as_ref()
            .and_then(DragGesture::over)
            .map(str::to_owned)
    }

    /// Finish the current gesture over `target`.
    ///
    /// Returns the new order when the collection changed.
    pub(super) fn release(
        &mut self,
        target: Option<&str>,
    ) -> Option<Vec<String>> {
        let gesture = self.gesture.take()?;

        match gesture.release(target) {
            DragOutcome::Move { source, target } => {
                if self.collection.move_by_id(&source, &target) {
                    Some(self.collection.order())
                } else {
                    None
                }
            },
            DragOutcome::Click { source } => {
                log::debug!("module handle {source} clicked without drag");
                None
            },
            DragOutcome::Discarded => None,
        }
    }

    pub(super) fn cancel_drag(&mut self) -> bool {
        self.gesture.take().is_some()
    }
}
