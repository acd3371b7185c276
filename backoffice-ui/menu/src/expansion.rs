use std::collections::HashMap;

use crate::model::{MenuNode, ancestor_chain};

/// Expanded/collapsed flags for parent nodes, keyed by node id.
///
/// Ids without an entry are collapsed. The map only changes through
/// [`ExpansionState::toggle`], [`ExpansionState::follow_active`] and
/// [`ExpansionState::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    entries: HashMap<String, bool>,
}

impl ExpansionState {
    /// Create a state with every node collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is currently expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    /// Flip the flag of a single id.
    pub fn toggle(&mut self, id: &str) {
        let expanded = self.is_expanded(id);
        self.entries.insert(id.to_owned(), !expanded);
    }

    /// Rebuild the map so that exactly the ancestors of `active_id` are open.
    ///
    /// Every other entry is dropped, including ids the user expanded by
    /// hand.
    pub fn follow_active(&mut self, forest: &[MenuNode], active_id: &str) {
        self.entries = ancestor_chain(forest, active_id)
            .into_iter()
            .map(|id| (id, true))
            .collect();
    }

    /// Ids currently expanded, in no particular order.
    pub fn expanded_ids(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, expanded)| **expanded)
            .map(|(id, _)| id.as_str())
    }

    /// Collapse everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
