/// Item that can be addressed by a stable id inside a collection.
pub trait Reorderable {
    fn id(&self) -> &str;
}

/// Return a copy of `items` with the element at `from` moved to `to`.
///
/// The input is never mutated. `from == to` returns an equal copy, and an
/// out-of-range index on either side returns the input unchanged.
pub fn move_element<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from >= moved.len() || to >= moved.len() || from == to {
        return moved;
    }

    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}

/// Ordered list of [`Reorderable`] items.
///
/// Reordering always replaces the backing vector in one step, so readers
/// never observe a half-applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderableCollection<T> {
    items: Vec<T>,
}

impl<T> Default for ReorderableCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Reorderable + Clone> ReorderableCollection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the item with `id`, if present.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Item with `id`, if present.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Ids in their current order.
    pub fn order(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id().to_owned()).collect()
    }

    /// Move the item `active_id` to the slot currently held by `over_id`.
    ///
    /// Returns `false` without touching the collection when either id is
    /// unknown or both ids are the same.
    pub fn move_by_id(&mut self, active_id: &str, over_id: &str) -> bool {
        if active_id == over_id {
            return false;
        }

        let (Some(from), Some(to)) =
            (self.index_of(active_id), self.index_of(over_id))
        else {
            log::debug!("reorder skipped: {active_id} -> {over_id} unresolved");
            return false;
        };

        self.items = move_element(&self.items, from, to);
        log::debug!("reorder applied: {active_id} moved from {from} to {to}");
        true
    }
}
