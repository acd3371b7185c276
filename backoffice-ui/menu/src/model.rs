use std::collections::HashSet;

use serde::Deserialize;

/// Variant of a navigation node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuNodeKind {
    /// Selectable entry; parents with children are toggled instead.
    #[default]
    Item,
    /// Non-selectable separator row.
    Divider,
}

/// Entry of the static navigation forest.
///
/// Ids must be unique across the whole forest. Uniqueness is checked once
/// with [`first_duplicate_id`] when the forest is built and never again.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuNode {
    id: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    kind: MenuNodeKind,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    children: Vec<MenuNode>,
}

impl MenuNode {
    /// Create a selectable leaf item.
    pub fn item(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: MenuNodeKind::Item,
            icon: None,
            children: Vec::new(),
        }
    }

    /// Create a selectable item that owns `children`.
    pub fn group(
        id: impl Into<String>,
        label: impl Into<String>,
        children: Vec<MenuNode>,
    ) -> Self {
        Self {
            children,
            ..Self::item(id, label)
        }
    }

    /// Create a divider row.
    pub fn divider(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            kind: MenuNodeKind::Divider,
            icon: None,
            children: Vec::new(),
        }
    }

    /// Attach a display icon key.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> MenuNodeKind {
        self.kind
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn children(&self) -> &[MenuNode] {
        &self.children
    }

    /// Whether this node owns at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether this node is a divider.
    pub fn is_divider(&self) -> bool {
        self.kind == MenuNodeKind::Divider
    }
}

/// Return the ids of every ancestor of `target_id`, outermost first.
///
/// The search is depth-first, pre-order, and stops at the first match, so a
/// forest with duplicate ids resolves to the earliest occurrence. A root
/// level target and a missing target both produce an empty chain.
pub fn ancestor_chain(forest: &[MenuNode], target_id: &str) -> Vec<String> {
    let mut path = Vec::new();
    if search_path(forest, target_id, &mut path) {
        path
    } else {
        Vec::new()
    }
}

fn search_path(
    nodes: &[MenuNode],
    target_id: &str,
    path: &mut Vec<String>,
) -> bool {
    for node in nodes {
        if node.id == target_id {
            return true;
        }

        path.push(node.id.clone());
        if search_path(&node.children, target_id, path) {
            return true;
        }
        path.pop();
    }

    false
}

/// Collect every id reachable through the children of `node`.
pub fn descendant_ids(node: &MenuNode) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_descendants(node, &mut ids);
    ids
}

fn collect_descendants(node: &MenuNode, ids: &mut HashSet<String>) {
    for child in &node.children {
        ids.insert(child.id.clone());
        collect_descendants(child, ids);
    }
}

/// Whether `node` is the active node or contains it.
pub fn is_active_or_ancestor_of_active(
    node: &MenuNode,
    active_id: &str,
) -> bool {
    node.id == active_id || contains_id(&node.children, active_id)
}

fn contains_id(nodes: &[MenuNode], id: &str) -> bool {
    nodes
        .iter()
        .any(|node| node.id == id || contains_id(&node.children, id))
}

/// Find the first node with `id` in depth-first pre-order.
pub fn find_node<'a>(
    forest: &'a [MenuNode],
    id: &str,
) -> Option<&'a MenuNode> {
    for node in forest {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }

    None
}

/// Return the first id that appears more than once in the forest.
pub fn first_duplicate_id(forest: &[MenuNode]) -> Option<&str> {
    let mut seen = HashSet::new();
    first_duplicate_in(forest, &mut seen)
}

fn first_duplicate_in<'a>(
    nodes: &'a [MenuNode],
    seen: &mut HashSet<&'a str>,
) -> Option<&'a str> {
    for node in nodes {
        if !seen.insert(node.id.as_str()) {
            return Some(node.id.as_str());
        }
        if let Some(duplicate) = first_duplicate_in(&node.children, seen) {
            return Some(duplicate);
        }
    }

    None
}
