use crate::expansion::ExpansionState;
use crate::model::MenuNode;

/// Visible menu row produced by [`flatten_menu`].
#[derive(Debug, Clone, Copy)]
pub struct MenuRow<'a> {
    /// Zero-based nesting depth (`0` for root-level rows).
    pub depth: usize,
    /// Borrowed source node.
    pub node: &'a MenuNode,
    /// Whether the node is expanded; always `false` for leaves.
    pub expanded: bool,
}

/// Flatten a menu forest into the rows currently visible.
///
/// Rows keep the declared order. Children are emitted only when their parent
/// is expanded in `expansion`.
pub fn flatten_menu<'a>(
    forest: &'a [MenuNode],
    expansion: &ExpansionState,
) -> Vec<MenuRow<'a>> {
    let mut rows = Vec::new();
    for node in forest {
        push_row(node, 0, expansion, &mut rows);
    }
    rows
}

fn push_row<'a>(
    node: &'a MenuNode,
    depth: usize,
    expansion: &ExpansionState,
    rows: &mut Vec<MenuRow<'a>>,
) {
    let expanded = node.has_children() && expansion.is_expanded(node.id());
    rows.push(MenuRow {
        depth,
        node,
        expanded,
    });

    if expanded {
        for child in node.children() {
            push_row(child, depth + 1, expansion, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuRow, flatten_menu};
    use crate::expansion::ExpansionState;
    use crate::model::MenuNode;

    fn forest() -> Vec<MenuNode> {
        vec![
            MenuNode::item("home", "Home"),
            MenuNode::group(
                "sales",
                "Sales",
                vec![
                    MenuNode::item("orders", "Orders"),
                    MenuNode::group(
                        "billing",
                        "Billing",
                        vec![MenuNode::item("invoices", "Invoices")],
                    ),
                ],
            ),
            MenuNode::divider("line"),
            MenuNode::item("about", "About"),
        ]
    }

    fn ids<'a>(rows: &[MenuRow<'a>]) -> Vec<&'a str> {
        rows.iter().map(|row| row.node.id()).collect()
    }

    #[test]
    fn given_empty_forest_when_flattened_then_no_rows() {
        let rows = flatten_menu(&[], &ExpansionState::new());
        assert!(rows.is_empty());
    }

    #[test]
    fn given_collapsed_parents_when_flattened_then_children_are_hidden() {
        let nodes = forest();
        let rows = flatten_menu(&nodes, &ExpansionState::new());

        assert_eq!(ids(&rows), vec!["home", "sales", "line", "about"]);
        assert!(rows.iter().all(|row| row.depth == 0 && !row.expanded));
    }

    #[test]
    fn given_expanded_chain_when_flattened_then_order_and_depth_are_kept() {
        let nodes = forest();
        let mut expansion = ExpansionState::new();
        expansion.follow_active(&nodes, "invoices");

        let rows = flatten_menu(&nodes, &expansion);

        assert_eq!(
            ids(&rows),
            vec!["home", "sales", "orders", "billing", "invoices", "line", "about"]
        );
        let depths: Vec<usize> = rows.iter().map(|row| row.depth).collect();
        assert_eq!(depths, vec![0, 0, 1, 1, 2, 0, 0]);
        assert!(rows[1].expanded);
        assert!(rows[3].expanded);
    }

    #[test]
    fn given_expanded_leaf_id_when_flattened_then_leaf_is_not_marked_expanded() {
        let nodes = forest();
        let mut expansion = ExpansionState::new();
        expansion.toggle("home");

        let rows = flatten_menu(&nodes, &expansion);

        assert!(!rows[0].expanded);
    }
}
