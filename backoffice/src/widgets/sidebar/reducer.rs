use backoffice_ui_menu::MenuRowAction;
use iced::Task;

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::state::SidebarState;

/// Reduce a sidebar intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut SidebarState,
    intent: SidebarIntent,
) -> Task<SidebarEvent> {
    match apply(state, intent) {
        Some(effect) => Task::done(SidebarEvent::Effect(effect)),
        None => Task::none(),
    }
}

fn apply(
    state: &mut SidebarState,
    intent: SidebarIntent,
) -> Option<SidebarEffect> {
    use SidebarIntent::*;

    match intent {
        ToggleExpansion { id } => {
            state.toggle_expansion(&id);
            None
        },
        Select { id } => select(state, id),
        ActiveSectionChanged { id } => {
            state.set_active_section(id);
            None
        },
        Hovered { id } => {
            state.set_hovered(id);
            None
        },
        ToggleCollapsed => {
            state.toggle_collapsed();
            None
        },
        Reset => {
            state.reset();
            None
        },
    }
}

fn select(state: &mut SidebarState, id: String) -> Option<SidebarEffect> {
    let Some(action) = state.node(&id).map(MenuRowAction::for_node) else {
        log::warn!("sidebar select ignored: unknown menu id {id}");
        return None;
    };

    match action {
        MenuRowAction::Select => Some(SidebarEffect::SectionSelected { id }),
        MenuRowAction::Toggle if state.is_collapsed() => {
            state.expand_from_rail(&id);
            None
        },
        MenuRowAction::Toggle => {
            state.toggle_expansion(&id);
            None
        },
        MenuRowAction::Inert => None,
    }
}

#[cfg(test)]
mod tests {
    use backoffice_ui_menu::MenuNode;

    use super::apply;
    use crate::widgets::sidebar::event::{SidebarEffect, SidebarIntent};
    use crate::widgets::sidebar::state::SidebarState;

    fn state() -> SidebarState {
        SidebarState::new(vec![
            MenuNode::item("dashboard", "Dashboard"),
            MenuNode::group(
                "sales",
                "Sales",
                vec![
                    MenuNode::item("orders", "Orders"),
                    MenuNode::group(
                        "billing",
                        "Billing",
                        vec![MenuNode::item("payments", "Payments")],
                    ),
                ],
            ),
            MenuNode::group(
                "people",
                "People",
                vec![MenuNode::item("users", "Users")],
            ),
            MenuNode::divider("divider-reports"),
            MenuNode::item("reports", "Reports"),
        ])
    }

    fn select(state: &mut SidebarState, id: &str) -> Option<SidebarEffect> {
        apply(state, SidebarIntent::Select { id: id.to_owned() })
    }

    fn activate(state: &mut SidebarState, id: &str) {
        apply(state, SidebarIntent::ActiveSectionChanged { id: id.to_owned() });
    }

    #[test]
    fn given_leaf_item_when_selected_then_section_selected_is_emitted() {
        let mut state = state();

        let effect = select(&mut state, "orders");

        assert!(matches!(
            effect,
            Some(SidebarEffect::SectionSelected { id }) if id == "orders"
        ));
        assert_eq!(state.active_section(), None);
    }

    #[test]
    fn given_parent_item_when_selected_then_it_toggles_without_effect() {
        let mut state = state();

        assert!(select(&mut state, "sales").is_none());
        assert!(state.expansion().is_expanded("sales"));

        assert!(select(&mut state, "sales").is_none());
        assert!(!state.expansion().is_expanded("sales"));
    }

    #[test]
    fn given_divider_or_unknown_id_when_selected_then_nothing_happens() {
        let mut state = state();

        assert!(select(&mut state, "divider-reports").is_none());
        assert!(select(&mut state, "missing").is_none());
        assert_eq!(state.expansion().expanded_ids().count(), 0);
    }

    #[test]
    fn given_nested_active_section_when_changed_then_ancestors_expand() {
        let mut state = state();

        activate(&mut state, "payments");

        assert_eq!(state.active_section(), Some("payments"));
        assert!(state.expansion().is_expanded("sales"));
        assert!(state.expansion().is_expanded("billing"));
        assert!(!state.expansion().is_expanded("people"));
    }

    #[test]
    fn given_manual_expansion_when_active_section_changes_then_it_collapses() {
        let mut state = state();
        apply(&mut state, SidebarIntent::ToggleExpansion {
            id: String::from("people"),
        });
        assert!(state.expansion().is_expanded("people"));

        activate(&mut state, "orders");

        assert!(!state.expansion().is_expanded("people"));
        assert!(state.expansion().is_expanded("sales"));
    }

    #[test]
    fn given_leaf_id_when_toggled_then_expansion_is_unchanged() {
        let mut state = state();

        apply(&mut state, SidebarIntent::ToggleExpansion {
            id: String::from("reports"),
        });

        assert_eq!(state.expansion().expanded_ids().count(), 0);
    }

    #[test]
    fn given_collapsed_rail_when_parent_selected_then_sidebar_opens_on_it() {
        let mut state = state();
        apply(&mut state, SidebarIntent::ToggleCollapsed);
        assert!(state.is_collapsed());

        assert!(select(&mut state, "people").is_none());
        assert!(!state.is_collapsed());
        assert!(state.expansion().is_expanded("people"));

        apply(&mut state, SidebarIntent::ToggleCollapsed);
        select(&mut state, "people");
        assert!(state.expansion().is_expanded("people"));
    }

    #[test]
    fn given_active_state_when_reset_then_everything_is_forgotten() {
        let mut state = state();
        activate(&mut state, "payments");
        apply(&mut state, SidebarIntent::Hovered {
            id: Some(String::from("orders")),
        });
        apply(&mut state, SidebarIntent::ToggleCollapsed);

        apply(&mut state, SidebarIntent::Reset);

        assert_eq!(state.active_section(), None);
        assert_eq!(state.hovered(), None);
        assert!(!state.is_collapsed());
        assert_eq!(state.expansion().expanded_ids().count(), 0);
    }
}
