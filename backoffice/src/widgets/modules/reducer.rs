use iced::Task;

use super::event::{ModulesEffect, ModulesEvent, ModulesIntent};
use super::state::ModulesState;

/// Reduce a module grid intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut ModulesState,
    intent: ModulesIntent,
) -> Task<ModulesEvent> {
    match apply(state, intent) {
        Some(effect) => Task::done(ModulesEvent::Effect(effect)),
        None => Task::none(),
    }
}

fn apply(
    state: &mut ModulesState,
    intent: ModulesIntent,
) -> Option<ModulesEffect> {
    use ModulesIntent::*;

    match intent {
        ToggleDragEnabled => {
            state.toggle_drag_enabled();
            None
        },
        HandlePressed { id } => {
            state.press_handle(id);
            None
        },
        CursorMoved { position } => {
            if state.move_cursor(position) {
                log::debug!("module drag engaged at {position:?}");
            }
            None
        },
        TileEntered { id } => {
            state.enter_tile(id);
            None
        },
        TileExited { id } => {
            state.exit_tile(&id);
            None
        },
        TileReleased { id } => state
            .release(Some(&id))
            .map(|order| ModulesEffect::OrderChanged { order }),
        BackgroundReleased => {
            let target = state.hover_target();
            state
                .release(target.as_deref())
                .map(|order| ModulesEffect::OrderChanged { order })
        },
        CancelDrag => {
            if state.cancel_drag() {
                log::debug!("module drag cancelled");
            }
            None
        },
        TileActivated { id } => {
            if state.is_dragging() {
                return None;
            }
            state
                .module(&id)
                .map(|module| ModulesEffect::OpenSection {
                    id: module.section.clone(),
                })
        },
    }
}

#[cfg(test)]
mod tests {
    use iced::Point;

    use super::apply;
    use crate::widgets::modules::event::{ModulesEffect, ModulesIntent};
    use crate::widgets::modules::model::Module;
    use crate::widgets::modules::state::ModulesState;

    fn state() -> ModulesState {
        ModulesState::new(vec![
            Module::new("m1", "One", "#111111", "box", "orders"),
            Module::new("m2", "Two", "#222222", "box", "users"),
            Module::new("m3", "Three", "#333333", "box", "reports"),
        ])
    }

    fn order(state: &ModulesState) -> Vec<String> {
        state.order()
    }

    fn press(state: &mut ModulesState, id: &str) {
        apply(state, ModulesIntent::CursorMoved {
            position: Point::new(10.0, 10.0),
        });
        apply(state, ModulesIntent::TileEntered { id: id.to_owned() });
        apply(state, ModulesIntent::HandlePressed { id: id.to_owned() });
    }

    fn drag_to(state: &mut ModulesState, from: &str, to: &str) {
        apply(state, ModulesIntent::CursorMoved {
            position: Point::new(60.0, 10.0),
        });
        apply(state, ModulesIntent::TileExited {
            id: from.to_owned(),
        });
        apply(state, ModulesIntent::TileEntered { id: to.to_owned() });
    }

    #[test]
    fn given_drag_past_threshold_when_released_on_other_tile_then_order_changes()
     {
        let mut state = state();
        press(&mut state, "m1");
        drag_to(&mut state, "m1", "m3");

        let effect = apply(
            &mut state,
            ModulesIntent::TileReleased {
                id: String::from("m3"),
            },
        );

        match effect {
            Some(ModulesEffect::OrderChanged { order }) => {
                assert_eq!(order, vec!["m2", "m3", "m1"]);
            },
            other => panic!("expected order change, got {other:?}"),
        }
        assert_eq!(order(&state), vec!["m2", "m3", "m1"]);
        assert!(state.gesture().is_none());
    }

    #[test]
    fn given_press_without_movement_when_released_then_order_is_unchanged() {
        let mut state = state();
        press(&mut state, "m1");
        apply(&mut state, ModulesIntent::TileEntered {
            id: String::from("m2"),
        });

        let effect = apply(
            &mut state,
            ModulesIntent::TileReleased {
                id: String::from("m2"),
            },
        );

        assert!(effect.is_none());
        assert_eq!(order(&state), vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn given_drag_released_on_source_when_finished_then_nothing_moves() {
        let mut state = state();
        press(&mut state, "m2");
        apply(&mut state, ModulesIntent::CursorMoved {
            position: Point::new(40.0, 40.0),
        });

        let effect = apply(
            &mut state,
            ModulesIntent::TileReleased {
                id: String::from("m2"),
            },
        );

        assert!(effect.is_none());
        assert_eq!(order(&state), vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn given_engaged_drag_when_cancelled_then_order_is_unchanged() {
        let mut state = state();
        press(&mut state, "m1");
        drag_to(&mut state, "m1", "m2");

        apply(&mut state, ModulesIntent::CancelDrag);
        let effect = apply(
            &mut state,
            ModulesIntent::TileReleased {
                id: String::from("m2"),
            },
        );

        assert!(effect.is_none());
        assert_eq!(order(&state), vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn given_background_release_when_pointer_left_tiles_then_drop_is_discarded()
     {
        let mut state = state();
        press(&mut state, "m1");
        drag_to(&mut state, "m1", "m2");
        apply(&mut state, ModulesIntent::TileExited {
            id: String::from("m2"),
        });

        let effect = apply(&mut state, ModulesIntent::BackgroundReleased);

        assert!(effect.is_none());
        assert_eq!(order(&state), vec!["m1", "m2", "m3"]);
        assert!(state.gesture().is_none());
    }

    #[test]
    fn given_background_release_over_tile_when_finished_then_tile_is_target() {
        let mut state = state();
        press(&mut state, "m3");
        drag_to(&mut state, "m3", "m1");

        let effect = apply(&mut state, ModulesIntent::BackgroundReleased);

        assert!(matches!(effect, Some(ModulesEffect::OrderChanged { .. })));
        assert_eq!(order(&state), vec!["m3", "m1", "m2"]);
    }

    #[test]
    fn given_drag_disabled_when_handle_pressed_then_no_gesture_starts() {
        let mut state = state();
        apply(&mut state, ModulesIntent::ToggleDragEnabled);
        assert!(!state.is_drag_enabled());

        press(&mut state, "m1");

        assert!(state.gesture().is_none());
    }

    #[test]
    fn given_active_drag_when_disabling_then_gesture_is_dropped() {
        let mut state = state();
        press(&mut state, "m1");

        apply(&mut state, ModulesIntent::ToggleDragEnabled);

        assert!(state.gesture().is_none());
    }

    #[test]
    fn given_tile_activation_when_idle_then_section_opens() {
        let mut state = state();

        let effect = apply(
            &mut state,
            ModulesIntent::TileActivated {
                id: String::from("m2"),
            },
        );

        match effect {
            Some(ModulesEffect::OpenSection { id }) => assert_eq!(id, "users"),
            other => panic!("expected open section, got {other:?}"),
        }
    }

    #[test]
    fn given_unknown_tile_when_activated_then_nothing_happens() {
        let mut state = state();

        let effect = apply(
            &mut state,
            ModulesIntent::TileActivated {
                id: String::from("gone"),
            },
        );

        assert!(effect.is_none());
    }
}
