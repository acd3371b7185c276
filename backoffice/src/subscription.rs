use iced::{Subscription, window};

use crate::app::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(_app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);

    Subscription::batch(vec![win_subs, key_subs])
}
