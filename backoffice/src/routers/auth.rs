use iced::Task;

use crate::app::{App, AppEvent};
use crate::route::Route;
use crate::widgets::auth::{AuthCtx, AuthEffect, AuthEvent, AuthIntent};
use crate::widgets::modules::{ModulesEvent, ModulesIntent};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Route an auth event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: AuthEvent) -> Task<AppEvent> {
    match event {
        AuthEvent::Intent(intent) => route_intent(app, intent),
        AuthEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_intent(app: &mut App, intent: AuthIntent) -> Task<AppEvent> {
    let ctx = AuthCtx {
        provider: &app.provider,
    };

    app.widgets.auth.reduce(intent, &ctx).map(AppEvent::Auth)
}

fn route_effect(app: &mut App, effect: AuthEffect) -> Task<AppEvent> {
    match effect {
        AuthEffect::Authenticated { user } => {
            log::info!("{} signed in as {}", user.email, user.role.label());
            Task::done(AppEvent::Navigate {
                section: app.default_section.clone(),
            })
        },
        AuthEffect::LoggedOut => {
            log::info!("signed out");
            Task::batch(sign_out(app).into_iter().map(Task::done))
        },
    }
}

/// Return to the login route and list the cleanup for session-bound state.
fn sign_out(app: &mut App) -> [AppEvent; 2] {
    app.route = Route::Login;
    [
        AppEvent::Sidebar(SidebarEvent::Intent(SidebarIntent::Reset)),
        AppEvent::Modules(ModulesEvent::Intent(ModulesIntent::CancelDrag)),
    ]
}

#[cfg(test)]
mod tests {
    use super::sign_out;
    use crate::app::AppEvent;
    use crate::route::Route;
    use crate::routers::testing::{press_module, replay, signed_in_app};
    use crate::widgets::auth::{AuthEvent, AuthIntent};
    use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

    #[test]
    fn given_busy_dashboard_when_signed_out_then_sidebar_and_drag_reset() {
        let mut app = signed_in_app();
        replay(
            &mut app,
            [
                SidebarIntent::ActiveSectionChanged {
                    id: String::from("refunds"),
                },
                SidebarIntent::ToggleCollapsed,
            ]
            .into_iter()
            .map(|intent| AppEvent::Sidebar(SidebarEvent::Intent(intent))),
        );
        press_module(&mut app, "orders");
        replay(
            &mut app,
            [AppEvent::Auth(AuthEvent::Intent(AuthIntent::Logout))],
        );
        assert!(!app.widgets.auth.is_authenticated());

        let events = sign_out(&mut app);
        replay(&mut app, events);

        assert_eq!(app.route, Route::Login);
        let vm = app.widgets.sidebar.vm();
        assert_eq!(vm.active, None);
        assert!(!vm.collapsed);
        assert!(!vm.expansion.is_expanded("sales"));
        assert!(!app.widgets.modules.has_gesture());
    }
}
