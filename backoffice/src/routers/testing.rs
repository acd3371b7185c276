use iced::Point;

use crate::app::{App, AppEvent};
use crate::config::Catalog;
use crate::route::Route;
use crate::services::auth::{Role, Session, User};
use crate::widgets::auth::{AuthEvent, AuthIntent};
use crate::widgets::modules::{ModulesEvent, ModulesIntent};

/// Feed events through the root update loop. Follow-up tasks are dropped.
pub(crate) fn replay(
    app: &mut App,
    events: impl IntoIterator<Item = AppEvent>,
) {
    for event in events {
        let _ = app.update(event);
    }
}

/// App seeded from the built-in catalog with an open session on the
/// dashboard.
pub(crate) fn signed_in_app() -> App {
    let mut app = App::with_catalog(Catalog::default());
    let session = Session::new(User {
        name: String::from("Ada Admin"),
        email: String::from("admin@backoffice.local"),
        role: Role::Admin,
    });

    let intents = [
        AuthIntent::EmailChanged(String::from("admin@backoffice.local")),
        AuthIntent::PasswordChanged(String::from("admin")),
        AuthIntent::Submit,
        AuthIntent::LoginFinished {
            attempt: 1,
            result: Ok(session),
        },
    ];
    replay(
        &mut app,
        intents
            .into_iter()
            .map(|intent| AppEvent::Auth(AuthEvent::Intent(intent))),
    );
    app.route = Route::Dashboard {
        section: String::from("dashboard"),
    };

    app
}

/// Press the drag handle of module `id`.
pub(crate) fn press_module(app: &mut App, id: &str) {
    let intents = [
        ModulesIntent::CursorMoved {
            position: Point::new(10.0, 10.0),
        },
        ModulesIntent::HandlePressed { id: id.to_owned() },
    ];
    replay(
        app,
        intents
            .into_iter()
            .map(|intent| AppEvent::Modules(ModulesEvent::Intent(intent))),
    );
}

pub(crate) fn module_order(app: &App) -> Vec<&str> {
    app.widgets
        .modules
        .vm()
        .modules
        .iter()
        .map(|module| module.id.as_str())
        .collect()
}
