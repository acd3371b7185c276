use crate::app::AppEvent;
use crate::widgets::modules::{ModulesEvent, ModulesIntent};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Determines how the event loop treats an incoming event while no session
/// is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionGuard {
    /// Let the event pass through to normal dispatch.
    Allow,
    /// Silently drop the event.
    Ignore,
}

/// Classify an incoming event against the session state.
///
/// Signed-out users only reach the login form, navigation (which resolves
/// to the login route) and the cleanup intents emitted on logout.
pub(crate) fn session_guard(
    event: &AppEvent,
    is_authenticated: bool,
) -> SessionGuard {
    use SessionGuard::*;

    if is_authenticated {
        return Allow;
    }

    match event {
        AppEvent::Auth(_) | AppEvent::Navigate { .. } => Allow,
        AppEvent::Window(_) | AppEvent::Keyboard(_) => Allow,
        AppEvent::Sidebar(SidebarEvent::Intent(SidebarIntent::Reset)) => Allow,
        AppEvent::Modules(ModulesEvent::Intent(ModulesIntent::CancelDrag)) => {
            Allow
        },
        AppEvent::Sidebar(_) | AppEvent::Modules(_) | AppEvent::Users(_) => {
            Ignore
        },
    }
}
