use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::modules::{ModulesEffect, ModulesEvent, ModulesIntent};

/// Route a module grid event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: ModulesEvent) -> Task<AppEvent> {
    match event {
        ModulesEvent::Intent(intent) => route_intent(app, intent),
        ModulesEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, intent: ModulesIntent) -> Task<AppEvent> {
    app.widgets.modules.reduce(intent).map(AppEvent::Modules)
}

fn route_effect(effect: ModulesEffect) -> Task<AppEvent> {
    match effect {
        ModulesEffect::OpenSection { id } => {
            Task::done(AppEvent::Navigate { section: id })
        },
        ModulesEffect::OrderChanged { order } => {
            log::info!("module order changed: {}", order.join(", "));
            Task::none()
        },
    }
}
