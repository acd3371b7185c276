//! Navigation menu helpers and an [`iced`] sidebar menu widget.
//!
//! The crate is split into three layers:
//! - model helpers ([`MenuNode`], [`ancestor_chain`], [`descendant_ids`],
//!   [`is_active_or_ancestor_of_active`]) that are UI-agnostic;
//! - the [`ExpansionState`] machine that tracks open parents and follows the
//!   active section, plus [`flatten_menu`] to turn both into visible rows;
//! - view helpers ([`MenuView`], [`MenuRowContext`]) that render rows in
//!   `iced`.
//!
//! See `examples/menu_view.rs` for a complete runnable example.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::widget::text;
//! use iced::Element;
//! use backoffice_ui_menu::{ExpansionState, MenuNode, MenuView};
//!
//! #[derive(Clone)]
//! enum Message {
//!     Select(String),
//!     Toggle(String),
//! }
//!
//! struct State {
//!     nodes: Vec<MenuNode>,
//!     expansion: ExpansionState,
//!     active: String,
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     MenuView::new(&state.nodes, &state.expansion, |ctx| {
//!         text(ctx.row.node.label()).into()
//!     })
//!     .active(Some(state.active.as_str()))
//!     .on_select(Message::Select)
//!     .on_toggle(Message::Toggle)
//!     .view()
//! }
//! ```

mod expansion;
mod model;
mod rows;
mod view;

pub use expansion::ExpansionState;
pub use model::{
    MenuNode, MenuNodeKind, ancestor_chain, descendant_ids, find_node,
    first_duplicate_id, is_active_or_ancestor_of_active,
};
pub use rows::{MenuRow, flatten_menu};
pub use view::{MenuRowAction, MenuRowContext, MenuView};
