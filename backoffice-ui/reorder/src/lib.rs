//! Reorderable collections and the drag gesture that drives them.
//!
//! - [`move_element`] is the pure index transform behind every reorder;
//! - [`ReorderableCollection`] resolves item ids to indices and swaps in the
//!   reordered vector in one step;
//! - [`DragGesture`] tracks a handle press until it becomes a click, a move
//!   or nothing at all.
//!
//! ```
//! use backoffice_ui_reorder::{DragGesture, DragOutcome};
//! use iced::Point;
//!
//! let mut gesture = DragGesture::press("reports", Point::ORIGIN);
//! gesture.cursor_moved(Point::new(12.0, 0.0));
//! gesture.enter("users");
//!
//! assert_eq!(
//!     gesture.release(Some("users")),
//!     DragOutcome::Move {
//!         source: "reports".into(),
//!         target: "users".into(),
//!     }
//! );
//! ```

mod collection;
mod gesture;

pub use collection::{Reorderable, ReorderableCollection, move_element};
pub use gesture::{DRAG_THRESHOLD, DragGesture, DragOutcome};
