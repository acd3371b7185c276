use iced::Point;

/// Distance in logical pixels the pointer must travel before a press turns
/// into a drag.
pub const DRAG_THRESHOLD: f32 = 4.0;

/// Result of releasing a [`DragGesture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Released before the threshold was crossed.
    Click { source: String },
    /// Engaged gesture released over another item.
    Move { source: String, target: String },
    /// Engaged gesture released over its own item or over nothing.
    Discarded,
}

/// Pointer gesture started by pressing an item's drag handle.
///
/// The owner keeps it in an `Option`: `None` is the idle state. The gesture
/// is consumed by [`DragGesture::release`] and simply dropped on cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    source: String,
    origin: Point,
    over: Option<String>,
    engaged: bool,
}

impl DragGesture {
    /// Start a gesture on `source` with the pointer at `origin`.
    pub fn press(source: impl Into<String>, origin: Point) -> Self {
        Self {
            source: source.into(),
            origin,
            over: None,
            engaged: false,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Item currently under the pointer, if any.
    pub fn over(&self) -> Option<&str> {
        self.over.as_deref()
    }

    /// Whether the pointer has travelled past [`DRAG_THRESHOLD`].
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Item that would receive the drop right now.
    pub fn drop_target(&self) -> Option<&str> {
        if !self.engaged {
            return None;
        }

        self.over().filter(|over| *over != self.source)
    }

    /// Track the pointer. Returns `true` on the move that engages the drag.
    pub fn cursor_moved(&mut self, position: Point) -> bool {
        if self.engaged {
            return false;
        }

        let dx = position.x - self.origin.x;
        let dy = position.y - self.origin.y;
        if dx * dx + dy * dy >= DRAG_THRESHOLD * DRAG_THRESHOLD {
            self.engaged = true;
            return true;
        }

        false
    }

    /// Pointer entered the item `id`.
    pub fn enter(&mut self, id: impl Into<String>) {
        self.over = Some(id.into());
    }

    /// Pointer left the item `id`. Leaving a different item is ignored.
    pub fn exit(&mut self, id: &str) {
        if self.over.as_deref() == Some(id) {
            self.over = None;
        }
    }

    /// Finish the gesture over `target`.
    pub fn release(self, target: Option<&str>) -> DragOutcome {
        if !self.engaged {
            return DragOutcome::Click {
                source: self.source,
            };
        }

        match target {
            Some(target) if target != self.source => DragOutcome::Move {
                source: self.source,
                target: target.to_owned(),
            },
            _ => DragOutcome::Discarded,
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::Point;

    use super::{DRAG_THRESHOLD, DragGesture, DragOutcome};

    fn engaged(source: &str) -> DragGesture {
        let mut gesture = DragGesture::press(source, Point::ORIGIN);
        gesture.cursor_moved(Point::new(DRAG_THRESHOLD, 0.0));
        gesture
    }

    #[test]
    fn given_small_movement_when_released_then_gesture_is_a_click() {
        let mut gesture = DragGesture::press("m1", Point::new(10.0, 10.0));

        assert!(!gesture.cursor_moved(Point::new(12.0, 11.0)));
        assert!(!gesture.is_engaged());

        assert_eq!(
            gesture.release(Some("m2")),
            DragOutcome::Click {
                source: String::from("m1")
            }
        );
    }

    #[test]
    fn given_threshold_distance_when_moved_then_gesture_engages_once() {
        let mut gesture = DragGesture::press("m1", Point::new(10.0, 10.0));

        assert!(gesture.cursor_moved(Point::new(13.0, 14.0)));
        assert!(gesture.is_engaged());
        assert!(!gesture.cursor_moved(Point::new(40.0, 40.0)));
    }

    #[test]
    fn given_engaged_gesture_when_released_on_other_item_then_move_is_reported()
    {
        let gesture = engaged("m1");

        assert_eq!(
            gesture.release(Some("m3")),
            DragOutcome::Move {
                source: String::from("m1"),
                target: String::from("m3"),
            }
        );
    }

    #[test]
    fn given_engaged_gesture_when_released_on_itself_or_nothing_then_discarded()
    {
        assert_eq!(engaged("m1").release(Some("m1")), DragOutcome::Discarded);
        assert_eq!(engaged("m1").release(None), DragOutcome::Discarded);
    }

    #[test]
    fn given_hover_changes_when_tracking_then_drop_target_follows_pointer() {
        let mut gesture = DragGesture::press("m1", Point::ORIGIN);
        gesture.enter("m2");
        assert_eq!(gesture.drop_target(), None);

        gesture.cursor_moved(Point::new(0.0, 10.0));
        assert_eq!(gesture.drop_target(), Some("m2"));

        gesture.exit("m3");
        assert_eq!(gesture.over(), Some("m2"));

        gesture.exit("m2");
        assert_eq!(gesture.drop_target(), None);

        gesture.enter("m1");
        assert_eq!(gesture.drop_target(), None);
    }
}
