//! Drag gesture sensors.
//!
//! A sensor turns raw input into drag lifecycle events. The pointer sensor
//! follows the mouse and only starts a drag once the pointer has travelled
//! far enough from where the button went down, so plain clicks still select.
//! The keyboard sensor moves the held card in whole card or column steps.
//!
//! Both feed a [`DragSession`], which carries what the reconciliation
//! handlers need: the active id, the cumulative delta and the current
//! collision target.

use dragboard_protocol::{Delta, DragEndEvent, DragOverEvent, Id};
use ratatui::layout::{Position, Rect};

use crate::collision::DragRect;

/// Which sensor drives a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Pointer,
    Keyboard,
}

/// An in-progress drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// The item being dragged.
    pub active: Id,
    /// The sensor that started the drag.
    pub sensor: SensorKind,
    /// The card's rectangle when the drag started.
    pub initial: DragRect,
    /// Displacement since the drag started.
    pub delta: Delta,
    /// The droppable currently under the card.
    pub over: Option<Id>,
}

impl DragSession {
    /// Starts a session for `active`, initially hovering itself.
    #[must_use]
    pub fn new(active: Id, sensor: SensorKind, initial: Rect) -> Self {
        Self {
            over: Some(active.clone()),
            active,
            sensor,
            initial: DragRect::from(initial),
            delta: Delta::default(),
        }
    }

    /// The card's rectangle at the current delta; what collision detection measures.
    #[must_use]
    pub fn rect(&self) -> DragRect {
        self.initial.translate(self.delta)
    }

    #[must_use]
    pub fn over_event(&self) -> DragOverEvent {
        DragOverEvent::new(self.active.clone(), self.over.clone(), self.delta)
    }

    #[must_use]
    pub fn end_event(&self) -> DragEndEvent {
        DragEndEvent::new(self.active.clone(), self.over.clone())
    }
}

/// What the pointer sensor reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    /// The activation distance was crossed; a drag begins.
    Start {
        active: Id,
        initial: Rect,
        delta: Delta,
    },
    /// The active drag moved.
    Move { delta: Delta },
    /// The button was released during an active drag.
    End { delta: Delta },
    /// The button was released without the drag ever activating.
    Click { item: Id },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Press {
    item: Id,
    rect: Rect,
    origin: Position,
}

/// Mouse drag sensor with an activation distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerSensor {
    activation_distance: u16,
    press: Option<Press>,
    active: bool,
}

impl PointerSensor {
    /// Creates a sensor that activates after `activation_distance` cells.
    ///
    /// A distance of zero activates on the first motion event.
    #[must_use]
    pub const fn new(activation_distance: u16) -> Self {
        Self {
            activation_distance,
            press: None,
            active: false,
        }
    }

    /// Returns `true` once the press has turned into a drag.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Records a button press on the card showing `item`.
    pub fn press(&mut self, item: Id, rect: Rect, origin: Position) {
        self.press = Some(Press { item, rect, origin });
        self.active = false;
    }

    /// Handles pointer motion with the button held.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratatui::layout::{Position, Rect};
    /// use dragboard_protocol::Delta;
    /// use dragboard_tui::sensor::{PointerEvent, PointerSensor};
    ///
    /// let mut sensor = PointerSensor::new(2);
    /// sensor.press("item-1".into(), Rect::new(2, 1, 20, 3), Position::new(5, 2));
    ///
    /// // One cell is below the threshold.
    /// assert_eq!(sensor.motion(Position::new(6, 2)), None);
    /// assert!(matches!(
    ///     sensor.motion(Position::new(7, 2)),
    ///     Some(PointerEvent::Start { delta: Delta { x: 2, y: 0 }, .. })
    /// ));
    /// ```
    pub fn motion(&mut self, position: Position) -> Option<PointerEvent> {
        let press = self.press.as_ref()?;
        let delta = displacement(press.origin, position);

        if self.active {
            return Some(PointerEvent::Move { delta });
        }

        let travelled = delta.x.unsigned_abs().max(delta.y.unsigned_abs());
        if travelled < u32::from(self.activation_distance) {
            return None;
        }

        self.active = true;
        Some(PointerEvent::Start {
            active: press.item.clone(),
            initial: press.rect,
            delta,
        })
    }

    /// Handles the button release, ending the gesture.
    pub fn release(&mut self, position: Position) -> Option<PointerEvent> {
        let press = self.press.take()?;
        let was_active = std::mem::take(&mut self.active);
        if was_active {
            Some(PointerEvent::End {
                delta: displacement(press.origin, position),
            })
        } else {
            Some(PointerEvent::Click { item: press.item })
        }
    }

    /// Forgets the current press. Returns `true` if a drag was active.
    pub fn cancel(&mut self) -> bool {
        self.press = None;
        std::mem::take(&mut self.active)
    }
}

fn displacement(origin: Position, position: Position) -> Delta {
    Delta::new(
        i32::from(position.x) - i32::from(origin.x),
        i32::from(position.y) - i32::from(origin.y),
    )
}

/// Direction of a keyboard drag step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Keyboard drag sensor.
///
/// Each step moves the held card by one card height or one column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardSensor {
    /// Vertical step in rows.
    pub row_step: u16,
    /// Horizontal step in columns.
    pub column_step: u16,
}

impl KeyboardSensor {
    #[must_use]
    pub const fn new(row_step: u16, column_step: u16) -> Self {
        Self {
            row_step,
            column_step,
        }
    }

    /// Returns `delta` moved one step in `direction`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_protocol::Delta;
    /// use dragboard_tui::sensor::{Direction, KeyboardSensor};
    ///
    /// let sensor = KeyboardSensor::new(3, 30);
    /// let delta = sensor.step(Delta::default(), Direction::Right);
    /// assert_eq!(sensor.step(delta, Direction::Up), Delta::new(30, -3));
    /// ```
    #[must_use]
    pub fn step(self, delta: Delta, direction: Direction) -> Delta {
        let dy = i32::from(self.row_step);
        let dx = i32::from(self.column_step);
        match direction {
            Direction::Up => Delta::new(delta.x, delta.y - dy),
            Direction::Down => Delta::new(delta.x, delta.y + dy),
            Direction::Left => Delta::new(delta.x - dx, delta.y),
            Direction::Right => Delta::new(delta.x + dx, delta.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(distance: u16) -> PointerSensor {
        let mut sensor = PointerSensor::new(distance);
        sensor.press("item-1".into(), Rect::new(2, 1, 20, 3), Position::new(10, 2));
        sensor
    }

    #[test]
    fn motion_without_press_is_ignored() {
        let mut sensor = PointerSensor::new(1);
        assert_eq!(sensor.motion(Position::new(5, 5)), None);
        assert_eq!(sensor.release(Position::new(5, 5)), None);
    }

    #[test]
    fn activation_uses_chebyshev_distance() {
        let mut sensor = pressed(3);
        // Diagonal two cells: Chebyshev distance 2.
        assert_eq!(sensor.motion(Position::new(12, 4)), None);
        assert!(!sensor.is_active());

        let event = sensor.motion(Position::new(13, 3)).unwrap();
        assert_eq!(
            event,
            PointerEvent::Start {
                active: Id::from("item-1"),
                initial: Rect::new(2, 1, 20, 3),
                delta: Delta::new(3, 1),
            }
        );
        assert!(sensor.is_active());
    }

    #[test]
    fn zero_distance_activates_immediately() {
        let mut sensor = pressed(0);
        assert!(matches!(
            sensor.motion(Position::new(10, 2)),
            Some(PointerEvent::Start { .. })
        ));
    }

    #[test]
    fn moves_report_cumulative_delta() {
        let mut sensor = pressed(1);
        sensor.motion(Position::new(11, 2));
        assert_eq!(
            sensor.motion(Position::new(30, 9)),
            Some(PointerEvent::Move {
                delta: Delta::new(20, 7)
            })
        );
        // Moving back past the origin goes negative.
        assert_eq!(
            sensor.motion(Position::new(4, 0)),
            Some(PointerEvent::Move {
                delta: Delta::new(-6, -2)
            })
        );
    }

    #[test]
    fn release_without_activation_is_a_click() {
        let mut sensor = pressed(2);
        sensor.motion(Position::new(11, 2));
        assert_eq!(
            sensor.release(Position::new(11, 2)),
            Some(PointerEvent::Click {
                item: Id::from("item-1")
            })
        );
        // The press is consumed.
        assert_eq!(sensor.release(Position::new(11, 2)), None);
    }

    #[test]
    fn release_after_activation_ends_the_drag() {
        let mut sensor = pressed(1);
        sensor.motion(Position::new(15, 2));
        assert_eq!(
            sensor.release(Position::new(16, 5)),
            Some(PointerEvent::End {
                delta: Delta::new(6, 3)
            })
        );
        assert!(!sensor.is_active());
        assert_eq!(sensor.motion(Position::new(20, 5)), None);
    }

    #[test]
    fn cancel_reports_whether_drag_was_active() {
        let mut sensor = pressed(1);
        assert!(!sensor.cancel());

        let mut sensor = pressed(1);
        sensor.motion(Position::new(15, 2));
        assert!(sensor.cancel());
        assert_eq!(sensor.motion(Position::new(16, 2)), None);
    }

    #[test]
    fn keyboard_steps() {
        let sensor = KeyboardSensor::new(3, 25);
        let mut delta = Delta::default();
        delta = sensor.step(delta, Direction::Down);
        delta = sensor.step(delta, Direction::Down);
        assert_eq!(delta, Delta::new(0, 6));
        delta = sensor.step(delta, Direction::Left);
        assert_eq!(delta, Delta::new(-25, 6));
    }

    #[test]
    fn session_starts_over_itself() {
        let session = DragSession::new(
            "item-2".into(),
            SensorKind::Keyboard,
            Rect::new(2, 4, 20, 3),
        );
        assert_eq!(session.over, Some(Id::from("item-2")));
        assert_eq!(session.rect(), DragRect::new(2, 4, 20, 3));

        let end = session.end_event();
        assert_eq!(end.active, "item-2");
        assert_eq!(end.over, Some(Id::from("item-2")));
    }

    #[test]
    fn session_rect_follows_delta() {
        let mut session =
            DragSession::new("item-2".into(), SensorKind::Pointer, Rect::new(2, 4, 20, 3));
        session.delta = Delta::new(-5, 10);
        assert_eq!(session.rect(), DragRect::new(-3, 14, 20, 3));
        assert_eq!(session.over_event().delta, Delta::new(-5, 10));
    }
}
