//! Closest-corners collision detection.
//!
//! While a card is dragged, its translated rectangle is compared with every
//! droppable. The score of a droppable is the sum of the distances between
//! matching corners of the two rectangles; the lowest score is the target.
//! Corner distance keeps tall column bodies and short cards comparable,
//! which plain center distance does not.

use dragboard_protocol::{Delta, Id};
use ratatui::layout::Rect;

/// A rectangle in signed cell coordinates.
///
/// A dragged card may be pushed past the top or left edge of the screen, so
/// its position can be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl DragRect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the rectangle moved by `delta`.
    #[must_use]
    pub const fn translate(self, delta: Delta) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..self
        }
    }

    /// Top-left, top-right, bottom-left, bottom-right.
    fn corners(self) -> [(f64, f64); 4] {
        let left = f64::from(self.x);
        let top = f64::from(self.y);
        let right = left + f64::from(self.width);
        let bottom = top + f64::from(self.height);
        [(left, top), (right, top), (left, bottom), (right, bottom)]
    }

    /// Returns the part of this rectangle inside `bounds`, if any.
    #[must_use]
    pub fn clip(self, bounds: Rect) -> Option<Rect> {
        let left = self.x.max(i32::from(bounds.x));
        let top = self.y.max(i32::from(bounds.y));
        let right = (self.x + i32::from(self.width)).min(i32::from(bounds.right()));
        let bottom = (self.y + i32::from(self.height)).min(i32::from(bounds.bottom()));
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(
            u16::try_from(left).ok()?,
            u16::try_from(top).ok()?,
            u16::try_from(right - left).ok()?,
            u16::try_from(bottom - top).ok()?,
        ))
    }
}

impl From<Rect> for DragRect {
    fn from(rect: Rect) -> Self {
        Self::new(i32::from(rect.x), i32::from(rect.y), rect.width, rect.height)
    }
}

/// Something a card can be dropped onto: a column body or another card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Droppable {
    pub id: Id,
    pub rect: DragRect,
}

impl Droppable {
    #[must_use]
    pub fn new(id: impl Into<Id>, rect: DragRect) -> Self {
        Self {
            id: id.into(),
            rect,
        }
    }
}

/// The winning droppable and its score.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    pub id: Id,
    pub distance: f64,
}

/// Sum of distances between the matching corners of two rectangles.
#[must_use]
pub fn corner_distance(a: DragRect, b: DragRect) -> f64 {
    a.corners()
        .iter()
        .zip(b.corners().iter())
        .map(|(&(ax, ay), &(bx, by))| (ax - bx).hypot(ay - by))
        .sum()
}

/// Returns the droppable closest to `active` by corner distance.
///
/// Ties go to the droppable listed first. Returns `None` only when there
/// are no droppables.
///
/// # Examples
///
/// ```
/// use dragboard_tui::collision::{DragRect, Droppable, closest_corners};
///
/// let droppables = [
///     Droppable::new("left", DragRect::new(0, 0, 10, 3)),
///     Droppable::new("right", DragRect::new(20, 0, 10, 3)),
/// ];
/// let hit = closest_corners(DragRect::new(17, 1, 10, 3), &droppables).unwrap();
/// assert_eq!(hit.id, "right");
/// ```
#[must_use]
pub fn closest_corners(active: DragRect, droppables: &[Droppable]) -> Option<Collision> {
    droppables
        .iter()
        .map(|droppable| Collision {
            id: droppable.id.clone(),
            distance: corner_distance(active, droppable.rect),
        })
        .reduce(|best, next| {
            if next.distance < best.distance {
                next
            } else {
                best
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identical_rects_have_zero_distance() {
        let rect = DragRect::new(3, 4, 10, 3);
        assert!(corner_distance(rect, rect).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_of_pure_translation() {
        // Every corner moves by (3, 4), so each contributes 5.
        let a = DragRect::new(0, 0, 10, 3);
        let b = a.translate(Delta::new(3, 4));
        assert!((corner_distance(a, b) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn tie_goes_to_first_droppable() {
        let droppables = [
            Droppable::new("first", DragRect::new(0, 0, 10, 3)),
            Droppable::new("second", DragRect::new(0, 6, 10, 3)),
        ];
        // Exactly halfway between the two.
        let hit = closest_corners(DragRect::new(0, 3, 10, 3), &droppables).unwrap();
        assert_eq!(hit.id, "first");
    }

    #[test]
    fn card_beats_enclosing_column_when_aligned() {
        let droppables = [
            Droppable::new("column-1", DragRect::new(1, 1, 29, 18)),
            Droppable::new("item-1", DragRect::new(2, 1, 27, 3)),
            Droppable::new("item-2", DragRect::new(2, 4, 27, 3)),
        ];
        let hit = closest_corners(DragRect::new(2, 5, 27, 3), &droppables).unwrap();
        assert_eq!(hit.id, "item-2");
    }

    #[test]
    fn empty_droppables_yield_nothing() {
        assert!(closest_corners(DragRect::new(0, 0, 1, 1), &[]).is_none());
    }

    #[test]
    fn clip_inside_and_outside() {
        let bounds = Rect::new(0, 0, 20, 10);
        assert_eq!(
            DragRect::new(2, 2, 5, 3).clip(bounds),
            Some(Rect::new(2, 2, 5, 3))
        );
        assert_eq!(
            DragRect::new(-2, 8, 5, 3).clip(bounds),
            Some(Rect::new(0, 8, 3, 2))
        );
        assert_eq!(DragRect::new(25, 2, 5, 3).clip(bounds), None);
        assert_eq!(DragRect::new(-10, -10, 5, 3).clip(bounds), None);
    }

    proptest! {
        #[test]
        fn winner_has_minimal_distance(
            active in (-20i32..120, -20i32..40, 1u16..30, 1u16..10),
            rects in prop::collection::vec((0i32..100, 0i32..30, 1u16..30, 1u16..20), 1..12),
        ) {
            let active = DragRect::new(active.0, active.1, active.2, active.3);
            let droppables: Vec<Droppable> = rects
                .iter()
                .enumerate()
                .map(|(i, &(x, y, w, h))| {
                    Droppable::new(format!("d{i}"), DragRect::new(x, y, w, h))
                })
                .collect();

            let hit = closest_corners(active, &droppables).unwrap();
            for droppable in &droppables {
                prop_assert!(hit.distance <= corner_distance(active, droppable.rect));
            }
        }
    }
}
