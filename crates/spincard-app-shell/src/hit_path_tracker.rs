//! Pointer capture for gestures.
//!
//! A press records the ids of every node under the pointer. Moves and the
//! release are routed to those same nodes, looked up again in whatever scene
//! is current, so a drag keeps its target after the content re-lays out and
//! even after the pointer leaves the node's bounds. The press position is
//! kept too, so a release can tell a click from a drag.

use std::collections::HashMap;

use spincard_core::NodeId;
use spincard_ui_graphics::Point;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PointerId(pub u32);

impl PointerId {
    /// Mouse or first touch. The desktop shell only ever tracks this one.
    pub const PRIMARY: PointerId = PointerId(0);
}

struct HitPath {
    node_ids: Vec<NodeId>,
    press_position: Point,
}

/// Node ids captured on press, topmost first, per pointer.
#[derive(Default)]
pub struct HitPathTracker {
    paths: HashMap<PointerId, HitPath>,
}

impl HitPathTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a gesture. `node_ids` must be ordered top to bottom so
    /// consumption stops delivery the same way it did for the press.
    pub fn add_hit_path(&mut self, pointer: PointerId, node_ids: Vec<NodeId>, position: Point) {
        self.paths.insert(
            pointer,
            HitPath {
                node_ids,
                press_position: position,
            },
        );
    }

    pub fn get_path(&self, pointer: PointerId) -> Option<&[NodeId]> {
        self.paths.get(&pointer).map(|path| path.node_ids.as_slice())
    }

    pub fn press_position(&self, pointer: PointerId) -> Option<Point> {
        self.paths.get(&pointer).map(|path| path.press_position)
    }

    /// Ends the gesture for `pointer`.
    pub fn remove_path(&mut self, pointer: PointerId) -> Option<Vec<NodeId>> {
        self.paths.remove(&pointer).map(|path| path.node_ids)
    }

    pub fn has_path(&self, pointer: PointerId) -> bool {
        self.paths.contains_key(&pointer)
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_records_path_and_release_ends_it() {
        let mut tracker = HitPathTracker::new();
        tracker.add_hit_path(PointerId::PRIMARY, vec![4, 2], Point::new(10.0, 20.0));

        assert!(tracker.has_path(PointerId::PRIMARY));
        assert_eq!(tracker.get_path(PointerId::PRIMARY), Some(&[4, 2][..]));
        assert_eq!(
            tracker.press_position(PointerId::PRIMARY),
            Some(Point::new(10.0, 20.0))
        );

        assert_eq!(tracker.remove_path(PointerId::PRIMARY), Some(vec![4, 2]));
        assert!(tracker.get_path(PointerId::PRIMARY).is_none());
        assert!(tracker.press_position(PointerId::PRIMARY).is_none());
        assert!(tracker.is_empty());
    }

    #[test]
    fn new_press_replaces_the_previous_path() {
        let mut tracker = HitPathTracker::new();
        tracker.add_hit_path(PointerId::PRIMARY, vec![1], Point::ZERO);
        tracker.add_hit_path(PointerId::PRIMARY, vec![7, 3], Point::new(5.0, 5.0));
        assert_eq!(tracker.get_path(PointerId::PRIMARY), Some(&[7, 3][..]));
        assert_eq!(
            tracker.press_position(PointerId::PRIMARY),
            Some(Point::new(5.0, 5.0))
        );
    }

    #[test]
    fn clear_drops_every_pointer() {
        let mut tracker = HitPathTracker::new();
        tracker.add_hit_path(PointerId(0), vec![1], Point::ZERO);
        tracker.add_hit_path(PointerId(1), vec![2], Point::ZERO);

        tracker.clear();
        assert!(!tracker.has_path(PointerId(0)));
        assert!(!tracker.has_path(PointerId(1)));
    }
}
