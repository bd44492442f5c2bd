//! Cyclic focus trap for modal dialogs.
//!
//! The ring is cleared and re-filled on every frame from the widgets the
//! dialog actually rendered, so dynamically changing form content stays
//! trapped without any caching.

use egui::Id;

#[derive(Default)]
pub struct FocusRing {
    ids: Vec<Id>,
}

impl FocusRing {
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Records a focusable widget, in render order.
    pub fn track(&mut self, response: &egui::Response) {
        self.ids.push(response.id);
    }

    pub fn track_id(&mut self, id: Id) {
        self.ids.push(id);
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn first(&self) -> Option<Id> {
        self.ids.first().copied()
    }

    pub fn get(&self, index: usize) -> Option<Id> {
        self.ids.get(index).copied()
    }

    /// The id to focus after a Tab (or Shift+Tab when `backwards`) press.
    ///
    /// Focus wraps cyclically: forward from the last element lands on the
    /// first, backward from the first lands on the last. When nothing inside
    /// the ring holds focus, the first (or last) element is chosen.
    pub fn next_focus(&self, current: Option<Id>, backwards: bool) -> Option<Id> {
        if self.ids.is_empty() {
            return None;
        }
        let len = self.ids.len();
        let position = current.and_then(|id| self.ids.iter().position(|&other| other == id));
        let index = match position {
            None if backwards => len - 1,
            None => 0,
            Some(i) if backwards => (i + len - 1) % len,
            Some(i) => (i + 1) % len,
        };
        Some(self.ids[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_of(n: usize) -> (FocusRing, Vec<Id>) {
        let ids: Vec<Id> = (0..n).map(|i| Id::new(("focus-test", i))).collect();
        let mut ring = FocusRing::default();
        for &id in &ids {
            ring.track_id(id);
        }
        (ring, ids)
    }

    #[test]
    fn test_tab_from_last_wraps_to_first() {
        let (ring, ids) = ring_of(3);
        assert_eq!(ring.next_focus(Some(ids[2]), false), Some(ids[0]));
    }

    #[test]
    fn test_shift_tab_from_first_wraps_to_last() {
        let (ring, ids) = ring_of(3);
        assert_eq!(ring.next_focus(Some(ids[0]), true), Some(ids[2]));
    }

    #[test]
    fn test_tab_moves_forward_in_the_middle() {
        let (ring, ids) = ring_of(3);
        assert_eq!(ring.next_focus(Some(ids[0]), false), Some(ids[1]));
        assert_eq!(ring.next_focus(Some(ids[1]), true), Some(ids[0]));
    }

    #[test]
    fn test_unfocused_starts_at_the_edges() {
        let (ring, ids) = ring_of(2);
        assert_eq!(ring.next_focus(None, false), Some(ids[0]));
        assert_eq!(ring.next_focus(None, true), Some(ids[1]));
        // focus held outside the ring behaves like no focus at all
        assert_eq!(ring.next_focus(Some(Id::new("elsewhere")), false), Some(ids[0]));
    }

    #[test]
    fn test_empty_ring_traps_nothing() {
        let ring = FocusRing::default();
        assert_eq!(ring.next_focus(None, false), None);
        assert_eq!(ring.next_focus(Some(Id::new("x")), true), None);
    }

    #[test]
    fn test_single_element_cycles_to_itself() {
        let (ring, ids) = ring_of(1);
        assert_eq!(ring.next_focus(Some(ids[0]), false), Some(ids[0]));
        assert_eq!(ring.next_focus(Some(ids[0]), true), Some(ids[0]));
    }

    #[test]
    fn test_clear_recomputes_from_scratch() {
        let (mut ring, ids) = ring_of(2);
        ring.clear();
        assert!(ring.is_empty());
        ring.track_id(ids[1]);
        assert_eq!(ring.first(), Some(ids[1]));
        assert_eq!(ring.next_focus(Some(ids[1]), false), Some(ids[1]));
    }
}
