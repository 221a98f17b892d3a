//! Window stack manager: the single source of truth for open windows and their z-order.
//!
//! Records keep insertion order (which is also taskbar order). Stacking is expressed only
//! through `z_index`, issued from a counter that never decreases, so the most recently focused
//! window always holds the unique maximum.

use crate::{
    geometry,
    model::{Point, Size, Viewport, WindowId, WindowRecord, Z_INDEX_BASE},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ordered collection of open windows plus the monotonic stacking counter.
pub struct WindowStack {
    windows: Vec<WindowRecord>,
    next_z_index: u64,
    viewport: Viewport,
}

impl Default for WindowStack {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl WindowStack {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            windows: Vec::new(),
            next_z_index: Z_INDEX_BASE,
            viewport,
        }
    }

    /// Records in insertion order.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn get(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == id)
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Highest z-index issued so far.
    pub fn last_z_index(&self) -> u64 {
        self.next_z_index
    }

    /// Records the new viewport and re-derives the geometry of every maximized window.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if self.viewport == viewport {
            return false;
        }
        self.viewport = viewport;
        let rect = geometry::maximized_rect(viewport);
        for window in self.windows.iter_mut().filter(|w| w.is_maximized) {
            window.position = rect.position;
            window.size = rect.size;
        }
        true
    }

    /// Appends a new frontmost window. Returns `false` (and changes nothing) if `id` is open.
    pub fn open(&mut self, id: WindowId, title: impl Into<String>, position: Point, size: Size) -> bool {
        if self.contains(&id) {
            return false;
        }
        let z_index = self.issue_z_index();
        self.windows.push(WindowRecord {
            id,
            title: title.into(),
            is_minimized: false,
            is_maximized: false,
            z_index,
            position,
            size,
            saved_position: None,
            saved_size: None,
        });
        true
    }

    /// Removes and returns the record for `id`.
    pub fn close(&mut self, id: &WindowId) -> Option<WindowRecord> {
        let index = self.windows.iter().position(|w| &w.id == id)?;
        Some(self.windows.remove(index))
    }

    /// Raises `id` to the front. Always consumes a counter tick, even if already frontmost.
    pub fn focus(&mut self, id: &WindowId) -> bool {
        if !self.contains(id) {
            return false;
        }
        let z_index = self.issue_z_index();
        match self.find_mut(id) {
            Some(window) => {
                window.z_index = z_index;
                true
            }
            None => false,
        }
    }

    /// Hides `id`. Stacking priority and the maximize flag are left as they are.
    pub fn minimize(&mut self, id: &WindowId) -> bool {
        let Some(window) = self.find_mut(id) else {
            return false;
        };
        window.is_minimized = true;
        true
    }

    /// Snapshots the free geometry and fills the work area. No-op if already maximized.
    pub fn maximize(&mut self, id: &WindowId) -> bool {
        let rect = geometry::maximized_rect(self.viewport);
        let Some(window) = self.find_mut(id) else {
            return false;
        };
        if window.is_maximized {
            return false;
        }
        window.saved_position = Some(window.position);
        window.saved_size = Some(window.size);
        window.is_maximized = true;
        window.position = rect.position;
        window.size = rect.size;
        true
    }

    /// Leaves maximized state, returning to the snapshot taken by [`Self::maximize`].
    pub fn restore(&mut self, id: &WindowId) -> bool {
        let Some(window) = self.find_mut(id) else {
            return false;
        };
        if !window.is_maximized {
            return false;
        }
        window.is_maximized = false;
        if let Some(position) = window.saved_position.take() {
            window.position = position;
        }
        if let Some(size) = window.saved_size.take() {
            window.size = size;
        }
        true
    }

    /// Shows a minimized window again and brings it to the front.
    pub fn restore_from_minimize(&mut self, id: &WindowId) -> bool {
        let Some(window) = self.find_mut(id) else {
            return false;
        };
        window.is_minimized = false;
        self.focus(id)
    }

    /// Stores a clamped position. Rejected while the window is maximized.
    pub fn set_position(&mut self, id: &WindowId, x: i32, y: i32) -> bool {
        let viewport = self.viewport;
        let Some(window) = self.find_mut(id) else {
            return false;
        };
        if window.is_maximized {
            return false;
        }
        window.position = geometry::clamp_drag(Point::new(x, y), window.size, viewport);
        true
    }

    /// The visible window with the highest stacking priority.
    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.is_minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| &w.id)
    }

    /// Records sorted back-to-front.
    pub fn z_ordered(&self) -> Vec<&WindowRecord> {
        let mut ordered: Vec<&WindowRecord> = self.windows.iter().collect();
        ordered.sort_by_key(|w| w.z_index);
        ordered
    }

    fn find_mut(&mut self, id: &WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| &w.id == id)
    }

    fn issue_z_index(&mut self) -> u64 {
        self.next_z_index += 1;
        self.next_z_index
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(raw: &str) -> WindowId {
        WindowId::from(raw)
    }

    fn stack_with(ids: &[&str]) -> WindowStack {
        let mut stack = WindowStack::new(Viewport::new(1280, 800));
        for (n, raw) in ids.iter().enumerate() {
            assert!(stack.open(
                id(raw),
                raw.to_uppercase(),
                geometry::cascade_position(n),
                Size::default(),
            ));
        }
        stack
    }

    #[test]
    fn open_issues_increasing_z_above_chrome() {
        let stack = stack_with(&["a", "b"]);
        let a = stack.get(&id("a")).expect("a");
        let b = stack.get(&id("b")).expect("b");
        assert_eq!(a.z_index, Z_INDEX_BASE + 1);
        assert_eq!(b.z_index, Z_INDEX_BASE + 2);
        assert_eq!(b.position, Point::new(130, 130));
    }

    #[test]
    fn open_rejects_duplicate_ids_without_touching_state() {
        let mut stack = stack_with(&["a"]);
        let before = stack.clone();
        assert!(!stack.open(id("a"), "Other", Point::new(1, 1), Size::new(10, 10)));
        assert_eq!(stack, before);
    }

    #[test]
    fn focus_consumes_a_tick_even_when_frontmost() {
        let mut stack = stack_with(&["a"]);
        let before = stack.last_z_index();
        assert!(stack.focus(&id("a")));
        assert_eq!(stack.last_z_index(), before + 1);
        assert_eq!(stack.active_window_id(), Some(&id("a")));
    }

    #[test]
    fn focus_stays_strictly_increasing_past_the_u32_range() {
        let mut stack = stack_with(&["a", "b"]);
        stack.next_z_index = u64::from(u32::MAX);

        assert!(stack.focus(&id("a")));
        assert!(stack.focus(&id("b")));
        let a = stack.get(&id("a")).expect("a").z_index;
        let b = stack.get(&id("b")).expect("b").z_index;
        assert_eq!(a, u64::from(u32::MAX) + 1);
        assert!(b > a);
        assert_eq!(stack.active_window_id(), Some(&id("b")));
    }

    #[test]
    fn minimize_keeps_z_and_maximize_flag() {
        let mut stack = stack_with(&["a", "b"]);
        stack.maximize(&id("a"));
        let z = stack.get(&id("a")).expect("a").z_index;

        assert!(stack.minimize(&id("a")));
        let a = stack.get(&id("a")).expect("a");
        assert!(a.is_minimized);
        assert!(a.is_maximized);
        assert_eq!(a.z_index, z);

        assert!(stack.restore_from_minimize(&id("a")));
        let a = stack.get(&id("a")).expect("a");
        assert!(!a.is_minimized);
        assert!(a.is_maximized);
        assert_eq!(stack.active_window_id(), Some(&id("a")));
    }

    #[test]
    fn maximize_twice_keeps_first_snapshot() {
        let mut stack = stack_with(&["a"]);
        let original = stack.get(&id("a")).expect("a").geometry();
        assert!(stack.maximize(&id("a")));
        assert!(!stack.maximize(&id("a")));
        assert!(stack.restore(&id("a")));
        assert_eq!(stack.get(&id("a")).expect("a").geometry(), original);
    }

    #[test]
    fn restore_of_free_window_is_noop() {
        let mut stack = stack_with(&["a"]);
        let before = stack.clone();
        assert!(!stack.restore(&id("a")));
        assert_eq!(stack, before);
    }

    #[test]
    fn set_position_is_rejected_while_maximized_and_clamped_otherwise() {
        let mut stack = stack_with(&["a"]);
        assert!(stack.set_position(&id("a"), 99_999, -99_999));
        assert_eq!(stack.get(&id("a")).expect("a").position, Point::new(680, 0));

        stack.maximize(&id("a"));
        assert!(!stack.set_position(&id("a"), 50, 50));
        assert_eq!(stack.get(&id("a")).expect("a").position, Point::new(0, 0));
    }

    #[test]
    fn viewport_change_rederives_maximized_geometry_only() {
        let mut stack = stack_with(&["a", "b"]);
        stack.maximize(&id("a"));
        let b_before = stack.get(&id("b")).expect("b").geometry();

        assert!(stack.set_viewport(Viewport::new(800, 600)));
        let a = stack.get(&id("a")).expect("a");
        assert_eq!(a.size, Size::new(800, 560));
        assert_eq!(stack.get(&id("b")).expect("b").geometry(), b_before);
        assert!(!stack.set_viewport(Viewport::new(800, 600)));
    }

    #[test]
    fn operations_on_missing_ids_are_noops() {
        let mut stack = stack_with(&["a"]);
        let before = stack.clone();
        let ghost = id("ghost");

        assert!(!stack.focus(&ghost));
        assert!(!stack.minimize(&ghost));
        assert!(!stack.maximize(&ghost));
        assert!(!stack.restore(&ghost));
        assert!(!stack.restore_from_minimize(&ghost));
        assert!(!stack.set_position(&ghost, 1, 1));
        assert!(stack.close(&ghost).is_none());
        assert_eq!(stack, before);
    }

    #[test]
    fn active_window_skips_minimized_and_is_none_when_all_hidden() {
        let mut stack = stack_with(&["a", "b"]);
        stack.minimize(&id("b"));
        assert_eq!(stack.active_window_id(), Some(&id("a")));
        stack.minimize(&id("a"));
        assert_eq!(stack.active_window_id(), None);
    }

    #[test]
    fn z_ordered_sorts_back_to_front() {
        let mut stack = stack_with(&["a", "b", "c"]);
        stack.focus(&id("a"));
        let order: Vec<&str> = stack.z_ordered().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }
}
