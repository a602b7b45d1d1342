//! # Navigation State
//!
//! Manages the session's navigation state (active section + mobile menu).
//!
//! ## Thread Safety
//! Same pattern as the cart: `Arc<Mutex<Navigation>>` with closure-based
//! access. Navigation mutations are tiny (an enum assignment), so lock
//! contention is a non-issue; the mutex exists for correctness, not
//! throughput.

use std::sync::{Arc, Mutex};

use selection_core::Navigation;

/// Tauri-managed navigation state.
#[derive(Debug)]
pub struct NavState {
    nav: Arc<Mutex<Navigation>>,
}

impl NavState {
    /// Creates navigation state at the home section.
    pub fn new() -> Self {
        NavState {
            nav: Arc::new(Mutex::new(Navigation::new())),
        }
    }

    /// Executes a function with read access to the navigation state.
    pub fn with_nav<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Navigation) -> R,
    {
        let nav = self.nav.lock().expect("Navigation mutex poisoned");
        f(&nav)
    }

    /// Executes a function with write access to the navigation state.
    pub fn with_nav_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Navigation) -> R,
    {
        let mut nav = self.nav.lock().expect("Navigation mutex poisoned");
        f(&mut nav)
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selection_core::Section;

    #[test]
    fn test_starts_at_home() {
        let state = NavState::new();
        assert_eq!(state.with_nav(|n| n.active()), Section::Home);
    }

    #[test]
    fn test_activation_is_visible_to_readers() {
        let state = NavState::new();
        state.with_nav_mut(|n| n.activate(Section::Catalog));
        state.with_nav_mut(|n| n.activate(Section::Contacts));
        assert_eq!(state.with_nav(|n| n.active()), Section::Contacts);
    }
}
