//! One-shot dashboard redirect guard.
//!
//! The guard is fed every committed change of the connection status and
//! answers whether a navigation must be issued now. It fires on the
//! Disconnected→Connected transition only, so a view re-rendering while
//! already connected can never loop the redirect. Dropping back to
//! Disconnected re-arms it for the next session.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Idle,
    Navigated,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationGuard {
    state: GuardState,
}

impl NavigationGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> GuardState {
        self.state
    }

    /// Observe the connection status; returns `true` exactly when the
    /// redirect to the protected route must happen.
    pub fn on_connection_change(&mut self, connected: bool) -> bool {
        if !connected {
            self.state = GuardState::Idle;
            return false;
        }
        match self.state {
            GuardState::Idle => {
                self.state = GuardState::Navigated;
                true
            }
            GuardState::Navigated => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_connection() {
        let mut guard = NavigationGuard::new();
        assert!(guard.on_connection_change(true));
        // Re-renders observe the same connected state; no redirect loop.
        assert!(!guard.on_connection_change(true));
        assert!(!guard.on_connection_change(true));
        assert_eq!(guard.state(), GuardState::Navigated);
    }

    #[test]
    fn rearms_after_disconnect() {
        let mut guard = NavigationGuard::new();
        assert!(guard.on_connection_change(true));
        assert!(!guard.on_connection_change(false));
        assert_eq!(guard.state(), GuardState::Idle);
        assert!(guard.on_connection_change(true));
    }

    #[test]
    fn stays_idle_while_disconnected() {
        let mut guard = NavigationGuard::new();
        assert!(!guard.on_connection_change(false));
        assert!(!guard.on_connection_change(false));
        assert_eq!(guard.state(), GuardState::Idle);
    }
}
