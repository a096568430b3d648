//! Navigation tokens — detect renders superseded by a later navigation.
//!
//! Every render takes a token before its first suspension point and checks
//! it before writing to the root. A fetch that resolves after the user has
//! moved on is dropped instead of overwriting the newer view.

use std::cell::Cell;

/// Identifies one route transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationToken(u64);

/// Monotonic counter of route transitions.
#[derive(Debug, Default)]
pub struct Transitions {
    latest: Cell<u64>,
}

impl Transitions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new transition, superseding every earlier token.
    pub fn begin(&self) -> NavigationToken {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        NavigationToken(next)
    }

    /// Token of the most recent transition, without starting a new one.
    #[must_use]
    pub fn current(&self) -> NavigationToken {
        NavigationToken(self.latest.get())
    }

    /// Whether no transition has started since `token` was issued.
    #[must_use]
    pub fn is_current(&self, token: NavigationToken) -> bool {
        self.latest.get() == token.0
    }
}
