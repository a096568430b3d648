//! History port — session history of the browsing context.

use std::rc::Rc;

/// Session history as seen by the router.
pub trait History {
    /// Path of the current entry (`location.pathname`).
    fn current_path(&self) -> String;

    /// Push a new entry for `path` without reloading the document.
    fn push(&self, path: &str);
}

impl<T: History + ?Sized> History for Rc<T> {
    fn current_path(&self) -> String {
        (**self).current_path()
    }

    fn push(&self, path: &str) {
        (**self).push(path);
    }
}
