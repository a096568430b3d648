//! Notifier port — blocking user notifications.

use std::rc::Rc;

/// Shows a message the user must acknowledge (e.g. `window.alert`).
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for Rc<T> {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}
