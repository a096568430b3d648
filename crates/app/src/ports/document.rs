//! Document port — the application root element.

use std::rc::Rc;

/// The single container every view is rendered into.
///
/// The router is its only writer.
pub trait Document {
    /// Replace the whole content of the root with `markup`.
    fn replace_root(&self, markup: &str);
}

impl<T: Document + ?Sized> Document for Rc<T> {
    fn replace_root(&self, markup: &str) {
        (**self).replace_root(markup);
    }
}
