//! The "strip surrounding whitespace" capability.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// A value that can be trimmed of leading and trailing whitespace.
pub trait Strip {
    /// Borrow the value with surrounding whitespace removed.
    fn strip(&self) -> &str;
}

impl Strip for str {
    #[inline]
    fn strip(&self) -> &str {
        self.trim()
    }
}

impl Strip for String {
    #[inline]
    fn strip(&self) -> &str {
        self.trim()
    }
}

impl Strip for Cow<'_, str> {
    #[inline]
    fn strip(&self) -> &str {
        self.trim()
    }
}

impl Strip for Box<str> {
    #[inline]
    fn strip(&self) -> &str {
        self.trim()
    }
}

impl Strip for Rc<str> {
    #[inline]
    fn strip(&self) -> &str {
        self.trim()
    }
}

impl Strip for Arc<str> {
    #[inline]
    fn strip(&self) -> &str {
        self.trim()
    }
}

impl<T: Strip + ?Sized> Strip for &T {
    #[inline]
    fn strip(&self) -> &str {
        (**self).strip()
    }
}
