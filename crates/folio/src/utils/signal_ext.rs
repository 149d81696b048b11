//! Extension trait for Dioxus signals holding state machines.
//!
//! Navigation and widget state are plain structs with `&mut self` methods
//! (`NavState::navigate`, `WidgetState::clear_result`). `mutate` applies one of those
//! to a signal in a single call:
//!
//! ```ignore
//! nav.mutate(|nav| nav.navigate(Section::Projects));
//! ```

use dioxus::prelude::*;

/// Extension trait for Dioxus signals providing mutation helpers.
pub trait SignalExt<T: 'static> {
    /// Mutate the signal's value in place, returning the closure's result.
    ///
    /// Subscribers are notified once, after the closure returns.
    fn mutate<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;

    /// Like [`SignalExt::mutate`], but leaves the signal untouched (and
    /// subscribers un-notified) when the closure returns `None`.
    fn try_mutate<F, R>(&mut self, f: F) -> Option<R>
    where
        T: Clone,
        F: FnOnce(&mut T) -> Option<R>;
}

impl<T: 'static> SignalExt<T> for Signal<T> {
    fn mutate<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut value = self.write();
        f(&mut value)
    }

    fn try_mutate<F, R>(&mut self, f: F) -> Option<R>
    where
        T: Clone,
        F: FnOnce(&mut T) -> Option<R>,
    {
        let mut value = self.peek().clone();
        let result = f(&mut value)?;
        self.set(value);
        Some(result)
    }
}

// Note: Tests for SignalExt are omitted because they require a Dioxus runtime.
// The trait methods are thin wrappers around Signal::write() and Signal::set().
