//! Events delivered to element listeners.

use std::{cell::Cell, rc::Rc};

/// Callback registered for an event kind.
pub type Listener = Rc<dyn Fn(&Event)>;

/// An event dispatched to a single element.
///
/// Form events carry the control's value at dispatch time.
#[derive(Debug, Clone)]
pub struct Event {
    kind: String,
    value: Option<String>,
    default_prevented: Cell<bool>,
}

impl Event {
    /// Create an event of an arbitrary kind (e.g. `"click"`).
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_ascii_lowercase(),
            value: None,
            default_prevented: Cell::new(false),
        }
    }

    pub fn click() -> Self {
        Self::new("click")
    }

    pub fn submit() -> Self {
        Self::new("submit")
    }

    /// Text input changed; `value` is the control's new content.
    pub fn input(value: impl Into<String>) -> Self {
        Self::new("input").with_value(value)
    }

    /// Committed change, e.g. a `<select>` option chosen.
    pub fn change(value: impl Into<String>) -> Self {
        Self::new("change").with_value(value)
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Cancel the default action (e.g. form navigation).
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}
