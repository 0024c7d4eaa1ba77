//! Event value type.
//!
//! Events are immutable names: two events are equal exactly when their
//! names match. The importer never interprets event names; matching
//! them against fired events is the execution engine's job.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An event that can trigger transitions, identified by its name.
///
/// # Example
///
/// ```rust
/// use statecraft::Event;
///
/// let a = Event::new("door opened");
/// let b = Event::from("door opened");
/// assert_eq!(a, b);
/// assert_eq!(a.name(), "door opened");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(String);

impl Event {
    /// Create an event from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The event's name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Event {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Event {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
