//! Clickable trait for components that handle mouse input
//!
//! Components that can receive and process mouse events implement this
//! trait. The App routes mouse events to the component whose rendered
//! area contains the event position.

use super::Component;
use crossterm::event::MouseEvent;
use ratatui::layout::Rect;

/// Result of handling a mouse event
///
/// Tells the App whether the component consumed the event or
/// if it should bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    /// Create from a boolean (true = handled)
    pub fn from_bool(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }

    /// Check if the event was handled
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        Self::from_bool(handled)
    }
}

/// Trait for components that handle mouse input
///
/// When a mouse event arrives, the App passes it to the component along
/// with the area the component was last rendered into. The component
/// performs its own hit-testing against that area.
///
/// # Event Flow
///
/// ```text
/// MouseEvent
///    │
///    ▼
/// App (records component areas during draw)
///    │
///    ▼
/// Component (via Clickable trait, hit-tests against its area)
///    │
///    │ returns Handled::Yes or Handled::No
///    ▼
/// App (feedback: toast, status bar update)
/// ```
pub trait Clickable: Component {
    /// Handle a mouse event against the area this component was rendered into
    ///
    /// Returns `Handled::Yes` if the component consumed the event,
    /// `Handled::No` if it should bubble up to the App.
    fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Handled;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handled_from_bool() {
        assert_eq!(Handled::from_bool(true), Handled::Yes);
        assert_eq!(Handled::from(false), Handled::No);
        assert!(Handled::Yes.was_handled());
        assert!(!Handled::No.was_handled());
    }
}
