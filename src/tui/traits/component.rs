//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be rendered implements `Component`.
//! This trait provides identity and rendering capability.

use crate::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a component
///
/// Used for:
/// - Mouse event routing (which component owns a screen region)
/// - Theme lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// The clickable number display
    NumberDisplay,
    /// Status bar (non-interactive)
    StatusBar,
    /// Toast notification (non-interactive)
    Toast,
}

impl ComponentId {
    /// Whether this component reacts to mouse input
    #[allow(dead_code)]
    pub fn is_clickable(&self) -> bool {
        matches!(self, ComponentId::NumberDisplay)
    }
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need during render - no access to mutable
/// app state, which keeps rendering pure and components testable in
/// isolation.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Whether to paint the theme's background color
    pub use_theme_background: bool,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context
    pub fn new(theme: &'a Theme, use_theme_background: bool) -> Self {
        Self {
            theme,
            use_theme_background,
        }
    }
}

/// Base trait for all UI components
///
/// A component is anything that can render itself to the terminal.
/// Components that react to the mouse also implement [`super::Clickable`].
///
/// # Example
///
/// ```ignore
/// impl Component for StatusBar {
///     fn id(&self) -> ComponentId {
///         ComponentId::StatusBar
///     }
///
///     fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
///         // ... render logic
///     }
/// }
/// ```
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    ///
    /// # Arguments
    ///
    /// * `f` - The frame to render to
    /// * `area` - The rectangular area allocated for this component
    /// * `ctx` - Immutable render context (theme, background preference)
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_display_is_clickable() {
        assert!(ComponentId::NumberDisplay.is_clickable());
        assert!(!ComponentId::StatusBar.is_clickable());
        assert!(!ComponentId::Toast.is_clickable());
    }
}
