//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a short duration.
//! Used for click feedback; renders in the bottom-right corner on top of
//! other content.

use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// A toast notification that auto-dismisses
pub struct Toast {
    /// Message to display
    pub message: String,
    /// When the toast was created
    created_at: Instant,
    /// How long to show the toast
    duration: Duration,
}

impl Toast {
    /// Create a new toast with default 2-second duration
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

impl Component for Toast {
    fn id(&self) -> ComponentId {
        ComponentId::Toast
    }

    /// Render the toast in the bottom-right corner of `area`
    ///
    /// Uses `Clear` so the toast is visible on top of other content.
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        // Add 4 for padding (2 chars each side) and border
        let width = (self.message.len() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3; // 1 line of text + 2 for borders

        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ctx.theme.highlight))
            .style(Style::default().bg(ctx.theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(ctx.theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_toast_is_not_expired() {
        let toast = Toast::new("clicked");
        assert!(!toast.is_expired());
        assert_eq!(toast.message, "clicked");
    }

    #[test]
    fn zero_duration_toast_expires_immediately() {
        let mut toast = Toast::new("gone");
        toast.duration = Duration::ZERO;
        assert!(toast.is_expired());
    }
}
