// Status bar component
//
// Renders one line at the bottom: uptime, displayed number, click count,
// the most recent log line, and key hints.

use crate::logging::LogEntry;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

/// Snapshot of app state the status bar displays
///
/// Built fresh each frame by the draw code so the bar stays a pure
/// function of its inputs.
pub struct StatusBar {
    pub uptime: Duration,
    pub number: i64,
    pub clicks: u64,
    pub last_log: Option<LogEntry>,
}

impl StatusBar {
    /// Format uptime as h:mm:ss
    fn uptime_text(&self) -> String {
        let secs = self.uptime.as_secs();
        format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
    }

    fn status_text(&self, width: u16) -> String {
        let log_info = match &self.last_log {
            Some(entry) => format!(" │ {} {}", entry.level.as_str(), entry.message),
            None => String::new(),
        };

        let text = format!(
            " {} │ n={} │ clicks: {}{} │ ↑↓:change  q:quit",
            self.uptime_text(),
            self.number,
            self.clicks,
            log_info,
        );

        // Truncate to the bar width so a long log line cannot wrap
        text.chars().take(width as usize).collect()
    }
}

impl Component for StatusBar {
    fn id(&self) -> ComponentId {
        ComponentId::StatusBar
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let status = Paragraph::new(self.status_text(area.width))
            .style(Style::default().fg(ctx.theme.status_bar))
            .block(Block::default().borders(Borders::TOP));

        f.render_widget(status, area);
    }
}
