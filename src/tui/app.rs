// TUI application state
//
// The App hosts the number display: it owns the component, records where
// the component was last rendered (for mouse routing), and carries the
// surrounding UI state (theme, toast, log buffer, quit flag).

use super::components::{NumberDisplay, Toast};
use super::traits::Clickable;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::theme::Theme;
use crossterm::event::MouseEvent;
use ratatui::layout::Rect;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main application state for the TUI
pub struct App {
    /// The one real widget: a clickable number display
    pub display: NumberDisplay,

    /// Where the display was rendered last frame (mouse events hit-test
    /// against this)
    pub display_area: Rect,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current color theme
    pub theme: Theme,

    /// Use theme's background color instead of the terminal's
    pub use_theme_background: bool,

    /// Log buffer for the status bar's last-log display
    pub log_buffer: LogBuffer,

    /// Click feedback overlay, if one is active
    pub toast: Option<Toast>,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Activations so far, shared with the component's callback
    clicks: Arc<AtomicU64>,
}

impl App {
    pub fn with_config(config: &Config, log_buffer: LogBuffer) -> Self {
        let clicks = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&clicks);

        // The host supplies the on_click prop: count the activation and log it
        let display = NumberDisplay::new(config.num_to_show, move || {
            let total = counter.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::info!("container clicked ({total} total)");
        });

        let theme = Theme::by_name(&config.theme);
        tracing::debug!("using theme {}", theme.name);

        Self {
            display,
            display_area: Rect::default(),
            should_quit: false,
            theme,
            use_theme_background: config.use_theme_background,
            log_buffer,
            toast: None,
            start_time: Instant::now(),
            clicks,
        }
    }

    /// Total activations so far
    pub fn clicks(&self) -> u64 {
        self.clicks.load(Ordering::Relaxed)
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Change the displayed number (prop change, re-rendered next frame)
    pub fn adjust_number(&mut self, delta: i64) {
        let n = self.display.number().saturating_add(delta);
        self.display.set_number(n);
        tracing::debug!("number set to {n}");
    }

    /// Route a mouse event to the display and show feedback on activation
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self
            .display
            .handle_mouse(mouse, self.display_area)
            .was_handled()
        {
            self.show_toast(format!("clicked ({})", self.clicks()));
        }
    }

    /// Show a toast notification
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Periodic upkeep: drop expired toasts
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};

    fn app_with_number(n: i64) -> App {
        let config = Config {
            num_to_show: n,
            ..Config::default()
        };
        App::with_config(&config, LogBuffer::new())
    }

    fn left_down(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn click_inside_recorded_area_counts_and_toasts() {
        let mut app = app_with_number(3);
        app.display_area = Rect::new(10, 5, 11, 3);

        app.handle_mouse(left_down(12, 6));

        assert_eq!(app.clicks(), 1);
        assert!(app.toast.is_some());
    }

    #[test]
    fn click_elsewhere_is_ignored() {
        let mut app = app_with_number(3);
        app.display_area = Rect::new(10, 5, 11, 3);

        app.handle_mouse(left_down(0, 0));

        assert_eq!(app.clicks(), 0);
        assert!(app.toast.is_none());
    }

    #[test]
    fn adjust_number_saturates_at_bounds() {
        let mut app = app_with_number(i64::MAX);
        app.adjust_number(1);
        assert_eq!(app.display.number(), i64::MAX);

        app.adjust_number(-1);
        assert_eq!(app.display.number(), i64::MAX - 1);
    }

    #[test]
    fn tick_keeps_fresh_toast() {
        let mut app = app_with_number(3);
        app.show_toast("clicked (1)");
        app.tick();
        assert!(app.toast.is_some());
    }
}
