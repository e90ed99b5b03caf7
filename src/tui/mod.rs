// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Rendering the UI

pub mod app;
pub mod components;
pub mod layout;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal (raw mode, alternate screen, mouse capture), runs
/// the event loop, and restores the terminal when done.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(&config, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Handles two kinds of wakeups:
/// 1. Terminal input (keyboard for commands, mouse for clicks)
/// 2. Timer ticks (for periodic redraws and toast expiry)
///
/// tokio::select! waits on both simultaneously and responds to whichever
/// completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // Ticker for periodic redraws (toast expiry, uptime)
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => app.handle_mouse(mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick
            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    match key_event.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        // Change the displayed number (prop change, picked up next draw)
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
            app.adjust_number(1);
        }
        KeyCode::Down | KeyCode::Char('-') => {
            app.adjust_number(-1);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::with_config(&Config::default(), LogBuffer::new())
    }

    #[test]
    fn q_and_esc_quit() {
        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            let mut app = test_app();
            handle_key_event(&mut app, press(code));
            assert!(app.should_quit, "{code:?} should quit");
        }
    }

    #[test]
    fn arrows_change_the_number() {
        let mut app = test_app();
        assert_eq!(app.display.number(), 3);

        handle_key_event(&mut app, press(KeyCode::Up));
        assert_eq!(app.display.number(), 4);

        handle_key_event(&mut app, press(KeyCode::Down));
        handle_key_event(&mut app, press(KeyCode::Char('-')));
        assert_eq!(app.display.number(), 2);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = test_app();
        let mut release = press(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;

        handle_key_event(&mut app, release);

        assert!(!app.should_quit);
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('z')));
        assert!(!app.should_quit);
        assert_eq!(app.display.number(), 3);
    }
}
