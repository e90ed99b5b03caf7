// Top-level draw code
//
// Composes the frame: centered number display, bottom status bar, and the
// toast overlay when one is active. Also records the display's rect on the
// App so mouse events can be routed to it.

use super::app::App;
use super::components::StatusBar;
use super::layout;
use super::traits::{Component, RenderContext};
use ratatui::Frame;

/// Minimum container width (keeps the block title visible for small numbers)
const MIN_DISPLAY_WIDTH: u16 = 13;

/// Draw the whole UI for one frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let (main, status_area) = layout::split_frame(f.area());

    let (width, height) = app.display.preferred_size();
    app.display_area = layout::centered(main, width.max(MIN_DISPLAY_WIDTH), height);

    let ctx = RenderContext::new(&app.theme, app.use_theme_background);

    app.display.render(f, app.display_area, &ctx);

    let status_bar = StatusBar {
        uptime: app.uptime(),
        number: app.display.number(),
        clicks: app.clicks(),
        last_log: app.log_buffer.last(),
    };
    status_bar.render(f, status_area, &ctx);

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw_to_buffer(app: &mut App, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = *buffer.area();
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn frame_shows_number_and_status() {
        let config = Config {
            num_to_show: 5,
            ..Config::default()
        };
        let mut app = App::with_config(&config, LogBuffer::new());

        let text = buffer_text(&draw_to_buffer(&mut app, 40, 12));

        assert!(text.contains('5'));
        assert!(text.contains("clicks: 0"));
    }

    #[test]
    fn draw_records_display_area_for_mouse_routing() {
        let mut app = App::with_config(&Config::default(), LogBuffer::new());
        draw_to_buffer(&mut app, 40, 12);

        let area = app.display_area;
        assert_eq!((area.width, area.height), (13, 3));
        // Centered in the main region (40x10 after the status split)
        assert_eq!((area.x, area.y), (13, 3));
    }

    #[test]
    fn redraw_with_same_props_is_identical() {
        let mut app = App::with_config(&Config::default(), LogBuffer::new());

        // Pin uptime so the status bar reads 0:00:00 in both draws
        app.start_time = std::time::Instant::now();
        let first = draw_to_buffer(&mut app, 40, 12);
        app.start_time = std::time::Instant::now();
        let second = draw_to_buffer(&mut app, 40, 12);

        assert_eq!(first, second);
    }
}
