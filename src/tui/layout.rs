/// Layout helpers for the TUI.
///
/// Single source of truth for rect math - no magic numbers in render code.
use ratatui::layout::Rect;

/// Height of the status bar (top border + one text row)
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Split the frame into the main area and the bottom status bar
pub fn split_frame(area: Rect) -> (Rect, Rect) {
    let status_height = STATUS_BAR_HEIGHT.min(area.height);
    let main = Rect {
        height: area.height - status_height,
        ..area
    };
    let status = Rect {
        y: area.y + main.height,
        height: status_height,
        ..area
    };
    (main, status)
}

/// Center a `width` x `height` rect inside `area`, clamping to fit
///
/// On terminals smaller than the requested size the rect shrinks instead
/// of overflowing the frame.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_reserves_status_rows_at_bottom() {
        let (main, status) = split_frame(Rect::new(0, 0, 80, 24));
        assert_eq!(main, Rect::new(0, 0, 80, 22));
        assert_eq!(status, Rect::new(0, 22, 80, 2));
    }

    #[test]
    fn split_survives_tiny_frames() {
        let (main, status) = split_frame(Rect::new(0, 0, 80, 1));
        assert_eq!(main.height, 0);
        assert_eq!(status.height, 1);
    }

    #[test]
    fn centered_rect_is_centered() {
        let rect = centered(Rect::new(0, 0, 80, 24), 10, 4);
        assert_eq!(rect, Rect::new(35, 10, 10, 4));
    }

    #[test]
    fn centered_clamps_to_small_areas() {
        let rect = centered(Rect::new(0, 0, 6, 2), 10, 4);
        assert_eq!(rect, Rect::new(0, 0, 6, 2));
    }

    #[test]
    fn centered_respects_area_offset() {
        let rect = centered(Rect::new(5, 3, 20, 10), 10, 4);
        assert_eq!(rect, Rect::new(10, 6, 10, 4));
    }
}
