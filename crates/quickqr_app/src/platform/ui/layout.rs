use ratatui::layout::{Constraint, Layout, Rect};

/// Widest the main card gets, in columns.
pub const CARD_MAX_WIDTH: u16 = 72;

pub struct ScreenAreas {
    pub title: Rect,
    pub input: Rect,
    pub hints: Rect,
    pub status: Rect,
    pub code: Rect,
}

/// Splits the screen into a centered card: title, input box, key hints,
/// status line and the code itself.
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let card = Rect {
        x: area.x + area.width.saturating_sub(CARD_MAX_WIDTH) / 2,
        width: area.width.min(CARD_MAX_WIDTH),
        ..area
    };
    let [title, input, hints, status, code] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(card);

    ScreenAreas {
        title,
        input,
        hints,
        status,
        code,
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
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
    fn card_is_centered_and_capped() {
        let areas = screen_areas(Rect::new(0, 0, 100, 40));
        assert_eq!(areas.title.width, CARD_MAX_WIDTH);
        assert_eq!(areas.title.x, 14);
        assert_eq!(areas.input.height, 3);
        assert_eq!(areas.code.y, 8);
        assert_eq!(areas.code.height, 32);
    }

    #[test]
    fn centered_rect_never_exceeds_area() {
        let area = Rect::new(2, 3, 10, 4);
        let rect = centered_rect(20, 2, area);
        assert_eq!(rect, Rect::new(2, 4, 10, 2));
    }
}
