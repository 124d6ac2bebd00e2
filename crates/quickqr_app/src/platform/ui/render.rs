use quickqr_core::{AppViewModel, ModuleGrid, StatusView};
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::keys::{KEY_COPY, KEY_DOWNLOAD, KEY_THEME};
use super::layout::{centered_rect, screen_areas};
use super::palette::{Palette, MODULE_DARK, MODULE_LIGHT};

const TITLE: &str = "QR Code Generator";
const PLACEHOLDER: &str = "Please write an URL";
const READY_TEXT: &str = "QR Ready!";
const LOADING_TEXT: &str = "Generating QR code...";
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
/// Light modules drawn around the code in the terminal.
const TERMINAL_QUIET_ZONE: usize = 2;

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let palette = Palette::for_mode(view.dark_mode);
    let area = frame.area();
    frame.render_widget(
        Block::new().style(Style::new().bg(palette.bg).fg(palette.fg)),
        area,
    );

    let areas = screen_areas(area);
    render_title(frame, areas.title, view, &palette);
    render_input(frame, areas.input, view, &palette);
    render_hints(frame, areas.hints, view, &palette);
    render_status(frame, areas.status, view, &palette);

    if let Some(image) = &view.image {
        let lines = qr_lines(image.grid(), TERMINAL_QUIET_ZONE);
        let width = lines.first().map(Line::width).unwrap_or(0) as u16;
        let target = centered_rect(width, lines.len() as u16, areas.code);
        frame.render_widget(Paragraph::new(lines), target);
    }

    if let Some(notice) = &view.notice {
        render_notice(frame, area, notice, &palette);
    }
}

fn render_title(frame: &mut Frame, area: Rect, view: &AppViewModel, palette: &Palette) {
    let theme_label = if view.dark_mode { "dark" } else { "light" };
    let toggle_text = format!("[{theme_label}] Ctrl+{}", KEY_THEME.to_ascii_uppercase());
    let side = Line::raw(toggle_text.as_str()).width() as u16;
    let [_, center, right] = Layout::horizontal([
        Constraint::Length(side),
        Constraint::Min(0),
        Constraint::Length(side),
    ])
    .areas(area);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::new().fg(palette.accent).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, center);

    let toggle = Paragraph::new(Line::from(Span::styled(
        toggle_text,
        Style::new().fg(palette.muted),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(toggle, right);
}

fn render_input(frame: &mut Frame, area: Rect, view: &AppViewModel, palette: &Palette) {
    let block = Block::bordered()
        .title(" URL ")
        .border_style(Style::new().fg(palette.border))
        .style(Style::new().bg(palette.input_bg));
    let inner = block.inner(area);

    let line = if view.input.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::new().fg(palette.muted)))
    } else {
        Line::from(Span::styled(view.input.as_str(), Style::new().fg(palette.fg)))
    };
    let (scroll, cursor) = input_scroll(&view.input, inner.width);
    frame.render_widget(Paragraph::new(line).block(block).scroll((0, scroll)), area);

    if view.notice.is_none() && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position(Position::new(inner.x + cursor, inner.y));
    }
}

/// Horizontal scroll and cursor column, in display cells, that keep the end
/// of `input` visible in a box `width` cells wide.
fn input_scroll(input: &str, width: u16) -> (u16, u16) {
    let text_width = u16::try_from(Line::raw(input).width()).unwrap_or(u16::MAX);
    let scroll = text_width.saturating_sub(width.saturating_sub(1));
    let cursor = (text_width - scroll).min(width.saturating_sub(1));
    (scroll, cursor)
}

fn render_hints(frame: &mut Frame, area: Rect, view: &AppViewModel, palette: &Palette) {
    let mut hints = vec!["Enter generate".to_string()];
    if view.can_export {
        hints.push(format!("Ctrl+{} download", KEY_DOWNLOAD.to_ascii_uppercase()));
        hints.push(format!("Ctrl+{} copy", KEY_COPY.to_ascii_uppercase()));
    }
    hints.push("Esc quit".to_string());

    let line = Line::from(Span::styled(hints.join("  ·  "), Style::new().fg(palette.muted)));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_status(frame: &mut Frame, area: Rect, view: &AppViewModel, palette: &Palette) {
    let line = match &view.status {
        StatusView::Idle => return,
        StatusView::Loading => {
            let frame_symbol = SPINNER[usize::from(view.spinner_frame) % SPINNER.len()];
            Line::from(Span::styled(
                format!("{frame_symbol} {LOADING_TEXT}"),
                Style::new().fg(palette.accent).add_modifier(Modifier::BOLD),
            ))
        }
        StatusView::Ready => Line::from(Span::styled(
            format!("✔ {READY_TEXT}"),
            Style::new().fg(palette.success).add_modifier(Modifier::BOLD),
        )),
        StatusView::Error(message) => Line::from(Span::styled(
            format!(" ! {message} "),
            Style::new().fg(palette.error_fg).bg(palette.error_bg),
        )),
    };
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_notice(frame: &mut Frame, area: Rect, notice: &str, palette: &Palette) {
    let width = (Line::raw(notice).width() as u16 + 6).max(30);
    let popup = centered_rect(width, 5, area);
    let block = Block::bordered()
        .title(" Notice ")
        .border_style(Style::new().fg(palette.accent))
        .style(Style::new().bg(palette.input_bg).fg(palette.fg));
    let text = vec![
        Line::from(notice.to_string()),
        Line::from(""),
        Line::from(Span::styled("Enter to close", Style::new().fg(palette.muted))),
    ];
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center),
        popup,
    );
}

/// Draws the grid with upper half blocks: each cell covers two module rows,
/// the top one in the foreground color and the bottom one in the background.
pub fn qr_lines(grid: &ModuleGrid, quiet_zone: usize) -> Vec<Line<'static>> {
    let size = grid.width() + 2 * quiet_zone;
    let is_dark = |x: usize, y: usize| {
        x >= quiet_zone && y >= quiet_zone && grid.is_dark(x - quiet_zone, y - quiet_zone)
    };
    let color = |dark: bool| if dark { MODULE_DARK } else { MODULE_LIGHT };

    (0..size)
        .step_by(2)
        .map(|y| {
            let spans: Vec<Span<'static>> = (0..size)
                .map(|x| {
                    let top = is_dark(x, y);
                    let bottom = y + 1 < size && is_dark(x, y + 1);
                    Span::styled("▀", Style::new().fg(color(top)).bg(color(bottom)))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickqr_core::ImagePayload;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(view: &AppViewModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| render(frame, view)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn image() -> ImagePayload {
        let grid = ModuleGrid::new(3, vec![true; 9]).unwrap();
        ImagePayload::new("data:image/png;base64,AA==", grid)
    }

    #[test]
    fn empty_view_shows_placeholder_and_no_export_hints() {
        let text = screen_text(&AppViewModel::default());
        assert!(text.contains(TITLE));
        assert!(text.contains(PLACEHOLDER));
        assert!(!text.contains("download"));
    }

    #[test]
    fn error_status_is_shown() {
        let view = AppViewModel {
            input: "nope".to_string(),
            status: StatusView::Error("Please enter a URL".to_string()),
            ..AppViewModel::default()
        };
        let text = screen_text(&view);
        assert!(text.contains("Please enter a URL"));
        assert!(text.contains("nope"));
    }

    #[test]
    fn ready_view_shows_code_and_export_hints() {
        let view = AppViewModel {
            status: StatusView::Ready,
            image: Some(image()),
            can_export: true,
            ..AppViewModel::default()
        };
        let text = screen_text(&view);
        assert!(text.contains(READY_TEXT));
        assert!(text.contains("Ctrl+S download"));
        assert!(text.contains("Ctrl+Y copy"));
        assert!(text.contains("▀"));
    }

    #[test]
    fn loading_view_shows_spinner_text() {
        let view = AppViewModel {
            status: StatusView::Loading,
            loading: true,
            ..AppViewModel::default()
        };
        assert!(screen_text(&view).contains(LOADING_TEXT));
    }

    #[test]
    fn notice_is_drawn_on_top() {
        let view = AppViewModel {
            notice: Some("QR code copied to clipboard".to_string()),
            ..AppViewModel::default()
        };
        let text = screen_text(&view);
        assert!(text.contains("QR code copied to clipboard"));
        assert!(text.contains("Enter to close"));
    }

    #[test]
    fn input_cursor_counts_display_cells() {
        // Wide characters take two cells, combining marks none.
        assert_eq!(input_scroll("例え.jp", 20), (0, 7));
        assert_eq!(input_scroll("e\u{301}x.io", 20), (0, 5));
        assert_eq!(input_scroll("", 20), (0, 0));
    }

    #[test]
    fn long_input_scrolls_to_keep_the_end_visible() {
        let (scroll, cursor) = input_scroll("例例例例例", 6);
        assert_eq!(scroll, 5);
        assert_eq!(cursor, 5);
    }

    #[test]
    fn qr_lines_pack_two_rows_per_line_with_quiet_zone() {
        let grid = ModuleGrid::new(1, vec![true]).unwrap();
        let lines = qr_lines(&grid, 1);
        // 3x3 modules including the zone -> 2 lines of 3 cells.
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].width(), 3);

        let center_top = &lines[0].spans[1];
        assert_eq!(center_top.style.fg, Some(MODULE_LIGHT));
        assert_eq!(center_top.style.bg, Some(MODULE_DARK));
        let center_bottom = &lines[1].spans[1];
        assert_eq!(center_bottom.style.bg, Some(MODULE_LIGHT));
    }
}
