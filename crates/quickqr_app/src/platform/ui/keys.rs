use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use quickqr_core::Msg;

pub const KEY_DOWNLOAD: char = 's';
pub const KEY_COPY: char = 'y';
pub const KEY_THEME: char = 't';
pub const KEY_CLEAR: char = 'u';

/// What the event loop should do with one terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Dispatch(Msg),
    Redraw,
    Quit,
    Ignore,
}

/// Maps a terminal event to an action. `input` is the current text of the
/// URL box; edits produce the full replacement text.
///
/// While a notice is open it blocks everything except dismissing it.
pub fn map_event(event: &Event, input: &str, notice_open: bool) -> UiAction {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            if notice_open {
                map_notice_key(key)
            } else {
                map_key(key, input)
            }
        }
        Event::Paste(text) if !notice_open => {
            let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
            if pasted.is_empty() {
                UiAction::Ignore
            } else {
                UiAction::Dispatch(Msg::InputChanged(format!("{input}{pasted}")))
            }
        }
        Event::Resize(..) => UiAction::Redraw,
        _ => UiAction::Ignore,
    }
}

fn map_notice_key(key: &KeyEvent) -> UiAction {
    if is_ctrl(key, 'c') {
        return UiAction::Quit;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            UiAction::Dispatch(Msg::NoticeDismissed)
        }
        _ => UiAction::Ignore,
    }
}

fn map_key(key: &KeyEvent, input: &str) -> UiAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => UiAction::Quit,
            KeyCode::Char(KEY_DOWNLOAD) => UiAction::Dispatch(Msg::DownloadClicked),
            KeyCode::Char(KEY_COPY) => UiAction::Dispatch(Msg::CopyClicked),
            KeyCode::Char(KEY_THEME) => UiAction::Dispatch(Msg::ThemeToggled),
            KeyCode::Char(KEY_CLEAR) => UiAction::Dispatch(Msg::InputChanged(String::new())),
            _ => UiAction::Ignore,
        };
    }

    match key.code {
        KeyCode::Esc => UiAction::Quit,
        KeyCode::Enter => UiAction::Dispatch(Msg::GenerateClicked),
        KeyCode::Backspace => {
            let mut text = input.to_string();
            if text.pop().is_some() {
                UiAction::Dispatch(Msg::InputChanged(text))
            } else {
                UiAction::Ignore
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            UiAction::Dispatch(Msg::InputChanged(format!("{input}{c}")))
        }
        _ => UiAction::Ignore,
    }
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn typing_appends_and_backspace_removes() {
        assert_eq!(
            map_event(&press(KeyCode::Char('m')), "example.co", false),
            UiAction::Dispatch(Msg::InputChanged("example.com".to_string()))
        );
        assert_eq!(
            map_event(&press(KeyCode::Backspace), "abc", false),
            UiAction::Dispatch(Msg::InputChanged("ab".to_string()))
        );
        assert_eq!(map_event(&press(KeyCode::Backspace), "", false), UiAction::Ignore);
    }

    #[test]
    fn shortcuts_map_to_operations() {
        assert_eq!(
            map_event(&press(KeyCode::Enter), "", false),
            UiAction::Dispatch(Msg::GenerateClicked)
        );
        assert_eq!(
            map_event(&ctrl('s'), "", false),
            UiAction::Dispatch(Msg::DownloadClicked)
        );
        assert_eq!(map_event(&ctrl('y'), "", false), UiAction::Dispatch(Msg::CopyClicked));
        assert_eq!(map_event(&ctrl('t'), "", false), UiAction::Dispatch(Msg::ThemeToggled));
        assert_eq!(map_event(&ctrl('c'), "", false), UiAction::Quit);
        assert_eq!(map_event(&press(KeyCode::Esc), "", false), UiAction::Quit);
    }

    #[test]
    fn open_notice_blocks_other_keys() {
        assert_eq!(map_event(&press(KeyCode::Char('x')), "", true), UiAction::Ignore);
        assert_eq!(map_event(&ctrl('y'), "", true), UiAction::Ignore);
        assert_eq!(
            map_event(&press(KeyCode::Enter), "", true),
            UiAction::Dispatch(Msg::NoticeDismissed)
        );
        assert_eq!(map_event(&ctrl('c'), "", true), UiAction::Quit);
    }

    #[test]
    fn paste_drops_line_breaks() {
        let event = Event::Paste("https://exa\nmple.com\r\n".to_string());
        assert_eq!(
            map_event(&event, "", false),
            UiAction::Dispatch(Msg::InputChanged("https://example.com".to_string()))
        );
    }

    #[test]
    fn resize_requests_redraw() {
        assert_eq!(map_event(&Event::Resize(80, 24), "", false), UiAction::Redraw);
    }
}
