use std::fmt;

use crate::view_model::{AppViewModel, StatusView};
use crate::ImagePayload;

pub type RequestId = u64;

/// Why the last attempt produced no image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty input or input that does not look like a URL.
    InputInvalid,
    /// The encoder rejected the input.
    EncodeFailed,
}

impl ErrorKind {
    /// Fixed user-facing message. The underlying cause is never shown.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::InputInvalid => "Please enter a URL address (e.g. https://www.site.com)",
            ErrorKind::EncodeFailed => "Failed to generate the QR code.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of the most recent Generate attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
    },
    Succeeded(ImagePayload),
    Failed(ErrorKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    outcome: Outcome,
    dark_mode: bool,
    notice: Option<String>,
    last_request_id: RequestId,
    spinner_frame: u8,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let status = match &self.outcome {
            Outcome::Idle => StatusView::Idle,
            Outcome::Loading { .. } => StatusView::Loading,
            Outcome::Succeeded(_) => StatusView::Ready,
            Outcome::Failed(kind) => StatusView::Error(kind.message().to_string()),
        };
        AppViewModel {
            input: self.input.clone(),
            status,
            image: self.image().cloned(),
            loading: self.is_loading(),
            dark_mode: self.dark_mode,
            notice: self.notice.clone(),
            spinner_frame: self.spinner_frame,
            can_export: self.image().is_some(),
            dirty: self.dirty,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.outcome, Outcome::Loading { .. })
    }

    pub fn image(&self) -> Option<&ImagePayload> {
        match &self.outcome {
            Outcome::Succeeded(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<ErrorKind> {
        match self.outcome {
            Outcome::Failed(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Returns whether anything visible changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.mark_dirty();
    }

    /// Allocates the id for a new encode request.
    pub(crate) fn next_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.last_request_id
    }

    pub(crate) fn set_dark_mode(&mut self, dark_mode: bool) {
        if self.dark_mode != dark_mode {
            self.dark_mode = dark_mode;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_notice(&mut self, notice: Option<String>) {
        if self.notice != notice {
            self.notice = notice;
            self.mark_dirty();
        }
    }

    pub(crate) fn advance_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
