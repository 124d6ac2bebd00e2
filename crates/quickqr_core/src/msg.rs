use crate::{ImagePayload, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User asked for a code to be generated from the current input.
    GenerateClicked,
    /// Encoder finished a request. The error text is only used for logging.
    EncodeFinished {
        request_id: RequestId,
        result: Result<ImagePayload, String>,
    },
    /// User clicked Download.
    DownloadClicked,
    /// The image was written to disk.
    FileSaved { path: String },
    /// User clicked Copy.
    CopyClicked,
    /// Clipboard write finished.
    ClipboardFinished { copied: bool },
    /// User flipped the light/dark theme.
    ThemeToggled,
    /// Startup color-scheme preference of the host.
    ColorSchemeDetected { prefers_dark: bool },
    /// User acknowledged the confirmation notice.
    NoticeDismissed,
    /// UI/render tick; drives the loading spinner.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
