use quickqr_logging::{qr_debug, qr_warn};

use crate::{
    is_valid_url, trim_input, AppState, Effect, ErrorKind, Msg, Outcome, DOWNLOAD_FILENAME,
};

/// Notice shown once the clipboard holds the current image.
const COPIED_NOTICE: &str = "QR code copied to clipboard";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::GenerateClicked => generate(&mut state),
        Msg::EncodeFinished { request_id, result } => {
            let pending = matches!(
                state.outcome(),
                Outcome::Loading { request_id: current } if *current == request_id
            );
            if !pending {
                qr_debug!("Dropping stale encode result request_id={}", request_id);
                return (state, Vec::new());
            }
            match result {
                Ok(payload) => state.set_outcome(Outcome::Succeeded(payload)),
                Err(cause) => {
                    qr_warn!("Encode failed request_id={}: {}", request_id, cause);
                    state.set_outcome(Outcome::Failed(ErrorKind::EncodeFailed));
                }
            }
            Vec::new()
        }
        Msg::DownloadClicked => match state.image() {
            Some(payload) => vec![Effect::SaveFile {
                filename: DOWNLOAD_FILENAME.to_string(),
                payload: payload.clone(),
            }],
            None => {
                qr_debug!("Download ignored: no image");
                Vec::new()
            }
        },
        Msg::FileSaved { path } => {
            state.set_notice(Some(format!("QR code saved to {path}")));
            Vec::new()
        }
        Msg::CopyClicked => match state.image() {
            Some(payload) => vec![Effect::CopyToClipboard {
                text: payload.data_uri().to_string(),
            }],
            None => {
                qr_debug!("Copy ignored: no image");
                Vec::new()
            }
        },
        Msg::ClipboardFinished { copied } => {
            // Clipboard failures are logged by the effect runner and never
            // reach the user.
            if copied {
                state.set_notice(Some(COPIED_NOTICE.to_string()));
            }
            Vec::new()
        }
        Msg::ThemeToggled => {
            let dark_mode = !state.dark_mode();
            state.set_dark_mode(dark_mode);
            Vec::new()
        }
        Msg::ColorSchemeDetected { prefers_dark } => {
            state.set_dark_mode(prefers_dark);
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.set_notice(None);
            Vec::new()
        }
        Msg::Tick => {
            if state.is_loading() {
                state.advance_spinner();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn generate(state: &mut AppState) -> Vec<Effect> {
    // One request at a time; repeated clicks while encoding are ignored.
    if state.is_loading() {
        qr_debug!("Generate ignored: encode already in flight");
        return Vec::new();
    }

    state.set_outcome(Outcome::Idle);

    let text = trim_input(state.input()).to_string();
    if text.is_empty() || !is_valid_url(&text) {
        state.set_outcome(Outcome::Failed(ErrorKind::InputInvalid));
        return Vec::new();
    }

    let request_id = state.next_request_id();
    state.set_outcome(Outcome::Loading { request_id });
    vec![Effect::Encode { request_id, text }]
}
