use std::sync::Once;

use pretty_assertions::assert_eq;
use quickqr_core::{
    update, AppState, Effect, ImagePayload, ModuleGrid, Msg, DOWNLOAD_FILENAME,
};

const URI: &str = "data:image/png;base64,iVBORw0KGgo=";

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(quickqr_logging::initialize_for_tests);
}

fn payload() -> ImagePayload {
    ImagePayload::new(URI, ModuleGrid::new(1, vec![true]).unwrap())
}

fn state_with_image() -> AppState {
    let (state, _) = update(AppState::new(), Msg::InputChanged("example.com".to_string()));
    let (state, effects) = update(state, Msg::GenerateClicked);
    let request_id = match effects.as_slice() {
        [Effect::Encode { request_id, .. }] => *request_id,
        other => panic!("unexpected effects {other:?}"),
    };
    let (state, _) = update(
        state,
        Msg::EncodeFinished {
            request_id,
            result: Ok(payload()),
        },
    );
    state
}

#[test]
fn download_saves_current_image_under_fixed_name() {
    init_logging();
    let (_, effects) = update(state_with_image(), Msg::DownloadClicked);

    assert_eq!(DOWNLOAD_FILENAME, "qrCode.png");
    assert_eq!(
        effects,
        vec![Effect::SaveFile {
            filename: "qrCode.png".to_string(),
            payload: payload(),
        }]
    );
}

#[test]
fn copy_writes_exactly_the_data_uri() {
    init_logging();
    let (_, effects) = update(state_with_image(), Msg::CopyClicked);

    assert_eq!(
        effects,
        vec![Effect::CopyToClipboard {
            text: URI.to_string(),
        }]
    );
}

#[test]
fn exports_without_image_are_noops() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = update(state, Msg::DownloadClicked);
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::CopyClicked);
    assert!(effects.is_empty());
    assert_eq!(state, AppState::new());
}

#[test]
fn clipboard_success_shows_blocking_notice() {
    init_logging();
    let (state, _) = update(state_with_image(), Msg::ClipboardFinished { copied: true });
    assert_eq!(state.notice(), Some("QR code copied to clipboard"));

    let (state, _) = update(state, Msg::NoticeDismissed);
    assert_eq!(state.notice(), None);
}

#[test]
fn clipboard_failure_is_swallowed() {
    init_logging();
    let mut before = state_with_image();
    before.consume_dirty();

    let (mut after, effects) = update(before.clone(), Msg::ClipboardFinished { copied: false });

    assert!(effects.is_empty());
    assert_eq!(after.error(), before.error());
    assert_eq!(after.notice(), None);
    assert_eq!(after.image(), Some(&payload()));
    assert!(!after.consume_dirty());
}

#[test]
fn file_saved_reports_path_in_notice() {
    init_logging();
    let (state, _) = update(
        state_with_image(),
        Msg::FileSaved {
            path: "output/qrCode.png".to_string(),
        },
    );
    assert_eq!(state.notice(), Some("QR code saved to output/qrCode.png"));
}
