use std::path::PathBuf;

use quickqr_core::{ImagePayload, RequestId};

use crate::{ClipboardError, EncodeError, SaveError};

#[derive(Debug)]
pub enum EngineEvent {
    EncodeCompleted {
        request_id: RequestId,
        result: Result<ImagePayload, EncodeError>,
    },
    ClipboardCompleted {
        result: Result<(), ClipboardError>,
    },
    SaveCompleted {
        filename: String,
        result: Result<PathBuf, SaveError>,
    },
}
