use crate::{ImagePayload, RequestId};

/// File name used when the current code is saved to disk.
pub const DOWNLOAD_FILENAME: &str = "qrCode.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Encode { request_id: RequestId, text: String },
    SaveFile { filename: String, payload: ImagePayload },
    CopyToClipboard { text: String },
}
