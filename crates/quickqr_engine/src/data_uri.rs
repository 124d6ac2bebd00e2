use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[derive(Debug, Error)]
pub enum DataUriError {
    #[error("not a base64 PNG data URI")]
    NotPngDataUri,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not a PNG image")]
    NotPng,
}

/// Wraps PNG bytes in a self-contained `data:` URI.
pub fn encode_png_data_uri(png: &[u8]) -> String {
    let mut uri = String::with_capacity(PNG_DATA_URI_PREFIX.len() + png.len().div_ceil(3) * 4);
    uri.push_str(PNG_DATA_URI_PREFIX);
    STANDARD.encode_string(png, &mut uri);
    uri
}

/// Extracts the PNG bytes from a URI produced by [`encode_png_data_uri`].
pub fn decode_png_data_uri(uri: &str) -> Result<Vec<u8>, DataUriError> {
    let encoded = uri
        .strip_prefix(PNG_DATA_URI_PREFIX)
        .ok_or(DataUriError::NotPngDataUri)?;
    let bytes = STANDARD.decode(encoded.trim())?;
    if !bytes.starts_with(&PNG_SIGNATURE) {
        return Err(DataUriError::NotPng);
    }
    Ok(bytes)
}
