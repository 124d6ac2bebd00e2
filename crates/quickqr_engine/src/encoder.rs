use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};
use quickqr_core::{ImagePayload, ModuleGrid};
use thiserror::Error;

use crate::data_uri::encode_png_data_uri;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderSettings {
    pub ec_level: EcLevel,
    /// Smallest edge of the PNG in pixels; the code is scaled up to reach it.
    pub min_dimension: u32,
    pub quiet_zone: bool,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::M,
            min_dimension: 200,
            quiet_zone: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("qr encoding failed: {0}")]
    Qr(#[from] QrError),
    #[error("png encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("module grid does not match code width {0}")]
    Grid(usize),
    #[error("encoder worker failed: {0}")]
    Worker(String),
}

/// Turns text into a scannable image payload.
#[async_trait::async_trait]
pub trait Encoder: Send + Sync {
    async fn encode(&self, text: &str) -> Result<ImagePayload, EncodeError>;
}

#[derive(Debug, Clone, Default)]
pub struct QrPngEncoder {
    settings: EncoderSettings,
}

impl QrPngEncoder {
    pub fn new(settings: EncoderSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl Encoder for QrPngEncoder {
    async fn encode(&self, text: &str) -> Result<ImagePayload, EncodeError> {
        let settings = self.settings;
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || encode_png(&text, &settings))
            .await
            .map_err(|err| EncodeError::Worker(err.to_string()))?
    }
}

fn encode_png(text: &str, settings: &EncoderSettings) -> Result<ImagePayload, EncodeError> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), settings.ec_level)?;

    let width = code.width();
    let modules = code
        .to_colors()
        .into_iter()
        .map(|color| color == Color::Dark)
        .collect();
    let grid = ModuleGrid::new(width, modules).ok_or(EncodeError::Grid(width))?;

    let image = code
        .render::<Luma<u8>>()
        .quiet_zone(settings.quiet_zone)
        .min_dimensions(settings.min_dimension, settings.min_dimension)
        .build();
    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(ImagePayload::new(encode_png_data_uri(&png), grid))
}

/// Parses an error-correction level name: `L`, `M`, `Q` or `H`.
pub fn parse_ec_level(name: &str) -> Option<EcLevel> {
    match name.trim().to_ascii_uppercase().as_str() {
        "L" | "LOW" => Some(EcLevel::L),
        "M" | "MEDIUM" => Some(EcLevel::M),
        "Q" | "QUARTILE" => Some(EcLevel::Q),
        "H" | "HIGH" => Some(EcLevel::H),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ec_level_names_parse() {
        assert_eq!(parse_ec_level("m"), Some(EcLevel::M));
        assert_eq!(parse_ec_level(" High "), Some(EcLevel::H));
        assert_eq!(parse_ec_level("x"), None);
    }

    #[test]
    fn grid_width_matches_version_one_code() {
        // Short inputs fit in a version 1 symbol, 21 modules wide.
        let payload = encode_png("a.io", &EncoderSettings::default()).unwrap();
        assert_eq!(payload.grid().width(), 21);
        // Finder pattern corner is always dark.
        assert!(payload.grid().is_dark(0, 0));
    }
}
