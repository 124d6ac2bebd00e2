//! QuickQR engine: encoder, platform services and effect execution.
mod clipboard;
mod color_scheme;
mod data_uri;
mod encoder;
mod engine;
mod persist;
mod saver;
mod types;

pub use clipboard::{ArboardClipboard, Clipboard, ClipboardError};
pub use color_scheme::{ColorSchemeProbe, EnvColorScheme};
pub use data_uri::{decode_png_data_uri, encode_png_data_uri, DataUriError, PNG_DATA_URI_PREFIX};
pub use encoder::{parse_ec_level, EncodeError, Encoder, EncoderSettings, QrPngEncoder};
pub use engine::{EngineConfig, EngineHandle, EngineServices};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use saver::{DiskSaver, FileSaver, SaveError};
pub use types::EngineEvent;
pub use qrcode::EcLevel;
