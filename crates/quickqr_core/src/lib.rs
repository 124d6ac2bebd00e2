//! QuickQR core: pure converter state machine and view-model helpers.
mod effect;
mod msg;
mod payload;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::{Effect, DOWNLOAD_FILENAME};
pub use msg::Msg;
pub use payload::{ImagePayload, ModuleGrid};
pub use state::{AppState, ErrorKind, Outcome, RequestId};
pub use update::update;
pub use validate::{is_valid_url, trim_input};
pub use view_model::{AppViewModel, StatusView};
