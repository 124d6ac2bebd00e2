use crate::ImagePayload;

/// What the status line shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusView {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub status: StatusView,
    pub image: Option<ImagePayload>,
    pub loading: bool,
    pub dark_mode: bool,
    pub notice: Option<String>,
    pub spinner_frame: u8,
    pub can_export: bool,
    pub dirty: bool,
}
