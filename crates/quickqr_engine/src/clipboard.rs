use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
    #[error("clipboard worker failed: {0}")]
    Worker(String),
}

#[async_trait::async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard through `arboard`.
///
/// The handle is opened on first use and kept for the life of the process:
/// on X11 the copied text is only served while a handle exists.
#[derive(Default)]
pub struct ArboardClipboard {
    inner: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Clipboard for ArboardClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let inner = Arc::clone(&self.inner);
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || {
            let mut guard = inner
                .lock()
                .map_err(|_| ClipboardError::Worker("clipboard lock poisoned".to_string()))?;
            if guard.is_none() {
                let clipboard = arboard::Clipboard::new()
                    .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
                *guard = Some(clipboard);
            }
            match guard.as_mut() {
                Some(clipboard) => clipboard
                    .set_text(text)
                    .map_err(|err| ClipboardError::Write(err.to_string())),
                None => Err(ClipboardError::Unavailable("no clipboard".to_string())),
            }
        })
        .await
        .map_err(|err| ClipboardError::Worker(err.to_string()))?
    }
}
