use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use quickqr_core::RequestId;
use quickqr_logging::{qr_debug, qr_error};

use crate::data_uri::decode_png_data_uri;
use crate::{
    ArboardClipboard, Clipboard, DiskSaver, EncoderSettings, Encoder, EngineEvent, FileSaver,
    QrPngEncoder, SaveError,
};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub encoder: EncoderSettings,
    pub output_dir: PathBuf,
}

/// The external collaborators the engine drives.
#[derive(Clone)]
pub struct EngineServices {
    pub encoder: Arc<dyn Encoder>,
    pub clipboard: Arc<dyn Clipboard>,
    pub saver: Arc<dyn FileSaver>,
}

impl EngineServices {
    /// QR encoder, system clipboard and on-disk saver.
    pub fn native(config: &EngineConfig) -> Self {
        Self {
            encoder: Arc::new(QrPngEncoder::new(config.encoder)),
            clipboard: Arc::new(ArboardClipboard::new()),
            saver: Arc::new(DiskSaver::new(config.output_dir.clone())),
        }
    }
}

enum EngineCommand {
    Encode { request_id: RequestId, text: String },
    Copy { text: String },
    Save { filename: String, data_uri: String },
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(services: EngineServices) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    qr_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let services = services.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(&services, command, event_tx).await;
                });
            }
            qr_debug!("Engine command channel closed");
        });

        Self { cmd_tx, event_rx }
    }

    pub fn encode(&self, request_id: RequestId, text: impl Into<String>) {
        self.send(EngineCommand::Encode {
            request_id,
            text: text.into(),
        });
    }

    pub fn copy_to_clipboard(&self, text: impl Into<String>) {
        self.send(EngineCommand::Copy { text: text.into() });
    }

    pub fn save(&self, filename: impl Into<String>, data_uri: impl Into<String>) {
        self.send(EngineCommand::Save {
            filename: filename.into(),
            data_uri: data_uri.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            qr_error!("Engine worker is gone; command dropped");
        }
    }
}

async fn handle_command(
    services: &EngineServices,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Encode { request_id, text } => {
            let result = services.encoder.encode(&text).await;
            EngineEvent::EncodeCompleted { request_id, result }
        }
        EngineCommand::Copy { text } => {
            let result = services.clipboard.write_text(&text).await;
            EngineEvent::ClipboardCompleted { result }
        }
        EngineCommand::Save { filename, data_uri } => {
            let saver = Arc::clone(&services.saver);
            let name = filename.clone();
            let result =
                tokio::task::spawn_blocking(move || save_data_uri(saver.as_ref(), &name, &data_uri))
                    .await
                    .unwrap_or_else(|err| Err(SaveError::Worker(err.to_string())));
            EngineEvent::SaveCompleted { filename, result }
        }
    };
    let _ = event_tx.send(event);
}

fn save_data_uri(
    saver: &dyn FileSaver,
    filename: &str,
    data_uri: &str,
) -> Result<PathBuf, SaveError> {
    let png = decode_png_data_uri(data_uri)?;
    Ok(saver.save(filename, &png)?)
}
