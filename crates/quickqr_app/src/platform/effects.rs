use quickqr_core::{Effect, Msg};
use quickqr_engine::{EngineEvent, EngineHandle};
use quickqr_logging::{qr_debug, qr_error, qr_info, qr_warn};

/// Hands effects to the engine and turns its events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            qr_info!("{}", summary(&effect));
            match effect {
                Effect::Encode { request_id, text } => {
                    qr_debug!("Encode request_id={} text={}", request_id, text);
                    self.engine.encode(request_id, text);
                }
                Effect::SaveFile { filename, payload } => {
                    self.engine.save(filename, payload.data_uri());
                }
                Effect::CopyToClipboard { text } => {
                    self.engine.copy_to_clipboard(text);
                }
            }
        }
    }

    /// Drains finished engine work without blocking.
    pub fn poll_events(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            if let Some(msg) = map_event(event) {
                inbox.push(msg);
            }
        }
        inbox
    }
}

// Info-level line for an effect; user text stays out of it.
fn summary(effect: &Effect) -> String {
    match effect {
        Effect::Encode { request_id, text } => {
            format!("Encode request_id={} text_len={}", request_id, text.len())
        }
        Effect::SaveFile { filename, .. } => format!("SaveFile filename={}", filename),
        Effect::CopyToClipboard { text } => format!("CopyToClipboard len={}", text.len()),
    }
}

fn map_event(event: EngineEvent) -> Option<Msg> {
    match event {
        EngineEvent::EncodeCompleted { request_id, result } => Some(Msg::EncodeFinished {
            request_id,
            result: result.map_err(|err| err.to_string()),
        }),
        EngineEvent::ClipboardCompleted { result } => {
            let copied = match result {
                Ok(()) => true,
                Err(err) => {
                    qr_warn!("Failed to copy QR code: {}", err);
                    false
                }
            };
            Some(Msg::ClipboardFinished { copied })
        }
        EngineEvent::SaveCompleted { filename, result } => match result {
            Ok(path) => {
                qr_info!("Saved {} to {:?}", filename, path);
                Some(Msg::FileSaved {
                    path: path.display().to_string(),
                })
            }
            Err(err) => {
                qr_error!("Failed to save {}: {}", filename, err);
                None
            }
        },
    }
}
