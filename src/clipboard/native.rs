use super::{CopyError, CopyMechanism};
use arboard::Clipboard;
use tracing::debug;

/// Native clipboard mechanism backed by `arboard`.
pub struct NativeClipboard {
    clipboard: Clipboard,
}

impl NativeClipboard {
    /// Probe for the native capability. `None` means the capability is
    /// absent and the caller should use the fallback instead.
    pub fn probe() -> Option<Self> {
        match Clipboard::new() {
            Ok(clipboard) => Some(Self { clipboard }),
            Err(err) => {
                debug!("no native clipboard: {err}");
                None
            }
        }
    }
}

impl CopyMechanism for NativeClipboard {
    fn attempt(&mut self, payload: &str) -> Result<(), CopyError> {
        self.clipboard
            .set_text(payload.to_string())
            .map_err(|e| CopyError::CommandFailed(e.to_string()))
    }
}
