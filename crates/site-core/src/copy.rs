use crate::error::SiteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Clipboard,
    Fallback,
    Failed,
}

impl CopyOutcome {
    pub fn acknowledged(self) -> bool {
        self != CopyOutcome::Failed
    }
}

/// Try the clipboard write, then the legacy selection copy. A total failure
/// is only logged.
pub fn copy_with_fallback(
    text: &str,
    primary: impl FnOnce(&str) -> Result<(), SiteError>,
    fallback: impl FnOnce(&str) -> Result<(), SiteError>,
) -> CopyOutcome {
    match primary(text) {
        Ok(()) => {
            log::info!("[copy] copied {}", text);
            CopyOutcome::Clipboard
        }
        Err(e) => {
            log::warn!("[copy] clipboard failed: {}", e);
            match fallback(text) {
                Ok(()) => {
                    log::info!("[copy] copied {} via fallback", text);
                    CopyOutcome::Fallback
                }
                Err(e) => {
                    log::error!("[copy] fallback failed: {}", e);
                    CopyOutcome::Failed
                }
            }
        }
    }
}

/// Timed acknowledgment shown after a successful copy.
///
/// Each acknowledgment hands out a token for its own expiry. Only the
/// expiry of the latest one clears the visual, so a repeated copy keeps it
/// up for the full hold time again.
#[derive(Clone, Copy, Debug, Default)]
pub struct CopyAck {
    until_ms: Option<f64>,
    latest: u32,
}

impl CopyAck {
    pub fn acknowledge(&mut self, now_ms: f64, hold_ms: u32) -> u32 {
        self.latest = self.latest.wrapping_add(1);
        self.until_ms = Some(now_ms + hold_ms as f64);
        self.latest
    }

    pub fn is_active(&self, now_ms: f64) -> bool {
        self.until_ms.map(|u| now_ms < u).unwrap_or(false)
    }

    /// Expiry of the acknowledgment that returned `token`. True when the
    /// visual should be removed now.
    pub fn expire(&mut self, token: u32) -> bool {
        if token != self.latest || self.until_ms.is_none() {
            return false;
        }
        self.until_ms = None;
        true
    }
}
