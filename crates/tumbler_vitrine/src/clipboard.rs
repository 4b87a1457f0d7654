//! Copying generated code.

/// Error type for clipboard writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,

    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// A place generated code can be copied to.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    fn is_available(&self) -> bool {
        true
    }
}

/// Copy `text`, reporting success. Failures are logged, not returned.
pub fn copy_to_clipboard(clipboard: &mut impl Clipboard, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!("Failed to copy to clipboard: {}", err);
            false
        }
    }
}

/// Clipboard that keeps the last copied text.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard of an environment without one; every write fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy() {
        let mut clipboard = MemoryClipboard::new();
        assert!(clipboard.is_available());
        assert!(copy_to_clipboard(&mut clipboard, "<Switch/>"));
        assert_eq!(clipboard.contents(), Some("<Switch/>"));
    }

    #[test]
    fn test_copy_failure() {
        let mut clipboard = UnavailableClipboard;
        assert!(!clipboard.is_available());
        assert!(!copy_to_clipboard(&mut clipboard, "<Switch/>"));
    }
}
