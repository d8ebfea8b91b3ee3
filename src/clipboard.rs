use log::warn;

/// Something a front-end can copy a result into.
///
/// Returns `true` when the text was copied. Failures are reported by the
/// return value only; a calculator session never stops because a clipboard is
/// unavailable.
pub trait Clipboard {
    /// Copies `text`, replacing the previous contents.
    fn copy(&mut self, text: &str) -> bool;
}

/// The desktop clipboard, backed by `arboard`.
///
/// The handle is opened on first use, so constructing one never fails even on
/// a headless machine.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    fn handle(&mut self) -> Option<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            match arboard::Clipboard::new() {
                Ok(clipboard) => self.inner = Some(clipboard),
                Err(e) => warn!("Failed to access clipboard: {e}"),
            }
        }

        self.inner.as_mut()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> bool {
        let Some(clipboard) = self.handle() else {
            return false;
        };

        match clipboard.set_text(text.to_string()) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to copy to clipboard: {e}");
                false
            },
        }
    }
}

/// An in-process clipboard that just remembers the last copy.
///
/// ```
/// use safecalc::clipboard::{Clipboard, MemoryClipboard};
///
/// let mut clipboard = MemoryClipboard::default();
/// assert!(clipboard.copy("42"));
/// assert_eq!(clipboard.contents(), Some("42"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Returns the last copied text, if any.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> bool {
        self.contents = Some(text.to_string());
        true
    }
}

impl<C: Clipboard + ?Sized> Clipboard for &mut C {
    fn copy(&mut self, text: &str) -> bool {
        (**self).copy(text)
    }
}
