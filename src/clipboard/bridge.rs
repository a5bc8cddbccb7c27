//! Clipboard access
//!
//! The grid only ever sees a resolved string. Host clipboard failures are
//! logged and swallowed here; once the system clipboard has failed, the
//! bridge stays on its in-process fallback for the rest of the process.
//!
//! On Linux the system clipboard is served by the process that set it, so
//! text written by a short-lived process vanishes when it exits unless a
//! clipboard manager picks it up. [`SystemClipboard::hold_writes`] makes
//! writes block until another program takes the clipboard over.

/// Text source and sink for copy and paste
pub trait ClipboardBridge {
    /// Current clipboard text, or `None` when there is nothing to paste
    fn read_text(&mut self) -> Option<String>;

    fn write_text(&mut self, text: &str);
}

/// In-process clipboard
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl ClipboardBridge for MemoryClipboard {
    fn read_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn write_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}

/// System clipboard with a sticky in-process fallback
pub struct SystemClipboard {
    native: Option<arboard::Clipboard>,
    fallback: MemoryClipboard,
    hold_writes: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let native = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!("System clipboard unavailable, using in-process clipboard: {}", e);
                None
            }
        };
        Self {
            native,
            fallback: MemoryClipboard::new(),
            hold_writes: false,
        }
    }

    /// Bridge that never touches the system clipboard
    pub fn fallback_only() -> Self {
        Self {
            native: None,
            fallback: MemoryClipboard::new(),
            hold_writes: false,
        }
    }

    /// Whether the system clipboard is still in use
    pub fn is_native(&self) -> bool {
        self.native.is_some()
    }

    /// Keep serving written text until another program replaces it.
    ///
    /// Only has an effect on Linux, where it blocks `write_text`.
    pub fn hold_writes(&mut self, hold: bool) {
        self.hold_writes = hold;
    }

    pub fn holds_writes(&self) -> bool {
        self.hold_writes
    }

    fn disable_native(&mut self, error: &arboard::Error) {
        tracing::warn!("System clipboard failed, switching to in-process clipboard: {}", error);
        self.native = None;
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("native", &self.is_native())
            .field("fallback", &self.fallback)
            .field("hold_writes", &self.hold_writes)
            .finish()
    }
}

impl ClipboardBridge for SystemClipboard {
    fn read_text(&mut self) -> Option<String> {
        if let Some(clipboard) = self.native.as_mut() {
            match clipboard.get_text() {
                Ok(text) => return Some(text),
                Err(arboard::Error::ContentNotAvailable) => return None,
                Err(e) => self.disable_native(&e),
            }
        }
        self.fallback.read_text()
    }

    fn write_text(&mut self, text: &str) {
        if let Some(clipboard) = self.native.as_mut() {
            match set_native(clipboard, text, self.hold_writes) {
                Ok(()) => return,
                Err(e) => self.disable_native(&e),
            }
        }
        self.fallback.write_text(text);
    }
}

#[cfg(target_os = "linux")]
fn set_native(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    hold: bool,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if hold {
        tracing::debug!("holding clipboard until another program takes it");
        clipboard.set().wait().text(text)
    } else {
        clipboard.set_text(text)
    }
}

#[cfg(not(target_os = "linux"))]
fn set_native(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _hold: bool,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}
