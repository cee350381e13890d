//! ESC/POS document builder
//!
//! Accumulates a UTF-8 string containing ticket text interleaved with
//! ESC/POS control sequences. The result is stored as a print-job payload;
//! conversion to the device's byte encoding happens in the printer agent.

/// ESC @ - initialize printer
const INIT: &str = "\u{1b}@";
/// GS V 0 - full cut
const CUT: &str = "\u{1d}V\u{0}";
/// ESC a n - alignment (0=left, 1=center)
const ALIGN_LEFT: &str = "\u{1b}a\u{0}";
const ALIGN_CENTER: &str = "\u{1b}a\u{1}";
/// ESC E n - emphasis on/off
const BOLD_ON: &str = "\u{1b}E\u{1}";
const BOLD_OFF: &str = "\u{1b}E\u{0}";

/// String-based ESC/POS document builder
///
/// Control sequences are embedded as their raw byte values so the payload
/// can be streamed to the device unchanged.
#[derive(Debug, Default)]
pub struct EscPosDocument {
    buf: String,
}

impl EscPosDocument {
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    // === Control ===

    /// Initialize printer (ESC @)
    pub fn init(&mut self) -> &mut Self {
        self.buf.push_str(INIT);
        self
    }

    /// Full cut (GS V 0)
    pub fn cut(&mut self) -> &mut Self {
        self.buf.push_str(CUT);
        self
    }

    // === Text Output ===

    /// Write raw text
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Write text followed by newline
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    /// Write an empty line
    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Write multiple empty lines
    pub fn feed(&mut self, lines: usize) -> &mut Self {
        for _ in 0..lines {
            self.buf.push('\n');
        }
        self
    }

    // === Style ===

    /// Align to center
    pub fn center(&mut self) -> &mut Self {
        self.buf.push_str(ALIGN_CENTER);
        self
    }

    /// Align to left (default)
    pub fn left(&mut self) -> &mut Self {
        self.buf.push_str(ALIGN_LEFT);
        self
    }

    /// Enable bold text
    pub fn bold_on(&mut self) -> &mut Self {
        self.buf.push_str(BOLD_ON);
        self
    }

    /// Disable bold text
    pub fn bold_off(&mut self) -> &mut Self {
        self.buf.push_str(BOLD_OFF);
        self
    }

    // === Build ===

    /// Finalize and return the accumulated payload
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Current buffer contents
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

/// Wrap plain ticket text in the standard envelope: initialize-sequence
/// prefix, the content, and a cut/feed suffix.
///
/// Layout is fixed: `ESC @`, newline, content, two newlines, `GS V 0`.
/// Printer agents rely on this exact shape when replaying queued payloads.
pub fn wrap_text(content: &str) -> String {
    let mut doc = EscPosDocument::new();
    doc.init()
        .newline()
        .text(content)
        .newline()
        .newline()
        .cut();
    doc.into_string()
}
