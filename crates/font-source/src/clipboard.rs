//! Terminal clipboard through the OSC 52 escape sequence.

use std::{
    cell::RefCell,
    io::{IsTerminal, Stdout, Write, stdout},
};

use availablefonts_core::Clipboard;
use base64::{Engine, engine::general_purpose::STANDARD};

/// Writes clipboard requests to a terminal.
///
/// Terminals that do not understand OSC 52 ignore the sequence, so a write
/// that "succeeds" may still leave the clipboard unchanged.
#[derive(Debug)]
pub struct Osc52Clipboard<W> {
    out: RefCell<W>,
    enabled: bool,
}

impl Osc52Clipboard<Stdout> {
    /// Clipboard on stdout. Disabled when stdout is redirected.
    pub fn stdout() -> Self {
        Self::terminal(stdout())
    }
}

impl<W: Write + IsTerminal> Osc52Clipboard<W> {
    /// Write only if `out` is a terminal, so piped output stays free of
    /// escape sequences.
    pub fn terminal(out: W) -> Self {
        let enabled = out.is_terminal();
        if !enabled {
            log::debug!("Output is not a terminal, clipboard disabled");
        }
        Self { out: RefCell::new(out), enabled }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    /// Always write to `out`.
    pub fn new(out: W) -> Self {
        Self { out: RefCell::new(out), enabled: true }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

/// The escape sequence that sets the system clipboard to `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&self, text: &str) {
        if !self.enabled {
            return;
        }
        let mut out = self.out.borrow_mut();
        if let Err(e) = out.write_all(osc52_sequence(text).as_bytes()).and_then(|_| out.flush()) {
            log::debug!("Clipboard write failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("Arial"), "\x1b]52;c;QXJpYWw=\x07");
    }

    #[test]
    fn test_last_write_wins() {
        let clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.write_text("Verdana");
        clipboard.write_text("Arial");

        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert!(written.ends_with(&osc52_sequence("Arial")));
        assert!(written.starts_with(&osc52_sequence("Verdana")));
    }

    #[test]
    fn test_redirected_output_gets_no_sequence() {
        let clipboard = Osc52Clipboard::terminal(tempfile::tempfile().unwrap());
        clipboard.write_text("Arial");

        let file = clipboard.into_inner();
        assert_eq!(file.metadata().unwrap().len(), 0);
    }
}
