use crate::page::Page;
use std::io::{self, Stdout, Write, stdout};
use std::sync::Mutex;
use tracing::warn;

/// Renders the page on standard output. Writes are serialized so concurrent attempts never interleave lines.
#[derive(Debug)]
pub struct TerminalPage<W: Write + Send = Stdout> {
    out: Mutex<W>,
}

impl TerminalPage {
    pub fn new() -> Self {
        TerminalPage { out: Mutex::new(stdout()) }
    }
}

impl<W: Write + Send> TerminalPage<W> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = self.out.lock().map_err(|e| io::Error::other(e.to_string()))?;
        writeln!(out, "{}", line)?;
        out.flush()
    }

    fn show(&self, line: &str) {
        if let Err(e) = self.write_line(line) {
            warn!("⚠️ Unable to show '{}': {}", line, e);
        }
    }
}

impl<W: Write + Send + std::fmt::Debug> Page for TerminalPage<W> {
    fn alert(&self, message: &str) {
        self.show(&format!("🔔 {}", message));
    }

    fn render_location(&self, markup: &str) {
        self.show(&format!("📍 {}", markup));
    }
}
