use std::io::{Stdout, Write, stdout};
use teleprompt_core::sink::RenderSink;

/// Writes revealed text straight to the terminal, flushing per chunk so
/// the typing effect is actually visible.
///
/// Tags arrive whole (the engine reveals them atomically), so this sink
/// can interpret them: `<br>` becomes a newline, any other tag is
/// styling markup with no console rendering and is dropped.
pub struct TermSink<W: Write = Stdout> {
    out: W,
}

impl TermSink {
    pub fn new() -> Self {
        Self { out: stdout() }
    }
}

impl Default for TermSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TermSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> RenderSink for TermSink<W> {
    fn clear(&mut self) {
        // ANSI: clear screen, cursor home
        let _ = write!(self.out, "\x1b[2J\x1b[H");
        let _ = self.out.flush();
    }

    fn append(&mut self, chunk: &str) {
        match chunk {
            "<br>" | "<br/>" => {
                let _ = writeln!(self.out);
            }
            tag if tag.starts_with('<') => {}
            text => {
                let _ = write!(self.out, "{}", text);
            }
        }
        let _ = self.out.flush();
    }
}
