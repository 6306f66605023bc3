/// Where revealed text lands.
///
/// The reveal engine only ever clears a region or appends to it, so any
/// rendering surface (a terminal, a test buffer, a GUI widget) can plug
/// in here without the engine knowing about it.
pub trait RenderSink {
    /// Drop everything currently rendered.
    fn clear(&mut self);

    /// Append one chunk: either a single character or a whole tag.
    fn append(&mut self, chunk: &str);
}

/// In-memory sink. The console polls it for redraws; tests assert on it.
#[derive(Debug, Default)]
pub struct BufferSink {
    content: String,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything rendered so far, markup included.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl RenderSink for BufferSink {
    fn clear(&mut self) {
        self.content.clear();
    }

    fn append(&mut self, chunk: &str) {
        self.content.push_str(chunk);
    }
}
