//! A renderer that records every write on top of an in-memory screen.

use celltype::{MemoryRenderer, Renderer, ScreenContent, Style};

/// One `set_content` call.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteRecord {
    pub x: u32,
    pub y: u32,
    pub ch: char,
    pub style: Style,
}

/// Wraps a [`MemoryRenderer`] and keeps a log of writes.
#[derive(Debug)]
pub struct RecordingRenderer {
    pub screen: MemoryRenderer,
    pub log: Vec<WriteRecord>,
}

impl RecordingRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            screen: MemoryRenderer::new(width, height),
            log: Vec::new(),
        }
    }

    /// Forget recorded writes, keeping the screen.
    pub fn take_log(&mut self) -> Vec<WriteRecord> {
        std::mem::take(&mut self.log)
    }

    pub fn row_text(&self, y: u32) -> String {
        self.screen.row_text(y)
    }
}

impl Renderer for RecordingRenderer {
    fn get_content(&self, x: u32, y: u32) -> ScreenContent {
        self.screen.get_content(x, y)
    }

    fn set_content(&mut self, x: u32, y: u32, ch: char, combining: &[char], style: Style) {
        self.log.push(WriteRecord { x, y, ch, style });
        self.screen.set_content(x, y, ch, combining, style);
    }
}
