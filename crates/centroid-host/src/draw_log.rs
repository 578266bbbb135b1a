//! JSON-lines dump of per-frame draw calls.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use centroid_core::{DrawCommand, FrameOutcome};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    outcome: FrameOutcome,
    commands: &'a [DrawCommand],
}

/// Writes one JSON object per frame.
pub struct DrawLog<W: Write> {
    writer: W,
}

/// Draw log backed by a buffered file.
pub type FileDrawLog = DrawLog<BufWriter<File>>;

impl FileDrawLog {
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create draw log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> DrawLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn record(
        &mut self,
        frame: u64,
        outcome: FrameOutcome,
        commands: &[DrawCommand],
    ) -> anyhow::Result<()> {
        let record = FrameRecord {
            frame,
            outcome,
            commands,
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn finish(mut self) -> anyhow::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
