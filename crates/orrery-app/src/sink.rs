//! Output side of the host: where frames and facts go once produced.

use std::io::{self, Write};

use serde::Serialize;

use orrery_core::layout::SceneLayout;
use orrery_core::state::FrameSnapshot;
use orrery_facts::FactResponse;
use orrery_sim::starfield::Star;

/// One record on the output stream.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum HostEvent<'a> {
    /// Static scene description, emitted once before the first frame.
    Scene {
        layout: &'a SceneLayout,
        stars: &'a [Star],
    },
    Frame(&'a FrameSnapshot),
    Fact(&'a FactResponse),
}

/// Receives everything the frame loop produces.
pub trait FrameSink: Send + 'static {
    fn emit(&mut self, event: &HostEvent<'_>) -> io::Result<()>;
}

/// Writes each event as one JSON line.
pub struct JsonLinesSink<W> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send + 'static> FrameSink for JsonLinesSink<W> {
    fn emit(&mut self, event: &HostEvent<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}
