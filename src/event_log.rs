//! JSON-lines event log.
//!
//! One record per line: every lock outcome, plus the full snapshot when a game ends.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameSnapshot;
use crate::types::LockEvent;

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Record<'a> {
    Lock {
        episode_id: u32,
        lines_cleared: u32,
        line_clear_score: u32,
        game_over: bool,
    },
    GameOver {
        snapshot: &'a GameSnapshot,
    },
}

pub struct EventLog {
    out: BufWriter<File>,
}

impl EventLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("event log: open {} failed", path.display()))?;
        Ok(Self {
            out: BufWriter::new(file),
        })
    }

    pub fn record_lock(&mut self, episode_id: u32, event: &LockEvent) -> Result<()> {
        self.write(&Record::Lock {
            episode_id,
            lines_cleared: event.lines_cleared,
            line_clear_score: event.line_clear_score,
            game_over: event.game_over,
        })
    }

    pub fn record_game_over(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.write(&Record::GameOver { snapshot })
    }

    fn write(&mut self, record: &Record<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        self.out.flush().context("event log: flush failed")?;
        Ok(())
    }
}
