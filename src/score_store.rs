//! Best-score persistence: one named slot holding a non-negative integer.

use std::cell::Cell;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::entities::GameState;
use crate::error::{GameError, Result};

pub trait ScoreStore {
    /// Stored best score; absent or unreadable slots read as 0.
    fn load(&self) -> u32;
    fn save(&self, score: u32) -> Result<()>;
}

// ── File-backed slot ──────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u32 {
        let Ok(contents) = std::fs::read_to_string(&self.path) else {
            return 0;
        };
        match contents.trim().parse() {
            Ok(score) => score,
            Err(_) => {
                warn!(path = %self.path.display(), "ignoring malformed best score");
                0
            }
        }
    }

    fn save(&self, score: u32) -> Result<()> {
        std::fs::write(&self.path, score.to_string()).map_err(|source| GameError::ScoreWrite {
            path: self.path.clone(),
            source,
        })
    }
}

// ── In-memory slot ────────────────────────────────────────────────────────────

/// Keeps the value in memory and counts writes.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    value: Cell<Option<u32>>,
    writes: Cell<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(score: u32) -> Self {
        Self {
            value: Cell::new(Some(score)),
            writes: Cell::new(0),
        }
    }

    pub fn writes(&self) -> u32 {
        self.writes.get()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.value.get().unwrap_or(0)
    }

    fn save(&self, score: u32) -> Result<()> {
        self.value.set(Some(score));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

// ── Game-over bookkeeping ─────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub final_score: u32,
    pub best_score: u32,
    pub new_best: bool,
}

impl SessionSummary {
    /// Summary against the best score known when the session started, for
    /// when the store cannot be written.
    pub fn unsaved(state: &GameState) -> Self {
        Self {
            final_score: state.score,
            best_score: state.best_score.max(state.score),
            new_best: state.score > state.best_score,
        }
    }
}

/// Close out a session: persist the score only if it beats the stored best.
pub fn finish_session(state: &GameState, store: &impl ScoreStore) -> Result<SessionSummary> {
    let previous = store.load();
    let new_best = state.score > previous;
    if new_best {
        store.save(state.score)?;
        info!(score = state.score, previous, "new best score");
    }
    Ok(SessionSummary {
        final_score: state.score,
        best_score: previous.max(state.score),
        new_best,
    })
}
