//! Leaderboard: one best score per nickname, kept sorted descending.

use crate::backend::{Backend, BackendConfig, load_entries, store_entries};
use crate::error::{StoreError, StoreResult, ValidationErrors};
use crate::validation::require_non_blank;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

/// A player's best score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub nickname: String,
    pub score: u64,
}

impl ScoreEntry {
    pub fn new(nickname: impl Into<String>, score: u64) -> Self {
        Self {
            nickname: nickname.into(),
            score,
        }
    }

    fn is(&self, nickname: &str) -> bool {
        self.nickname.eq_ignore_ascii_case(nickname)
    }
}

/// Outcome of a score submission, captured under the same lock as the upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub nickname: String,
    /// Score that was submitted.
    pub submitted: u64,
    /// Best score now on the board for this nickname.
    pub best: u64,
    /// 1-based position.
    pub rank: usize,
    /// Whether the board changed.
    pub changed: bool,
}

/// File-backed leaderboard.
///
/// Every mutation runs read-modify-sort-write under a single mutex. The new
/// list is built on a copy and only swapped in after it has been persisted,
/// so a failed write leaves the in-memory board untouched.
pub struct Leaderboard {
    entries: Mutex<Vec<ScoreEntry>>,
    backend: Box<dyn Backend>,
}

impl Leaderboard {
    /// Build the backend from `config` and load the persisted board.
    pub fn open(config: &BackendConfig) -> StoreResult<Self> {
        Self::with_backend(config.build()?)
    }

    pub fn with_backend(backend: Box<dyn Backend>) -> StoreResult<Self> {
        let mut entries: Vec<ScoreEntry> = load_entries(backend.as_ref())?;
        // files written by hand may be out of order
        sort_descending(&mut entries);
        tracing::info!(
            source = %backend.describe(),
            entries = entries.len(),
            "Loaded leaderboard"
        );
        Ok(Self {
            entries: Mutex::new(entries),
            backend,
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Vec<ScoreEntry>>> {
        self.entries
            .lock()
            .map_err(|_| StoreError::backend("poisoned lock"))
    }

    /// Insert `nickname`, or raise its score when `score` is strictly higher.
    /// Returns whether the board changed.
    pub fn upsert(&self, nickname: &str, score: u64) -> StoreResult<bool> {
        validate_nickname(nickname)?;
        let mut guard = self.lock()?;
        self.apply(&mut guard, nickname, score)
    }

    /// Upsert and report the resulting rank atomically.
    pub fn submit(&self, nickname: &str, score: u64) -> StoreResult<Standing> {
        validate_nickname(nickname)?;
        let mut guard = self.lock()?;
        let changed = self.apply(&mut guard, nickname, score)?;

        let (index, entry) = guard
            .iter()
            .enumerate()
            .find(|(_, e)| e.is(nickname))
            .ok_or_else(|| StoreError::not_found(format!("Nickname {nickname}")))?;

        Ok(Standing {
            nickname: entry.nickname.clone(),
            submitted: score,
            best: entry.score,
            rank: index + 1,
            changed,
        })
    }

    fn apply(&self, entries: &mut Vec<ScoreEntry>, nickname: &str, score: u64) -> StoreResult<bool> {
        let mut next = entries.clone();
        if !upsert_entry(&mut next, nickname, score) {
            tracing::debug!(nickname, score, "Score not higher than stored best");
            return Ok(false);
        }
        store_entries(self.backend.as_ref(), &next)?;
        *entries = next;
        tracing::debug!(nickname, score, "Leaderboard updated");
        Ok(true)
    }

    /// Whole board, highest first.
    pub fn list(&self) -> StoreResult<Vec<ScoreEntry>> {
        Ok(self.lock()?.clone())
    }

    /// The first `min(n, len)` entries.
    pub fn top_n(&self, n: usize) -> StoreResult<Vec<ScoreEntry>> {
        Ok(self.lock()?.iter().take(n).cloned().collect())
    }

    /// 1-based position of `nickname`.
    pub fn rank_of(&self, nickname: &str) -> StoreResult<usize> {
        self.lock()?
            .iter()
            .position(|e| e.is(nickname))
            .map(|i| i + 1)
            .ok_or_else(|| StoreError::not_found(format!("Nickname {nickname}")))
    }

    pub fn get(&self, nickname: &str) -> StoreResult<Option<ScoreEntry>> {
        Ok(self.lock()?.iter().find(|e| e.is(nickname)).cloned())
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Upsert every entry in one write if the board is currently empty.
    /// Returns whether anything was seeded.
    pub fn seed_if_empty(&self, seed: Vec<ScoreEntry>) -> StoreResult<bool> {
        let mut guard = self.lock()?;
        if !guard.is_empty() || seed.is_empty() {
            return Ok(false);
        }
        let mut next = Vec::with_capacity(seed.len());
        for entry in seed {
            upsert_entry(&mut next, &entry.nickname, entry.score);
        }
        store_entries(self.backend.as_ref(), &next)?;
        tracing::info!(entries = next.len(), "Seeded leaderboard");
        *guard = next;
        Ok(true)
    }
}

fn validate_nickname(nickname: &str) -> StoreResult<()> {
    let mut errors = ValidationErrors::new();
    require_non_blank(&mut errors, "nickname", "Nickname", nickname);
    Ok(errors.into_result()?)
}

/// Higher score wins; nickname match ignores ASCII case. Re-sorts on change.
fn upsert_entry(entries: &mut Vec<ScoreEntry>, nickname: &str, score: u64) -> bool {
    match entries.iter_mut().find(|e| e.is(nickname)) {
        Some(existing) if score > existing.score => {
            *existing = ScoreEntry::new(nickname, score);
        }
        Some(_) => return false,
        None => entries.push(ScoreEntry::new(nickname, score)),
    }
    sort_descending(entries);
    true
}

/// Stable, so equal scores keep their relative order.
fn sort_descending(entries: &mut [ScoreEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}
