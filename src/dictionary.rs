//! Word dictionary: categorized words with hints, unique by word text.

use crate::backend::{Backend, BackendConfig, load_entries, store_entries};
use crate::error::{StoreError, StoreResult, ValidationErrors};
use crate::validation::{require_alphabetic, require_non_blank};
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

/// A stored dictionary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: String,
    pub category: String,
    pub word: String,
    pub hint: String,
}

/// Client-supplied fields for adding or replacing an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDraft {
    pub category: String,
    pub word: String,
    pub hint: String,
}

impl WordDraft {
    pub fn new(
        category: impl Into<String>,
        word: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            word: word.into(),
            hint: hint.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_alphabetic(&mut errors, "category", "Category", &self.category);
        require_alphabetic(&mut errors, "word", "Word", &self.word);
        require_non_blank(&mut errors, "hint", "Hint", &self.hint);
        errors.into_result()
    }

    /// Validate, then lowercase category and word.
    fn normalized(self) -> StoreResult<WordDraft> {
        self.validate()?;
        Ok(WordDraft {
            category: self.category.to_ascii_lowercase(),
            word: self.word.to_ascii_lowercase(),
            hint: self.hint,
        })
    }

    fn into_entry(self, id: String) -> WordEntry {
        WordEntry {
            id,
            category: self.category,
            word: self.word,
            hint: self.hint,
        }
    }
}

/// File-backed word dictionary.
///
/// Lookups are linear scans over a mutex-guarded list. Mutations are applied
/// to a copy, persisted in full, then swapped in.
pub struct WordStore {
    entries: Mutex<Vec<WordEntry>>,
    backend: Box<dyn Backend>,
}

impl WordStore {
    pub fn open(config: &BackendConfig) -> StoreResult<Self> {
        Self::with_backend(config.build()?)
    }

    pub fn with_backend(backend: Box<dyn Backend>) -> StoreResult<Self> {
        let entries: Vec<WordEntry> = load_entries(backend.as_ref())?;
        tracing::info!(
            source = %backend.describe(),
            entries = entries.len(),
            "Loaded word dictionary"
        );
        Ok(Self {
            entries: Mutex::new(entries),
            backend,
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Vec<WordEntry>>> {
        self.entries
            .lock()
            .map_err(|_| StoreError::backend("poisoned lock"))
    }

    fn commit(&self, entries: &mut Vec<WordEntry>, next: Vec<WordEntry>) -> StoreResult<()> {
        store_entries(self.backend.as_ref(), &next)?;
        *entries = next;
        Ok(())
    }

    /// Add a new word. Rejects a word that already exists in any letter case.
    pub fn add(&self, draft: WordDraft) -> StoreResult<WordEntry> {
        let draft = draft.normalized()?;
        let mut guard = self.lock()?;
        if guard.iter().any(|e| e.word == draft.word) {
            return Err(StoreError::DuplicateWord(draft.word));
        }

        let entry = draft.into_entry(uuid::Uuid::new_v4().to_string());
        let mut next = guard.clone();
        next.push(entry.clone());
        self.commit(&mut guard, next)?;

        tracing::debug!(id = %entry.id, word = %entry.word, "Word added");
        Ok(entry)
    }

    pub fn find_by_word(&self, word: &str) -> StoreResult<Option<WordEntry>> {
        let word = word.to_ascii_lowercase();
        Ok(self.lock()?.iter().find(|e| e.word == word).cloned())
    }

    pub fn find_by_id(&self, id: &str) -> StoreResult<Option<WordEntry>> {
        Ok(self.lock()?.iter().find(|e| e.id == id).cloned())
    }

    pub fn find_by_category(&self, category: &str) -> StoreResult<Vec<WordEntry>> {
        let category = category.to_ascii_lowercase();
        Ok(self
            .lock()?
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect())
    }

    /// Replace the fields of entry `id`, keeping its id.
    pub fn update_by_id(&self, id: &str, draft: WordDraft) -> StoreResult<WordEntry> {
        let draft = draft.normalized()?;
        let mut guard = self.lock()?;

        let index = guard
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::not_found(format!("Word id {id}")))?;
        if guard.iter().any(|e| e.word == draft.word && e.id != id) {
            return Err(StoreError::DuplicateWord(draft.word));
        }

        let entry = draft.into_entry(id.to_string());
        let mut next = guard.clone();
        next[index] = entry.clone();
        self.commit(&mut guard, next)?;

        tracing::debug!(id, word = %entry.word, "Word updated");
        Ok(entry)
    }

    /// Remove entry `id` and return it.
    pub fn delete_by_id(&self, id: &str) -> StoreResult<WordEntry> {
        let mut guard = self.lock()?;
        let index = guard
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::not_found(format!("Word id {id}")))?;

        let mut next = guard.clone();
        let removed = next.remove(index);
        self.commit(&mut guard, next)?;

        tracing::debug!(id, word = %removed.word, "Word deleted");
        Ok(removed)
    }

    /// All entries ordered by word text.
    pub fn list(&self) -> StoreResult<Vec<WordEntry>> {
        let mut words = self.lock()?.clone();
        words.sort_by(|a, b| a.word.cmp(&b.word));
        Ok(words)
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> StoreResult<Vec<String>> {
        let set: BTreeSet<String> = self.lock()?.iter().map(|e| e.category.clone()).collect();
        Ok(set.into_iter().collect())
    }

    /// Uniform pick among the words of `category`; `None` when it has none.
    pub fn random_by_category(&self, category: &str) -> StoreResult<Option<WordEntry>> {
        let matches = self.find_by_category(category)?;
        Ok(matches.choose(&mut rand::rng()).cloned())
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Add every draft in one write if the dictionary is currently empty.
    /// Drafts that fail validation or repeat an earlier word are skipped.
    pub fn seed_if_empty(&self, drafts: Vec<WordDraft>) -> StoreResult<bool> {
        let mut guard = self.lock()?;
        if !guard.is_empty() {
            return Ok(false);
        }

        let mut next: Vec<WordEntry> = Vec::with_capacity(drafts.len());
        for draft in drafts {
            match draft.normalized() {
                Ok(d) if next.iter().all(|e| e.word != d.word) => {
                    next.push(d.into_entry(uuid::Uuid::new_v4().to_string()));
                }
                Ok(d) => tracing::warn!(word = %d.word, "Skipping duplicate seed word"),
                Err(e) => tracing::warn!(error = %e, "Skipping invalid seed word"),
            }
        }
        if next.is_empty() {
            return Ok(false);
        }

        let count = next.len();
        self.commit(&mut guard, next)?;
        tracing::info!(entries = count, "Seeded word dictionary");
        Ok(true)
    }
}
