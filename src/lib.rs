//! Core of the word-guessing game backend.
//!
//! Two file-backed collections and one formula:
//!
//! - [`WordStore`]: categorized dictionary with hints, unique by word text,
//!   with random selection by category.
//! - [`Leaderboard`]: one best score per nickname, kept sorted descending.
//! - [`calculate_score`]: turns a finished round into points.
//!
//! Each store owns its list behind a single mutex and rewrites its whole
//! backing file after every mutation. Storage is pluggable through the
//! [`Backend`] trait; [`BackendConfig`] builds either a file backend or an
//! in-memory one for tests.
//!
//! ```
//! use wordgame::{BackendConfig, Leaderboard, ScoreInput, WordDraft, WordStore, calculate_score};
//!
//! let words = WordStore::open(&BackendConfig::in_memory()).unwrap();
//! words.add(WordDraft::new("fruits", "Apple", "Keeps the doctor away")).unwrap();
//! assert_eq!(words.categories().unwrap(), vec!["fruits"]);
//!
//! let board = Leaderboard::open(&BackendConfig::in_memory()).unwrap();
//! let score = calculate_score(&ScoreInput::new(2000, 1, false, 5));
//! assert_eq!(score, 884);
//! assert!(board.upsert("alice", score).unwrap());
//! assert_eq!(board.rank_of("alice").unwrap(), 1);
//! ```

pub mod backend;
pub mod dictionary;
pub mod error;
pub mod leaderboard;
pub mod score;
pub mod seed;
pub mod validation;

pub use backend::{Backend, BackendConfig, FileBackend, InMemoryBackend};
pub use dictionary::{WordDraft, WordEntry, WordStore};
pub use error::{StoreError, StoreResult, ValidationErrors};
pub use leaderboard::{Leaderboard, ScoreEntry, Standing};
pub use score::{ScoreBreakdown, ScoreInput, calculate_score};
