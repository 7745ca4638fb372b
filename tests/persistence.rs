//! Stores survive a restart through their backing files.

use std::fs;
use wordgame::{BackendConfig, Leaderboard, StoreError, WordDraft, WordStore, seed};

#[test]
fn missing_files_start_empty() {
    let dir = tempfile::tempdir().unwrap();
    let words = WordStore::open(&BackendConfig::file(dir.path().join("words.json"))).unwrap();
    let board = Leaderboard::open(&BackendConfig::file(dir.path().join("scores.json"))).unwrap();

    assert!(words.is_empty().unwrap());
    assert!(board.is_empty().unwrap());
    // nothing is written until the first mutation
    assert!(!dir.path().join("words.json").exists());
}

#[test]
fn word_mutations_are_visible_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = BackendConfig::file(dir.path().join("data").join("words.json"));

    let (kept_id, deleted_id) = {
        let store = WordStore::open(&config).unwrap();
        let tiger = store.add(WordDraft::new("animals", "tiger", "Big striped cat")).unwrap();
        let eagle = store.add(WordDraft::new("animals", "eagle", "Flying predator")).unwrap();
        store
            .update_by_id(&tiger.id, WordDraft::new("animals", "lion", "King of the jungle"))
            .unwrap();
        store.delete_by_id(&eagle.id).unwrap();
        (tiger.id, eagle.id)
    };

    let store = WordStore::open(&config).unwrap();
    assert_eq!(store.len().unwrap(), 1);
    let lion = store.find_by_id(&kept_id).unwrap().expect("entry survives");
    assert_eq!(lion.word, "lion");
    assert!(store.find_by_id(&deleted_id).unwrap().is_none());
}

#[test]
fn leaderboard_order_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    let config = BackendConfig::file(&path);

    {
        let board = Leaderboard::open(&config).unwrap();
        board.upsert("alice", 100).unwrap();
        board.upsert("bob", 300).unwrap();
        board.upsert("alice", 50).unwrap();
    }

    let raw: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(raw[0]["nickname"], "bob");
    assert_eq!(raw[1]["score"], 100);

    let board = Leaderboard::open(&config).unwrap();
    assert_eq!(board.rank_of("alice").unwrap(), 2);
    assert_eq!(board.get("alice").unwrap().unwrap().score, 100);
}

#[test]
fn corrupt_file_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.json");
    fs::write(&path, b"{ definitely not a list").unwrap();

    let err = WordStore::open(&BackendConfig::file(&path)).err().expect("open must fail");
    assert!(matches!(err, StoreError::Decode(_)));
}

#[test]
fn seeding_writes_default_content_once() {
    let dir = tempfile::tempdir().unwrap();
    let words_cfg = BackendConfig::file(dir.path().join("words.json"));
    let scores_cfg = BackendConfig::file(dir.path().join("scores.json"));

    {
        let words = WordStore::open(&words_cfg).unwrap();
        let board = Leaderboard::open(&scores_cfg).unwrap();
        assert!(words.seed_if_empty(seed::default_words()).unwrap());
        assert!(board.seed_if_empty(seed::default_scores()).unwrap());
    }

    let words = WordStore::open(&words_cfg).unwrap();
    let board = Leaderboard::open(&scores_cfg).unwrap();
    assert_eq!(words.len().unwrap(), 10);
    assert_eq!(words.categories().unwrap().len(), 5);
    assert_eq!(board.top_n(1).unwrap()[0].nickname, "Champion1");
    assert!(!words.seed_if_empty(seed::default_words()).unwrap());
}
