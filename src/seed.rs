//! Starter content for a fresh install.

use crate::dictionary::WordDraft;
use crate::leaderboard::ScoreEntry;

const WORDS: &[(&str, &str, &str)] = &[
    ("animals", "tiger", "Big striped cat"),
    ("animals", "eagle", "Flying predator"),
    ("colors", "blue", "Color of the sky"),
    ("colors", "green", "Color of grass"),
    ("fruits", "banana", "Yellow fruit"),
    ("fruits", "apple", "Keeps the doctor away"),
    ("jobs", "doctor", "Heals people"),
    ("jobs", "teacher", "Works in a school"),
    ("countries", "france", "Known for the Eiffel Tower"),
    ("countries", "canada", "Has maple syrup"),
];

const SCORES: &[(&str, u64)] = &[
    ("Champion1", 980),
    ("WordMaster", 850),
    ("GuessingPro", 720),
    ("FastGuesser", 690),
    ("WordNinja", 650),
    ("LuckyPlayer", 600),
    ("GameExpert", 580),
    ("QuickGuesser", 530),
    ("Wordsmith", 470),
    ("Newbie", 320),
];

pub fn default_words() -> Vec<WordDraft> {
    WORDS
        .iter()
        .map(|(category, word, hint)| WordDraft::new(*category, *word, *hint))
        .collect()
}

pub fn default_scores() -> Vec<ScoreEntry> {
    SCORES
        .iter()
        .map(|(nickname, score)| ScoreEntry::new(*nickname, *score))
        .collect()
}
