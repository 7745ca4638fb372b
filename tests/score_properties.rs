//! Property tests for the score formula and leaderboard ordering.

use proptest::prelude::*;
use wordgame::{BackendConfig, Leaderboard, ScoreInput, calculate_score};

fn input() -> impl Strategy<Value = ScoreInput> {
    (0u64..600_000, 0u32..100, any::<bool>(), 1u32..30)
        .prop_map(|(ms, attempts, hint, len)| ScoreInput::new(ms, attempts, hint, len))
}

proptest! {
    #[test]
    fn slower_is_never_better(base in input(), extra in 0u64..120_000) {
        let slower = ScoreInput { time_taken_ms: base.time_taken_ms + extra, ..base };
        prop_assert!(calculate_score(&slower) <= calculate_score(&base));
    }

    #[test]
    fn more_attempts_is_never_better(base in input(), extra in 0u32..50) {
        let worse = ScoreInput { attempts: base.attempts + extra, ..base };
        prop_assert!(calculate_score(&worse) <= calculate_score(&base));
    }

    #[test]
    fn hint_is_never_better(base in input()) {
        let with = ScoreInput { used_hint: true, ..base };
        let without = ScoreInput { used_hint: false, ..base };
        prop_assert!(calculate_score(&with) <= calculate_score(&without));
    }

    #[test]
    fn longer_words_are_never_worse(base in input(), extra in 0u32..20) {
        let longer = ScoreInput { word_length: base.word_length + extra, ..base };
        prop_assert!(calculate_score(&longer) >= calculate_score(&base));
    }

    #[test]
    fn breakdown_adds_up(base in input()) {
        let parts = base.breakdown();
        let raw = parts.base + parts.time_bonus - parts.attempts_penalty - parts.hint_penalty;
        prop_assert_eq!(parts.total, raw.max(0) as u64);
        prop_assert!((0..=500).contains(&parts.time_bonus));
    }

    #[test]
    fn board_stays_sorted_and_keeps_best(ops in prop::collection::vec((0usize..6, 0u64..1000), 1..60)) {
        let board = Leaderboard::open(&BackendConfig::in_memory()).unwrap();
        let mut best = [None::<u64>; 6];

        for (player, score) in ops {
            let changed = board.upsert(&format!("p{player}"), score).unwrap();
            let expected = best[player].is_none_or(|b| score > b);
            prop_assert_eq!(changed, expected);
            if expected {
                best[player] = Some(score);
            }

            let entries = board.list().unwrap();
            prop_assert!(entries.windows(2).all(|w| w[0].score >= w[1].score));
        }

        for (player, expected) in best.iter().enumerate() {
            let stored = board.get(&format!("p{player}")).unwrap().map(|e| e.score);
            prop_assert_eq!(stored, *expected);
        }
    }
}
