//! Score calculation for a finished round.
//!
//! ```text
//! score = wordLength*100 + round(500 * e^(-0.1 * seconds)) - attempts*25 - (usedHint ? 100 : 0)
//! ```
//!
//! floored at zero. Time is supplied in milliseconds.

use serde::{Deserialize, Serialize};

/// Points awarded per letter of the guessed word.
pub const BASE_POINTS_PER_LETTER: i64 = 100;
/// Time bonus for an instant solve; decays exponentially.
pub const MAX_TIME_BONUS: f64 = 500.0;
/// Exponential decay rate of the time bonus, per second.
pub const TIME_DECAY_PER_SECOND: f64 = 0.1;
/// Deducted for every attempt.
pub const ATTEMPT_PENALTY: i64 = 25;
/// Deducted once when the hint was revealed.
pub const HINT_PENALTY: i64 = 100;

/// Inputs of a single round. Callers reject out-of-domain values before
/// building one; the calculator does not re-validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub time_taken_ms: u64,
    pub attempts: u32,
    pub used_hint: bool,
    pub word_length: u32,
}

/// The individual components that add up to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub base: i64,
    pub time_bonus: i64,
    pub attempts_penalty: i64,
    pub hint_penalty: i64,
    pub total: u64,
}

impl ScoreInput {
    pub fn new(time_taken_ms: u64, attempts: u32, used_hint: bool, word_length: u32) -> Self {
        Self {
            time_taken_ms,
            attempts,
            used_hint,
            word_length,
        }
    }

    pub fn breakdown(&self) -> ScoreBreakdown {
        let base = i64::from(self.word_length).saturating_mul(BASE_POINTS_PER_LETTER);
        let time_bonus = time_bonus(self.time_taken_ms);
        let attempts_penalty = i64::from(self.attempts).saturating_mul(ATTEMPT_PENALTY);
        let hint_penalty = if self.used_hint { HINT_PENALTY } else { 0 };

        let raw = base
            .saturating_add(time_bonus)
            .saturating_sub(attempts_penalty)
            .saturating_sub(hint_penalty);

        ScoreBreakdown {
            base,
            time_bonus,
            attempts_penalty,
            hint_penalty,
            total: raw.max(0) as u64,
        }
    }
}

/// Compute the score for a round.
pub fn calculate_score(input: &ScoreInput) -> u64 {
    input.breakdown().total
}

fn time_bonus(time_taken_ms: u64) -> i64 {
    let seconds = time_taken_ms as f64 / 1000.0;
    (MAX_TIME_BONUS * (-TIME_DECAY_PER_SECOND * seconds).exp()).round() as i64
}
