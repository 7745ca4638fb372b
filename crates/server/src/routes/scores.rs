use crate::error::{ServerError, ServerResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::{blocking, ServerState};
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use wordgame::{ScoreEntry, ScoreInput, ValidationErrors};

/// A finished round submitted by the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    #[serde(default)]
    pub nickname: String,

    /// Milliseconds from first guess to solve
    #[serde(rename = "timeTakenMS", alias = "timeTaken")]
    pub time_taken_ms: i64,

    pub attempts: i64,

    #[serde(default)]
    pub used_hint: bool,

    pub word_length: i64,
}

impl ScoreSubmission {
    /// Check the round's fields and convert them into calculator input.
    pub fn validate(&self) -> Result<ScoreInput, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        wordgame::validation::require_non_blank(
            &mut errors,
            "nickname",
            "Nickname",
            &self.nickname,
        );

        let time_taken_ms = u64::try_from(self.time_taken_ms).unwrap_or_else(|_| {
            errors.add("timeTakenMS", "Time taken cannot be negative");
            0
        });
        let attempts = if self.attempts < 0 {
            errors.add("attempts", "Attempts cannot be negative");
            0
        } else {
            u32::try_from(self.attempts).unwrap_or_else(|_| {
                errors.add("attempts", "Attempts out of range");
                0
            })
        };
        let word_length = if self.word_length <= 0 {
            errors.add("wordLength", "Word length must be positive");
            0
        } else {
            u32::try_from(self.word_length).unwrap_or_else(|_| {
                errors.add("wordLength", "Word length out of range");
                0
            })
        };

        errors.into_result()?;
        Ok(ScoreInput::new(
            time_taken_ms,
            attempts,
            self.used_hint,
            word_length,
        ))
    }
}

/// Response to a score submission
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreSubmissionResponse {
    /// Score earned by this round
    pub score: u64,
    pub nickname: String,
    /// Position on the board after the submission
    pub rank: usize,
    /// True when the score was added or improved the player's best
    pub status: bool,
}

#[derive(Debug, Deserialize)]
pub struct TopScoresQuery {
    #[serde(default = "default_top_n")]
    pub n: usize,
}

fn default_top_n() -> usize {
    10
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankResponse {
    pub nickname: String,
    pub rank: usize,
}

/// Score a finished round and record it on the leaderboard
pub async fn submit_score(
    State(state): State<Arc<ServerState>>,
    ApiJson(submission): ApiJson<ScoreSubmission>,
) -> ServerResult<Json<ScoreSubmissionResponse>> {
    let input = submission.validate()?;
    let breakdown = input.breakdown();
    let score = breakdown.total;

    let scores = state.scores.clone();
    let nickname = submission.nickname.clone();
    let standing = blocking(move || Ok(scores.submit(&nickname, score)?)).await?;

    metrics::counter!(
        "wordgame_scores_submitted_total",
        "changed" => if standing.changed { "true" } else { "false" }
    )
    .increment(1);
    tracing::info!(
        nickname = %submission.nickname,
        score,
        base = breakdown.base,
        time_bonus = breakdown.time_bonus,
        attempts_penalty = breakdown.attempts_penalty,
        hint_penalty = breakdown.hint_penalty,
        rank = standing.rank,
        changed = standing.changed,
        "Score submitted"
    );

    if !standing.changed && state.config.reject_stale_scores {
        return Err(ServerError::Conflict(format!(
            "Score {score} does not beat the best score {} for {}",
            standing.best, standing.nickname
        )));
    }

    Ok(Json(ScoreSubmissionResponse {
        score,
        nickname: submission.nickname,
        rank: standing.rank,
        status: standing.changed,
    }))
}

/// Leaderboard, highest first; capped by `leaderboard_limit` when configured
pub async fn list_scores(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<Json<Vec<ScoreEntry>>> {
    let scores = state.scores.clone();
    let limit = state.config.leaderboard_limit;
    let entries = blocking(move || {
        Ok(match limit {
            Some(n) => scores.top_n(n)?,
            None => scores.list()?,
        })
    })
    .await?;
    Ok(Json(entries))
}

/// Top `n` entries (default 10)
pub async fn top_scores(
    State(state): State<Arc<ServerState>>,
    ApiQuery(query): ApiQuery<TopScoresQuery>,
) -> ServerResult<Json<Vec<ScoreEntry>>> {
    let scores = state.scores.clone();
    let entries = blocking(move || Ok(scores.top_n(query.n)?)).await?;
    Ok(Json(entries))
}

/// Current rank of a nickname
pub async fn player_rank(
    State(state): State<Arc<ServerState>>,
    ApiPath(nickname): ApiPath<String>,
) -> ServerResult<Json<RankResponse>> {
    let scores = state.scores.clone();
    let lookup = nickname.clone();
    let rank = blocking(move || Ok(scores.rank_of(&lookup)?)).await?;
    Ok(Json(RankResponse { nickname, rank }))
}
