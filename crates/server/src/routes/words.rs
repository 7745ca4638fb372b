use crate::error::{ServerError, ServerResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::{blocking, ServerState};
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use wordgame::{WordDraft, WordEntry};

/// Query parameters for a random word
#[derive(Debug, Deserialize)]
pub struct RandomWordQuery {
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordDeletedResponse {
    pub id: String,
    pub status: String,
}

fn record_mutation(operation: &'static str) {
    metrics::counter!("wordgame_word_mutations_total", "operation" => operation).increment(1);
}

/// All words, ordered by word text
pub async fn list_words(State(state): State<Arc<ServerState>>) -> ServerResult<Json<Vec<WordEntry>>> {
    let words = state.words.clone();
    Ok(Json(blocking(move || Ok(words.list()?)).await?))
}

/// A uniformly random word from `category`
pub async fn random_word(
    State(state): State<Arc<ServerState>>,
    ApiQuery(query): ApiQuery<RandomWordQuery>,
) -> ServerResult<Json<WordEntry>> {
    let category = query
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ServerError::BadRequest("Invalid category".to_string()))?;

    let words = state.words.clone();
    let lookup = category.clone();
    blocking(move || Ok(words.random_by_category(&lookup)?))
        .await?
        .map(Json)
        .ok_or_else(|| ServerError::not_found(format!("No words found in category: {category}")))
}

/// Add a word to the dictionary
pub async fn add_word(
    State(state): State<Arc<ServerState>>,
    ApiJson(draft): ApiJson<WordDraft>,
) -> ServerResult<Json<WordEntry>> {
    let words = state.words.clone();
    let entry = blocking(move || Ok(words.add(draft)?)).await?;
    record_mutation("add");
    tracing::info!(id = %entry.id, word = %entry.word, category = %entry.category, "Word added");
    Ok(Json(entry))
}

/// Replace the fields of an existing word
pub async fn update_word(
    State(state): State<Arc<ServerState>>,
    ApiPath(id): ApiPath<String>,
    ApiJson(draft): ApiJson<WordDraft>,
) -> ServerResult<Json<WordEntry>> {
    let words = state.words.clone();
    let entry = blocking(move || Ok(words.update_by_id(&id, draft)?)).await?;
    record_mutation("update");
    tracing::info!(id = %entry.id, word = %entry.word, "Word updated");
    Ok(Json(entry))
}

/// Delete a word by id
pub async fn delete_word(
    State(state): State<Arc<ServerState>>,
    ApiPath(id): ApiPath<String>,
) -> ServerResult<Json<WordDeletedResponse>> {
    let words = state.words.clone();
    let removed = blocking(move || Ok(words.delete_by_id(&id)?)).await?;
    record_mutation("delete");
    tracing::info!(id = %removed.id, word = %removed.word, "Word deleted");
    Ok(Json(WordDeletedResponse {
        id: removed.id,
        status: "deleted".to_string(),
    }))
}

/// Get a word by id
pub async fn get_word(
    State(state): State<Arc<ServerState>>,
    ApiPath(id): ApiPath<String>,
) -> ServerResult<Json<WordEntry>> {
    let words = state.words.clone();
    let lookup = id.clone();
    blocking(move || Ok(words.find_by_id(&lookup)?))
        .await?
        .map(Json)
        .ok_or_else(|| ServerError::not_found(format!("Word id {id} not found")))
}

/// Get a word by its text
pub async fn get_word_by_text(
    State(state): State<Arc<ServerState>>,
    ApiPath(word): ApiPath<String>,
) -> ServerResult<Json<WordEntry>> {
    let words = state.words.clone();
    let lookup = word.clone();
    blocking(move || Ok(words.find_by_word(&lookup)?))
        .await?
        .map(Json)
        .ok_or_else(|| ServerError::not_found(format!("Word {word} not found")))
}

/// Whether a word is already in the dictionary
pub async fn word_exists(
    State(state): State<Arc<ServerState>>,
    ApiPath(word): ApiPath<String>,
) -> ServerResult<Json<WordExistsResponse>> {
    let words = state.words.clone();
    let exists = blocking(move || Ok(words.find_by_word(&word)?.is_some())).await?;
    Ok(Json(WordExistsResponse { exists }))
}

/// Words of one category
pub async fn words_in_category(
    State(state): State<Arc<ServerState>>,
    ApiPath(category): ApiPath<String>,
) -> ServerResult<Json<Vec<WordEntry>>> {
    let words = state.words.clone();
    Ok(Json(blocking(move || Ok(words.find_by_category(&category)?)).await?))
}

/// Distinct categories
pub async fn list_categories(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<Json<Vec<String>>> {
    let words = state.words.clone();
    Ok(Json(blocking(move || Ok(words.categories()?)).await?))
}
