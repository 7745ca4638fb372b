use crate::config::ServerConfig;
use crate::error::ServerResult;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use wordgame::{seed, Leaderboard, WordStore};

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Word dictionary (shared across requests)
    pub words: Arc<WordStore>,

    /// Leaderboard (shared across requests)
    pub scores: Arc<Leaderboard>,

    /// Prometheus recorder handle, present when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Open both stores from the configured files. A corrupt file is fatal.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let words = WordStore::open(&config.words_backend())?;
        let scores = Leaderboard::open(&config.scores_backend())?;
        Self::with_stores(config, words, scores)
    }

    /// Build state around already-open stores, seeding them when configured.
    pub fn with_stores(
        config: ServerConfig,
        words: WordStore,
        scores: Leaderboard,
    ) -> ServerResult<Self> {
        if config.seed_defaults {
            words.seed_if_empty(seed::default_words())?;
            scores.seed_if_empty(seed::default_scores())?;
        }

        Ok(Self {
            config: Arc::new(config),
            words: Arc::new(words),
            scores: Arc::new(scores),
            metrics: None,
        })
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Run a synchronous store call on the blocking pool.
///
/// Store operations hold a mutex across a full file rewrite, which must not
/// happen on an async worker thread.
pub async fn blocking<T, F>(f: F) -> ServerResult<T>
where
    F: FnOnce() -> ServerResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

