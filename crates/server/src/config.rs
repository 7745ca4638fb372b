use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use wordgame::BackendConfig;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in KB
    #[serde(default = "default_max_body_size_kb")]
    pub max_body_size_kb: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log filter directive, e.g. `info` or `server=debug,wordgame=debug`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[serde(default = "default_true")]
    pub log_json: bool,

    /// Metrics endpoint enabled
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// File holding the word dictionary
    #[serde(default = "default_words_path")]
    pub words_path: PathBuf,

    /// File holding the leaderboard
    #[serde(default = "default_scores_path")]
    pub scores_path: PathBuf,

    /// Cap for `GET /api/scores`; the full board when unset
    #[serde(default)]
    pub leaderboard_limit: Option<usize>,

    /// Answer 409 when a submitted score does not improve the player's best
    #[serde(default)]
    pub reject_stale_scores: bool,

    /// Fill empty collections with the starter words and scores at startup
    #[serde(default)]
    pub seed_defaults: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_kb: default_max_body_size_kb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            log_json: default_true(),
            metrics_enabled: default_true(),
            words_path: default_words_path(),
            scores_path: default_scores_path(),
            leaderboard_limit: None,
            reject_stale_scores: false,
            seed_defaults: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, an optional `server.*` file, and
    /// `WORDGAME_SERVER__*` environment variables, in increasing precedence.
    pub fn load() -> anyhow::Result<Self> {
        // a missing .env is normal outside development
        let _ = dotenvy::dotenv();

        let builder = config::Config::builder()
            .add_source(config::File::with_name("server").required(false))
            .add_source(config::Environment::with_prefix("WORDGAME_SERVER").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make the server misbehave at runtime.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.leaderboard_limit == Some(0) {
            anyhow::bail!("leaderboard_limit must be positive when set");
        }
        if self.words_path.as_os_str().is_empty() || self.scores_path.as_os_str().is_empty() {
            anyhow::bail!("words_path and scores_path must not be empty");
        }
        if self.words_path == self.scores_path {
            anyhow::bail!("words_path and scores_path must point to different files");
        }
        Ok(())
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_kb * 1024
    }

    pub fn words_backend(&self) -> BackendConfig {
        BackendConfig::file(&self.words_path)
    }

    pub fn scores_backend(&self) -> BackendConfig {
        BackendConfig::file(&self.scores_path)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_kb() -> usize {
    64
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_words_path() -> PathBuf {
    PathBuf::from("data/words.json")
}

fn default_scores_path() -> PathBuf {
    PathBuf::from("data/scores.json")
}
