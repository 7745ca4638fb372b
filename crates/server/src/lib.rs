//! Wordgame Server - HTTP REST API for the word guessing game
//!
//! This crate exposes the `wordgame` stores over HTTP:
//!
//! - **Scores**: submit finished rounds, read the leaderboard and ranks
//! - **Words**: dictionary CRUD, category listing and random selection
//! - **Health & Metrics**: Liveness/readiness probes and Prometheus-compatible metrics
//!
//! # Features
//!
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: One JSON error body with stable error codes
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! ## Service
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//!
//! ## Scores
//!
//! - `POST /api/scores` - Score a round and record it
//! - `GET /api/scores` - Leaderboard, highest first
//! - `GET /api/scores/top?n=10` - Top `n` entries
//! - `GET /api/scores/{nickname}/rank` - Rank of one player
//!
//! ## Words
//!
//! - `GET /wordEntry` - All words
//! - `GET /wordEntry/getRandomWord?category=...` - Random word from a category
//! - `GET /wordEntry/getCategories` - Distinct categories
//! - `POST /wordEntry/add` - Add a word
//! - `PUT /wordEntry/update/{id}` - Update a word
//! - `DELETE /wordEntry/delete/{id}` - Delete a word
//! - `GET /wordEntry/{id}` - Word by id
//! - `GET /wordEntry/word/{word}` - Word by text
//! - `GET /wordEntry/word/{word}/exists` - Whether a word exists
//! - `GET /wordEntry/category/{category}` - Words of a category

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
