//! langid Server
//!
//! HTTP prediction server for language identification. Loads the configured
//! fastText model files at startup and answers `POST /predict` with the
//! top-1 language and its confidence, alongside an embedded single-page
//! front-end.

pub mod cli;
pub mod config;
pub mod routes;
pub mod state;
pub mod static_files;

pub use cli::Cli;
pub use config::ServerConfig;
pub use routes::create_router;
pub use state::AppState;
