//! # Redirector
//!
//! A small redirect service: it resolves short codes to destination URLs and
//! answers with an HTTP redirect.
//!
//! ## Architecture
//!
//! - **Storage Layer** ([`storage`]) - The [`storage::Store`] trait and its
//!   backends: a mutable in-memory map and a read-only map loaded from a YAML
//!   file and refreshed in the background
//! - **API Layer** ([`api`]) - Axum handlers and DTOs
//! - **Wiring** ([`config`], [`server`], [`routes`], [`state`]) - Startup glue
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve redirects from a file, re-checked every 5 seconds
//! export BACKEND_TYPE=file
//! export BACKEND_FILE_PATH=redirects.yaml
//!
//! cargo run
//! ```
//!
//! ## Redirects file
//!
//! ```yaml
//! redirects:
//!   - short: "abc123"
//!     long: "https://example.com/page"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod error;
pub mod state;
pub mod storage;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;
