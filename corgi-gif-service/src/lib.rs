//! Corgi GIF Service Library
//!
//! Finds a random corgi GIF doing a given activity via the Giphy search API,
//! and serves it over a small HTTP API alongside a browser page.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use corgi_gif_service::{Config, SearchProxy};
//!
//! let config = Config::load(None)?;
//! let proxy = SearchProxy::from_config(&config)?;
//! let gif = proxy.resolve(Some("running")).await?;
//! ```
//!
//! # Configuration
//! Set `GIPHY_API_KEY` and `PORT` env vars or configure in `~/.corgi-gif/config.toml`

pub mod backends;
pub mod config;
pub mod error;
pub mod init;
pub mod proxy;
pub mod types;
pub mod web;

pub use config::Config;
pub use error::{SearchError, SearchResult};
pub use init::init_tracing;
pub use proxy::SearchProxy;
pub use types::CorgiGif;
