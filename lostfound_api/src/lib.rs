//! # LostFound API
//!
//! This library provides an asynchronous Rust client for a campus
//! lost-and-found REST backend. It uses `tokio` for the async runtime and
//! `reqwest` for HTTP requests. Endpoint URLs are resolved once from the
//! environment (see [`config`]) and the REST surface is exposed as a set
//! of per-category traits implemented on [`client::LostFoundClient`].

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::*;
pub use config::ApiConfig;
pub use error::LostFoundError;
pub use types::*;
