//! Client-side data layer for the recipe app.
//!
//! - [`api`]: one function per backend endpoint, JSON in and out
//! - [`store`]: the in-memory catalog a UI binds to
//! - [`config`]: `config.toml` loading

pub mod api;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod store;
