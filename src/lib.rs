//! Low-poly palette - material palette textures for low-poly models
//!
//! Renders the procedural colour tiles of [`swatch_engine`] into decorated
//! PNG textures, persists category selections, and serves both over HTTP.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
