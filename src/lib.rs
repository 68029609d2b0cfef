//! Vizygo Library
//!
//! This library provides the core of the Vizygo rental browser: the listing
//! catalog, filtering, tier pricing and booking, plus the mocked sign-in,
//! stories and support chat around them. The `vizygo` terminal app and the
//! `vizygo-web` API server are thin shells over it.

// Module declarations
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod shortcuts;
pub mod tui;

#[cfg(feature = "web")]
pub mod web;
