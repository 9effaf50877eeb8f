//! `scriptboard-cli` library crate.
//!
//! The terminal front-end for the storyboard editor. Re-exports internal
//! modules for integration testing; the binary entrypoint lives in
//! `main.rs`.

pub mod command;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
