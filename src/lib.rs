//! remindmarks — a bookmark client that keeps a local replica of a remote
//! bookmark collection and highlights the bookmarks due today.
//!
//! This library crate exposes all modules for use by the binaries and
//! integration tests.

pub mod app;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
