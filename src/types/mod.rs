// Shared type definitions for the bookmark client.

pub mod bookmark;
pub mod errors;
pub mod settings;
