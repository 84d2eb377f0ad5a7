//! # folio-core
//!
//! Core types, traits, configuration, knowledge base, and error handling for
//! the folio portfolio assistant.

pub mod config;
pub mod error;
pub mod knowledge;
pub mod message;
pub mod traits;
