//! # prep-core
//!
//! Core types, configuration, and error definitions for the TTS text
//! preprocessor.
//!
//! This crate provides the foundational pieces used across all other crates
//! in the workspace, including:
//!
//! - The token taxonomy (`TokenKind`) that drives the scanner battery
//! - Pipeline configuration structures
//! - The per-call diagnostics channel
//! - Unified error handling via `PrepError`

pub mod config;
pub mod error;
pub mod types;

pub use config::{CodeBlockMode, IpReadMode, PipelineConfig, UrlDetail};
pub use error::{PrepError, PrepResult};
pub use types::{Diagnostics, TokenKind};
