//! JSON Presenter
//!
//! Detects raw JSON documents and re-renders them as self-contained,
//! syntax-highlighted HTML pages with a light/dark theme toggle.
//!
//! This library provides:
//! - JSON sniffing, parsing and canonical pretty-printing
//! - An explicit lexer producing classified highlight tokens
//! - HTML page rendering with a theme state machine
//! - Configuration management

pub mod config;
pub mod format;
pub mod highlight;
pub mod parse;
pub mod pipeline;
pub mod render;
pub mod sniff;

// Re-exports for clean public API
pub use config::Config;
pub use highlight::highlight;
pub use pipeline::{present, Outcome};
pub use render::{render_page, Theme};
pub use sniff::looks_like_json;
