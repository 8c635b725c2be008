//! Presentation Pipeline
//!
//! Runs sniff, parse, format, highlight and render in order, synchronously
//! to completion. Only the parse step can fail; it is reported to the log
//! and the document is left untouched.

use log::{debug, error, warn};

use crate::config::Config;
use crate::{format, highlight, parse, render, sniff};

/// Result of presenting one document.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The complete replacement page.
    Rendered(String),
    /// Input does not look like JSON; nothing was produced.
    NotJson,
    /// Input sniffed as JSON but failed to parse; nothing was produced.
    Invalid,
    /// Input exceeds the configured size cap; nothing was produced.
    TooLarge,
}

impl Outcome {
    /// Whether a replacement page was produced.
    pub fn is_rendered(&self) -> bool {
        matches!(self, Outcome::Rendered(_))
    }
}

/// Present a document.
///
/// Every outcome other than `Rendered` means the caller must keep the
/// original content as-is; a broken or partial render is never produced.
pub fn present(text: &str, config: &Config) -> Outcome {
    if text.len() > config.max_bytes {
        warn!(
            "skipping document of {} bytes (cap is {})",
            text.len(),
            config.max_bytes
        );
        return Outcome::TooLarge;
    }

    if !sniff::looks_like_json(text) {
        debug!("document does not look like JSON, leaving it alone");
        return Outcome::NotJson;
    }

    let value = match parse::parse_document(text) {
        Ok(value) => value,
        Err(e) => {
            error!("error parsing JSON: {e}");
            return Outcome::Invalid;
        }
    };

    let pretty = format::to_pretty(&value);
    let markup = highlight::highlight(&pretty);
    Outcome::Rendered(render::render_page(&markup, config.theme))
}
