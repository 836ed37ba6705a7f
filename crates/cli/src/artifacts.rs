// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact records gathered by the host before any audit runs.
//!
//! Artifacts arrive as a JSON bag keyed by artifact name. Records are
//! structured types with required fields: a record missing a field is
//! rejected at deserialization time with a named validation error
//! instead of surfacing later as a fault inside an audit.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// One recorded console message. Only `entry.text` is consulted;
/// everything else the host attaches is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleMessage {
    pub entry: ConsoleEntry,
}

/// The inspected part of a console message.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleEntry {
    pub text: String,
}

/// One image the host determined could be re-encoded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedImageCandidate {
    pub url: String,
    /// Re-encoded JPEG size in bytes.
    pub jpeg_size: u64,
}

/// One rendered image element on the page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    pub src: String,
    pub natural_height: u32,
    pub natural_width: u32,
}

/// The artifact bag supplied by the external gatherer.
///
/// Keys follow the gatherer's artifact names. Artifacts this tool does
/// not consume are tolerated and dropped; artifacts absent from the bag
/// deserialize as `None` and surface as [`Error::MissingArtifact`] when
/// an audit that requires them runs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artifacts {
    #[serde(rename = "ConsoleMessages")]
    pub console_messages: Option<Vec<ConsoleMessage>>,

    #[serde(rename = "OptimizedImages")]
    pub optimized_images: Option<Vec<OptimizedImageCandidate>>,

    #[serde(rename = "ImageElements")]
    pub image_elements: Option<Vec<ImageElement>>,
}

impl Artifacts {
    /// Console messages, or the named error when the gatherer omitted them.
    pub fn console_messages(&self) -> Result<&[ConsoleMessage]> {
        self.console_messages
            .as_deref()
            .ok_or(Error::MissingArtifact {
                name: "ConsoleMessages",
            })
    }

    /// Optimized-image candidates, or the named error when omitted.
    pub fn optimized_images(&self) -> Result<&[OptimizedImageCandidate]> {
        self.optimized_images
            .as_deref()
            .ok_or(Error::MissingArtifact {
                name: "OptimizedImages",
            })
    }

    /// Rendered image elements, or the named error when omitted.
    pub fn image_elements(&self) -> Result<&[ImageElement]> {
        self.image_elements
            .as_deref()
            .ok_or(Error::MissingArtifact {
                name: "ImageElements",
            })
    }

    /// Parse an artifact bag from a JSON reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| Error::Artifact {
            message: e.to_string(),
        })
    }

    /// Parse an artifact bag from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Artifact {
            message: e.to_string(),
        })
    }
}

/// Load an artifact bag from a JSON file.
pub fn load(path: &Path) -> Result<Artifacts> {
    let file = std::fs::File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Artifacts::from_reader(std::io::BufReader::new(file))
}

#[cfg(test)]
#[path = "artifacts_tests.rs"]
mod tests;
