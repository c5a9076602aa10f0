//! Configuration types for PDF text extraction.
//!
//! All extraction behaviour is controlled through [`ExtractionConfig`],
//! built via its [`ExtractionConfigBuilder`]. Keeping every knob in one
//! struct makes it trivial to share configs across calls, serialise them
//! for logging, and diff two runs to understand why their outputs differ.
//!
//! Source and destination paths are call-site arguments, not config
//! fields: a config describes *how* to extract, the call says *what*.

use crate::error::Pdf2TxtError;
use serde::{Deserialize, Serialize};

/// Configuration for a PDF text extraction.
///
/// Built via [`ExtractionConfig::builder()`] or using
/// [`ExtractionConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2txt::ExtractionConfig;
///
/// let config = ExtractionConfig::builder()
///     .marker("Question #A1")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Literal marker substring to anchor the output at. Default: None.
    ///
    /// When set, the extractor searches the joined document text for the
    /// first occurrence (exact match, case-sensitive, no regex) and keeps
    /// only the suffix from there. When the marker is absent the final
    /// [`crate::pipeline::slice::FALLBACK_TAIL_CHARS`] characters are kept
    /// instead. When `None`, the full document text is kept.
    pub marker: Option<String>,

    /// PDF user password for encrypted documents.
    pub password: Option<String>,

    /// Download timeout for URL inputs in seconds. Default: 120.
    pub download_timeout_secs: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            marker: None,
            password: None,
            download_timeout_secs: 120,
        }
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.config.marker = Some(marker.into());
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn download_timeout_secs(mut self, secs: u64) -> Self {
        self.config.download_timeout_secs = secs.max(1);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractionConfig, Pdf2TxtError> {
        if self.config.download_timeout_secs == 0 {
            return Err(Pdf2TxtError::InvalidConfig(
                "Download timeout must be ≥ 1 second".into(),
            ));
        }
        Ok(self.config)
    }
}
