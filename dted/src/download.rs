//! Remote tile fetching over HTTP.
//!
//! This module provides [`HttpTileSource`], a [`TileSource`] backed by an
//! HTTP server, and is only available when the `download` feature is
//! enabled. DTED tile sets are published by several agencies and community
//! mirrors; the source is configured with a URL template so any of them can
//! be addressed:
//!
//! - `https://example.com/dted/{name}.{level}`
//! - `https://example.com/{level}/{name}.{level}.gz`
//!
//! `{name}` expands to the tile name (`e008/n53`), `{level}` to the file
//! suffix (`dt0`, `dt1`, `dt2`). Gzip and zip payloads are detected from the
//! template extension and decompressed transparently.

use async_trait::async_trait;

use crate::error::{DtedError, Result};
use crate::source::{extract_from_zip, gunzip, Level, TileSource};

/// Default timeout for HTTP requests in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Default number of retry attempts on transport failure.
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Compression format of a remote tile payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// No compression - raw DTED bytes
    #[default]
    None,
    /// Gzip compression (`.gz`)
    Gzip,
    /// ZIP archive (`.zip`)
    Zip,
}

impl Compression {
    /// Detect compression format from a URL or filename.
    pub fn from_url(url: &str) -> Self {
        let lower = url.to_lowercase();
        if lower.ends_with(".gz") {
            Compression::Gzip
        } else if lower.ends_with(".zip") {
            Compression::Zip
        } else {
            Compression::None
        }
    }
}

/// Tile source fetching DTED files from an HTTP server.
///
/// Not-found responses surface as [`DtedError::TileNotFound`] so the
/// engine's precision fallback treats a sparse mirror exactly like a sparse
/// directory; transport errors are retried before giving up.
///
/// # Example
///
/// ```ignore
/// use dted::{HttpTileSource, Terrain};
///
/// let source = HttpTileSource::new("https://example.com/dted/{name}.{level}.gz")?;
/// let terrain = Terrain::new(source);
/// ```
pub struct HttpTileSource {
    client: reqwest::Client,
    url_template: String,
    max_retries: u32,
}

impl HttpTileSource {
    /// Create a source from a URL template.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created (e.g. TLS
    /// initialization failure).
    pub fn new(url_template: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            url_template: url_template.into(),
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Set the number of retry attempts on transport failure.
    pub fn with_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Resource URL for a tile name at a precision level.
    fn url_for(&self, name: &str, level: Level) -> String {
        self.url_template
            .replace("{name}", name)
            .replace("{level}", level.suffix())
    }

    fn decompress(&self, url: &str, body: &[u8], name: &str, level: Level) -> Result<Vec<u8>> {
        match Compression::from_url(url) {
            Compression::None => Ok(body.to_vec()),
            Compression::Gzip => gunzip(body),
            Compression::Zip => {
                extract_from_zip(body, level).ok_or_else(|| DtedError::TileNotFound {
                    name: name.to_string(),
                    level,
                })
            }
        }
    }
}

#[async_trait]
impl TileSource for HttpTileSource {
    async fn fetch(&self, name: &str, level: Level) -> Result<Vec<u8>> {
        let url = self.url_for(name, level);
        let mut last_error: Option<DtedError> = None;

        for _ in 0..=self.max_retries {
            let response = match self.client.get(&url).send().await {
                Ok(response) => response,
                Err(e) => {
                    last_error = Some(e.into());
                    continue;
                }
            };

            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Err(DtedError::TileNotFound {
                    name: name.to_string(),
                    level,
                });
            }

            match response.error_for_status() {
                Ok(response) => {
                    let body = response.bytes().await?;
                    return self.decompress(&url, &body, name, level);
                }
                Err(e) => {
                    last_error = Some(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| DtedError::TileNotFound {
            name: name.to_string(),
            level,
        }))
    }
}
