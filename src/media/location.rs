// SPDX-License-Identifier: MPL-2.0
//! Resource locations (remote URL or local file) and byte retrieval.
//!
//! Story lists and story images may come from either place, so both go
//! through [`read_bytes`]. Remote requests are sent without credentials.

use crate::error::{Error, FetchError, Result};
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

/// Overall deadline for a single HTTP request.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

static HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Where a resource lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// `http://` or `https://` URL.
    Remote(String),
    /// Path on the local filesystem.
    Local(PathBuf),
}

impl Location {
    /// Classifies a raw location string.
    ///
    /// `file://` prefixes are stripped; anything else that is not an HTTP(S)
    /// URL is treated as a path.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FetchError::InvalidLocation(raw.to_string()).into());
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Self::Remote(trimmed.to_string()));
        }

        if let Some(path) = trimmed.strip_prefix("file://") {
            return Ok(Self::Local(PathBuf::from(path)));
        }

        if lower.contains("://") {
            return Err(FetchError::InvalidLocation(raw.to_string()).into());
        }

        Ok(Self::Local(PathBuf::from(trimmed)))
    }

    /// Resolves `reference` against this location, the way a browser
    /// resolves a link found in a document served from here.
    ///
    /// HTTP(S) URLs and `file://` references are absolute and returned as
    /// is. Under a remote base every other reference is joined with
    /// [`reqwest::Url::join`] (so `/img/a.jpg` is host-relative). Under a
    /// local base, relative paths are taken from the base file's directory.
    #[must_use]
    pub fn resolve(&self, reference: &str) -> String {
        let trimmed = reference.trim();
        if trimmed.is_empty() {
            return reference.to_string();
        }
        match Self::parse(trimmed) {
            Ok(Self::Local(path)) if !trimmed.starts_with("file://") => match self {
                Self::Remote(base) => reqwest::Url::parse(base)
                    .and_then(|base| base.join(trimmed))
                    .map(String::from)
                    .unwrap_or_else(|err| {
                        log::warn!("Cannot resolve {trimmed} against {base}: {err}");
                        reference.to_string()
                    }),
                Self::Local(base) if path.is_relative() => base
                    .parent()
                    .map(|dir| dir.join(&path).to_string_lossy().into_owned())
                    .unwrap_or_else(|| reference.to_string()),
                Self::Local(_) => reference.to_string(),
            },
            _ => reference.to_string(),
        }
    }
}

fn http_client() -> Result<reqwest::Client> {
    if let Some(client) = HTTP_CLIENT.get() {
        return Ok(client.clone());
    }

    let client = reqwest::Client::builder()
        .user_agent(concat!("iced_stories/", env!("CARGO_PKG_VERSION")))
        .timeout(HTTP_TIMEOUT)
        .build()?;
    Ok(HTTP_CLIENT.get_or_init(|| client).clone())
}

/// Reads the whole resource into memory.
///
/// # Errors
///
/// - [`Error::Fetch`] for invalid locations, transport failures and
///   non-success HTTP statuses
/// - [`Error::Io`] when a local file cannot be read
pub async fn read_bytes(raw: &str) -> Result<Vec<u8>> {
    match Location::parse(raw)? {
        Location::Remote(url) => {
            let response = http_client()?.get(&url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(Error::Fetch(FetchError::Status(status.as_u16())));
            }
            let bytes = response.bytes().await?;
            Ok(bytes.to_vec())
        }
        Location::Local(path) => Ok(tokio::fs::read(&path).await?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_recognizes_http_urls() {
        assert_eq!(
            Location::parse("https://cdn.example/s.json").unwrap(),
            Location::Remote("https://cdn.example/s.json".to_string())
        );
        assert!(matches!(
            Location::parse("HTTP://example.com/a.png").unwrap(),
            Location::Remote(_)
        ));
    }

    #[test]
    fn parse_treats_plain_strings_as_paths() {
        assert_eq!(
            Location::parse("stories.json").unwrap(),
            Location::Local(PathBuf::from("stories.json"))
        );
        assert_eq!(
            Location::parse("file:///tmp/a.png").unwrap(),
            Location::Local(PathBuf::from("/tmp/a.png"))
        );
    }

    #[test]
    fn parse_rejects_empty_and_unknown_schemes() {
        assert!(matches!(
            Location::parse("   "),
            Err(Error::Fetch(FetchError::InvalidLocation(_)))
        ));
        assert!(matches!(
            Location::parse("ftp://example.com/a.png"),
            Err(Error::Fetch(FetchError::InvalidLocation(_)))
        ));
    }

    #[test]
    fn resolve_joins_relative_references_under_remote_base() {
        let base = Location::parse("https://host.example/feed/stories.json").unwrap();
        assert_eq!(base.resolve("img/1.jpg"), "https://host.example/feed/img/1.jpg");
        assert_eq!(base.resolve("/img/1.jpg"), "https://host.example/img/1.jpg");
        assert_eq!(
            base.resolve("https://cdn.example/a.jpg"),
            "https://cdn.example/a.jpg"
        );
    }

    #[test]
    fn resolve_uses_list_directory_under_local_base() {
        let base = Location::parse("/data/feed/stories.json").unwrap();
        assert_eq!(
            PathBuf::from(base.resolve("img/1.jpg")),
            PathBuf::from("/data/feed").join("img/1.jpg")
        );
        assert_eq!(base.resolve("/srv/a.jpg"), "/srv/a.jpg");
        assert_eq!(base.resolve("file:///srv/a.jpg"), "file:///srv/a.jpg");
        assert_eq!(base.resolve(""), "");
    }

    #[test]
    fn resolve_keeps_bare_file_names_under_bare_local_base() {
        let base = Location::parse("stories.json").unwrap();
        assert_eq!(base.resolve("a.jpg"), "a.jpg");
    }

    #[tokio::test]
    async fn read_bytes_reads_local_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"hello").expect("write file");

        let bytes = read_bytes(path.to_str().unwrap()).await.expect("read");
        assert_eq!(bytes, b"hello");
    }

    #[tokio::test]
    async fn read_bytes_missing_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing.bin");

        let result = read_bytes(path.to_str().unwrap()).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
