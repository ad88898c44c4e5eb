//! Loading configured sources into documents.

use crate::error::{IngestError, IngestResult};
use crate::parsers::parse_document;
use docbot_core::Document;
use reqwest::Client;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Reads sources from the web or the local disk and parses them.
#[derive(Clone)]
pub struct DocumentLoader {
    client: Client,
}

impl DocumentLoader {
    /// Create a loader whose remote fetches time out after `timeout`.
    pub fn new(timeout: Duration) -> IngestResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Load every source, in order.
    ///
    /// Directories expand to the files beneath them. The first failure stops
    /// loading and names the offending source. Documents whose text was
    /// already loaded from another source are skipped.
    pub async fn load_all(&self, sources: &[String]) -> IngestResult<Vec<Document>> {
        let mut documents = Vec::new();
        let mut seen_hashes = HashSet::new();

        for source in self.expand_sources(sources)? {
            let document = self.load(&source).await?;

            if !seen_hashes.insert(document.content_hash.clone()) {
                warn!("Skipping {}: same content as an earlier document", source);
                continue;
            }

            documents.push(document);
        }

        info!("Loaded {} documents", documents.len());
        Ok(documents)
    }

    /// Load a single source.
    pub async fn load(&self, source: &str) -> IngestResult<Document> {
        let result = async {
            let bytes = self.fetch(source).await?;
            parse_document(source, &bytes)
        }
        .await;

        match result {
            Ok(document) => {
                info!(
                    "Loaded {} ({}, {} characters)",
                    source,
                    document.format,
                    document.text.chars().count()
                );
                Ok(document)
            }
            Err(e) => {
                debug!("Loading {} failed: {}", source, e);
                Err(IngestError::load(source, e))
            }
        }
    }

    /// Read the raw bytes of a source.
    async fn fetch(&self, source: &str) -> IngestResult<Vec<u8>> {
        if is_remote(source) {
            debug!("Fetching {}", source);
            let response = self.client.get(source).send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(IngestError::HttpStatus {
                    url: source.to_string(),
                    status: status.as_u16(),
                });
            }

            return Ok(response.bytes().await?.to_vec());
        }

        let path = local_path(source);
        if !path.exists() {
            return Err(IngestError::FileNotFound(path));
        }

        Ok(tokio::fs::read(&path).await?)
    }

    /// Replace local directories with the files they contain, sorted by path.
    fn expand_sources(&self, sources: &[String]) -> IngestResult<Vec<String>> {
        let mut expanded = Vec::with_capacity(sources.len());

        for source in sources {
            if is_remote(source) {
                expanded.push(source.clone());
                continue;
            }

            let path = local_path(source);
            if !path.is_dir() {
                expanded.push(source.clone());
                continue;
            }

            let mut files = Vec::new();
            for entry in WalkDir::new(&path).sort_by_file_name() {
                let entry = entry.map_err(|e| {
                    IngestError::load(source.as_str(), IngestError::Io(e.into()))
                })?;
                if entry.file_type().is_file() {
                    files.push(entry.path().to_string_lossy().to_string());
                }
            }

            if files.is_empty() {
                warn!("Directory {} contains no files", source);
            } else {
                debug!("Directory {} expanded to {} files", source, files.len());
            }
            expanded.extend(files);
        }

        Ok(expanded)
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn local_path(source: &str) -> PathBuf {
    Path::new(source.strip_prefix("file://").unwrap_or(source)).to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docbot_core::DocumentFormat;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn loader() -> DocumentLoader {
        DocumentLoader::new(Duration::from_secs(5)).unwrap()
    }

    fn write(dir: &Path, name: &str, contents: &str) -> String {
        let file = dir.join(name);
        std::fs::write(&file, contents).unwrap();
        file.to_string_lossy().to_string()
    }

    #[tokio::test]
    async fn test_load_local_files_by_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let sources = vec![
            write(dir.path(), "intro.html", "<h1>Intro</h1><p>Welcome</p>"),
            write(dir.path(), "config.json", r#"{"port": 8080}"#),
            write(dir.path(), "notes.custom", "a\n\n b"),
        ];

        let docs = loader().load_all(&sources).await.unwrap();

        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].format, DocumentFormat::Html);
        assert_eq!(docs[0].text, "Intro Welcome");
        assert_eq!(docs[1].text, "{port=8080}");
        assert_eq!(docs[2].text, "a b");
        assert_eq!(docs[2].source, sources[2]);
    }

    #[tokio::test]
    async fn test_file_url_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "readme.txt", "hello");

        let doc = loader().load(&format!("file://{}", file)).await.unwrap();
        assert_eq!(doc.text, "hello");
        assert_eq!(doc.format, DocumentFormat::Text);
    }

    #[tokio::test]
    async fn test_directory_expands_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.txt", "second");
        write(dir.path(), "a.txt", "first");
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        write(&dir.path().join("sub"), "c.md", "third");

        let sources = vec![dir.path().to_string_lossy().to_string()];
        let docs = loader().load_all(&sources).await.unwrap();

        let texts: Vec<&str> = docs.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(docs[2].format, DocumentFormat::Fallback);
    }

    #[tokio::test]
    async fn test_duplicate_content_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let sources = vec![
            write(dir.path(), "one.txt", "same"),
            write(dir.path(), "two.txt", "same"),
        ];

        let docs = loader().load_all(&sources).await.unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[tokio::test]
    async fn test_failure_names_source() {
        let dir = tempfile::tempdir().unwrap();
        let good = write(dir.path(), "good.txt", "fine");
        let bad = write(dir.path(), "bad.json", "[1, 2]");

        let err = loader().load_all(&[good, bad.clone()]).await.unwrap_err();

        assert_eq!(err.to_string(), format!("Failed to load document from {}", bad));
        match err {
            IngestError::Load { cause, .. } => {
                assert_eq!(cause.to_string(), "Failed to parse JSON content")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = loader().load("/definitely/not/here.txt").await.unwrap_err();
        assert!(matches!(
            err,
            IngestError::Load { ref cause, .. } if matches!(**cause, IngestError::FileNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_remote_source() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/docs/guide.html"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("<p>Remote <b>guide</b></p>"),
            )
            .mount(&server)
            .await;

        let url = format!("{}/docs/guide.html", server.uri());
        let doc = loader().load(&url).await.unwrap();

        assert_eq!(doc.text, "Remote guide");
        assert_eq!(doc.source, url);
    }

    #[tokio::test]
    async fn test_remote_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = format!("{}/missing.txt", server.uri());
        let err = loader().load(&url).await.unwrap_err();

        match err {
            IngestError::Load { location, cause } => {
                assert_eq!(location, url);
                assert!(matches!(*cause, IngestError::HttpStatus { status: 404, .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
