//! Configuration structures and loading.

use crate::error::{ConfigError, ConfigResult};
use crate::paths::AppPaths;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ollama: OllamaConfig,

    #[serde(default)]
    pub documents: DocumentsConfig,

    #[serde(default)]
    pub chunking: ChunkingConfig,

    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> ConfigResult<Self> {
        let paths = AppPaths::new().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let contents = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Create a default config file with comments. An existing file is left alone.
    pub fn create_default_file(path: &Path) -> ConfigResult<()> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, Self::default_config_string())?;
        Ok(())
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.chunking.chunk_size == 0 {
            return Err(ConfigError::Invalid("chunking.chunk_size must be > 0".into()));
        }
        if self.chunking.chunk_overlap >= self.chunking.chunk_size {
            return Err(ConfigError::Invalid(
                "chunking.chunk_overlap must be smaller than chunking.chunk_size".into(),
            ));
        }
        if self.retrieval.max_results == 0 {
            return Err(ConfigError::Invalid("retrieval.max_results must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.retrieval.min_score) {
            return Err(ConfigError::Invalid(
                "retrieval.min_score must be between 0.0 and 1.0".into(),
            ));
        }
        if self.retrieval.embed_concurrency == 0 {
            return Err(ConfigError::Invalid(
                "retrieval.embed_concurrency must be > 0".into(),
            ));
        }
        if self.retrieval.memory_messages < 2 {
            return Err(ConfigError::Invalid(
                "retrieval.memory_messages must hold at least one question and answer".into(),
            ));
        }
        Ok(())
    }

    /// Add a document source, ignoring duplicates.
    pub fn add_source(&mut self, source: String) {
        if !self.documents.sources.contains(&source) {
            self.documents.sources.push(source);
        }
    }

    /// Generate a default config file with helpful comments.
    pub fn default_config_string() -> String {
        r#"# Docbot Configuration
# Chat with a fixed set of documents

[server]
host = "127.0.0.1"
port = 8080

# Largest accepted question body, in bytes
max_body_bytes = 65536

[ollama]
# Ollama server address
host = "http://localhost:11434"

# Model answering questions
model = "llama3.2:3b"

# Model for generating embeddings
embedding_model = "nomic-embed-text"

# Request timeout in seconds
timeout_seconds = 120

[documents]
# Loaded once at startup. Each entry is an http(s) URL, a file:// URL,
# a local file or a local directory. The parser is picked by suffix:
# .html .json .xml .txt .pdf .custom, anything else is read as text.
sources = [
    # "https://docs.spring.io/spring-boot/index.html",
    # "./docs",
]

[chunking]
# Sizes are in characters
chunk_size = 1000
chunk_overlap = 100

[retrieval]
# Segments handed to the model per question
max_results = 3

# Minimum cosine similarity for a segment to be used (0.0 to 1.0)
min_score = 0.5

# Conversation window kept between questions
memory_messages = 10

# Parallel embedding requests during startup
embed_concurrency = 4

temperature = 0.7
"#
        .to_string()
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Ollama LLM settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    pub host: String,
    pub model: String,
    pub embedding_model: String,
    pub timeout_seconds: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:11434".to_string(),
            model: "llama3.2:3b".to_string(),
            embedding_model: "nomic-embed-text".to_string(),
            timeout_seconds: 120,
        }
    }
}

/// Which documents are loaded at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    pub sources: Vec<String>,
}

/// Text chunking settings, in characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 100,
        }
    }
}

/// Retrieval and conversation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub max_results: usize,
    pub min_score: f32,
    pub memory_messages: usize,
    pub embed_concurrency: usize,
    pub temperature: f32,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_results: 3,
            min_score: 0.5,
            memory_messages: 10,
            embed_concurrency: 4,
            temperature: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ollama.host, "http://localhost:11434");
        assert_eq!(config.server.address(), "127.0.0.1:8080");
        assert_eq!(config.retrieval.memory_messages, 10);
        assert!(config.documents.sources.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_string_parses() {
        let config: Config = toml::from_str(&Config::default_config_string()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.chunking.chunk_size, 1000);
        assert_eq!(config.retrieval.max_results, 3);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.add_source("https://example.com/guide.html".to_string());

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(deserialized.ollama.model, config.ollama.model);
        assert_eq!(deserialized.documents.sources, config.documents.sources);
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
            [ollama]
            model = "mistral"

            [documents]
            sources = ["docs/intro.txt", "docs/api.json"]
            "#
        )
        .unwrap();

        let config = Config::load_from(temp_file.path()).unwrap();

        assert_eq!(config.ollama.model, "mistral");
        assert_eq!(config.documents.sources.len(), 2);
        // Defaults should still work
        assert_eq!(config.ollama.host, "http://localhost:11434");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_invalid_overlap_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
            [chunking]
            chunk_size = 100
            chunk_overlap = 100
            "#
        )
        .unwrap();

        let err = Config::load_from(temp_file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_save_and_create_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::create_default_file(&path).unwrap();
        assert!(path.exists());

        let mut config = Config::load_from(&path).unwrap();
        config.server.port = 9090;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap().server.port, 9090);

        let err = Config::create_default_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));
    }

    #[test]
    fn test_add_source_dedupes() {
        let mut config = Config::default();
        config.add_source("a.txt".to_string());
        config.add_source("a.txt".to_string()); // Duplicate

        assert_eq!(config.documents.sources, vec!["a.txt".to_string()]);
    }
}
