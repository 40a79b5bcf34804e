//! # Definition Stores
//!
//! The engine treats definition storage as a read-only key-value
//! source: name in, validated [`FunctionDefinition`] out. Two
//! implementations are provided — [`DirStore`] reads `<name>.json`
//! documents from a directory (the deployment shape), [`MemoryStore`]
//! holds definitions in a map (tests and embedding).
//!
//! Documents validate on read: a malformed or structurally invalid
//! document is a load-time [`StoreError`], never a call-time surprise.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use telos_schema::{DefinitionError, FunctionDefinition, FunctionSpec};
use thiserror::Error;

/// Failure reading from a definition store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The backing storage could not be read.
    #[error("definition store error at '{path}': {reason}")]
    Io {
        /// Path or key being read.
        path: String,
        /// Underlying reason.
        reason: String,
    },

    /// A document exists but is not a valid definition.
    #[error("invalid definition document '{name}': {source}")]
    Invalid {
        /// Function name the document claims.
        name: String,
        /// The structural violation.
        #[source]
        source: DefinitionError,
    },

    /// A document exists but is not even valid JSON for the type.
    #[error("malformed definition document '{name}': {reason}")]
    Malformed {
        /// Function name or file stem.
        name: String,
        /// Parser diagnostic.
        reason: String,
    },
}

/// Read-only source of function definitions.
pub trait DefinitionStore: Send + Sync {
    /// Look up one definition by name. `Ok(None)` means not found.
    fn get(&self, name: &str) -> Result<Option<FunctionDefinition>, StoreError>;

    /// All definitions this store knows about.
    fn list(&self) -> Result<Vec<FunctionDefinition>, StoreError>;
}

/// Directory of `<name>.json` definition documents.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    /// A store over the given directory. The directory need not exist
    /// yet; lookups against a missing directory report not-found.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The backing directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Function names may only use word characters and hyphens. This
    /// keeps lookups from escaping the directory via path syntax.
    fn valid_name(name: &str) -> bool {
        !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    fn load(path: &Path, name: &str) -> Result<FunctionDefinition, StoreError> {
        let contents = std::fs::read_to_string(path).map_err(|err| StoreError::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        parse_document(&contents, name)
    }
}

/// Parse and validate one definition document.
///
/// Deserializes straight from the document text, never through an
/// intermediate `serde_json::Value` — a `Value` object re-sorts its
/// keys, and the response schema's declaration order is load-bearing
/// for multi-output functions.
fn parse_document(contents: &str, name: &str) -> Result<FunctionDefinition, StoreError> {
    let spec: FunctionSpec =
        serde_json::from_str(contents).map_err(|err| StoreError::Malformed {
            name: name.to_string(),
            reason: err.to_string(),
        })?;
    FunctionDefinition::from_spec(spec).map_err(|source| StoreError::Invalid {
        name: name.to_string(),
        source,
    })
}

impl DefinitionStore for DirStore {
    fn get(&self, name: &str) -> Result<Option<FunctionDefinition>, StoreError> {
        if !Self::valid_name(name) {
            return Ok(None);
        }
        let path = self.dir.join(format!("{name}.json"));
        if !path.is_file() {
            return Ok(None);
        }
        Self::load(&path, name).map(Some)
    }

    fn list(&self) -> Result<Vec<FunctionDefinition>, StoreError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(StoreError::Io {
                    path: self.dir.display().to_string(),
                    reason: err.to_string(),
                })
            }
        };

        let mut definitions = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| StoreError::Io {
                path: self.dir.display().to_string(),
                reason: err.to_string(),
            })?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let stem = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default()
                .to_string();
            definitions.push(Self::load(&path, &stem)?);
        }
        definitions.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(definitions)
    }
}

/// In-memory definition store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    definitions: HashMap<String, FunctionDefinition>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition, keyed by its own name.
    pub fn insert(&mut self, definition: FunctionDefinition) {
        self.definitions
            .insert(definition.name().to_string(), definition);
    }
}

impl FromIterator<FunctionDefinition> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = FunctionDefinition>>(iter: I) -> Self {
        let mut store = Self::new();
        for definition in iter {
            store.insert(definition);
        }
        store
    }
}

impl DefinitionStore for MemoryStore {
    fn get(&self, name: &str) -> Result<Option<FunctionDefinition>, StoreError> {
        Ok(self.definitions.get(name).cloned())
    }

    fn list(&self) -> Result<Vec<FunctionDefinition>, StoreError> {
        let mut definitions: Vec<_> = self.definitions.values().cloned().collect();
        definitions.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(definitions)
    }
}
