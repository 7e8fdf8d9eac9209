//! Reading and writing kubeconfig documents.
//!
//! Parsing always goes through `serde_yaml`, which also accepts JSON input.
//! Serialization can produce YAML or JSON.

use crate::error::{Error, Result};
use crate::kubeconfig::schema::Kubeconfig;
use std::fmt;
use std::fs;
use std::path::Path;

/// Output format for a serialized document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    /// YAML, the usual kubeconfig format.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "yaml"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Parses document text into the kubeconfig model.
///
/// # Errors
///
/// Returns [`Error::EmptyDocument`] for blank input and [`Error::Parse`] when
/// the text is not a valid kubeconfig document.
///
/// # Examples
///
/// ```
/// use k8stk::kubeconfig::codec;
///
/// let doc = codec::parse("apiVersion: v1\nkind: Config\n").unwrap();
/// assert_eq!(doc.kind, "Config");
/// assert!(codec::parse("   \n").is_err());
/// ```
pub fn parse(text: &str) -> Result<Kubeconfig> {
    if text.trim().is_empty() {
        return Err(Error::EmptyDocument);
    }
    Ok(serde_yaml::from_str(text)?)
}

/// Serializes a document in the requested format.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the serializer rejects the document,
/// which does not happen for documents built from this crate's model.
pub fn serialize(doc: &Kubeconfig, format: DocumentFormat) -> Result<String> {
    let rendered = match format {
        DocumentFormat::Yaml => serde_yaml::to_string(doc).map_err(|e| e.to_string()),
        DocumentFormat::Json => serde_json::to_string_pretty(doc)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| e.to_string()),
    };

    rendered.map_err(|reason| Error::Serialization {
        format: format.to_string(),
        reason,
    })
}

/// Loads kubeconfig documents from disk.
///
/// # Examples
///
/// ```no_run
/// use k8stk::KubeconfigLoader;
/// use std::path::Path;
///
/// let doc = KubeconfigLoader::load(Path::new("/home/me/.kube/config")).unwrap();
/// println!("{} contexts", doc.contexts.len());
/// ```
pub struct KubeconfigLoader;

impl KubeconfigLoader {
    /// Read and parse a document file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, [`Error::Format`] if
    /// it cannot be parsed and [`Error::EmptyFile`] if it holds no document.
    /// All three carry the offending path.
    pub fn load(path: &Path) -> Result<Kubeconfig> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match parse(&contents) {
            Ok(doc) => Ok(doc),
            Err(Error::Parse(source)) => Err(Error::Format {
                path: path.to_path_buf(),
                source,
            }),
            Err(Error::EmptyDocument) => Err(Error::EmptyFile {
                path: path.to_path_buf(),
            }),
            Err(other) => Err(other),
        }
    }

    /// Load several document files, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the error of the first file that fails to load.
    pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Kubeconfig>> {
        paths.iter().map(|p| Self::load(p.as_ref())).collect()
    }

    /// Serialize a document and write it to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn write(doc: &Kubeconfig, path: &Path, format: DocumentFormat) -> Result<()> {
        let text = serialize(doc, format)?;
        fs::write(path, text).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
