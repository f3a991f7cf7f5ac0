use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{DocsError, DocsResult};
use crate::models::ArchitectureDoc;

const ENDPOINTS_MARKER: &str = "/api/transactions";
const ARCHITECTURE_MARKER: &str = "Architecture Layers";
const EXAMPLES_MARKER: &str = "Example Requests";

/// Completeness of a checked-in architecture document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalDocsCheck {
    pub path: PathBuf,
    pub size_kb: f64,
    pub has_endpoints: bool,
    pub has_architecture: bool,
    pub has_examples: bool,
}

impl LocalDocsCheck {
    pub fn inspect(path: impl Into<PathBuf>, doc: &ArchitectureDoc) -> Self {
        let text = doc.as_str();
        Self {
            path: path.into(),
            size_kb: doc.size_kb(),
            has_endpoints: text.contains(ENDPOINTS_MARKER),
            has_architecture: text.contains(ARCHITECTURE_MARKER),
            has_examples: text.contains(EXAMPLES_MARKER),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.has_endpoints && self.has_architecture && self.has_examples
    }

    /// Names of the sections that appear to be missing
    pub fn missing_sections(&self) -> Vec<&'static str> {
        [
            (self.has_endpoints, "endpoints"),
            (self.has_architecture, "architecture"),
            (self.has_examples, "examples"),
        ]
        .into_iter()
        .filter(|(present, _)| !present)
        .map(|(_, name)| name)
        .collect()
    }
}

pub fn check_local_docs(path: impl AsRef<Path>) -> DocsResult<LocalDocsCheck> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DocsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(LocalDocsCheck::inspect(path, &ArchitectureDoc::new(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_document() {
        let doc = ArchitectureDoc::new(
            "## Endpoints\nGET /api/transactions\n## Architecture Layers\n## Example Requests\n",
        );
        let check = LocalDocsCheck::inspect("API_ARCHITECTURE.md", &doc);

        assert!(check.is_complete());
        assert!(check.missing_sections().is_empty());
    }

    #[test]
    fn test_incomplete_document_lists_missing_sections() {
        let check = LocalDocsCheck::inspect("x.md", &ArchitectureDoc::new("## Architecture Layers"));

        assert!(!check.is_complete());
        assert_eq!(check.missing_sections(), ["endpoints", "examples"]);
    }

    #[test]
    fn test_check_local_docs_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("API_ARCHITECTURE.md");
        std::fs::write(&path, "Example Requests").unwrap();

        let check = check_local_docs(&path).unwrap();
        assert_eq!(check.path, path);
        assert!(check.has_examples);
        assert!(!check.has_endpoints);
    }

    #[test]
    fn test_check_local_docs_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = check_local_docs(dir.path().join("nope.md")).unwrap_err();
        assert!(matches!(err, DocsError::Io { .. }));
    }
}
