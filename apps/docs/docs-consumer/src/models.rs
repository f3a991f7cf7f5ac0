//! Documents served by the docs API.
//!
//! `ArchitectureDoc` wraps the Markdown returned by `/api/docs/architecture`;
//! `GeneratedDoc` mirrors the JSON returned by `/api/docs/generate`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::markdown::{self, SearchHit, Sections};

/// Raw Markdown architecture document, kept verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchitectureDoc {
    text: String,
}

impl ArchitectureDoc {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn size_bytes(&self) -> usize {
        self.text.len()
    }

    pub fn size_kb(&self) -> f64 {
        self.text.len() as f64 / 1024.0
    }

    /// Number of `\n`-separated lines; an empty document still counts as one.
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Second-level headings in document order. Each call starts over.
    pub fn sections(&self) -> Sections<'_> {
        markdown::extract_sections(&self.text)
    }

    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        markdown::search(query, &self.text)
    }
}

/// Structured documentation generated from the server's source tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDoc {
    #[serde(serialize_with = "serialize_millis")]
    pub generated_at: DateTime<Utc>,
    pub endpoints: Vec<Endpoint>,
    pub utilities: Vec<Utility>,
    pub types: TypeDefinitions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Architecture>,
    /// Server-rendered Markdown version of this document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    /// Keys this client does not model, kept so exports stay lossless
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub method: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_params: Option<Vec<String>>,
}

impl Endpoint {
    /// "{method} {path}", the form used in the architecture document
    pub fn signature(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    pub fn query_params(&self) -> &[String] {
        self.query_params.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utility {
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub functions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinitions {
    pub interfaces: Vec<Interface>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    /// Raw field lines as they appear in the source, e.g. `amount: number`
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Architecture {
    pub layers: Vec<Layer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub location: String,
    pub description: String,
}

/// Millisecond precision with a `Z` suffix, the form the server emits
fn serialize_millis<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl GeneratedDoc {
    pub fn interface(&self, name: &str) -> Option<&Interface> {
        self.types.interfaces.iter().find(|i| i.name == name)
    }

    pub fn utility(&self, file: &str) -> Option<&Utility> {
        self.utilities.iter().find(|u| u.file == file)
    }
}
