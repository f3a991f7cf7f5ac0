//! Docs Consumer
//!
//! Client for the documentation API served by the finance dashboard:
//! fetches the Markdown architecture document (`/api/docs/architecture`) and
//! the generated JSON metadata (`/api/docs/generate`), derives summary
//! analytics, searches the Markdown and checks that every generated endpoint
//! is mentioned in it.
//!
//! ## Module map
//! - `client.rs` — the two HTTP fetches.
//! - `models.rs` — `ArchitectureDoc` and `GeneratedDoc`.
//! - `markdown.rs` — section extraction and line search.
//! - `analysis.rs` — method table, key components, Transaction preview.
//! - `verify.rs` — documented-vs-generated endpoint coverage.
//! - `export.rs` — local copies of both documents.
//! - `local_docs.rs` — completeness check of a checked-in architecture file.
//! - `report.rs` — text rendering for the CLI.
//! - `config.rs` / `telemetry.rs` — environment config, tracing and color-eyre.

pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod local_docs;
pub mod markdown;
pub mod models;
pub mod report;
pub mod telemetry;
pub mod verify;

pub use analysis::{analyze, ApiAnalysis};
pub use client::DocsClient;
pub use config::{Config, Environment, FromEnv};
pub use error::{DocsError, DocsResult, FetchError};
pub use export::{export_metadata, load_metadata, save_to_file};
pub use local_docs::{check_local_docs, LocalDocsCheck};
pub use markdown::{extract_sections, search, SearchHit, Sections};
pub use models::{ArchitectureDoc, Endpoint, GeneratedDoc, Interface, Utility};
pub use verify::{verify, VerificationReport};
