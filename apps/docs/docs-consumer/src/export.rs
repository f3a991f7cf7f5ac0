//! Local copies of fetched documents.
//!
//! Both writers truncate any existing file. The handle is owned by the
//! function body, so it is closed on every return path.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::error::{DocsError, DocsResult};
use crate::models::{ArchitectureDoc, GeneratedDoc};

/// Write the architecture Markdown verbatim as UTF-8.
pub fn save_to_file(doc: &ArchitectureDoc, path: impl AsRef<Path>) -> DocsResult<()> {
    let path = path.as_ref();
    write_with(path, |writer| writer.write_all(doc.as_str().as_bytes()))?;

    info!(path = %path.display(), bytes = doc.size_bytes(), "Saved architecture document");
    Ok(())
}

/// Write the generated document as JSON indented by two spaces.
pub fn export_metadata(generated: &GeneratedDoc, path: impl AsRef<Path>) -> DocsResult<()> {
    let path = path.as_ref();
    let body = serde_json::to_vec_pretty(generated).map_err(DocsError::Serialize)?;
    write_with(path, |writer| writer.write_all(&body))?;

    info!(path = %path.display(), bytes = body.len(), "Exported generated metadata");
    Ok(())
}

/// Read a document previously written by `export_metadata`.
pub fn load_metadata(path: impl AsRef<Path>) -> DocsResult<GeneratedDoc> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DocsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(std::io::BufReader::new(file)).map_err(|source| DocsError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn write_with(
    path: &Path,
    body: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
) -> DocsResult<()> {
    let io_err = |source| DocsError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    body(&mut writer).map_err(io_err)?;
    writer.flush().map_err(io_err)
}
