//! Container adapter: plain `.kml` files and zipped `.kmz` archives.
//!
//! Document bytes are fully materialized before the parser streams them.

use std::fs;
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::config::{SourceFormat, ARCHIVE_DOCUMENT_NAME};
use crate::error::{KmlError, Result};

/// Read a source file and report its container format.
///
/// # Errors
/// `UnsupportedFormat` for an unknown extension, `FailedToReadSource` when
/// the file cannot be read.
pub fn read_source(path: &Path) -> Result<(Vec<u8>, SourceFormat)> {
    let format = SourceFormat::from_path(path)?;
    let bytes = fs::read(path).map_err(|e| KmlError::FailedToReadSource {
        source_name: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok((bytes, format))
}

/// Document bytes of the first `.kml` entry in an archive.
///
/// # Errors
/// `FailedToReadSource` when the archive is unreadable or holds no document.
pub fn extract_document(archive: &[u8]) -> Result<Vec<u8>> {
    let failed = |reason: String| KmlError::FailedToReadSource {
        source_name: "KMZ archive".to_string(),
        reason,
    };

    let mut zip = ZipArchive::new(Cursor::new(archive))
        .map_err(|e| failed(format!("cannot open archive: {e}")))?;

    let index = (0..zip.len())
        .find(|&i| {
            zip.name_for_index(i)
                .is_some_and(|name| name.to_ascii_lowercase().ends_with(".kml"))
        })
        .ok_or_else(|| failed("no .kml entry found".to_string()))?;

    let mut entry = zip
        .by_index(index)
        .map_err(|e| failed(format!("cannot read entry: {e}")))?;
    tracing::debug!(entry = %entry.name(), "Reading document from archive");

    let mut bytes = Vec::new();
    entry
        .read_to_end(&mut bytes)
        .map_err(|e| failed(format!("cannot decompress entry: {e}")))?;
    Ok(bytes)
}

/// Write serialized KML as a single-entry archive.
///
/// # Errors
/// Returns `Archive` or `Io` when the sink fails.
pub fn write_archive<W: Write + Seek>(document: &[u8], sink: W) -> Result<W> {
    let mut zip = ZipWriter::new(sink);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(ARCHIVE_DOCUMENT_NAME, options)?;
    zip.write_all(document)?;
    Ok(zip.finish()?)
}
