//! Bundle writer for assembling secure connect bundles.
//!
//! Used by tooling that repackages bundles and by tests that need real
//! archives on disk.

use crate::{BundleError, BundleMember, Result};
use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use tracing::{debug, info};
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// Builder for secure connect bundle archives.
#[derive(Debug, Default)]
pub struct BundleWriter {
    files: Vec<(String, Vec<u8>)>,
}

impl BundleWriter {
    /// Create an empty bundle writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary entry.
    pub fn add_file(&mut self, path: impl Into<String>, data: Vec<u8>) {
        let path = path.into();
        debug!(path = %path, bytes = data.len(), "Added file to bundle");
        self.files.push((path, data));
    }

    /// Add one of the known bundle members.
    pub fn add_member(&mut self, member: BundleMember, data: Vec<u8>) {
        self.add_file(member.file_name(), data);
    }

    /// Get total size in bytes before compression.
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|(_, data)| data.len() as u64).sum()
    }

    /// Get file count.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Write the bundle to a file.
    pub fn write(self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let files = self.write_archive(file)?;

        info!(path = %path.display(), files, "Bundle written");

        Ok(())
    }

    /// Write the bundle to a byte vector (for in-memory use).
    pub fn write_to_vec(self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        let files = self.write_archive(&mut buffer)?;
        let bytes = buffer.into_inner();

        info!(
            files,
            compressed_bytes = bytes.len(),
            "Bundle written to memory"
        );

        Ok(bytes)
    }

    fn write_archive<W: Write + Seek>(mut self, sink: W) -> Result<usize> {
        if self.files.is_empty() {
            return Err(BundleError::EmptyBundle);
        }

        // Sort files for deterministic ordering
        self.files.sort_by(|a, b| a.0.cmp(&b.0));

        let mut zip = ZipWriter::new(sink);
        let options: FileOptions<'_, ()> = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o600);

        for (file_path, data) in &self.files {
            zip.start_file(file_path.as_str(), options)?;
            zip.write_all(data)?;
        }

        zip.finish()?;

        Ok(self.files.len())
    }
}
