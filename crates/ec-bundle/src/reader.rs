//! Bundle reader for secure connect bundles.
//!
//! Opens the ZIP archive and pulls the known members into memory.

use crate::{BundleError, BundleMember, RawBundleContents, Result};
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::{debug, info};
use zip::ZipArchive;

/// Reader over a secure connect bundle archive.
///
/// The archive handle lives exactly as long as the reader; it is released on
/// drop, including when reading fails part way.
pub struct BundleReader<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl BundleReader<File> {
    /// Open a bundle from a file path.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            entries = reader.entry_count(),
            "Bundle opened"
        );
        Ok(reader)
    }
}

impl BundleReader<Cursor<Vec<u8>>> {
    /// Open a bundle from bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }
}

impl<R: Read + Seek> BundleReader<R> {
    /// Create a reader from any Read + Seek source.
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self { archive })
    }

    /// Number of entries in the archive, known or not.
    pub fn entry_count(&self) -> usize {
        self.archive.len()
    }

    /// Names of every entry in the archive.
    pub fn entry_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    /// Check if a member exists in the archive.
    pub fn has_member(&self, member: BundleMember) -> bool {
        self.archive
            .file_names()
            .any(|name| name == member.file_name())
    }

    /// Read a single member, or `None` when the archive does not carry it.
    pub fn read_member(&mut self, member: BundleMember) -> Result<Option<Vec<u8>>> {
        if !self.has_member(member) {
            return Ok(None);
        }

        let mut file = self.archive.by_name(member.file_name())?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|source| BundleError::MemberRead {
                member: member.file_name().to_string(),
                source,
            })?;

        debug!(member = %member, bytes = data.len(), "Read member from bundle");

        Ok(Some(data))
    }

    /// Read every known member present in the archive and release it.
    ///
    /// Unknown entries are skipped without being opened.
    pub fn read_members(mut self) -> Result<RawBundleContents> {
        let mut contents = RawBundleContents::new();

        for member in BundleMember::ALL {
            if let Some(data) = self.read_member(member)? {
                contents.insert(member, data);
            }
        }

        debug!(
            members = contents.len(),
            bytes = contents.total_bytes(),
            ignored = self.entry_count().saturating_sub(contents.len()),
            "Bundle members extracted"
        );

        Ok(contents)
    }
}

/// Open the bundle at `path` and read its known members.
pub fn read_bundle(path: &Path) -> Result<RawBundleContents> {
    BundleReader::open(path)?.read_members()
}
