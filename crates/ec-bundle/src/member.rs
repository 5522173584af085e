//! Known bundle members and the in-memory contents read from an archive.

use std::collections::HashMap;

/// One of the archive members the bundle reader extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BundleMember {
    /// Client certificate (`cert`).
    Cert,
    /// Client private key (`key`).
    Key,
    /// CA chain (`ca.crt`).
    CaCert,
    /// Vendor JSON config (`config.json`).
    ConfigJson,
    /// Flat key/value config (`cqlshrc`).
    Cqlshrc,
}

impl BundleMember {
    /// Every member, in archive-conventional order.
    pub const ALL: [BundleMember; 5] = [
        BundleMember::Cert,
        BundleMember::Key,
        BundleMember::CaCert,
        BundleMember::ConfigJson,
        BundleMember::Cqlshrc,
    ];

    /// Exact entry name inside the archive.
    pub fn file_name(&self) -> &'static str {
        match self {
            BundleMember::Cert => "cert",
            BundleMember::Key => "key",
            BundleMember::CaCert => "ca.crt",
            BundleMember::ConfigJson => "config.json",
            BundleMember::Cqlshrc => "cqlshrc",
        }
    }

    /// Map an archive entry name to a member. Matching is exact, so
    /// `certs/cert` or `CERT` are not members.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.file_name() == name)
    }
}

impl std::fmt::Display for BundleMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Raw bytes of the members found in a bundle.
///
/// Members missing from the archive are simply absent; [`get`](Self::get)
/// reports them as empty byte slices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBundleContents {
    members: HashMap<BundleMember, Vec<u8>>,
}

impl RawBundleContents {
    /// Create empty contents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a member's bytes, replacing any earlier entry of the same name.
    pub fn insert(&mut self, member: BundleMember, data: Vec<u8>) {
        self.members.insert(member, data);
    }

    /// Bytes for a member, or an empty slice when it was not in the archive.
    pub fn get(&self, member: BundleMember) -> &[u8] {
        self.members.get(&member).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check whether the archive contained a member.
    pub fn contains(&self, member: BundleMember) -> bool {
        self.members.contains_key(&member)
    }

    /// Members present, in [`BundleMember::ALL`] order.
    pub fn present(&self) -> Vec<BundleMember> {
        BundleMember::ALL
            .into_iter()
            .filter(|m| self.contains(*m))
            .collect()
    }

    /// Number of members present.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when no known member was found.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Total bytes held across all members.
    pub fn total_bytes(&self) -> u64 {
        self.members.values().map(|d| d.len() as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_names_roundtrip() {
        for member in BundleMember::ALL {
            assert_eq!(BundleMember::from_file_name(member.file_name()), Some(member));
        }
    }

    #[test]
    fn test_member_name_matching_is_exact() {
        assert_eq!(BundleMember::from_file_name("ca.crt"), Some(BundleMember::CaCert));
        assert_eq!(BundleMember::from_file_name("CA.CRT"), None);
        assert_eq!(BundleMember::from_file_name("bundle/cert"), None);
        assert_eq!(BundleMember::from_file_name("identity.jks"), None);
    }

    #[test]
    fn test_absent_member_reads_empty() {
        let contents = RawBundleContents::new();
        assert!(contents.get(BundleMember::Cert).is_empty());
        assert!(!contents.contains(BundleMember::Cert));
        assert!(contents.is_empty());
    }

    #[test]
    fn test_present_members_in_order() {
        let mut contents = RawBundleContents::new();
        contents.insert(BundleMember::Cqlshrc, b"port = 1".to_vec());
        contents.insert(BundleMember::Cert, b"c".to_vec());

        assert_eq!(
            contents.present(),
            vec![BundleMember::Cert, BundleMember::Cqlshrc]
        );
        assert_eq!(contents.total_bytes(), 9);
    }

    #[test]
    fn test_insert_replaces() {
        let mut contents = RawBundleContents::new();
        contents.insert(BundleMember::Key, b"first".to_vec());
        contents.insert(BundleMember::Key, b"second".to_vec());

        assert_eq!(contents.get(BundleMember::Key), b"second");
        assert_eq!(contents.len(), 1);
    }
}
