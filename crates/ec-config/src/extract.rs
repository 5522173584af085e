//! Common shape for bundle config extractors.

use crate::Result;

/// Pulls a typed value out of one bundle config member.
///
/// Each config format in a bundle gets its own extractor, so supporting a new
/// format means adding an implementation rather than touching the callers.
pub trait ConfigExtractor {
    /// Value produced from the member.
    type Output;

    /// Archive name of the member this extractor reads.
    fn source(&self) -> &'static str;

    /// Parse the raw member bytes.
    fn extract(&self, data: &[u8]) -> Result<Self::Output>;
}
