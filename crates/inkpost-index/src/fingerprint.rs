//! Source fingerprints for change detection.
//!
//! The fingerprint hashes every entry's name and content in enumeration
//! order, so adding, removing, renaming, reordering, or editing any document
//! changes it. Unreadable entries hash their error text, so a file that
//! becomes readable again also changes it.

use crate::source::SourceEntry;

/// Compute the fingerprint of a set of source entries as a hex string.
pub fn fingerprint(entries: &[SourceEntry]) -> String {
    let mut hasher = blake3::Hasher::new();

    for entry in entries {
        hash_field(&mut hasher, entry.name.as_bytes());
        match &entry.content {
            Ok(content) => {
                hasher.update(&[1]);
                hash_field(&mut hasher, content.as_bytes());
            }
            Err(e) => {
                hasher.update(&[0]);
                hash_field(&mut hasher, e.to_string().as_bytes());
            }
        }
    }

    hasher.finalize().to_hex().to_string()
}

/// Length-prefixed so that field boundaries are unambiguous.
fn hash_field(hasher: &mut blake3::Hasher, bytes: &[u8]) {
    hasher.update(&(bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}
