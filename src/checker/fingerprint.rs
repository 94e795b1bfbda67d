use std::fmt;

use sha2::{Digest, Sha256};

/// Content key used to detect duplicate rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Hash an ordered sequence of cells.
///
/// Each cell is length-prefixed so `["ab", "c"]` and `["a", "bc"]` differ.
#[must_use]
pub fn fingerprint<'a, I>(values: I) -> Fingerprint
where
    I: IntoIterator<Item = &'a str>,
{
    fingerprint_tagged(b'r', values)
}

/// Like [`fingerprint`], with a leading domain tag so digests of different
/// projections of a row never compare equal.
pub(crate) fn fingerprint_tagged<'a, I>(tag: u8, values: I) -> Fingerprint
where
    I: IntoIterator<Item = &'a str>,
{
    let mut hasher = Sha256::new();
    hasher.update([tag]);
    for value in values {
        hasher.update((value.len() as u64).to_le_bytes());
        hasher.update(value.as_bytes());
    }
    Fingerprint(hasher.finalize().into())
}

#[cfg(test)]
#[path = "fingerprint_tests.rs"]
mod tests;
