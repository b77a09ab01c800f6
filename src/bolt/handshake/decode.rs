//! Decoding of the 16-byte version proposal block.

use super::{HandshakeError, ProtocolVersion, VERSION_BLOCK_SIZE};

/// Which bytes of each 4-byte proposal a revision pays attention to.
///
/// A proposal is laid out as `[reserved, range, minor, major]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionMask {
    /// Decode every byte as sent.
    None,
    /// Only the major byte counts. Revisions before 4.0 knew nothing about
    /// minor versions or ranges.
    MajorOnly,
    /// Zero the leading reserved byte; range, minor and major stay.
    ReservedByte,
}

impl VersionMask {
    fn apply(self, index: usize, byte: u8) -> u8 {
        match self {
            VersionMask::None => byte,
            VersionMask::MajorOnly if index % 4 != 3 => 0,
            VersionMask::ReservedByte if index % 4 == 0 => 0,
            _ => byte,
        }
    }
}

/// The versions a client offered, in its order of preference.
///
/// This is a plain copy of the masked proposal block; each call to
/// [`iter`](Self::iter) walks it again from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferedVersions {
    block: [u8; VERSION_BLOCK_SIZE],
}

impl OfferedVersions {
    /// Iterate the offered versions, highest preference first.
    pub fn iter(&self) -> OfferedIter<'_> {
        OfferedIter {
            block: &self.block,
            slot: 0,
            step: 0,
        }
    }

    /// Collect into a vector.
    pub fn to_vec(&self) -> Vec<ProtocolVersion> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &'a OfferedVersions {
    type Item = ProtocolVersion;
    type IntoIter = OfferedIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over [`OfferedVersions`].
#[derive(Debug, Clone)]
pub struct OfferedIter<'a> {
    block: &'a [u8; VERSION_BLOCK_SIZE],
    slot: usize,
    step: u16,
}

impl Iterator for OfferedIter<'_> {
    type Item = ProtocolVersion;

    fn next(&mut self) -> Option<Self::Item> {
        while self.slot < VERSION_BLOCK_SIZE / 4 {
            let proposal = &self.block[self.slot * 4..self.slot * 4 + 4];
            let (range, minor, major) = (proposal[1], proposal[2], proposal[3]);

            // Empty slot, or the range ran out (it never goes below minor 0).
            if major == 0 || self.step > u16::from(range) || self.step > u16::from(minor) {
                self.slot += 1;
                self.step = 0;
                continue;
            }

            let version = ProtocolVersion::new(major, minor - self.step as u8);
            self.step += 1;
            return Some(version);
        }
        None
    }
}

/// Decode a 16-byte proposal block under the given mask.
///
/// For each proposal `[_, range, minor, major]` this yields
/// `major.minor`, `major.(minor - 1)`, … down to `major.(minor - range)`.
pub fn decode_versions(block: &[u8], mask: VersionMask) -> Result<OfferedVersions, HandshakeError> {
    if block.len() != VERSION_BLOCK_SIZE {
        return Err(HandshakeError::InvalidData(format!(
            "Expected {} bytes of version proposals, got {}",
            VERSION_BLOCK_SIZE,
            block.len()
        )));
    }

    let mut masked = [0u8; VERSION_BLOCK_SIZE];
    for (i, (out, byte)) in masked.iter_mut().zip(block).enumerate() {
        *out = mask.apply(i, *byte);
    }
    Ok(OfferedVersions { block: masked })
}
