//! Bolt protocol handshake.
//!
//! The Bolt handshake consists of:
//! 1. Client sends 4-byte magic number (0x6060B017)
//! 2. Client sends 4 x 4-byte version proposals (highest first)
//! 3. Server responds with 4-byte agreed version (or 0 if none)
//!
//! How a proposal is read depends on the revision doing the reading, see
//! [`VersionMask`].

mod decode;
mod negotiation;
mod version;

pub use decode::{decode_versions, OfferedIter, OfferedVersions, VersionMask};
pub use negotiation::{build_client_handshake, Handshake, HandshakeResult};
pub use version::ProtocolVersion;

// Re-export error from parent module
pub use super::error::HandshakeError;

/// Bolt protocol magic number: 0x6060B017
/// This identifies a Bolt connection.
pub const BOLT_MAGIC: [u8; 4] = [0x60, 0x60, 0xB0, 0x17];

/// Size of the version proposal block (4 x 4 bytes)
pub const VERSION_BLOCK_SIZE: usize = 16;

/// Size of the complete handshake message from client (magic + 4 versions)
pub const HANDSHAKE_SIZE: usize = 4 + VERSION_BLOCK_SIZE;

/// Size of server response (negotiated version)
pub const HANDSHAKE_RESPONSE_SIZE: usize = 4;

/// Reply sent when no offered version is acceptable.
pub const NO_VERSION: [u8; HANDSHAKE_RESPONSE_SIZE] = [0x00, 0x00, 0x00, 0x00];
