//! Bolt handshake negotiation.

use bytes::Buf;
use tracing::{debug, warn};

use super::{
    decode_versions, HandshakeError, OfferedVersions, ProtocolVersion, VersionMask, BOLT_MAGIC,
    HANDSHAKE_RESPONSE_SIZE, HANDSHAKE_SIZE, NO_VERSION,
};
use crate::bolt::error::{BoltResult, ProtocolError};
use crate::bolt::protocol::{Registry, Revision};

/// Result of a successful handshake.
#[derive(Debug, Clone)]
pub struct HandshakeResult<'r> {
    /// The offered version that was accepted
    pub version: ProtocolVersion,
    /// Revision the session will speak
    pub revision: &'r Revision,
    /// Everything the client offered (for debugging/logging)
    pub offered: OfferedVersions,
}

impl HandshakeResult<'_> {
    /// The 4-byte reply naming the agreed revision.
    pub fn response(&self) -> [u8; HANDSHAKE_RESPONSE_SIZE] {
        self.revision.version().to_bytes()
    }
}

/// Bolt handshake handler.
///
/// The handshake process:
/// 1. Client sends 20 bytes: 4-byte magic + 4 x 4-byte version proposals
/// 2. Server validates magic number
/// 3. Server picks the first offered version the registry resolves
/// 4. Server responds with 4-byte agreed version (or 0x00000000 if none)
///
/// Proposals are read with [`VersionMask::ReservedByte`]. Clients older than
/// Bolt 4 leave minor and range zeroed, so this reads their offers correctly
/// as well.
#[derive(Debug, Clone, Copy)]
pub struct Handshake<'r> {
    registry: &'r Registry,
}

impl<'r> Handshake<'r> {
    /// Create a handshake handler backed by a registry.
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Process a client handshake held in a byte slice.
    ///
    /// Bytes after the first [`HANDSHAKE_SIZE`] are ignored.
    pub fn process(&self, data: &[u8]) -> BoltResult<HandshakeResult<'r>> {
        let mut buf = data;
        self.read(&mut buf)
    }

    /// Consume a client handshake from a buffer and negotiate a version.
    pub fn read<B: Buf>(&self, buf: &mut B) -> BoltResult<HandshakeResult<'r>> {
        if buf.remaining() < HANDSHAKE_SIZE {
            return Err(HandshakeError::InvalidData(format!(
                "Expected {} bytes, got {}",
                HANDSHAKE_SIZE,
                buf.remaining()
            ))
            .into());
        }

        let mut magic = [0u8; 4];
        buf.copy_to_slice(&mut magic);
        if magic != BOLT_MAGIC {
            return Err(HandshakeError::InvalidMagic {
                expected: BOLT_MAGIC,
                received: magic,
            }
            .into());
        }

        let mut block = [0u8; HANDSHAKE_SIZE - 4];
        buf.copy_to_slice(&mut block);
        self.negotiate(&block)
    }

    /// Negotiate from the 16-byte proposal block alone.
    pub fn negotiate(&self, block: &[u8]) -> BoltResult<HandshakeResult<'r>> {
        let offered = decode_versions(block, VersionMask::ReservedByte)?;

        for version in &offered {
            if let Some(revision) = self.registry.revisions().iter().find(|r| r.matches(version)) {
                debug!(%version, revision = %revision.version(), "Negotiated Bolt version");
                return Ok(HandshakeResult {
                    version,
                    revision,
                    offered,
                });
            }
        }

        let offered = offered.to_vec();
        warn!(?offered, "No offered Bolt version is supported");
        Err(ProtocolError::NoCompatibleVersion { offered }.into())
    }

    /// Generate the server response bytes.
    ///
    /// Returns the agreed revision or 0x00000000 if negotiation failed.
    pub fn generate_response(result: &BoltResult<HandshakeResult<'_>>) -> [u8; HANDSHAKE_RESPONSE_SIZE] {
        match result {
            Ok(hr) => hr.response(),
            Err(_) => NO_VERSION,
        }
    }
}

/// Build a client handshake message.
///
/// This is mainly useful for testing. Each proposal is `(major, minor,
/// range)`.
pub fn build_client_handshake(proposals: &[(u8, u8, u8)]) -> [u8; HANDSHAKE_SIZE] {
    let mut data = [0u8; HANDSHAKE_SIZE];
    data[0..4].copy_from_slice(&BOLT_MAGIC);

    for (i, (major, minor, range)) in proposals.iter().take(4).enumerate() {
        let offset = 4 + (i * 4);
        data[offset..offset + 4].copy_from_slice(&[0, *range, *minor, *major]);
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bolt::error::BoltError;

    #[test]
    fn test_negotiate_first_supported() {
        let registry = Registry::new();
        let handshake = Handshake::new(&registry);
        let data = build_client_handshake(&[(5, 0, 0), (4, 3, 0), (4, 2, 0)]);

        let result = handshake.process(&data).unwrap();
        assert_eq!(result.version, ProtocolVersion::new(4, 3));
        assert_eq!(result.revision.server_agent(), "Neo4j/4.3.0");
        assert_eq!(result.response(), [0x00, 0x00, 0x03, 0x04]);
    }

    #[test]
    fn test_negotiate_range() {
        let registry = Registry::new();
        let handshake = Handshake::new(&registry);
        // 4.6 with range 3 offers 4.6 down to 4.3.
        let data = build_client_handshake(&[(4, 6, 3)]);

        let result = handshake.process(&data).unwrap();
        assert_eq!(result.version, ProtocolVersion::new(4, 4));
    }

    #[test]
    fn test_negotiate_legacy_client() {
        let registry = Registry::new();
        let handshake = Handshake::new(&registry);
        let data = build_client_handshake(&[(3, 0, 0), (2, 0, 0), (1, 0, 0)]);

        let result = handshake.process(&data).unwrap();
        assert_eq!(result.revision.version(), ProtocolVersion::new(3, 0));
    }

    #[test]
    fn test_reserved_byte_ignored() {
        let registry = Registry::new();
        let handshake = Handshake::new(&registry);
        let mut data = build_client_handshake(&[(4, 1, 0)]);
        data[4] = 0xFF;

        let result = handshake.process(&data).unwrap();
        assert_eq!(result.version, ProtocolVersion::new(4, 1));
    }

    #[test]
    fn test_no_compatible_version() {
        let registry = Registry::new();
        let handshake = Handshake::new(&registry);
        let data = build_client_handshake(&[(5, 4, 1), (9, 0, 0)]);

        let result = handshake.process(&data);
        match &result {
            Err(BoltError::Protocol(ProtocolError::NoCompatibleVersion { offered })) => {
                assert_eq!(
                    offered,
                    &vec![
                        ProtocolVersion::new(5, 4),
                        ProtocolVersion::new(5, 3),
                        ProtocolVersion::new(9, 0),
                    ]
                );
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(Handshake::generate_response(&result), NO_VERSION);
    }

    #[test]
    fn test_invalid_magic() {
        let registry = Registry::new();
        let handshake = Handshake::new(&registry);
        let mut data = build_client_handshake(&[(4, 0, 0)]);
        data[0] = 0xFF;

        let err = handshake.process(&data).unwrap_err();
        assert!(matches!(err, BoltError::Handshake(HandshakeError::InvalidMagic { .. })));
    }

    #[test]
    fn test_too_short_data() {
        let registry = Registry::new();
        let handshake = Handshake::new(&registry);

        let err = handshake.process(&BOLT_MAGIC).unwrap_err();
        assert!(matches!(err, BoltError::Handshake(HandshakeError::InvalidData(_))));
    }

    #[test]
    fn test_read_consumes_handshake_only() {
        let registry = Registry::new();
        let handshake = Handshake::new(&registry);
        let mut data = build_client_handshake(&[(4, 2, 0)]).to_vec();
        data.extend_from_slice(&[0x00, 0x02]);

        let mut buf = bytes::Bytes::from(data);
        handshake.read(&mut buf).unwrap();
        assert_eq!(buf.remaining(), 2);
    }

    #[test]
    fn test_negotiate_respects_registry() {
        let config = crate::config::StubConfig::builder()
            .with_versions(vec![ProtocolVersion::new(4, 0)])
            .build();
        let registry = Registry::with_config(&config).unwrap();
        let handshake = Handshake::new(&registry);
        let data = build_client_handshake(&[(4, 3, 3)]);

        let result = handshake.process(&data).unwrap();
        assert_eq!(result.version, ProtocolVersion::new(4, 0));
    }

    #[test]
    fn test_build_client_handshake() {
        let data = build_client_handshake(&[(4, 3, 2), (3, 0, 0)]);
        assert_eq!(&data[0..4], &BOLT_MAGIC);
        assert_eq!(&data[4..8], &[0x00, 0x02, 0x03, 0x04]);
        assert_eq!(&data[8..12], &[0x00, 0x00, 0x00, 0x03]);
        assert_eq!(&data[12..20], &[0u8; 8]);
    }
}
