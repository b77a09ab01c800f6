//! Bolt stub error types.
//!
//! Three things can go wrong while speaking to a client, and each has its
//! own type so callers cannot confuse them:
//!
//! - [`HandshakeError`]: the opening bytes are malformed. An integration bug
//!   in whatever read them off the socket.
//! - [`ProtocolError`]: the client asked for a version we do not know, or the
//!   script asked us to send a message the negotiated revision lacks.
//! - [`ServerExit`]: the client sent a message we cannot name. The session
//!   must end.

use thiserror::Error;

use super::handshake::ProtocolVersion;

/// Result type for stub protocol operations.
pub type BoltResult<T> = Result<T, BoltError>;

/// Any error raised by this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoltError {
    /// Malformed handshake
    #[error("Handshake error: {0}")]
    Handshake(#[from] HandshakeError),

    /// Version or scripting error
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The session has to be terminated
    #[error("Server exit: {0}")]
    Exit(#[from] ServerExit),
}

impl BoltError {
    /// Whether the session must be torn down.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BoltError::Exit(_))
    }
}

/// Handshake-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandshakeError {
    /// Invalid magic number received
    #[error("Invalid magic number: expected {expected:02X?}, received {received:02X?}")]
    InvalidMagic {
        /// The Bolt preamble
        expected: [u8; 4],
        /// What the client sent instead
        received: [u8; 4],
    },

    /// Invalid handshake data (wrong size, etc.)
    #[error("Invalid handshake data: {0}")]
    InvalidData(String),
}

/// Version resolution and outgoing translation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// No known revision matches the version
    #[error("unsupported bolt version {0}")]
    UnsupportedVersion(ProtocolVersion),

    /// None of the offered versions is supported
    #[error("no supported bolt version among offered [{}]", join_versions(.offered))]
    NoCompatibleVersion {
        /// What the client offered, in order
        offered: Vec<ProtocolVersion>,
    },

    /// The script asked for a server message the revision does not have
    #[error("Unknown response message type {name} in Bolt version {version}")]
    UnknownResponse {
        /// Requested message name
        name: String,
        /// Negotiated revision
        version: ProtocolVersion,
    },

    /// Unparseable version text
    #[error("invalid bolt version {0:?}")]
    InvalidVersion(String),
}

/// Fatal signal: a client message could not be identified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown request message type 0x{tag:02X} in Bolt version {version}")]
pub struct ServerExit {
    /// The unrecognized tag
    pub tag: u8,
    /// Negotiated revision
    pub version: ProtocolVersion,
}

fn join_versions(versions: &[ProtocolVersion]) -> String {
    versions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handshake_error_display() {
        let err = HandshakeError::InvalidMagic {
            expected: [0x60, 0x60, 0xB0, 0x17],
            received: [0x00, 0x00, 0x00, 0x00],
        };
        assert!(err.to_string().contains("Invalid magic"));

        let err = HandshakeError::InvalidData("short".into());
        assert!(err.to_string().contains("short"));
    }

    #[test]
    fn test_unsupported_version_names_version() {
        let err = ProtocolError::UnsupportedVersion(ProtocolVersion::new(9, 9));
        assert_eq!(err.to_string(), "unsupported bolt version 9.9");
    }

    #[test]
    fn test_no_compatible_lists_offers() {
        let err = ProtocolError::NoCompatibleVersion {
            offered: vec![ProtocolVersion::new(5, 4), ProtocolVersion::new(5, 3)],
        };
        assert!(err.to_string().contains("[5.4, 5.3]"));
    }

    #[test]
    fn test_server_exit_hex_tag() {
        let exit = ServerExit {
            tag: 0x0A,
            version: ProtocolVersion::new(4, 2),
        };
        assert_eq!(
            exit.to_string(),
            "Unknown request message type 0x0A in Bolt version 4.2"
        );
    }

    #[test]
    fn test_bolt_error_conversions() {
        let err: BoltError = HandshakeError::InvalidData("x".into()).into();
        assert!(matches!(err, BoltError::Handshake(_)));
        assert!(!err.is_fatal());

        let err: BoltError = ServerExit {
            tag: 0x99,
            version: ProtocolVersion::new(1, 0),
        }
        .into();
        assert!(err.is_fatal());
    }
}
