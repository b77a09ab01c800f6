//! # Bolt Protocol Implementation
//!
//! Server-side view of the Bolt protocol, as needed by a stub server.
//!
//! ## Overview
//!
//! The Bolt protocol is a binary protocol used for communication between
//! graph database clients and servers. Its revisions share most messages but
//! rename, add and drop a few. This module provides:
//!
//! - **PackStream** - The decoded value model carried by messages
//! - **Handshake** - Version proposal decoding and negotiation
//! - **Protocol** - Revision definitions, lookup and message naming
//! - **Message** - Tags and named structures
//!
//! ## Protocol Versions
//!
//! Revisions 1.0 through 4.4 are known. Bolt 1 and 2 open a session with
//! INIT, Bolt 3 onwards with HELLO; Bolt 4.0 renames PULL_ALL/DISCARD_ALL
//! to PULL/DISCARD and 4.3 adds ROUTE.
//!
//! ## Submodules
//!
//! - [`packstream`] - Decoded values and structures
//! - [`handshake`] - Version negotiation
//! - [`protocol`] - Revisions, registry, translation and auto responses
//! - [`message`] - Message tags and [`NamedStructure`]
//! - [`error`] - Error types

pub mod error;
pub mod handshake;
pub mod message;
pub mod packstream;
pub mod protocol;

pub use error::{BoltError, BoltResult, HandshakeError, ProtocolError, ServerExit};
pub use handshake::{
    decode_versions, Handshake, HandshakeResult, OfferedVersions, ProtocolVersion, VersionMask,
    BOLT_MAGIC, HANDSHAKE_RESPONSE_SIZE, NO_VERSION,
};
pub use message::NamedStructure;
pub use packstream::{PackStreamStructure, PackStreamValue};
pub use protocol::{AutoResponder, HelloField, MessageTable, Registry, Revision};
