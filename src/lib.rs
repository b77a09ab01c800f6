//! # Bolt Stub Protocol
//!
//! Version negotiation and message naming for programs that impersonate a
//! Bolt server, such as stub servers used to test graph database drivers.
//!
//! ## Features
//!
//! - **Handshake** - Decodes the client's version proposals, per-revision
//! - **Revisions** - Bolt 1.0 to 4.4, with aliases, built from a chain of
//!   small per-revision edits
//! - **Translation** - Names incoming client structures and validates
//!   scripted server messages against the negotiated revision
//! - **Auto responses** - Canned SUCCESS replies shaped like a real server's
//!
//! Framing, the PackStream byte codec and socket I/O live elsewhere: this
//! crate works on 16/20-byte handshake buffers and already decoded
//! structures.
//!
//! ## Quick Start
//!
//! ```rust
//! use bolt_stub_protocol::{Handshake, PackStreamStructure, Registry};
//! use bolt_stub_protocol::bolt::handshake::build_client_handshake;
//!
//! let registry = Registry::new();
//!
//! // Client offers 4.3 (with one older minor) and 3.0.
//! let opening = build_client_handshake(&[(4, 3, 1), (3, 0, 0)]);
//! let agreed = Handshake::new(&registry).process(&opening).unwrap();
//! assert_eq!(agreed.revision.version().to_string(), "4.3");
//!
//! // Name what the client sends next.
//! let pull = PackStreamStructure::new(0x3F, vec![]);
//! let named = agreed.revision.translate_incoming(pull).unwrap();
//! assert_eq!(named.name(), "PULL");
//! ```
//!
//! ## Auto Responses
//!
//! ```rust
//! use bolt_stub_protocol::{AutoResponder, NamedStructure, ProtocolVersion, Registry};
//!
//! let registry = Registry::new();
//! let revision = registry.resolve(ProtocolVersion::new(4, 1)).unwrap();
//!
//! let hello = NamedStructure::new("HELLO", 0x01, vec![]);
//! let success = AutoResponder::default().respond(&hello, revision);
//! assert_eq!(
//!     success.to_string(),
//!     r#"SUCCESS {"connection_id":"bolt-0","routing":null,"server":"Neo4j/4.1.0"}"#
//! );
//! ```
//!
//! ## Error Handling
//!
//! An unknown client tag is fatal to the session and comes back as
//! [`ServerExit`]; a scripted message the revision lacks is a
//! [`ProtocolError`]:
//!
//! ```rust
//! use bolt_stub_protocol::{PackStreamStructure, ProtocolVersion, Registry};
//!
//! let registry = Registry::new();
//! let bolt4 = registry.resolve(ProtocolVersion::new(4, 0)).unwrap();
//!
//! let exit = bolt4.translate_incoming(PackStreamStructure::new(0x99, vec![])).unwrap_err();
//! assert!(exit.to_string().contains("0x99"));
//!
//! let err = bolt4.translate_script_line("ROUTE", vec![]).unwrap_err();
//! assert!(err.to_string().contains("ROUTE"));
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use bolt_stub_protocol::{Registry, StubConfig, ProtocolVersion};
//!
//! let config = StubConfig::builder()
//!     .with_server_agent("Neo4j/4.4.12")
//!     .with_versions(vec![ProtocolVersion::new(4, 4)])
//!     .build();
//! let registry = Registry::with_config(&config).unwrap();
//! assert_eq!(registry.revisions().len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`bolt`] - Handshake, revisions, translation
//! - [`config`] - Stub configuration

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bolt;
pub mod config;

// Re-exports for convenience
pub use bolt::{
    AutoResponder, BoltError, BoltResult, Handshake, HandshakeError, HandshakeResult,
    NamedStructure, PackStreamStructure, PackStreamValue, ProtocolError, ProtocolVersion, Registry,
    Revision, ServerExit,
};
pub use config::{StubConfig, StubConfigBuilder};
