//! Revision definitions and the chain they are built from.

use std::collections::BTreeMap;

use crate::bolt::handshake::{decode_versions, HandshakeError, OfferedVersions, ProtocolVersion, VersionMask};
use crate::bolt::message::tag;

/// A change to a message table relative to the previous revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEdit {
    /// Add or rename the message at a tag
    Set(u8, &'static str),
    /// The tag no longer exists
    Remove(u8),
}

/// A key the handshake acknowledgement may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelloField {
    /// `connection_id`: the configured placeholder id
    ConnectionId,
    /// `server`: the revision's agent label
    Server,
    /// `routing`: always null, meaning no routing table
    Routing,
}

impl HelloField {
    /// Map key in the SUCCESS metadata.
    pub fn key(self) -> &'static str {
        match self {
            HelloField::ConnectionId => "connection_id",
            HelloField::Server => "server",
            HelloField::Routing => "routing",
        }
    }
}

/// One link of the revision chain.
///
/// Everything left as `None` or empty is carried over from the previous
/// link. Aliases are the exception: they belong to one revision only.
#[derive(Debug, Clone, Copy)]
pub struct RevisionStep {
    /// Canonical version
    pub version: ProtocolVersion,
    /// Other versions that select this revision
    pub aliases: &'static [ProtocolVersion],
    /// Client (request) table edits
    pub client: &'static [TableEdit],
    /// Server (response) table edits
    pub server: &'static [TableEdit],
    /// Agent label reported in the handshake acknowledgement
    pub server_agent: &'static str,
    /// How this revision reads handshake proposals
    pub mask: Option<VersionMask>,
    /// Keys of the handshake acknowledgement
    pub hello_fields: Option<&'static [HelloField]>,
}

use TableEdit::{Remove, Set};

const SERVER_MESSAGES: &[TableEdit] = &[
    Set(tag::SUCCESS, "SUCCESS"),
    Set(tag::RECORD, "RECORD"),
    Set(tag::IGNORED, "IGNORED"),
    Set(tag::FAILURE, "FAILURE"),
];

const HELLO_SERVER: &[HelloField] = &[HelloField::Server];
const HELLO_CONNECTION: &[HelloField] = &[HelloField::ConnectionId, HelloField::Server];
const HELLO_ROUTING: &[HelloField] = &[HelloField::ConnectionId, HelloField::Server, HelloField::Routing];

/// Every known revision, oldest first.
pub const REVISION_CHAIN: &[RevisionStep] = &[
    RevisionStep {
        version: ProtocolVersion::new(1, 0),
        aliases: &[
            ProtocolVersion::major_only(1),
            ProtocolVersion::new(3, 1),
            ProtocolVersion::new(3, 2),
            ProtocolVersion::new(3, 3),
        ],
        client: &[
            Set(tag::INIT, "INIT"),
            Set(tag::ACK_FAILURE, "ACK_FAILURE"),
            Set(tag::RESET, "RESET"),
            Set(tag::RUN, "RUN"),
            Set(tag::DISCARD_ALL, "DISCARD_ALL"),
            Set(tag::PULL_ALL, "PULL_ALL"),
        ],
        server: SERVER_MESSAGES,
        server_agent: "Neo4j/3.3.0",
        mask: Some(VersionMask::MajorOnly),
        hello_fields: Some(HELLO_SERVER),
    },
    RevisionStep {
        version: ProtocolVersion::new(2, 0),
        aliases: &[ProtocolVersion::major_only(2), ProtocolVersion::new(3, 4)],
        client: &[],
        server: &[],
        server_agent: "Neo4j/3.4.0",
        mask: None,
        hello_fields: None,
    },
    RevisionStep {
        version: ProtocolVersion::new(3, 0),
        aliases: &[
            ProtocolVersion::major_only(3),
            ProtocolVersion::new(3, 5),
            ProtocolVersion::new(3, 6),
        ],
        client: &[
            Set(tag::HELLO, "HELLO"),
            Set(tag::GOODBYE, "GOODBYE"),
            Remove(tag::ACK_FAILURE),
            Set(tag::BEGIN, "BEGIN"),
            Set(tag::COMMIT, "COMMIT"),
            Set(tag::ROLLBACK, "ROLLBACK"),
        ],
        server: &[],
        server_agent: "Neo4j/3.5.0",
        mask: None,
        hello_fields: Some(HELLO_CONNECTION),
    },
    RevisionStep {
        version: ProtocolVersion::new(4, 0),
        aliases: &[ProtocolVersion::major_only(4)],
        client: &[Set(tag::DISCARD, "DISCARD"), Set(tag::PULL, "PULL")],
        server: &[],
        server_agent: "Neo4j/4.0.0",
        // Minor versions arrive here; ranges were backported from 4.3.
        mask: Some(VersionMask::ReservedByte),
        hello_fields: None,
    },
    RevisionStep {
        version: ProtocolVersion::new(4, 1),
        aliases: &[],
        client: &[],
        server: &[],
        server_agent: "Neo4j/4.1.0",
        mask: None,
        hello_fields: Some(HELLO_ROUTING),
    },
    RevisionStep {
        version: ProtocolVersion::new(4, 2),
        aliases: &[],
        client: &[],
        server: &[],
        server_agent: "Neo4j/4.2.0",
        mask: None,
        hello_fields: None,
    },
    RevisionStep {
        version: ProtocolVersion::new(4, 3),
        aliases: &[],
        client: &[Set(tag::ROUTE, "ROUTE")],
        server: &[],
        server_agent: "Neo4j/4.3.0",
        mask: None,
        hello_fields: None,
    },
    RevisionStep {
        version: ProtocolVersion::new(4, 4),
        aliases: &[],
        client: &[],
        server: &[],
        server_agent: "Neo4j/4.4.0",
        mask: None,
        hello_fields: None,
    },
];

/// Tag to name table for one direction of one revision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTable {
    entries: BTreeMap<u8, &'static str>,
}

impl MessageTable {
    /// Name of the message with this tag.
    pub fn name(&self, tag: u8) -> Option<&'static str> {
        self.entries.get(&tag).copied()
    }

    /// Tag of the message with this name.
    pub fn tag(&self, name: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(_, n)| **n == name)
            .map(|(t, _)| *t)
    }

    /// `(tag, name)` pairs in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &'static str)> + '_ {
        self.entries.iter().map(|(t, n)| (*t, *n))
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no messages.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn apply(&mut self, edits: &[TableEdit]) {
        for edit in edits {
            match *edit {
                Set(tag, name) => {
                    self.entries.insert(tag, name);
                }
                Remove(tag) => {
                    self.entries.remove(&tag);
                }
            }
        }
    }
}

/// A fully resolved protocol revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    version: ProtocolVersion,
    aliases: Vec<ProtocolVersion>,
    client: MessageTable,
    server: MessageTable,
    server_agent: String,
    mask: VersionMask,
    hello_fields: &'static [HelloField],
}

impl Revision {
    /// Canonical version.
    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// Alias versions.
    pub fn aliases(&self) -> &[ProtocolVersion] {
        &self.aliases
    }

    /// Whether `version` is the canonical version or one of the aliases.
    pub fn matches(&self, version: ProtocolVersion) -> bool {
        self.version == version || self.aliases.contains(&version)
    }

    /// Messages the client may send.
    pub fn client_messages(&self) -> &MessageTable {
        &self.client
    }

    /// Messages the server may send.
    pub fn server_messages(&self) -> &MessageTable {
        &self.server
    }

    /// Agent label, e.g. `"Neo4j/4.1.0"`.
    pub fn server_agent(&self) -> &str {
        &self.server_agent
    }

    /// Handshake masking rule.
    pub fn version_mask(&self) -> VersionMask {
        self.mask
    }

    /// Keys of the handshake acknowledgement.
    pub fn hello_fields(&self) -> &'static [HelloField] {
        self.hello_fields
    }

    /// Decode a proposal block the way this revision reads it.
    pub fn decode_versions(&self, block: &[u8]) -> Result<OfferedVersions, HandshakeError> {
        decode_versions(block, self.mask)
    }

    /// Whether a client proposal block offers this revision.
    pub fn is_offered(&self, block: &[u8]) -> Result<bool, HandshakeError> {
        Ok(self.decode_versions(block)?.iter().any(|v| self.matches(v)))
    }

    pub(crate) fn with_server_agent(mut self, agent: &str) -> Self {
        self.server_agent = agent.to_string();
        self
    }
}

/// Flatten a chain into standalone revisions.
pub fn build_revisions(chain: &[RevisionStep]) -> Vec<Revision> {
    let mut revisions: Vec<Revision> = Vec::with_capacity(chain.len());

    for step in chain {
        let mut revision = match revisions.last() {
            Some(previous) => previous.clone(),
            None => Revision {
                version: step.version,
                aliases: Vec::new(),
                client: MessageTable::default(),
                server: MessageTable::default(),
                server_agent: String::new(),
                mask: VersionMask::None,
                hello_fields: &[],
            },
        };

        revision.version = step.version;
        revision.aliases = step.aliases.to_vec();
        revision.client.apply(step.client);
        revision.server.apply(step.server);
        revision.server_agent = step.server_agent.to_string();
        if let Some(mask) = step.mask {
            revision.mask = mask;
        }
        if let Some(fields) = step.hello_fields {
            revision.hello_fields = fields;
        }

        revisions.push(revision);
    }

    revisions
}
