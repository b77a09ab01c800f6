//! Naming messages under a negotiated revision.

use tracing::{trace, warn};

use super::revision::Revision;
use crate::bolt::error::{ProtocolError, ServerExit};
use crate::bolt::message::NamedStructure;
use crate::bolt::packstream::{PackStreamStructure, PackStreamValue};

impl Revision {
    /// Name a message the stub is about to send.
    ///
    /// The server table must map `tag` to `name`. Anything else means the
    /// script asked for a message this revision cannot carry.
    pub fn translate_outgoing(
        &self,
        name: &str,
        tag: u8,
        fields: Vec<PackStreamValue>,
    ) -> Result<NamedStructure, ProtocolError> {
        if self.server_messages().name(tag) != Some(name) {
            return Err(self.unknown_response(name));
        }
        let named = NamedStructure::new(name, tag, fields);
        trace!(version = %self.version(), message = ?named, "S:");
        Ok(named)
    }

    /// Name a scripted server line, which carries a name but no tag.
    pub fn translate_script_line(
        &self,
        name: &str,
        fields: Vec<PackStreamValue>,
    ) -> Result<NamedStructure, ProtocolError> {
        let tag = self
            .server_messages()
            .tag(name)
            .ok_or_else(|| self.unknown_response(name))?;
        self.translate_outgoing(name, tag, fields)
    }

    /// Name a structure received from the client.
    ///
    /// A tag missing from the client table yields [`ServerExit`]: once a
    /// client message cannot be named the session cannot follow its script.
    pub fn translate_incoming(&self, structure: PackStreamStructure) -> Result<NamedStructure, ServerExit> {
        match self.client_messages().name(structure.tag) {
            Some(name) => {
                let named = NamedStructure::new(name, structure.tag, structure.fields);
                trace!(version = %self.version(), message = ?named, "C:");
                Ok(named)
            }
            None => {
                let exit = ServerExit {
                    tag: structure.tag,
                    version: self.version(),
                };
                warn!("{}", exit);
                Err(exit)
            }
        }
    }

    fn unknown_response(&self, name: &str) -> ProtocolError {
        ProtocolError::UnknownResponse {
            name: name.to_string(),
            version: self.version(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bolt::error::{ProtocolError, ServerExit};
    use crate::bolt::handshake::ProtocolVersion;
    use crate::bolt::packstream::{PackStreamStructure, PackStreamValue};
    use crate::bolt::protocol::Registry;

    fn fields() -> Vec<PackStreamValue> {
        vec![
            PackStreamValue::from("RETURN 1"),
            PackStreamValue::map([("db", PackStreamValue::from("neo4j"))]),
        ]
    }

    #[test]
    fn test_incoming_named() {
        let registry = Registry::new();
        let r = registry.resolve(ProtocolVersion::new(4, 3)).unwrap();
        let named = r
            .translate_incoming(PackStreamStructure::new(0x10, fields()))
            .unwrap();
        assert_eq!(named.name(), "RUN");
        assert_eq!(named.tag(), 0x10);
        assert_eq!(named.fields(), fields().as_slice());
    }

    #[test]
    fn test_incoming_name_depends_on_revision() {
        let registry = Registry::new();
        let pull = PackStreamStructure::new(0x3F, vec![]);
        let v3 = registry.resolve(ProtocolVersion::new(3, 0)).unwrap();
        let v4 = registry.resolve(ProtocolVersion::new(4, 0)).unwrap();
        assert_eq!(v3.translate_incoming(pull.clone()).unwrap().name(), "PULL_ALL");
        assert_eq!(v4.translate_incoming(pull).unwrap().name(), "PULL");
    }

    #[test]
    fn test_incoming_unknown_tag_exits() {
        let registry = Registry::new();
        let r = registry.resolve(ProtocolVersion::new(1, 0)).unwrap();
        let exit = r
            .translate_incoming(PackStreamStructure::new(0x99, vec![]))
            .unwrap_err();
        assert_eq!(
            exit,
            ServerExit {
                tag: 0x99,
                version: ProtocolVersion::new(1, 0)
            }
        );
        let message = exit.to_string();
        assert!(message.contains("0x99"));
        assert!(message.contains("1.0"));
    }

    #[test]
    fn test_route_before_4_3_exits() {
        let registry = Registry::new();
        let r = registry.resolve(ProtocolVersion::new(4, 2)).unwrap();
        assert!(r.translate_incoming(PackStreamStructure::new(0x66, vec![])).is_err());
    }

    #[test]
    fn test_outgoing_roundtrip() {
        let registry = Registry::new();
        let r = registry.resolve(ProtocolVersion::new(4, 0)).unwrap();
        let named = r.translate_outgoing("RECORD", 0x71, fields()).unwrap();
        assert_eq!(named.into_parts(), ("RECORD".to_string(), 0x71, fields()));
    }

    #[test]
    fn test_outgoing_unknown_name() {
        let registry = Registry::new();
        let r = registry.resolve(ProtocolVersion::new(4, 0)).unwrap();
        let err = r.translate_script_line("ROUTE", vec![]).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::UnknownResponse {
                name: "ROUTE".into(),
                version: ProtocolVersion::new(4, 0)
            }
        );
        let message = err.to_string();
        assert!(message.contains("ROUTE"));
        assert!(message.contains("4.0"));
    }

    #[test]
    fn test_outgoing_tag_mismatch() {
        let registry = Registry::new();
        let r = registry.resolve(ProtocolVersion::new(3, 0)).unwrap();
        assert!(r.translate_outgoing("SUCCESS", 0x7F, vec![]).is_err());
        // Client messages are not valid server output.
        assert!(r.translate_outgoing("HELLO", 0x01, vec![]).is_err());
    }

    #[test]
    fn test_script_line_finds_tag() {
        let registry = Registry::new();
        let r = registry.resolve(ProtocolVersion::new(2, 0)).unwrap();
        let named = r
            .translate_script_line("FAILURE", vec![PackStreamValue::map([(
                "code",
                PackStreamValue::from("Neo.TransientError.General.DatabaseUnavailable"),
            )])])
            .unwrap();
        assert_eq!(named.tag(), 0x7F);
    }
}
