//! Synthesized acknowledgements.

use tracing::trace;

use super::revision::{HelloField, Revision};
use crate::bolt::message::{tag, NamedStructure};
use crate::bolt::packstream::PackStreamValue;
use crate::config::{StubConfig, DEFAULT_CONNECTION_ID};

/// Answers client requests with a canned SUCCESS.
///
/// The handshake-completion request (INIT, later HELLO) gets metadata whose
/// keys come from the revision's [`hello_fields`](Revision::hello_fields);
/// every other request gets an empty map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoResponder {
    connection_id: String,
}

impl AutoResponder {
    /// Responder using the configured connection id.
    pub fn new(config: &StubConfig) -> Self {
        Self {
            connection_id: config.connection_id.clone(),
        }
    }

    /// Placeholder reported as `connection_id`.
    pub fn connection_id(&self) -> &str {
        &self.connection_id
    }

    /// Build the SUCCESS the stub sends in reply to `request`.
    pub fn respond(&self, request: &NamedStructure, revision: &Revision) -> NamedStructure {
        let metadata = if request.tag() == tag::HELLO {
            PackStreamValue::map(
                revision
                    .hello_fields()
                    .iter()
                    .map(|field| (field.key(), self.hello_value(*field, revision))),
            )
        } else {
            PackStreamValue::map(Vec::<(String, PackStreamValue)>::new())
        };

        let response = NamedStructure::new("SUCCESS", tag::SUCCESS, vec![metadata]);
        trace!(version = %revision.version(), request = request.name(), %response, "auto response");
        response
    }

    fn hello_value(&self, field: HelloField, revision: &Revision) -> PackStreamValue {
        match field {
            HelloField::ConnectionId => PackStreamValue::from(self.connection_id.as_str()),
            HelloField::Server => PackStreamValue::from(revision.server_agent()),
            HelloField::Routing => PackStreamValue::Null,
        }
    }
}

impl Default for AutoResponder {
    fn default() -> Self {
        Self {
            connection_id: DEFAULT_CONNECTION_ID.to_string(),
        }
    }
}
