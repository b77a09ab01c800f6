//! Stub configuration.
//!
//! Everything here has a default, so an empty config file (or none at all)
//! yields a stub that speaks every known revision with the stock agent
//! labels.

use serde::{Deserialize, Serialize};

use crate::bolt::handshake::ProtocolVersion;

/// Connection id reported in handshake acknowledgements by default.
pub const DEFAULT_CONNECTION_ID: &str = "bolt-0";

// ============================================================================
// StubConfig
// ============================================================================

/// Protocol-level settings of a stub server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubConfig {
    /// `connection_id` placed in handshake acknowledgements
    pub connection_id: String,
    /// Agent label replacing every revision's own, e.g. `"Neo4j/4.4.12"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_agent: Option<String>,
    /// Versions the stub accepts; `None` accepts every known revision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<ProtocolVersion>>,
}

impl StubConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a builder.
    pub fn builder() -> StubConfigBuilder {
        StubConfigBuilder {
            config: Self::default(),
        }
    }
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            connection_id: DEFAULT_CONNECTION_ID.to_string(),
            server_agent: None,
            versions: None,
        }
    }
}

// ============================================================================
// StubConfigBuilder
// ============================================================================

/// Builder for [`StubConfig`].
#[derive(Debug, Clone)]
pub struct StubConfigBuilder {
    config: StubConfig,
}

impl StubConfigBuilder {
    /// Set the connection id placeholder.
    pub fn with_connection_id(mut self, connection_id: impl Into<String>) -> Self {
        self.config.connection_id = connection_id.into();
        self
    }

    /// Override the agent label of every revision.
    pub fn with_server_agent(mut self, server_agent: impl Into<String>) -> Self {
        self.config.server_agent = Some(server_agent.into());
        self
    }

    /// Restrict the accepted versions.
    pub fn with_versions(mut self, versions: Vec<ProtocolVersion>) -> Self {
        self.config.versions = Some(versions);
        self
    }

    /// Build.
    pub fn build(self) -> StubConfig {
        self.config
    }
}
