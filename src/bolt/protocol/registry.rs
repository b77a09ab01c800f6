//! Revision lookup.

use tracing::{debug, warn};

use super::revision::{build_revisions, Revision, REVISION_CHAIN};
use crate::bolt::error::ProtocolError;
use crate::bolt::handshake::ProtocolVersion;
use crate::config::StubConfig;

/// The set of revisions a stub is willing to speak.
///
/// Built once at startup and read-only afterwards. Lookups walk the
/// revisions in declaration order (oldest first) and the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    revisions: Vec<Revision>,
}

impl Registry {
    /// Registry with every known revision.
    pub fn new() -> Self {
        Self {
            revisions: build_revisions(REVISION_CHAIN),
        }
    }

    /// Registry shaped by a stub configuration.
    ///
    /// Applies the server agent override and, if `versions` is set, keeps
    /// only the revisions those versions resolve to. Naming a version no
    /// revision answers to is an error.
    pub fn with_config(config: &StubConfig) -> Result<Self, ProtocolError> {
        let mut registry = Self::new();

        if let Some(versions) = &config.versions {
            let mut enabled = Vec::with_capacity(versions.len());
            for version in versions {
                let revision = registry.resolve(*version)?.version();
                if !enabled.contains(&revision) {
                    enabled.push(revision);
                }
            }
            registry.revisions.retain(|r| enabled.contains(&r.version()));
        }

        if let Some(agent) = &config.server_agent {
            registry.revisions = registry
                .revisions
                .into_iter()
                .map(|r| r.with_server_agent(agent))
                .collect();
        }

        debug!(
            revisions = ?registry.versions(),
            "Bolt revision registry ready"
        );
        Ok(registry)
    }

    /// Find the revision answering to `version`.
    ///
    /// Matching is exact: `(4, 2)` does not match the partial alias `4`.
    pub fn resolve(&self, version: impl Into<ProtocolVersion>) -> Result<&Revision, ProtocolError> {
        let version = version.into();
        match self.revisions.iter().find(|r| r.matches(version)) {
            Some(revision) => {
                debug!(%version, revision = %revision.version(), "Resolved Bolt version");
                Ok(revision)
            }
            None => {
                warn!(%version, "Unsupported Bolt version");
                Err(ProtocolError::UnsupportedVersion(version))
            }
        }
    }

    /// All revisions, oldest first.
    pub fn revisions(&self) -> &[Revision] {
        &self.revisions
    }

    /// Canonical versions, oldest first.
    pub fn versions(&self) -> Vec<ProtocolVersion> {
        self.revisions.iter().map(Revision::version).collect()
    }

    /// Newest revision.
    pub fn latest(&self) -> Option<&Revision> {
        self.revisions.last()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_canonical() {
        let registry = Registry::new();
        let r = registry.resolve(ProtocolVersion::new(3, 0)).unwrap();
        assert_eq!(r.client_messages().name(0x01), Some("HELLO"));
        assert_eq!(r.server_agent(), "Neo4j/3.5.0");
    }

    #[test]
    fn test_resolve_aliases() {
        let registry = Registry::new();
        assert_eq!(registry.resolve(ProtocolVersion::major_only(1)).unwrap().version(), ProtocolVersion::new(1, 0));
        assert_eq!(registry.resolve(ProtocolVersion::new(3, 2)).unwrap().version(), ProtocolVersion::new(1, 0));
        assert_eq!(registry.resolve(ProtocolVersion::new(3, 4)).unwrap().version(), ProtocolVersion::new(2, 0));
        assert_eq!(registry.resolve(ProtocolVersion::new(3, 6)).unwrap().version(), ProtocolVersion::new(3, 0));
        assert_eq!(registry.resolve(ProtocolVersion::major_only(4)).unwrap().version(), ProtocolVersion::new(4, 0));
    }

    #[test]
    fn test_partial_alias_is_exact() {
        let registry = Registry::new();
        assert!(registry.resolve(ProtocolVersion::major_only(2)).is_ok());
        assert!(registry.resolve(ProtocolVersion::new(2, 1)).is_err());
    }

    #[test]
    fn test_unsupported_version() {
        let registry = Registry::new();
        let err = registry.resolve(ProtocolVersion::new(5, 0)).unwrap_err();
        assert_eq!(err, ProtocolError::UnsupportedVersion(ProtocolVersion::new(5, 0)));
        assert!(err.to_string().contains("5.0"));
    }

    #[test]
    fn test_latest() {
        assert_eq!(
            Registry::new().latest().map(Revision::version),
            Some(ProtocolVersion::new(4, 4))
        );
    }

    #[test]
    fn test_config_restricts_versions() {
        let config = StubConfig::builder()
            .with_versions(vec![ProtocolVersion::new(4, 1), ProtocolVersion::major_only(3)])
            .build();
        let registry = Registry::with_config(&config).unwrap();
        assert_eq!(
            registry.versions(),
            vec![ProtocolVersion::new(3, 0), ProtocolVersion::new(4, 1)]
        );
        assert!(registry.resolve(ProtocolVersion::new(4, 0)).is_err());
        assert!(registry.resolve(ProtocolVersion::major_only(3)).is_ok());
    }

    #[test]
    fn test_config_unknown_version() {
        let config = StubConfig::builder()
            .with_versions(vec![ProtocolVersion::new(9, 0)])
            .build();
        assert_eq!(
            Registry::with_config(&config).unwrap_err(),
            ProtocolError::UnsupportedVersion(ProtocolVersion::new(9, 0))
        );
    }

    #[test]
    fn test_config_server_agent_override() {
        let config = StubConfig::builder().with_server_agent("Neo4j/4.4.12").build();
        let registry = Registry::with_config(&config).unwrap();
        assert!(registry.revisions().iter().all(|r| r.server_agent() == "Neo4j/4.4.12"));
    }

    #[test]
    fn test_default_config_matches_new() {
        assert_eq!(Registry::with_config(&StubConfig::default()).unwrap(), Registry::new());
    }
}
