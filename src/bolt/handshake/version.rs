//! Bolt protocol version identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bolt::error::ProtocolError;

/// A Bolt protocol version.
///
/// Handshake offers always carry a minor version. Aliases may leave it out
/// to stand for "this major version" as a whole; such a partial version only
/// ever equals another partial version with the same major.
///
/// On the wire a full version is four bytes: `[0, 0, minor, major]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProtocolVersion {
    major: u8,
    minor: Option<u8>,
}

impl ProtocolVersion {
    /// Full `major.minor` version.
    pub const fn new(major: u8, minor: u8) -> Self {
        Self {
            major,
            minor: Some(minor),
        }
    }

    /// Partial version naming only the major number.
    pub const fn major_only(major: u8) -> Self {
        Self { major, minor: None }
    }

    /// Get the major version number.
    pub const fn major(self) -> u8 {
        self.major
    }

    /// Get the minor version number, if this is a full version.
    pub const fn minor(self) -> Option<u8> {
        self.minor
    }

    /// Whether this version names a minor number.
    pub const fn is_partial(self) -> bool {
        self.minor.is_none()
    }

    /// Encode as the 4-byte handshake reply.
    ///
    /// A partial version encodes with minor 0.
    pub fn to_bytes(self) -> [u8; 4] {
        [0, 0, self.minor.unwrap_or(0), self.major]
    }
}

impl From<(u8, u8)> for ProtocolVersion {
    fn from((major, minor): (u8, u8)) -> Self {
        Self::new(major, minor)
    }
}

impl From<u8> for ProtocolVersion {
    fn from(major: u8) -> Self {
        Self::major_only(major)
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.minor {
            Some(minor) => write!(f, "{}.{}", self.major, minor),
            None => write!(f, "{}", self.major),
        }
    }
}

impl FromStr for ProtocolVersion {
    type Err = ProtocolError;

    /// Parse `"4.1"` or `"4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ProtocolError::InvalidVersion(s.to_string());
        let mut parts = s.trim().splitn(2, '.');
        let major = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(invalid)?;
        match parts.next() {
            None => Ok(Self::major_only(major)),
            Some(minor) => minor
                .parse::<u8>()
                .map(|minor| Self::new(major, minor))
                .map_err(|_| invalid()),
        }
    }
}

impl TryFrom<String> for ProtocolVersion {
    type Error = ProtocolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProtocolVersion> for String {
    fn from(version: ProtocolVersion) -> Self {
        version.to_string()
    }
}
