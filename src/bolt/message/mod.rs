//! Bolt protocol messages.
//!
//! Messages travel as [`PackStreamStructure`](crate::bolt::packstream::PackStreamStructure)s.
//! Their meaning depends on the negotiated revision, so this module only
//! holds the tag bytes and the [`NamedStructure`] produced once a revision
//! has put a name on a tag.

mod named;

pub use named::NamedStructure;

/// Bolt message tags.
///
/// Some tags were renamed between revisions (INIT became HELLO, PULL_ALL
/// became PULL); both names are listed.
pub mod tag {
    /// INIT message tag (0x01) - Bolt 1 and 2
    pub const INIT: u8 = 0x01;
    /// HELLO message tag (0x01) - Bolt 3+
    pub const HELLO: u8 = 0x01;
    /// GOODBYE message tag (0x02) - Bolt 3+
    pub const GOODBYE: u8 = 0x02;
    /// ACK_FAILURE message tag (0x0E) - Bolt 1 and 2
    pub const ACK_FAILURE: u8 = 0x0E;
    /// RESET message tag (0x0F)
    pub const RESET: u8 = 0x0F;
    /// RUN message tag (0x10)
    pub const RUN: u8 = 0x10;
    /// BEGIN message tag (0x11) - Bolt 3+
    pub const BEGIN: u8 = 0x11;
    /// COMMIT message tag (0x12) - Bolt 3+
    pub const COMMIT: u8 = 0x12;
    /// ROLLBACK message tag (0x13) - Bolt 3+
    pub const ROLLBACK: u8 = 0x13;
    /// DISCARD_ALL message tag (0x2F) - up to Bolt 3
    pub const DISCARD_ALL: u8 = 0x2F;
    /// DISCARD message tag (0x2F) - Bolt 4.0+
    pub const DISCARD: u8 = 0x2F;
    /// PULL_ALL message tag (0x3F) - up to Bolt 3
    pub const PULL_ALL: u8 = 0x3F;
    /// PULL message tag (0x3F) - Bolt 4.0+
    pub const PULL: u8 = 0x3F;
    /// ROUTE message tag (0x66) - Bolt 4.3+
    pub const ROUTE: u8 = 0x66;

    /// SUCCESS response tag (0x70)
    pub const SUCCESS: u8 = 0x70;
    /// RECORD response tag (0x71)
    pub const RECORD: u8 = 0x71;
    /// IGNORED response tag (0x7E)
    pub const IGNORED: u8 = 0x7E;
    /// FAILURE response tag (0x7F)
    pub const FAILURE: u8 = 0x7F;
}
