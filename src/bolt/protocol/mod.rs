//! Bolt protocol revisions.
//!
//! Each revision knows which messages the client and the server may send,
//! how it reads handshake proposals, and what its handshake acknowledgement
//! looks like. Revisions are declared as a chain in [`REVISION_CHAIN`]: every
//! link only lists what changed since the previous one, and
//! [`Registry::new`] flattens the chain into standalone [`Revision`]s.
//!
//! Supporting a new revision means appending a [`RevisionStep`]; none of the
//! lookup, translation or response code has to change.

mod registry;
mod responder;
mod revision;
mod translate;

pub use registry::Registry;
pub use responder::AutoResponder;
pub use revision::{
    build_revisions, HelloField, MessageTable, Revision, RevisionStep, TableEdit, REVISION_CHAIN,
};
