//! PackStream value model.
//!
//! PackStream is the binary serialization format used by the Bolt protocol.
//! Byte-level encoding and decoding belong to the framing layer in front of
//! the stub; this module only carries the decoded values:
//!
//! - **Null**, **Boolean**, **Integer**, **Float**
//! - **String**, **Bytes**
//! - **List**, **Map** (string keys)
//! - **Structure**: a tag byte plus ordered fields, which is also how every
//!   Bolt message travels

pub mod types;

pub use types::{PackStreamStructure, PackStreamValue};
