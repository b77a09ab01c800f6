use std::fmt;

use crate::bolt::packstream::{PackStreamStructure, PackStreamValue};

/// A structure annotated with the message name its tag carries under a
/// particular revision.
///
/// Equality compares tag, fields and name. Two independently built values
/// with the same parts are equal.
#[derive(Clone, PartialEq)]
pub struct NamedStructure {
    name: String,
    structure: PackStreamStructure,
}

impl NamedStructure {
    /// Create a named structure.
    pub fn new(name: impl Into<String>, tag: u8, fields: Vec<PackStreamValue>) -> Self {
        Self {
            name: name.into(),
            structure: PackStreamStructure::new(tag, fields),
        }
    }

    /// Message name, e.g. `"HELLO"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Message tag.
    pub fn tag(&self) -> u8 {
        self.structure.tag
    }

    /// Message fields.
    pub fn fields(&self) -> &[PackStreamValue] {
        &self.structure.fields
    }

    /// The underlying structure, ready for the codec.
    pub fn as_structure(&self) -> &PackStreamStructure {
        &self.structure
    }

    /// Drop the name.
    pub fn into_structure(self) -> PackStreamStructure {
        self.structure
    }

    /// Split into `(name, tag, fields)`.
    pub fn into_parts(self) -> (String, u8, Vec<PackStreamValue>) {
        (self.name, self.structure.tag, self.structure.fields)
    }
}

impl From<NamedStructure> for PackStreamStructure {
    fn from(named: NamedStructure) -> Self {
        named.into_structure()
    }
}

impl fmt::Debug for NamedStructure {
    /// `Structure[0x70|SUCCESS](Map({...}))`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Structure[0x{:02X}|{}](", self.tag(), self.name)?;
        for (i, field) in self.fields().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", field)?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for NamedStructure {
    /// Script-line form: the name, then each field as a JSON literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self
            .fields()
            .iter()
            .map(PackStreamValue::to_json_literal)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| fmt::Error)?;
        write!(f, "{} {}", self.name, fields.join(" "))
    }
}
