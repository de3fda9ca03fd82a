//! Atomic type name → target type name mapping.

use indexmap::IndexMap;

use crate::{Error, Result};

/// Immutable mapping from atomic type QNames (as written, e.g. `xs:string`) to
/// target type names. Iteration follows insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTable {
    entries: IndexMap<String, String>,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::from_pairs([("xs:string", "String"), ("xs:boolean", "Boolean")])
    }
}

impl TypeTable {
    /// A table with no entries.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// The default table plus the common numeric and date types.
    pub fn extended() -> Self {
        Self::default().merged(Self::from_pairs([
            ("xs:integer", "Int"),
            ("xs:int", "Int"),
            ("xs:long", "Long"),
            ("xs:short", "Short"),
            ("xs:byte", "Byte"),
            ("xs:double", "Double"),
            ("xs:float", "Float"),
            ("xs:decimal", "BigDecimal"),
            ("xs:anyURI", "String"),
            ("xs:date", "String"),
            ("xs:dateTime", "String"),
            ("xs:untypedAtomic", "String"),
        ]))
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Parses a JSON object of `"qname": "Target"` pairs.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: IndexMap<String, String> =
            serde_json::from_str(json).map_err(|e| Error::InvalidTypeMap(e.to_string()))?;
        if let Some((key, _)) = entries.iter().find(|(k, v)| k.is_empty() || v.is_empty()) {
            return Err(Error::InvalidTypeMap(format!(
                "empty type name in entry `{}`",
                key
            )));
        }
        Ok(Self { entries })
    }

    /// Returns a copy with `qname` mapped to `target`, replacing any existing entry.
    pub fn with(mut self, qname: impl Into<String>, target: impl Into<String>) -> Self {
        self.entries.insert(qname.into(), target.into());
        self
    }

    /// Entries of `other` override entries of `self`.
    pub fn merged(mut self, other: TypeTable) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn get(&self, qname: &str) -> Option<&str> {
        self.entries.get(qname).map(String::as_str)
    }

    pub fn contains(&self, qname: &str) -> bool {
        self.entries.contains_key(qname)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
