//! Owned module model lowered from the CST.
//!
//! Only function declarations survive lowering. Namespace, import, setter,
//! variable and option declarations are recognized by the parser and dropped here.

mod lower;

#[cfg(test)]
mod model_tests;

use std::fmt;
use std::ops::Range;

use serde::Serialize;

use crate::diagnostics::Diagnostics;
use crate::position::Position;
use crate::{Error, Result, parser};

/// `prefix:local` or an unprefixed `local`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QualifiedName {
    pub prefix: Option<String>,
    pub local_part: String,
}

impl QualifiedName {
    pub fn new(local_part: impl Into<String>) -> Self {
        Self {
            prefix: None,
            local_part: local_part.into(),
        }
    }

    pub fn prefixed(prefix: impl Into<String>, local_part: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            local_part: local_part.into(),
        }
    }

    /// Prefix text, empty for unprefixed names.
    pub fn prefix_str(&self) -> &str {
        self.prefix.as_deref().unwrap_or("")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{}:{}", prefix, self.local_part),
            None => write!(f, "{}", self.local_part),
        }
    }
}

/// Cardinality marker following an item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Occurrence {
    #[default]
    ExactlyOne,
    /// `?`
    Optional,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
}

impl Occurrence {
    pub fn from_indicator(indicator: &str) -> Option<Self> {
        match indicator {
            "?" => Some(Self::Optional),
            "*" => Some(Self::ZeroOrMore),
            "+" => Some(Self::OneOrMore),
            _ => None,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Self::ExactlyOne => "",
            Self::Optional => "?",
            Self::ZeroOrMore => "*",
            Self::OneOrMore => "+",
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.indicator())
    }
}

/// The node kind tests. Their arguments are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KindTest {
    Node,
    Text,
    Comment,
    ProcessingInstruction,
    Element,
    Attribute,
    DocumentNode,
    SchemaElement,
    SchemaAttribute,
}

impl KindTest {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let test = match keyword {
            "node" => Self::Node,
            "text" => Self::Text,
            "comment" => Self::Comment,
            "processing-instruction" => Self::ProcessingInstruction,
            "element" => Self::Element,
            "attribute" => Self::Attribute,
            "document-node" => Self::DocumentNode,
            "schema-element" => Self::SchemaElement,
            "schema-attribute" => Self::SchemaAttribute,
            _ => return None,
        };
        Some(test)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Text => "text",
            Self::Comment => "comment",
            Self::ProcessingInstruction => "processing-instruction",
            Self::Element => "element",
            Self::Attribute => "attribute",
            Self::DocumentNode => "document-node",
            Self::SchemaElement => "schema-element",
            Self::SchemaAttribute => "schema-attribute",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemType {
    Atomic {
        name: QualifiedName,
    },
    /// `text` is the source text of the test without whitespace, e.g. `element(foo)`.
    KindTest {
        test: KindTest,
        text: String,
    },
    /// `item()`
    AnyItem,
    /// `empty-sequence()`
    EmptySequence,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Atomic { name } => write!(f, "{}", name),
            ItemType::KindTest { text, .. } => f.write_str(text),
            ItemType::AnyItem => f.write_str("item()"),
            ItemType::EmptySequence => f.write_str("empty-sequence()"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SequenceType {
    pub item: ItemType,
    pub occurrence: Occurrence,
}

impl SequenceType {
    pub fn atomic(name: QualifiedName, occurrence: Occurrence) -> Self {
        Self {
            item: ItemType::Atomic { name },
            occurrence,
        }
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.item, self.occurrence)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Param {
    pub name: QualifiedName,
    #[serde(rename = "type")]
    pub ty: Option<SequenceType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionBody {
    /// `{ ... }`, never interpreted.
    Enclosed,
    External,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FunctionDecl {
    pub name: QualifiedName,
    pub params: Vec<Param>,
    pub return_type: Option<SequenceType>,
    pub body: FunctionBody,
    /// Byte range of the whole declaration in the source.
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VersionDecl {
    pub version: Option<String>,
    pub encoding: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModuleKind {
    /// `module namespace prefix = "uri";`
    Library { prefix: String, uri: String },
    Main,
}

/// A module reduced to what stub generation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    version: Option<VersionDecl>,
    kind: ModuleKind,
    functions: Vec<FunctionDecl>,
}

impl Module {
    pub fn new(
        version: Option<VersionDecl>,
        kind: ModuleKind,
        functions: Vec<FunctionDecl>,
    ) -> Self {
        Self {
            version,
            kind,
            functions,
        }
    }

    /// Parses and lowers `source`, failing on the first syntax error in document order.
    pub fn parse(source: &str) -> Result<Self> {
        Self::parse_with_diagnostics(source).map(|(module, _)| module)
    }

    /// Like [`Module::parse`], but also hands back the warnings.
    pub fn parse_with_diagnostics(source: &str) -> Result<(Self, Diagnostics)> {
        let parse = parser::parse(source);
        if let Some(first) = parse.diagnostics().first_error() {
            let position = Position::from_offset(source, first.range().start().into());
            return Err(Error::Syntax {
                position,
                expected: first.message().to_string(),
                diagnostics: parse.into_diagnostics(),
            });
        }
        let module = Self::from_parse(&parse);
        Ok((module, parse.into_diagnostics()))
    }

    /// Lowers an already parsed module. Error nodes are skipped, so callers should
    /// check the diagnostics first.
    pub fn from_parse(parse: &parser::Parse) -> Self {
        lower::lower_root(&parse.root())
    }

    pub fn version(&self) -> Option<&VersionDecl> {
        self.version.as_ref()
    }

    pub fn kind(&self) -> &ModuleKind {
        &self.kind
    }

    pub fn functions(&self) -> &[FunctionDecl] {
        &self.functions
    }

    /// Prefix and URI of a library module.
    pub fn namespace(&self) -> Option<(&str, &str)> {
        match &self.kind {
            ModuleKind::Library { prefix, uri } => Some((prefix, uri)),
            ModuleKind::Main => None,
        }
    }

    pub fn is_library(&self) -> bool {
        matches!(self.kind, ModuleKind::Library { .. })
    }
}
