//! Configuration types for stub emission.

use xqstub_core::Colors;

use super::TypeTable;

/// How generic type arguments are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Brackets {
    /// `Option<String>`
    #[default]
    Angle,
    /// `Option[String]`, as Scala writes them
    Square,
}

impl Brackets {
    pub(crate) fn wrap(self, outer: &str, inner: &str) -> String {
        match self {
            Brackets::Angle => format!("{}<{}>", outer, inner),
            Brackets::Square => format!("{}[{}]", outer, inner),
        }
    }
}

/// Configuration for stub emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Atomic type mapping
    pub type_table: TypeTable,
    /// Generic bracket style
    pub brackets: Brackets,
    /// Body of every generated stub
    pub placeholder: String,
    /// Indentation of stubs inside their container
    pub indent: String,
    /// Container name for functions without a prefix
    pub default_object: String,
    /// Color configuration for output
    pub colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            type_table: TypeTable::default(),
            brackets: Brackets::default(),
            placeholder: "???".to_string(),
            indent: "  ".to_string(),
            default_object: "Main".to_string(),
            colors: Colors::OFF,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_table(mut self, table: TypeTable) -> Self {
        self.type_table = table;
        self
    }

    pub fn brackets(mut self, brackets: Brackets) -> Self {
        self.brackets = brackets;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn default_object(mut self, name: impl Into<String>) -> Self {
        self.default_object = name.into();
        self
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}
