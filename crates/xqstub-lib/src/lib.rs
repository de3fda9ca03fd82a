//! xqstub: typed function stubs from XQuery library modules.
//!
//! # Example
//!
//! ```
//! use xqstub_lib::{Config, generate};
//!
//! let source = r#"
//!     module namespace local = "urn:local";
//!     declare function local:square($x as xs:string) as xs:string { "body" };
//! "#;
//!
//! let stubs = generate(source, &Config::default()).expect("valid module");
//! assert!(stubs.contains("def square(x: String): String = ???"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod model;
pub mod parser;
pub mod position;
pub mod printer;
pub mod stubgen;


pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use model::{FunctionDecl, Module, Occurrence, QualifiedName, SequenceType};
pub use position::Position;
pub use printer::ModulePrinter;
pub use stubgen::{Brackets, Config, Emitter, TypeTable};

/// Errors that can occur while parsing a module or generating its stubs.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The module is not syntactically valid. `diagnostics` holds every report.
    #[error("syntax error at {position}: {expected}")]
    Syntax {
        position: Position,
        expected: String,
        diagnostics: Diagnostics,
    },

    /// An item type with no entry in the type table.
    #[error("unsupported type `{type_name}` in function `{function}`")]
    UnsupportedType { function: String, type_name: String },

    #[error("{}", missing_type_message(.function, .param.as_deref()))]
    MissingType {
        function: String,
        /// `None` when the return type is missing.
        param: Option<String>,
    },

    #[error("unsupported occurrence `{occurrence}` in function `{function}`")]
    UnsupportedOccurrence {
        function: String,
        occurrence: Occurrence,
    },

    #[error("duplicate parameter `${param}` in function `{function}`")]
    DuplicateParameter { function: String, param: String },

    /// Two namespace groups render under the same container name.
    #[error("container `{name}` would be emitted for more than one prefix")]
    DuplicateContainer { name: String },

    #[error("invalid type map: {0}")]
    InvalidTypeMap(String),
}

fn missing_type_message(function: &str, param: Option<&str>) -> String {
    match param {
        Some(param) => format!("parameter `${}` of function `{}` has no type", param, function),
        None => format!("function `{}` has no return type", function),
    }
}

/// Result type for parsing and generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses `source` and renders the stubs of all its functions.
pub fn generate(source: &str, config: &Config) -> Result<String> {
    let module = Module::parse(source)?;
    stubgen::emit_with_config(&module, config.clone())
}
