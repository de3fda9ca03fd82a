//! Stub emitter from the owned module model.
//!
//! Functions are grouped into one container per prefix, and every function becomes
//! a typed stub with a placeholder body.

mod config;
mod emitter;
mod grouping;
mod render;
mod type_table;

#[cfg(test)]
mod emitter_tests;

pub use config::{Brackets, Config};
pub use emitter::Emitter;
pub use grouping::{NamespaceGroup, group_by_namespace};
pub use type_table::TypeTable;

use crate::Result;
use crate::model::Module;

/// Emit stubs from a module.
pub fn emit(module: &Module) -> Result<String> {
    Emitter::new(module, Config::default()).emit()
}

/// Emit stubs from a module with custom config.
pub fn emit_with_config(module: &Module, config: Config) -> Result<String> {
    Emitter::new(module, config).emit()
}
