//! Per-function validation and type mapping.

use indexmap::IndexSet;
use xqstub_core::Colors;
use xqstub_core::utils::hyphen_to_camel_case;

use crate::model::{FunctionDecl, ItemType, Module, Occurrence, SequenceType};
use crate::{Error, Result};

use super::Config;
use super::grouping::group_by_namespace;
use super::render::Stub;

/// Renders the stubs of one module.
pub struct Emitter<'a> {
    module: &'a Module,
    pub(super) config: Config,
}

impl<'a> Emitter<'a> {
    pub fn new(module: &'a Module, config: Config) -> Self {
        Self { module, config }
    }

    /// Checks every function in document order, then renders all containers.
    ///
    /// The first failing function aborts the whole run, so output is never partial.
    pub fn emit(&self) -> Result<String> {
        let functions = self.module.functions();
        for function in functions {
            self.stub(function)?;
        }

        let mut names = IndexSet::new();
        let mut containers = Vec::new();
        for group in group_by_namespace(functions) {
            let name = if group.object_name.is_empty() {
                self.config.default_object.as_str()
            } else {
                group.object_name.as_str()
            };
            // `my` and `My`, or an unprefixed group next to `main`
            if !names.insert(name.to_string()) {
                return Err(Error::DuplicateContainer {
                    name: name.to_string(),
                });
            }
            let stubs = group
                .functions
                .iter()
                .map(|f| self.stub(f))
                .collect::<Result<Vec<_>>>()?;
            containers.push(self.render_container(name, &stubs));
        }

        Ok(containers.join("\n"))
    }

    pub(super) fn c(&self) -> Colors {
        self.config.colors
    }

    fn stub(&self, function: &FunctionDecl) -> Result<Stub> {
        let display_name = function.name.to_string();

        // Keyed on the local part, the only part that reaches the output
        let mut seen = IndexSet::new();
        for param in &function.params {
            if !seen.insert(param.name.local_part.as_str()) {
                return Err(Error::DuplicateParameter {
                    function: display_name,
                    param: param.name.local_part.clone(),
                });
            }
        }

        let mut params = Vec::with_capacity(function.params.len());
        for param in &function.params {
            let Some(ty) = &param.ty else {
                return Err(Error::MissingType {
                    function: display_name,
                    param: Some(param.name.local_part.clone()),
                });
            };
            params.push((param.name.local_part.clone(), self.map_type(&display_name, ty)?));
        }

        let Some(return_type) = &function.return_type else {
            return Err(Error::MissingType {
                function: display_name,
                param: None,
            });
        };
        let return_type = self.map_type(&display_name, return_type)?;

        tracing::trace!(function = %display_name, "mapped signature");
        Ok(Stub {
            name: hyphen_to_camel_case(&function.name.local_part),
            params,
            return_type,
        })
    }

    /// Item type first, so `node()+` reports the kind test rather than the `+`.
    fn map_type(&self, function: &str, ty: &SequenceType) -> Result<String> {
        let base = match &ty.item {
            ItemType::Atomic { name } => {
                let qname = name.to_string();
                match self.config.type_table.get(&qname) {
                    Some(target) => target.to_string(),
                    None => {
                        return Err(Error::UnsupportedType {
                            function: function.to_string(),
                            type_name: qname,
                        });
                    }
                }
            }
            other => {
                return Err(Error::UnsupportedType {
                    function: function.to_string(),
                    type_name: other.to_string(),
                });
            }
        };

        let brackets = self.config.brackets;
        match ty.occurrence {
            Occurrence::ExactlyOne => Ok(base),
            Occurrence::Optional => Ok(brackets.wrap("Option", &base)),
            Occurrence::ZeroOrMore => Ok(brackets.wrap("Option", &brackets.wrap("Array", &base))),
            Occurrence::OneOrMore => Err(Error::UnsupportedOccurrence {
                function: function.to_string(),
                occurrence: ty.occurrence,
            }),
        }
    }
}
