//! Grouping of function declarations into namespace containers.

use indexmap::IndexMap;
use xqstub_core::utils::title_case;

use crate::model::FunctionDecl;

/// Functions sharing one prefix, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceGroup<'a> {
    /// Empty for unprefixed functions.
    pub prefix: &'a str,
    /// Title-cased prefix. Empty for the unprefixed group.
    pub object_name: String,
    pub functions: Vec<&'a FunctionDecl>,
}

/// Groups `functions` by prefix. Groups appear in first-seen prefix order.
pub fn group_by_namespace(functions: &[FunctionDecl]) -> Vec<NamespaceGroup<'_>> {
    let mut groups: IndexMap<&str, Vec<&FunctionDecl>> = IndexMap::new();
    for function in functions {
        groups
            .entry(function.name.prefix_str())
            .or_default()
            .push(function);
    }

    let groups: Vec<NamespaceGroup<'_>> = groups
        .into_iter()
        .map(|(prefix, functions)| NamespaceGroup {
            prefix,
            object_name: title_case(prefix),
            functions,
        })
        .collect();

    tracing::debug!(
        functions = functions.len(),
        groups = groups.len(),
        "grouped functions by namespace"
    );
    groups
}
