use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Library module functions belong in the module's target namespace.
    pub(crate) fn validate_function_namespace(&mut self, prefix: Option<&str>, span: TextRange) {
        let Some(module_prefix) = self.module_prefix else {
            return;
        };
        if prefix == Some(module_prefix) {
            return;
        }
        let message = prefix.map(|p| p.to_string());
        self.error_at(
            DiagnosticKind::FunctionOutsideModuleNamespace,
            span,
            message,
            None,
        );
    }
}
