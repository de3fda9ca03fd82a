use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{CLOSING_DELIMITERS, OPENING_DELIMITERS};

impl Parser<'_> {
    /// `declare function QName ( ParamList? ) (as SequenceType)? (EnclosedBody | external)`
    pub(crate) fn parse_function_decl(&mut self) -> bool {
        self.bump_remap(SyntaxKind::Keyword); // 'declare'
        self.bump_remap(SyntaxKind::Keyword); // 'function'

        if self.currently_is(SyntaxKind::Name) {
            let span = self.current_span();
            let prefix = (self.nth_raw(1) == SyntaxKind::Colon
                && self.nth_raw(2) == SyntaxKind::Name)
                .then(|| self.current_text());
            self.validate_function_namespace(prefix, span);
        }

        if !self.expect_qname("function name") {
            return false;
        }

        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.error_msg(DiagnosticKind::ExpectedToken, "`(` after function name");
            return false;
        }
        if !self.parse_param_list() {
            return false;
        }

        if self.at_keyword("as") && !self.parse_type_decl() {
            return false;
        }

        self.parse_function_body()
    }

    /// `( ($name (as T)?) (, $name (as T)?)* )`
    fn parse_param_list(&mut self) -> bool {
        self.start_node(SyntaxKind::ParamList);
        self.push_delimiter();
        self.bump(); // '('

        let mut ok = true;
        if !self.currently_is(SyntaxKind::ParenClose) {
            loop {
                if !self.currently_is(SyntaxKind::Dollar) {
                    self.error_msg(DiagnosticKind::ExpectedVariable, "parameter `$name`");
                    ok = false;
                    break;
                }
                if !self.parse_param() {
                    ok = false;
                    break;
                }
                if !self.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
        }

        let open = self.pop_delimiter();
        if ok {
            if self.currently_is(SyntaxKind::ParenClose) {
                self.bump();
            } else if self.eof() {
                if let Some(open) = open {
                    self.error_unclosed_delimiter(
                        DiagnosticKind::UnclosedParamList,
                        "parameter list opened here",
                        open.span,
                    );
                }
                ok = false;
            } else {
                self.error_msg(DiagnosticKind::ExpectedToken, "`,` or `)` after parameter");
                ok = false;
            }
        }

        self.finish_node();
        ok
    }

    fn parse_param(&mut self) -> bool {
        self.start_node(SyntaxKind::Param);
        self.bump(); // '$'
        let mut ok = self.expect_qname("parameter name");
        if ok && self.at_keyword("as") {
            ok = self.parse_type_decl();
        }
        self.finish_node();
        ok
    }

    fn parse_function_body(&mut self) -> bool {
        if self.currently_is(SyntaxKind::BraceOpen) {
            return self.parse_enclosed_body();
        }
        if self.at_keyword("external") {
            self.start_node(SyntaxKind::ExternalBody);
            self.bump_remap(SyntaxKind::Keyword);
            self.finish_node();
            return true;
        }
        self.error(DiagnosticKind::ExpectedFunctionBody);
        false
    }

    /// `{ ... }` with nested braces balanced and the interior kept opaque.
    fn parse_enclosed_body(&mut self) -> bool {
        self.start_node(SyntaxKind::EnclosedBody);
        self.push_delimiter();
        self.bump(); // '{'

        let mut depth = 1u32;
        let ok = loop {
            let kind = self.current();
            if self.eof() {
                if let Some(open) = self.pop_delimiter() {
                    self.error_unclosed_delimiter(
                        DiagnosticKind::UnclosedBody,
                        "function body opened here",
                        open.span,
                    );
                }
                break false;
            }
            match kind {
                SyntaxKind::BraceOpen => depth += 1,
                SyntaxKind::BraceClose => {
                    depth -= 1;
                    if depth == 0 {
                        self.bump();
                        self.pop_delimiter();
                        break true;
                    }
                }
                _ => {}
            }
            self.bump();
        };

        self.finish_node();
        ok
    }

    /// `declare variable $QName (as T)? (:= Expr | external (:= Expr)?)`
    pub(crate) fn parse_var_decl(&mut self) -> bool {
        self.bump_remap(SyntaxKind::Keyword); // 'declare'
        self.bump_remap(SyntaxKind::Keyword); // 'variable'

        if !self.currently_is(SyntaxKind::Dollar) {
            self.error_msg(DiagnosticKind::ExpectedVariable, "`$` before variable name");
            return false;
        }
        self.bump();
        if !self.expect_qname("variable name") {
            return false;
        }

        if self.at_keyword("as") && !self.parse_type_decl() {
            return false;
        }

        if self.currently_is(SyntaxKind::ColonEquals) {
            return self.parse_var_value();
        }
        if self.at_keyword("external") {
            self.bump_remap(SyntaxKind::Keyword);
            if self.currently_is(SyntaxKind::ColonEquals) {
                return self.parse_var_value();
            }
            return true;
        }

        self.error(DiagnosticKind::ExpectedVarValue);
        false
    }

    /// `:= ...` up to the terminating `;`, brackets balanced. The expression is not parsed.
    fn parse_var_value(&mut self) -> bool {
        self.start_node(SyntaxKind::VarValue);
        self.bump(); // ':='

        let mut open: Vec<(SyntaxKind, TextRange)> = Vec::new();
        let mut empty = true;
        loop {
            let kind = self.current();
            if self.eof() {
                break;
            }
            if open.is_empty()
                && (kind == SyntaxKind::Semicolon || CLOSING_DELIMITERS.contains(kind))
            {
                break;
            }
            if OPENING_DELIMITERS.contains(kind) {
                let span = self.current_span();
                open.push((kind, span));
            } else if CLOSING_DELIMITERS.contains(kind) {
                open.pop();
            }
            self.bump();
            empty = false;
        }

        let ok = if let Some((kind, span)) = open.last().copied() {
            let diagnostic = if kind == SyntaxKind::BraceOpen {
                DiagnosticKind::UnclosedBody
            } else {
                DiagnosticKind::UnclosedParens
            };
            self.error_unclosed_delimiter(diagnostic, "opened here", span);
            false
        } else if empty {
            self.error_msg(DiagnosticKind::ExpectedToken, "an expression after `:=`");
            false
        } else {
            true
        };

        self.finish_node();
        ok
    }

    /// `declare option QName "value"`
    pub(crate) fn parse_option_decl(&mut self) -> bool {
        self.bump_remap(SyntaxKind::Keyword); // 'declare'
        self.bump_remap(SyntaxKind::Keyword); // 'option'
        self.expect_qname("option name") && self.parse_string_literal("option value")
    }
}
