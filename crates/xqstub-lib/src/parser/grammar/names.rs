use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::QUOTES;

impl Parser<'_> {
    /// `prefix:local` | `local`
    ///
    /// The prefixed form wins whenever `:` and a name follow immediately, with no
    /// trivia in between.
    pub(crate) fn parse_qname(&mut self) {
        self.assert_current(SyntaxKind::Name);
        self.start_node(SyntaxKind::QName);
        self.bump();
        if self.nth_raw(0) == SyntaxKind::Colon && self.nth_raw(1) == SyntaxKind::Name {
            self.bump(); // ':'
            self.bump(); // local part
        }
        self.finish_node();
    }

    /// QName in a position where one is required.
    pub(crate) fn expect_qname(&mut self, what: &str) -> bool {
        if self.currently_is(SyntaxKind::Name) {
            self.parse_qname();
            true
        } else {
            self.error_msg(DiagnosticKind::ExpectedName, what);
            false
        }
    }

    /// Unprefixed name, as bound by `namespace p = "..."`.
    pub(crate) fn expect_ncname(&mut self, what: &str) -> bool {
        if !self.currently_is(SyntaxKind::Name) {
            self.error_msg(DiagnosticKind::ExpectedName, what);
            return false;
        }
        if self.nth_raw(1) == SyntaxKind::Colon {
            self.error_msg(DiagnosticKind::ExpectedName, format!("unprefixed {}", what));
            return false;
        }
        self.bump();
        true
    }

    /// `"..."` | `'...'` wrapped in a `Str` node.
    pub(crate) fn parse_string_literal(&mut self, what: &str) -> bool {
        if !self.currently_is_one_of(QUOTES) {
            self.error_msg(DiagnosticKind::ExpectedStringLiteral, what);
            return false;
        }
        self.start_node(SyntaxKind::Str);
        self.bump_string_tokens();
        self.finish_node();
        true
    }

    /// Consume string tokens (quote + optional content + quote) without creating a node.
    pub(crate) fn bump_string_tokens(&mut self) {
        let open_quote = self.current();
        self.bump(); // opening quote

        if self.nth_raw(0) == SyntaxKind::StrVal {
            self.bump(); // content
        }

        let closing = self.nth_raw(0);
        assert_eq!(
            closing, open_quote,
            "bump_string_tokens: expected closing {:?} but found {:?} \
             (lexer should only produce quote tokens from complete strings)",
            open_quote, closing
        );
        self.bump();
    }

    /// `at "uri" ("," "uri")*` location hints of an import.
    pub(crate) fn parse_location_hints(&mut self) -> bool {
        if !self.at_keyword("at") {
            return true;
        }
        self.bump_remap(SyntaxKind::Keyword);
        if !self.parse_string_literal("location URI after `at`") {
            return false;
        }
        while self.eat_token(SyntaxKind::Comma) {
            if !self.parse_string_literal("location URI after `,`") {
                return false;
            }
        }
        true
    }
}
