use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::OCCURRENCE_INDICATORS;

/// Node kind tests. Their argument lists are scanned, not interpreted.
pub(crate) const KIND_TESTS: &[&str] = &[
    "node",
    "text",
    "comment",
    "processing-instruction",
    "element",
    "attribute",
    "document-node",
    "schema-element",
    "schema-attribute",
];

impl Parser<'_> {
    /// `as SequenceType`
    pub(crate) fn parse_type_decl(&mut self) -> bool {
        self.start_node(SyntaxKind::TypeDecl);
        self.bump_remap(SyntaxKind::Keyword); // 'as'
        let ok = self.parse_sequence_type();
        self.finish_node();
        ok
    }

    /// `empty-sequence()` | ItemType OccurrenceIndicator?
    pub(crate) fn parse_sequence_type(&mut self) -> bool {
        self.start_node(SyntaxKind::SequenceType);
        let ok = self.parse_item_type();
        self.finish_node();
        ok
    }

    fn parse_item_type(&mut self) -> bool {
        if !self.currently_is(SyntaxKind::Name) {
            self.error_msg(DiagnosticKind::ExpectedSequenceType, "a sequence type");
            return false;
        }

        let name = self.current_text();
        // A name directly followed by `:` is an atomic type, never a kind test
        let prefixed = self.nth_raw(1) == SyntaxKind::Colon;
        if prefixed || !self.next_is(SyntaxKind::ParenOpen) {
            self.start_node(SyntaxKind::AtomicType);
            self.parse_qname();
            self.finish_node();
            self.parse_occurrence();
            return true;
        }

        match name {
            "empty-sequence" => self.parse_empty_parens(SyntaxKind::EmptySequence),
            "item" => {
                let ok = self.parse_empty_parens(SyntaxKind::AnyItem);
                if ok {
                    self.parse_occurrence();
                }
                ok
            }
            _ if KIND_TESTS.contains(&name) => {
                self.start_node(SyntaxKind::KindTest);
                self.bump_remap(SyntaxKind::Keyword);
                let ok = self.scan_balanced_parens();
                self.finish_node();
                if ok {
                    self.parse_occurrence();
                }
                ok
            }
            _ => {
                self.error_msg(DiagnosticKind::UnknownKindTest, name);
                false
            }
        }
    }

    /// `keyword ( )` with nothing inside the parentheses.
    fn parse_empty_parens(&mut self, kind: SyntaxKind) -> bool {
        self.start_node(kind);
        self.bump_remap(SyntaxKind::Keyword);
        self.assert_current(SyntaxKind::ParenOpen);
        self.bump();
        let ok = self.expect(SyntaxKind::ParenClose, "`)`");
        self.finish_node();
        ok
    }

    fn parse_occurrence(&mut self) {
        if self.currently_is_one_of(OCCURRENCE_INDICATORS) {
            self.start_node(SyntaxKind::Occurrence);
            self.bump();
            self.finish_node();
        }
    }

    /// `( ... )` with nested parentheses balanced and the interior kept opaque.
    fn scan_balanced_parens(&mut self) -> bool {
        self.push_delimiter();
        self.bump(); // '('
        let mut depth = 1u32;

        loop {
            match self.current() {
                SyntaxKind::Error if self.eof() => {
                    let open = self.pop_delimiter().map(|d| d.span);
                    if let Some(open) = open {
                        self.error_unclosed_delimiter(
                            DiagnosticKind::UnclosedParens,
                            "kind test opened here",
                            open,
                        );
                    }
                    return false;
                }
                SyntaxKind::ParenOpen => depth += 1,
                SyntaxKind::ParenClose => {
                    depth -= 1;
                    if depth == 0 {
                        self.bump();
                        self.pop_delimiter();
                        return true;
                    }
                }
                _ => {}
            }
            self.bump();
        }
    }
}
