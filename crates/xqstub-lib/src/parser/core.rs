//! Parser state machine and low-level operations.

use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::cst::{SyntaxKind, TokenSet};
use super::lexer::{Token, token_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    pub span: TextRange,
}

/// Trivia tokens are buffered and flushed when starting a new node.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) delimiter_stack: Vec<OpenDelimiter>,
    pub(super) debug_fuel: std::cell::Cell<u32>,
    /// Prefix bound by `module namespace`, set once the module declaration is parsed.
    pub(super) module_prefix: Option<&'src str>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            last_diagnostic_pos: None,
            delimiter_stack: Vec::with_capacity(8),
            debug_fuel: std::cell::Cell::new(256),
            module_prefix: None,
        }
    }

    pub(super) fn finish(mut self) -> (GreenNode, Diagnostics) {
        self.drain_trivia();
        (self.builder.finish(), self.diagnostics)
    }

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth_raw(0)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    /// Lookahead without skipping trivia. `SyntaxKind::Error` past the end.
    pub(super) fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    /// Text of the current non-trivia token, empty at EOF.
    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia_to_buffer();
        match self.tokens.get(self.pos) {
            Some(token) => token_text(self.source, token),
            None => "",
        }
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// LL(k) lookahead past trivia.
    fn peek_nth_token(&mut self, n: usize) -> Option<Token> {
        self.skip_trivia_to_buffer();
        self.ensure_progress();
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .copied()
    }

    pub(super) fn peek_nth(&mut self, n: usize) -> SyntaxKind {
        self.peek_nth_token(n).map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.peek_nth(1) == kind
    }

    /// Keywords are contextual: a keyword is a `Name` token with matching text.
    pub(super) fn at_keyword(&mut self, keyword: &str) -> bool {
        self.nth_is_keyword(0, keyword)
    }

    pub(super) fn nth_is_keyword(&mut self, n: usize, keyword: &str) -> bool {
        self.peek_nth_token(n).is_some_and(|t| {
            t.kind == SyntaxKind::Name && token_text(self.source, &t) == keyword
        })
    }

    /// Text of the n-th non-trivia token ahead, if it is a name.
    pub(super) fn nth_name_text(&mut self, n: usize) -> Option<&'src str> {
        let token = self.peek_nth_token(n)?;
        (token.kind == SyntaxKind::Name).then(|| token_text(self.source, &token))
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.trivia_buffer.push(self.tokens[self.pos]);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
        }
    }

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn bump(&mut self) {
        self.skip_trivia_to_buffer();
        assert!(!self.eof(), "bump called at EOF");
        let kind = self.tokens[self.pos].kind;
        self.bump_remap(kind);
    }

    /// Consumes the current token, recording it in the tree as `kind`.
    pub(super) fn bump_remap(&mut self, kind: SyntaxKind) {
        self.skip_trivia_to_buffer();
        assert!(!self.eof(), "bump called at EOF");
        self.reset_debug_fuel();

        self.drain_trivia();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(kind.into(), text);
        self.pos += 1;
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: emit diagnostic but don't consume.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat_token(kind) {
            return true;
        }
        self.error_msg(DiagnosticKind::ExpectedToken, what);
        false
    }

    /// Consumes `keyword` as a `Keyword` token, or reports it as missing.
    pub(super) fn expect_keyword(&mut self, keyword: &str) -> bool {
        if self.at_keyword(keyword) {
            self.bump_remap(SyntaxKind::Keyword);
            return true;
        }
        self.error_msg(DiagnosticKind::ExpectedKeyword, format!("`{}`", keyword));
        false
    }

    /// Consumes one of `keywords`, or reports all alternatives as missing.
    pub(super) fn expect_keyword_of(&mut self, keywords: &[&str]) -> bool {
        for keyword in keywords {
            if self.at_keyword(keyword) {
                self.bump_remap(SyntaxKind::Keyword);
                return true;
            }
        }
        let alternatives: Vec<String> = keywords.iter().map(|k| format!("`{}`", k)).collect();
        self.error_msg(DiagnosticKind::ExpectedKeyword, alternatives.join(" or "));
        false
    }

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).emit();
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).message(message).emit();
    }

    /// Reports at an explicit range, e.g. a whole declaration.
    pub(super) fn error_at(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        message: Option<String>,
        related: Option<(&str, TextRange)>,
    ) {
        if !self.should_report(range.start()) {
            return;
        }
        let mut builder = self.diagnostics.report(kind, range);
        if let Some(message) = message {
            builder = builder.message(message);
        }
        if let Some((related_msg, related_range)) = related {
            builder = builder.related_to(related_msg, related_range);
        }
        builder.emit();
    }

    /// Wraps tokens in an `Error` node until `stop` holds or input ends.
    pub(super) fn skip_until(&mut self, mut stop: impl FnMut(&mut Self) -> bool) {
        if self.eof() || stop(self) {
            return;
        }

        self.start_node(SyntaxKind::Error);
        while !self.eof() && !stop(self) {
            self.bump();
            self.skip_trivia_to_buffer();
        }
        self.finish_node();
    }

    /// Records the current token as an opening delimiter for unclosed-delimiter reports.
    pub(super) fn push_delimiter(&mut self) {
        let span = self.current_span();
        self.delimiter_stack.push(OpenDelimiter { span });
    }

    pub(super) fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.delimiter_stack.pop()
    }

    pub(super) fn error_unclosed_delimiter(
        &mut self,
        kind: DiagnosticKind,
        related_msg: impl Into<String>,
        open_range: TextRange,
    ) {
        let current = self.current_span();
        if !self.should_report(current.start()) {
            return;
        }
        // Use full range for easier downstream error suppression
        let full_range = TextRange::new(open_range.start(), current.end());
        self.diagnostics
            .report(kind, full_range)
            .related_to(related_msg, open_range)
            .emit();
    }

    pub(super) fn last_non_trivia_end(&self) -> Option<TextSize> {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| !t.kind.is_trivia())
            .map(|t| t.span.end())
    }
}
