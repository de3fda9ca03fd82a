use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::DECL_RECOVERY;

impl Parser<'_> {
    /// `VersionDecl? (ModuleDecl Prolog | Prolog QueryBody?)`
    pub fn parse_root(&mut self) {
        self.start_node(SyntaxKind::Root);

        if self.at_keyword("xquery")
            && (self.nth_is_keyword(1, "version") || self.nth_is_keyword(1, "encoding"))
        {
            self.parse_declaration(SyntaxKind::VersionDecl, Self::parse_version_decl);
        }

        // LL(2): `module namespace` → library module
        let library = self.at_keyword("module") && self.nth_is_keyword(1, "namespace");
        if library {
            self.parse_declaration(SyntaxKind::ModuleDecl, Self::parse_module_decl);
        }

        self.parse_prolog();

        if library {
            self.parse_library_tail();
        } else {
            self.parse_query_body();
        }

        self.eat_trivia();
        self.finish_node();
    }

    /// Runs `parse` inside a `kind` node, then consumes the `;` separator.
    ///
    /// A failed or unterminated declaration skips to the next `;` or declaration start.
    fn parse_declaration(&mut self, kind: SyntaxKind, parse: impl FnOnce(&mut Self) -> bool) {
        self.start_node(kind);
        let ok = parse(self);
        if !ok || !self.currently_is(SyntaxKind::Semicolon) {
            if ok {
                self.error_msg(DiagnosticKind::ExpectedToken, "`;` after declaration");
            }
            self.skip_until(|p| {
                p.currently_is_one_of(DECL_RECOVERY) || p.prolog_decl_kind().is_some()
            });
        }
        self.eat_token(SyntaxKind::Semicolon);
        self.finish_node();
    }

    /// `xquery version "1.0" (encoding "utf-8")?` | `xquery encoding "utf-8"`
    fn parse_version_decl(&mut self) -> bool {
        self.bump_remap(SyntaxKind::Keyword); // 'xquery'
        if self.at_keyword("version") {
            self.bump_remap(SyntaxKind::Keyword);
            if !self.parse_string_literal("version string") {
                return false;
            }
        }
        if self.at_keyword("encoding") {
            self.bump_remap(SyntaxKind::Keyword);
            return self.parse_string_literal("encoding name");
        }
        true
    }

    /// `module namespace NCName = "uri"`
    fn parse_module_decl(&mut self) -> bool {
        self.bump_remap(SyntaxKind::Keyword); // 'module'
        self.bump_remap(SyntaxKind::Keyword); // 'namespace'
        if self.currently_is(SyntaxKind::Name) {
            self.module_prefix = Some(self.current_text());
        }
        self.expect_ncname("module prefix")
            && self.expect(SyntaxKind::Equals, "`=` after module prefix")
            && self.parse_string_literal("module namespace URI")
    }

    /// Classifies the declaration starting at the current token.
    ///
    /// `Some(SyntaxKind::Error)` marks something that starts like a declaration
    /// but is not one of the known forms.
    pub(crate) fn prolog_decl_kind(&mut self) -> Option<SyntaxKind> {
        if self.at_keyword("import") {
            return match self.nth_name_text(1) {
                Some("schema") => Some(SyntaxKind::SchemaImport),
                Some("module") => Some(SyntaxKind::ModuleImport),
                _ => Some(SyntaxKind::Error),
            };
        }
        if !self.at_keyword("declare") {
            return None;
        }
        let kind = match self.nth_name_text(1) {
            Some("namespace") => SyntaxKind::NamespaceDecl,
            Some("boundary-space") => SyntaxKind::BoundarySpaceDecl,
            Some("default") => match self.nth_name_text(2) {
                Some("element" | "function") => SyntaxKind::DefaultNamespaceDecl,
                Some("collation") => SyntaxKind::DefaultCollationDecl,
                Some("order") => SyntaxKind::EmptyOrderDecl,
                _ => SyntaxKind::Error,
            },
            Some("base-uri") => SyntaxKind::BaseUriDecl,
            Some("construction") => SyntaxKind::ConstructionDecl,
            Some("ordering") => SyntaxKind::OrderingModeDecl,
            Some("copy-namespaces") => SyntaxKind::CopyNamespacesDecl,
            Some("variable") => SyntaxKind::VarDecl,
            Some("function") => SyntaxKind::FunctionDecl,
            Some("option") => SyntaxKind::OptionDecl,
            _ => SyntaxKind::Error,
        };
        Some(kind)
    }

    /// `(Setter ;)* (VarDecl | FunctionDecl | OptionDecl ;)*`
    fn parse_prolog(&mut self) {
        self.start_node(SyntaxKind::Prolog);

        // First variable, function or option declaration, once seen
        let mut body_group_start: Option<TextRange> = None;

        while let Some(kind) = self.prolog_decl_kind() {
            let start = self.current_span().start();
            match kind {
                SyntaxKind::NamespaceDecl => {
                    self.parse_declaration(kind, Self::parse_namespace_decl)
                }
                SyntaxKind::BoundarySpaceDecl => self.parse_declaration(kind, |p| {
                    p.bump_keywords(2);
                    p.expect_keyword_of(&["preserve", "strip"])
                }),
                SyntaxKind::DefaultNamespaceDecl => self.parse_declaration(kind, |p| {
                    p.bump_keywords(3);
                    p.expect_keyword("namespace") && p.parse_string_literal("namespace URI")
                }),
                SyntaxKind::DefaultCollationDecl => self.parse_declaration(kind, |p| {
                    p.bump_keywords(3);
                    p.parse_string_literal("collation URI")
                }),
                SyntaxKind::EmptyOrderDecl => self.parse_declaration(kind, |p| {
                    p.bump_keywords(3);
                    p.expect_keyword("empty") && p.expect_keyword_of(&["greatest", "least"])
                }),
                SyntaxKind::BaseUriDecl => self.parse_declaration(kind, |p| {
                    p.bump_keywords(2);
                    p.parse_string_literal("base URI")
                }),
                SyntaxKind::ConstructionDecl => self.parse_declaration(kind, |p| {
                    p.bump_keywords(2);
                    p.expect_keyword_of(&["strip", "preserve"])
                }),
                SyntaxKind::OrderingModeDecl => self.parse_declaration(kind, |p| {
                    p.bump_keywords(2);
                    p.expect_keyword_of(&["ordered", "unordered"])
                }),
                SyntaxKind::CopyNamespacesDecl => self.parse_declaration(kind, |p| {
                    p.bump_keywords(2);
                    p.expect_keyword_of(&["preserve", "no-preserve"])
                        && p.expect(SyntaxKind::Comma, "`,` between copy-namespaces modes")
                        && p.expect_keyword_of(&["inherit", "no-inherit"])
                }),
                SyntaxKind::SchemaImport => {
                    self.parse_declaration(kind, Self::parse_schema_import)
                }
                SyntaxKind::ModuleImport => {
                    self.parse_declaration(kind, Self::parse_module_import)
                }
                SyntaxKind::VarDecl => self.parse_declaration(kind, Self::parse_var_decl),
                SyntaxKind::FunctionDecl => {
                    self.parse_declaration(kind, Self::parse_function_decl)
                }
                SyntaxKind::OptionDecl => self.parse_declaration(kind, Self::parse_option_decl),
                _ => self.parse_declaration(SyntaxKind::Error, Self::parse_unknown_decl),
            }

            let end = self.last_non_trivia_end().unwrap_or(start);
            let range = TextRange::new(start, end);
            if kind.is_setter_group_decl() {
                if let Some(first) = body_group_start {
                    self.error_at(
                        DiagnosticKind::MisplacedDeclaration,
                        range,
                        None,
                        Some(("first function, variable or option declaration", first)),
                    );
                }
            } else if kind != SyntaxKind::Error && body_group_start.is_none() {
                body_group_start = Some(range);
            }
        }

        self.finish_node();
    }

    fn bump_keywords(&mut self, count: usize) {
        for _ in 0..count {
            self.bump_remap(SyntaxKind::Keyword);
        }
    }

    /// `declare namespace NCName = "uri"`
    fn parse_namespace_decl(&mut self) -> bool {
        self.bump_keywords(2);
        self.expect_ncname("namespace prefix")
            && self.expect(SyntaxKind::Equals, "`=` after namespace prefix")
            && self.parse_string_literal("namespace URI")
    }

    /// `import schema (namespace NCName = | default element namespace)? "uri" (at "uri", ...)?`
    fn parse_schema_import(&mut self) -> bool {
        self.bump_keywords(2);
        if self.at_keyword("namespace") {
            self.bump_remap(SyntaxKind::Keyword);
            if !(self.expect_ncname("namespace prefix")
                && self.expect(SyntaxKind::Equals, "`=` after namespace prefix"))
            {
                return false;
            }
        } else if self.at_keyword("default") {
            self.bump_remap(SyntaxKind::Keyword);
            if !(self.expect_keyword("element") && self.expect_keyword("namespace")) {
                return false;
            }
        }
        self.parse_string_literal("schema URI") && self.parse_location_hints()
    }

    /// `import module (namespace NCName =)? "uri" (at "uri", ...)?`
    fn parse_module_import(&mut self) -> bool {
        self.bump_keywords(2);
        if self.at_keyword("namespace") {
            self.bump_remap(SyntaxKind::Keyword);
            if !(self.expect_ncname("namespace prefix")
                && self.expect(SyntaxKind::Equals, "`=` after namespace prefix"))
            {
                return false;
            }
        }
        self.parse_string_literal("module URI") && self.parse_location_hints()
    }

    /// `declare`/`import` followed by something that is not a known declaration.
    fn parse_unknown_decl(&mut self) -> bool {
        let keyword = self.current_text();
        self.bump_remap(SyntaxKind::Keyword);
        match self.nth_name_text(0) {
            Some(name) => {
                self.error_msg(
                    DiagnosticKind::UnknownDeclaration,
                    format!("{} {}", keyword, name),
                );
                self.bump();
            }
            None => {
                self.error_msg(
                    DiagnosticKind::ExpectedKeyword,
                    format!("a declaration keyword after `{}`", keyword),
                );
            }
        }
        false
    }

    /// Library modules end with their prolog.
    fn parse_library_tail(&mut self) {
        self.current();
        if self.eof() {
            return;
        }
        self.error(DiagnosticKind::LibraryModuleBody);
        self.skip_until(|_| false);
    }

    /// Everything after the prolog, scanned for balanced braces only.
    fn parse_query_body(&mut self) {
        self.current();
        if self.eof() {
            return;
        }

        self.start_node(SyntaxKind::QueryBody);
        let mut open: Vec<TextRange> = Vec::new();
        loop {
            let kind = self.current();
            if self.eof() {
                break;
            }
            match kind {
                SyntaxKind::BraceOpen => {
                    let span = self.current_span();
                    open.push(span);
                }
                SyntaxKind::BraceClose if open.is_empty() => {
                    self.error_msg(DiagnosticKind::UnmatchedDelimiter, "`}`");
                    self.start_node(SyntaxKind::Error);
                    self.bump();
                    self.finish_node();
                    continue;
                }
                SyntaxKind::BraceClose => {
                    open.pop();
                }
                _ => {}
            }
            self.bump();
        }

        if let Some(unclosed) = open.last().copied() {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedBody,
                "brace opened here",
                unclosed,
            );
        }
        self.finish_node();
    }
}
