use std::fmt::Write;

use rowan::NodeOrToken;

use crate::parser::{self, FunctionBody, Parse, PrologDecl, SyntaxNode};

/// Renders a parsed module as an outline of its declarations or as the raw CST.
pub struct ModulePrinter<'p> {
    parse: &'p Parse,
    raw: bool,
    trivia: bool,
    spans: bool,
}

impl<'p> ModulePrinter<'p> {
    pub fn new(parse: &'p Parse) -> Self {
        Self {
            parse,
            raw: false,
            trivia: false,
            spans: false,
        }
    }

    pub fn raw(mut self, value: bool) -> Self {
        self.raw = value;
        self
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.raw {
            self.format_cst(&self.parse.syntax(), 0, w)
        } else {
            self.format_root(&self.parse.root(), w)
        }
    }

    fn format_cst(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());

        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_cst(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        let child_prefix = "  ".repeat(indent + 1);
                        let child_span = self.span_str(t.text_range());
                        writeln!(
                            w,
                            "{}{:?}{} {:?}",
                            child_prefix,
                            t.kind(),
                            child_span,
                            t.text()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn format_root(&self, root: &parser::Root, w: &mut impl Write) -> std::fmt::Result {
        let span = self.span_str(root.as_cst().text_range());
        let kind = if root.is_library() { "library" } else { "main" };
        writeln!(w, "Module{} {}", span, kind)?;

        if let Some(version) = root.version_decl() {
            let span = self.span_str(version.as_cst().text_range());
            write!(w, "  Version{}", span)?;
            if let Some(v) = version.version() {
                write!(w, " {:?}", v.unescaped())?;
            }
            if let Some(e) = version.encoding() {
                write!(w, " encoding {:?}", e.unescaped())?;
            }
            writeln!(w)?;
        }

        if let Some(module) = root.module_decl() {
            let span = self.span_str(module.as_cst().text_range());
            let prefix = module.prefix().map(|t| t.text().to_string()).unwrap_or_default();
            let uri = module.uri().map(|s| s.unescaped()).unwrap_or_default();
            writeln!(w, "  Namespace{} {} = {:?}", span, prefix, uri)?;
        }

        if let Some(prolog) = root.prolog() {
            for decl in prolog.decls() {
                self.format_decl(&decl, w)?;
            }
        }

        if let Some(body) = root.query_body() {
            let span = self.span_str(body.as_cst().text_range());
            writeln!(w, "  QueryBody{}", span)?;
        }
        Ok(())
    }

    fn format_decl(&self, decl: &PrologDecl, w: &mut impl Write) -> std::fmt::Result {
        let span = self.span_str(decl.as_cst().text_range());
        let PrologDecl::Function(function) = decl else {
            return writeln!(w, "  {:?}{}", decl.kind(), span);
        };

        match function.name() {
            Some(name) => writeln!(w, "  Function{} {}", span, name.text())?,
            None => writeln!(w, "  Function{}", span)?,
        }

        for param in function.params() {
            let span = self.span_str(param.as_cst().text_range());
            let name = param.name().map(|n| n.text()).unwrap_or_default();
            let ty = param
                .type_decl()
                .and_then(|t| t.sequence_type())
                .map(|t| format!(" as {}", t.compact_text()))
                .unwrap_or_default();
            writeln!(w, "    Param{} ${}{}", span, name, ty)?;
        }

        if let Some(ty) = function.return_type().and_then(|t| t.sequence_type()) {
            let span = self.span_str(ty.as_cst().text_range());
            writeln!(w, "    Returns{} {}", span, ty.compact_text())?;
        }

        match function.body() {
            Some(FunctionBody::Enclosed(node)) => {
                writeln!(w, "    Body{}", self.span_str(node.text_range()))?
            }
            Some(FunctionBody::External(node)) => {
                writeln!(w, "    External{}", self.span_str(node.text_range()))?
            }
            None => {}
        }
        Ok(())
    }

    fn span_str(&self, range: rowan::TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}
