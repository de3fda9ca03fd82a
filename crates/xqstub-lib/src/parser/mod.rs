//! Parser infrastructure for XQuery module prologs.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder:
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached as leading trivia
//! - Contextual keywords: XQuery reserves no words, so keywords are names remapped to
//!   `SyntaxKind::Keyword` when the grammar consumes them
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree. Recovery follows these rules:
//!
//! 1. Missing expected tokens emit a diagnostic but don't consume
//! 2. A declaration that fails skips to its `;` or the next declaration start,
//!    wrapping the skipped tokens in a `SyntaxKind::Error` node
//! 3. Function bodies and the query body are balanced scans, so nothing inside
//!    them is ever reported except an unbalanced brace

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{
    AtomicType, FunctionBody, FunctionDecl, ItemType, KindTest, ModuleDecl, Occurrence, Param,
    ParamList, Prolog, PrologDecl, QName, QueryBody, Root, SequenceType, Str, TypeDecl,
    VersionDecl,
};

pub use core::Parser;

use crate::diagnostics::Diagnostics;
use lexer::lex;

/// Parse result containing the green tree.
///
/// The tree is always complete; diagnostics are returned separately.
/// Error nodes in the tree represent recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    cst: rowan::GreenNode,
    diagnostics: Diagnostics,
}

impl Parse {
    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.cst
    }

    /// Creates a typed view over the immutable green tree.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.clone())
    }

    pub fn root(&self) -> Root {
        Root::cast(self.syntax()).expect("parser always produces Root")
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

/// Main entry point. Never fails; check `diagnostics()` for errors.
pub fn parse(source: &str) -> Parse {
    let tokens = lex(source);
    tracing::trace!(tokens = tokens.len(), "lexed module");

    let mut parser = Parser::new(source, tokens);
    parser.parse_root();
    let (cst, diagnostics) = parser.finish();

    tracing::debug!(
        bytes = source.len(),
        errors = diagnostics.error_count(),
        warnings = diagnostics.warning_count(),
        "parsed module"
    );
    Parse { cst, diagnostics }
}
