//! Syntax kinds for XQuery module prologs.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `XqLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    /// `:=` in variable initializers. Defined before `Colon` for correct precedence.
    #[token(":=")]
    ColonEquals,

    #[token(":")]
    Colon,

    #[token("=")]
    Equals,

    #[token("$")]
    Dollar,

    #[token("?")]
    Question,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    /// A doubled quote character inside the literal is an escaped quote.
    #[regex(r#""(?:[^"]|"")*""#)]
    #[regex(r"'(?:[^']|'')*'")]
    #[doc(hidden)]
    StringLiteral, // Lexer-internal only

    DoubleQuote,
    SingleQuote,
    /// String content between quotes
    StrVal,

    /// Name token consumed as a keyword. Never produced by the lexer.
    Keyword,

    /// NCName. Keywords are contextual, so `declare` or `function` lex as names too.
    #[regex(r"[A-Za-z_][A-Za-z0-9_.\-]*")]
    Name,

    #[regex(r"[0-9]+(?:\.[0-9]+)?")]
    Number,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    /// `(: ... :)`, nesting allowed.
    #[token("(:", lex_comment)]
    Comment,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    Root,
    VersionDecl,
    ModuleDecl,
    Prolog,

    // Namespace, import and setter declarations (parsed, then discarded)
    NamespaceDecl,
    DefaultNamespaceDecl,
    BoundarySpaceDecl,
    DefaultCollationDecl,
    BaseUriDecl,
    ConstructionDecl,
    OrderingModeDecl,
    EmptyOrderDecl,
    CopyNamespacesDecl,
    SchemaImport,
    ModuleImport,

    // Variable, function and option declarations
    VarDecl,
    VarValue,
    OptionDecl,
    FunctionDecl,
    ParamList,
    Param,
    TypeDecl,
    SequenceType,
    AtomicType,
    KindTest,
    AnyItem,
    EmptySequence,
    Occurrence,
    EnclosedBody,
    ExternalBody,

    QName,
    Str,
    QueryBody,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

/// Scans the remainder of a comment whose `(:` was just matched.
///
/// Returns `false` for an unterminated comment, which turns the rest of the input
/// into a lexer error.
fn lex_comment(lex: &mut logos::Lexer<'_, SyntaxKind>) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut i = 0;

    while i + 1 < bytes.len() {
        match (bytes[i], bytes[i + 1]) {
            (b'(', b':') => {
                depth += 1;
                i += 2;
            }
            (b':', b')') => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    lex.bump(i);
                    return true;
                }
            }
            _ => i += 1,
        }
    }

    lex.bump(bytes.len());
    false
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | Comment)
    }

    /// Declarations that must precede variable, function and option declarations.
    pub fn is_setter_group_decl(self) -> bool {
        matches!(
            self,
            NamespaceDecl
                | DefaultNamespaceDecl
                | BoundarySpaceDecl
                | DefaultCollationDecl
                | BaseUriDecl
                | ConstructionDecl
                | OrderingModeDecl
                | EmptyOrderDecl
                | CopyNamespacesDecl
                | SchemaImport
                | ModuleImport
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum XqLang {}

impl Language for XqLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<XqLang>;
pub type SyntaxToken = rowan::SyntaxToken<XqLang>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const OCCURRENCE_INDICATORS: TokenSet = TokenSet::new(&[Question, Star, Plus]);

    pub const QUOTES: TokenSet = TokenSet::new(&[DoubleQuote, SingleQuote]);

    pub const OPENING_DELIMITERS: TokenSet = TokenSet::new(&[ParenOpen, BraceOpen, BracketOpen]);

    pub const CLOSING_DELIMITERS: TokenSet =
        TokenSet::new(&[ParenClose, BraceClose, BracketClose]);

    /// Where a failed declaration stops skipping (keywords are checked separately).
    pub const DECL_RECOVERY: TokenSet = TokenSet::new(&[Semicolon]);
}
