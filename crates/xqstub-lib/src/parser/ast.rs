//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Root, Root);
ast_node!(VersionDecl, VersionDecl);
ast_node!(ModuleDecl, ModuleDecl);
ast_node!(Prolog, Prolog);
ast_node!(FunctionDecl, FunctionDecl);
ast_node!(ParamList, ParamList);
ast_node!(Param, Param);
ast_node!(TypeDecl, TypeDecl);
ast_node!(SequenceType, SequenceType);
ast_node!(AtomicType, AtomicType);
ast_node!(KindTest, KindTest);
ast_node!(Occurrence, Occurrence);
ast_node!(QName, QName);
ast_node!(Str, Str);
ast_node!(QueryBody, QueryBody);

/// A top-level prolog entry.
///
/// Only functions carry content that is used downstream; everything else is
/// recognized so that real-world modules parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrologDecl {
    Function(FunctionDecl),
    /// Namespace, import, setter, variable or option declaration.
    Other(SyntaxNode),
}

impl PrologDecl {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::FunctionDecl => FunctionDecl::cast(node).map(PrologDecl::Function),
            kind if kind.is_setter_group_decl()
                || matches!(kind, SyntaxKind::VarDecl | SyntaxKind::OptionDecl) =>
            {
                Some(PrologDecl::Other(node))
            }
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            PrologDecl::Function(f) => f.as_cst(),
            PrologDecl::Other(node) => node,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.as_cst().kind()
    }
}

/// Item type of a sequence type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemType {
    Atomic(AtomicType),
    KindTest(KindTest),
    /// `item()`
    AnyItem(SyntaxNode),
    /// `empty-sequence()`
    EmptySequence(SyntaxNode),
}

impl ItemType {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::AtomicType => AtomicType::cast(node).map(ItemType::Atomic),
            SyntaxKind::KindTest => KindTest::cast(node).map(ItemType::KindTest),
            SyntaxKind::AnyItem => Some(ItemType::AnyItem(node)),
            SyntaxKind::EmptySequence => Some(ItemType::EmptySequence(node)),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            ItemType::Atomic(a) => a.as_cst(),
            ItemType::KindTest(k) => k.as_cst(),
            ItemType::AnyItem(node) | ItemType::EmptySequence(node) => node,
        }
    }
}

/// Body marker of a function declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FunctionBody {
    /// `{ ... }`, kept opaque.
    Enclosed(SyntaxNode),
    /// `external`
    External(SyntaxNode),
}

fn keyword_token(node: &SyntaxNode, keyword: &str) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == SyntaxKind::Keyword && t.text() == keyword)
}

fn compact_text(node: &SyntaxNode) -> String {
    node.descendants_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|t| !t.kind().is_trivia())
        .map(|t| t.text().to_string())
        .collect()
}

/// The `Str` child that directly follows `keyword`.
fn str_after_keyword(node: &SyntaxNode, keyword: &str) -> Option<Str> {
    let keyword = keyword_token(node, keyword)?;
    std::iter::successors(keyword.next_sibling_or_token(), |it| it.next_sibling_or_token())
        .find(|it| !it.kind().is_trivia())
        .and_then(|it| it.into_node())
        .and_then(Str::cast)
}

impl Root {
    pub fn version_decl(&self) -> Option<VersionDecl> {
        self.0.children().find_map(VersionDecl::cast)
    }

    pub fn module_decl(&self) -> Option<ModuleDecl> {
        self.0.children().find_map(ModuleDecl::cast)
    }

    pub fn prolog(&self) -> Option<Prolog> {
        self.0.children().find_map(Prolog::cast)
    }

    pub fn query_body(&self) -> Option<QueryBody> {
        self.0.children().find_map(QueryBody::cast)
    }

    pub fn is_library(&self) -> bool {
        self.module_decl().is_some()
    }
}

impl VersionDecl {
    pub fn version(&self) -> Option<Str> {
        str_after_keyword(&self.0, "version")
    }

    pub fn encoding(&self) -> Option<Str> {
        str_after_keyword(&self.0, "encoding")
    }
}

impl ModuleDecl {
    pub fn prefix(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::Name)
    }

    pub fn uri(&self) -> Option<Str> {
        self.0.children().find_map(Str::cast)
    }
}

impl Prolog {
    pub fn decls(&self) -> impl Iterator<Item = PrologDecl> + '_ {
        self.0.children().filter_map(PrologDecl::cast)
    }

    pub fn functions(&self) -> impl Iterator<Item = FunctionDecl> + '_ {
        self.0.children().filter_map(FunctionDecl::cast)
    }
}

impl FunctionDecl {
    pub fn name(&self) -> Option<QName> {
        self.0.children().find_map(QName::cast)
    }

    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.0
            .children()
            .find_map(ParamList::cast)
            .into_iter()
            .flat_map(|list| list.params().collect::<Vec<_>>())
    }

    pub fn param_list(&self) -> Option<ParamList> {
        self.0.children().find_map(ParamList::cast)
    }

    pub fn return_type(&self) -> Option<TypeDecl> {
        self.0.children().find_map(TypeDecl::cast)
    }

    pub fn body(&self) -> Option<FunctionBody> {
        self.0.children().find_map(|node| match node.kind() {
            SyntaxKind::EnclosedBody => Some(FunctionBody::Enclosed(node)),
            SyntaxKind::ExternalBody => Some(FunctionBody::External(node)),
            _ => None,
        })
    }
}

impl ParamList {
    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.0.children().filter_map(Param::cast)
    }
}

impl Param {
    pub fn name(&self) -> Option<QName> {
        self.0.children().find_map(QName::cast)
    }

    pub fn type_decl(&self) -> Option<TypeDecl> {
        self.0.children().find_map(TypeDecl::cast)
    }
}

impl TypeDecl {
    pub fn sequence_type(&self) -> Option<SequenceType> {
        self.0.children().find_map(SequenceType::cast)
    }
}

impl SequenceType {
    /// Source text without trivia, e.g. `xs:string?`.
    pub fn compact_text(&self) -> String {
        compact_text(&self.0)
    }

    pub fn item_type(&self) -> Option<ItemType> {
        self.0.children().find_map(ItemType::cast)
    }

    pub fn occurrence(&self) -> Option<Occurrence> {
        self.0.children().find_map(Occurrence::cast)
    }
}

impl AtomicType {
    pub fn name(&self) -> Option<QName> {
        self.0.children().find_map(QName::cast)
    }
}

impl KindTest {
    /// `element` in `element(foo)`.
    pub fn keyword(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::Keyword)
    }

    /// Source text without trivia, e.g. `element(foo,xs:string)`.
    pub fn compact_text(&self) -> String {
        compact_text(&self.0)
    }
}

impl Occurrence {
    pub fn indicator(&self) -> Option<SyntaxToken> {
        self.0.first_token()
    }
}

impl QName {
    /// `None` for unprefixed names.
    pub fn prefix(&self) -> Option<SyntaxToken> {
        let mut names = self.name_tokens();
        let first = names.next()?;
        names.next().map(|_| first)
    }

    pub fn local_part(&self) -> Option<SyntaxToken> {
        self.name_tokens().last()
    }

    fn name_tokens(&self) -> impl Iterator<Item = SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| t.kind() == SyntaxKind::Name)
    }

    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

impl Str {
    /// Content between the quotes, still escaped. `None` for `""`.
    pub fn value(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::StrVal)
    }

    pub fn quote(&self) -> Option<SyntaxKind> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .map(|t| t.kind())
            .find(|k| matches!(k, SyntaxKind::DoubleQuote | SyntaxKind::SingleQuote))
    }

    /// Unescaped content: doubled quote characters collapse to one.
    pub fn unescaped(&self) -> String {
        let Some(value) = self.value() else {
            return String::new();
        };
        match self.quote() {
            Some(SyntaxKind::SingleQuote) => value.text().replace("''", "'"),
            _ => value.text().replace("\"\"", "\""),
        }
    }
}
