use indoc::indoc;

use crate::parser::tests::dump_cst;
use crate::parser::{SyntaxKind, parse};

#[test]
fn version_and_module_declaration() {
    let input = indoc! {r#"
    xquery version "1.0" encoding "utf-8";
    module namespace ex = "http://example.com/ex";
    "#};

    insta::assert_snapshot!(dump_cst(input), @r#"
    Root
      VersionDecl
        Keyword "xquery"
        Keyword "version"
        Str
          DoubleQuote "\""
          StrVal "1.0"
          DoubleQuote "\""
        Keyword "encoding"
        Str
          DoubleQuote "\""
          StrVal "utf-8"
          DoubleQuote "\""
        Semicolon ";"
      ModuleDecl
        Keyword "module"
        Keyword "namespace"
        Name "ex"
        Equals "="
        Str
          DoubleQuote "\""
          StrVal "http://example.com/ex"
          DoubleQuote "\""
        Semicolon ";"
      Prolog
    "#);
}

#[test]
fn setters_and_imports() {
    let input = indoc! {r#"
    declare boundary-space strip;
    declare default element namespace "urn:e";
    import module namespace m = "urn:m" at "m.xq";
    "#};

    insta::assert_snapshot!(dump_cst(input), @r#"
    Root
      Prolog
        BoundarySpaceDecl
          Keyword "declare"
          Keyword "boundary-space"
          Keyword "strip"
          Semicolon ";"
        DefaultNamespaceDecl
          Keyword "declare"
          Keyword "default"
          Keyword "element"
          Keyword "namespace"
          Str
            DoubleQuote "\""
            StrVal "urn:e"
            DoubleQuote "\""
          Semicolon ";"
        ModuleImport
          Keyword "import"
          Keyword "module"
          Keyword "namespace"
          Name "m"
          Equals "="
          Str
            DoubleQuote "\""
            StrVal "urn:m"
            DoubleQuote "\""
          Keyword "at"
          Str
            DoubleQuote "\""
            StrVal "m.xq"
            DoubleQuote "\""
          Semicolon ";"
    "#);
}

#[test]
fn variable_declaration_value_is_opaque() {
    let input = "declare variable $ex:x as xs:integer := (1, 2);";

    insta::assert_snapshot!(dump_cst(input), @r#"
    Root
      Prolog
        VarDecl
          Keyword "declare"
          Keyword "variable"
          Dollar "$"
          QName
            Name "ex"
            Colon ":"
            Name "x"
          TypeDecl
            Keyword "as"
            SequenceType
              AtomicType
                QName
                  Name "xs"
                  Colon ":"
                  Name "integer"
          VarValue
            ColonEquals ":="
            ParenOpen "("
            Number "1"
            Comma ","
            Number "2"
            ParenClose ")"
          Semicolon ";"
    "#);
}

#[test]
fn option_declaration() {
    let input = r#"declare option ex:opt "v";"#;

    insta::assert_snapshot!(dump_cst(input), @r#"
    Root
      Prolog
        OptionDecl
          Keyword "declare"
          Keyword "option"
          QName
            Name "ex"
            Colon ":"
            Name "opt"
          Str
            DoubleQuote "\""
            StrVal "v"
            DoubleQuote "\""
          Semicolon ";"
    "#);
}

#[test]
fn main_module_query_body() {
    let input = indoc! {r#"
    declare function local:f() external;
    local:f()
    "#};

    insta::assert_snapshot!(dump_cst(input), @r#"
    Root
      Prolog
        FunctionDecl
          Keyword "declare"
          Keyword "function"
          QName
            Name "local"
            Colon ":"
            Name "f"
          ParamList
            ParenOpen "("
            ParenClose ")"
          ExternalBody
            Keyword "external"
          Semicolon ";"
      QueryBody
        Name "local"
        Colon ":"
        Name "f"
        ParenOpen "("
        ParenClose ")"
    "#);
}

#[test]
fn every_setter_form_is_recognized() {
    let input = indoc! {r#"
    declare namespace a = "urn:a";
    declare boundary-space preserve;
    declare default function namespace "urn:f";
    declare default collation "urn:c";
    declare default order empty greatest;
    declare base-uri "urn:b";
    declare construction strip;
    declare ordering unordered;
    declare copy-namespaces no-preserve, inherit;
    import schema default element namespace "urn:s" at "s.xsd", "t.xsd";
    import schema namespace s = "urn:s2";
    import module "urn:m";
    declare variable $v external;
    declare option a:o "x";
    "#};

    let parse = parse(input);
    assert!(parse.diagnostics().is_empty(), "{}", parse.diagnostics().render(input));
    let kinds: Vec<SyntaxKind> = parse.root().prolog().unwrap().decls().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        [
            SyntaxKind::NamespaceDecl,
            SyntaxKind::BoundarySpaceDecl,
            SyntaxKind::DefaultNamespaceDecl,
            SyntaxKind::DefaultCollationDecl,
            SyntaxKind::EmptyOrderDecl,
            SyntaxKind::BaseUriDecl,
            SyntaxKind::ConstructionDecl,
            SyntaxKind::OrderingModeDecl,
            SyntaxKind::CopyNamespacesDecl,
            SyntaxKind::SchemaImport,
            SyntaxKind::SchemaImport,
            SyntaxKind::ModuleImport,
            SyntaxKind::VarDecl,
            SyntaxKind::OptionDecl,
        ]
    );
}

#[test]
fn empty_input_is_an_empty_main_module() {
    let parse = parse("");
    assert!(parse.diagnostics().is_empty());
    assert!(!parse.root().is_library());
    assert!(parse.root().query_body().is_none());
}

#[test]
fn encoding_without_version() {
    let input = r#"xquery encoding "latin1";"#;

    let parse = parse(input);
    assert!(parse.diagnostics().is_empty());
    let version = parse.root().version_decl().unwrap();
    assert!(version.version().is_none());
    assert_eq!(version.encoding().unwrap().unescaped(), "latin1");
}
