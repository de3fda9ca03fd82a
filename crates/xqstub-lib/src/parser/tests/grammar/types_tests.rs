use crate::parser::tests::dump_cst;
use crate::parser::{ItemType, parse};

/// Compact text of the return type of the only function in `source`.
fn return_type_text(source: &str) -> String {
    let parse = parse(source);
    assert!(!parse.diagnostics().has_errors());
    let function = parse.root().prolog().unwrap().functions().next().unwrap();
    function
        .return_type()
        .and_then(|t| t.sequence_type())
        .map(|t| t.compact_text())
        .unwrap()
}

#[test]
fn kind_test_with_arguments_and_occurrence() {
    let input = "declare function f() as element(foo, xs:string)? external;";

    insta::assert_snapshot!(dump_cst(input), @r#"
    Root
      Prolog
        FunctionDecl
          Keyword "declare"
          Keyword "function"
          QName
            Name "f"
          ParamList
            ParenOpen "("
            ParenClose ")"
          TypeDecl
            Keyword "as"
            SequenceType
              KindTest
                Keyword "element"
                ParenOpen "("
                Name "foo"
                Comma ","
                Name "xs"
                Colon ":"
                Name "string"
                ParenClose ")"
              Occurrence
                Question "?"
          ExternalBody
            Keyword "external"
          Semicolon ";"
    "#);
}

#[test]
fn empty_sequence_type() {
    let input = "declare function f() as empty-sequence() external;";

    insta::assert_snapshot!(dump_cst(input), @r#"
    Root
      Prolog
        FunctionDecl
          Keyword "declare"
          Keyword "function"
          QName
            Name "f"
          ParamList
            ParenOpen "("
            ParenClose ")"
          TypeDecl
            Keyword "as"
            SequenceType
              EmptySequence
                Keyword "empty-sequence"
                ParenOpen "("
                ParenClose ")"
          ExternalBody
            Keyword "external"
          Semicolon ";"
    "#);
}

#[test]
fn occurrence_indicators() {
    assert_eq!(return_type_text("declare function f() as xs:string external;"), "xs:string");
    assert_eq!(return_type_text("declare function f() as xs:string? external;"), "xs:string?");
    assert_eq!(return_type_text("declare function f() as xs:string * external;"), "xs:string*");
    assert_eq!(return_type_text("declare function f() as item()+ external;"), "item()+");
}

#[test]
fn item_type_variants() {
    let cases = [
        ("xs:boolean", "atomic"),
        ("node()", "kind test"),
        ("document-node(element(a))", "kind test"),
        ("processing-instruction('pi')", "kind test"),
        ("item()", "item"),
        ("empty-sequence()", "empty"),
        ("element", "atomic"),
    ];

    for (ty, expected) in cases {
        let source = format!("declare function f() as {} external;", ty);
        let parse = parse(&source);
        assert!(!parse.diagnostics().has_errors(), "{}", ty);
        let function = parse.root().prolog().unwrap().functions().next().unwrap();
        let item = function
            .return_type()
            .and_then(|t| t.sequence_type())
            .and_then(|t| t.item_type())
            .unwrap();
        let actual = match item {
            ItemType::Atomic(_) => "atomic",
            ItemType::KindTest(_) => "kind test",
            ItemType::AnyItem(_) => "item",
            ItemType::EmptySequence(_) => "empty",
        };
        assert_eq!(actual, expected, "{}", ty);
    }
}

#[test]
fn nested_kind_test_text_is_kept() {
    assert_eq!(
        return_type_text("declare function f() as document-node( element(a) ) external;"),
        "document-node(element(a))"
    );
}
