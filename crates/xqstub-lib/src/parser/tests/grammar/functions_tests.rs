use indoc::indoc;

use crate::parser::parse;
use crate::parser::tests::dump_cst;

#[test]
fn function_with_typed_params() {
    let input = indoc! {r#"
    declare function local:square($x as xs:string) as xs:string { "body" };
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
            Name "square"
          ParamList
            ParenOpen "("
            Param
              Dollar "$"
              QName
                Name "x"
              TypeDecl
                Keyword "as"
                SequenceType
                  AtomicType
                    QName
                      Name "xs"
                      Colon ":"
                      Name "string"
            ParenClose ")"
          TypeDecl
            Keyword "as"
            SequenceType
              AtomicType
                QName
                  Name "xs"
                  Colon ":"
                  Name "string"
          EnclosedBody
            BraceOpen "{"
            DoubleQuote "\""
            StrVal "body"
            DoubleQuote "\""
            BraceClose "}"
          Semicolon ";"
    "#);
}

#[test]
fn external_function_without_params() {
    let input = "declare function f() external;";

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
          ExternalBody
            Keyword "external"
          Semicolon ";"
    "#);
}

#[test]
fn untyped_params() {
    let input = "declare function local:pair($a, $b) { ($a, $b) };";

    insta::assert_snapshot!(dump_cst(input), @r#"
    Root
      Prolog
        FunctionDecl
          Keyword "declare"
          Keyword "function"
          QName
            Name "local"
            Colon ":"
            Name "pair"
          ParamList
            ParenOpen "("
            Param
              Dollar "$"
              QName
                Name "a"
            Comma ","
            Param
              Dollar "$"
              QName
                Name "b"
            ParenClose ")"
          EnclosedBody
            BraceOpen "{"
            ParenOpen "("
            Dollar "$"
            Name "a"
            Comma ","
            Dollar "$"
            Name "b"
            ParenClose ")"
            BraceClose "}"
          Semicolon ";"
    "#);
}

#[test]
fn body_braces_balance_and_ignore_strings() {
    let input = r#"declare function local:f() { if (1) then { "}" } else () };"#;

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
          EnclosedBody
            BraceOpen "{"
            Name "if"
            ParenOpen "("
            Number "1"
            ParenClose ")"
            Name "then"
            BraceOpen "{"
            DoubleQuote "\""
            StrVal "}"
            DoubleQuote "\""
            BraceClose "}"
            Name "else"
            ParenOpen "("
            ParenClose ")"
            BraceClose "}"
          Semicolon ";"
    "#);
}

#[test]
fn comments_inside_declaration_are_trivia() {
    let input = "declare (: a (: nested :) note :) function f() external;";

    let parse = parse(input);
    assert!(parse.diagnostics().is_empty());
    let function = parse.root().prolog().unwrap().functions().next().unwrap();
    assert_eq!(function.name().unwrap().text(), "f");
}

#[test]
fn functions_in_declaration_order() {
    let input = indoc! {r#"
    declare function local:a() external;
    declare function local:b() external;
    declare function other:c() external;
    "#};

    let parse = parse(input);
    assert!(parse.diagnostics().is_empty());
    let names: Vec<String> = parse
        .root()
        .prolog()
        .unwrap()
        .functions()
        .map(|f| f.name().unwrap().text())
        .collect();
    assert_eq!(names, ["local:a", "local:b", "other:c"]);
}

#[test]
fn library_function_outside_module_namespace_warns() {
    let input = indoc! {r#"
    module namespace a = "urn:a";
    declare function b:f() external;
    "#};

    let parse = parse(input);
    assert!(!parse.diagnostics().has_errors());
    assert_eq!(parse.diagnostics().warning_count(), 1);
    let warning = parse.diagnostics().iter().next().unwrap();
    insta::assert_snapshot!(warning.to_string(), @"warning at 47..48: function prefix `b` differs from the module prefix");
}

#[test]
fn unprefixed_library_function_warns() {
    let input = indoc! {r#"
    module namespace a = "urn:a";
    declare function f() external;
    "#};

    let parse = parse(input);
    assert!(!parse.diagnostics().has_errors());
    let warning = parse.diagnostics().iter().next().unwrap();
    insta::assert_snapshot!(warning.message(), @"function is not in the module's target namespace");
}

#[test]
fn library_function_in_module_namespace_is_clean() {
    let input = indoc! {r#"
    module namespace a = "urn:a";
    declare function a:f() external;
    "#};

    assert!(parse(input).diagnostics().is_empty());
}
