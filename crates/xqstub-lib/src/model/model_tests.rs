use indoc::indoc;

use super::*;

#[test]
fn lowers_library_module() {
    let input = indoc! {r#"
    xquery version "1.0";
    module namespace my = "urn:my";
    declare function my:get-name($node as element(), $default as xs:string?) as xs:string external;
    "#};

    let module = Module::parse(input).unwrap();
    assert!(module.is_library());
    assert_eq!(module.namespace(), Some(("my", "urn:my")));
    assert_eq!(
        module.version(),
        Some(&VersionDecl {
            version: Some("1.0".to_string()),
            encoding: None,
        })
    );

    let [function] = module.functions() else {
        panic!("expected one function");
    };
    assert_eq!(function.name, QualifiedName::prefixed("my", "get-name"));
    assert_eq!(function.body, FunctionBody::External);
    assert_eq!(
        function.params[0].ty,
        Some(SequenceType {
            item: ItemType::KindTest {
                test: KindTest::Element,
                text: "element()".to_string(),
            },
            occurrence: Occurrence::ExactlyOne,
        })
    );
    assert_eq!(
        function.params[1].ty,
        Some(SequenceType::atomic(
            QualifiedName::prefixed("xs", "string"),
            Occurrence::Optional
        ))
    );
    assert_eq!(
        function.return_type.as_ref().map(|t| t.to_string()),
        Some("xs:string".to_string())
    );
}

#[test]
fn function_span_covers_declaration() {
    let input = "declare namespace a = \"urn:a\";\ndeclare function a:f() external;";

    let module = Module::parse(input).unwrap();
    let span = module.functions()[0].span.clone();
    assert_eq!(&input[span], "declare function a:f() external;");
}

#[test]
fn other_declarations_are_dropped() {
    let input = indoc! {r#"
    declare variable $x := 1;
    declare option a:o "v";
    declare function f($p) { $p };
    f(1)
    "#};

    let module = Module::parse(input).unwrap();
    assert!(!module.is_library());
    assert_eq!(module.namespace(), None);
    assert_eq!(module.functions().len(), 1);
    assert_eq!(module.functions()[0].params[0].ty, None);
    assert_eq!(module.functions()[0].return_type, None);
}

#[test]
fn syntax_error_reports_first_position() {
    let input = "declare namespace a = \"urn:a\";\n  declare function (";

    let err = Module::parse(input).unwrap_err();
    let Error::Syntax {
        position,
        expected,
        diagnostics,
    } = &err
    else {
        panic!("expected syntax error, got {err:?}");
    };
    assert_eq!(*position, Position { offset: 50, line: 2, column: 20 });
    assert_eq!(expected, "expected function name");
    assert_eq!(diagnostics.error_count(), 1);
    insta::assert_snapshot!(err.to_string(), @"syntax error at 2:20: expected function name");
}

#[test]
fn warnings_do_not_fail_parsing() {
    let input = "module namespace a = \"urn:a\";\ndeclare function b:f() external;";

    let (module, diagnostics) = Module::parse_with_diagnostics(input).unwrap();
    assert_eq!(module.functions().len(), 1);
    assert_eq!(diagnostics.warning_count(), 1);
}

#[test]
fn serializes_to_json() {
    let module = Module::parse("declare function local:f($x as xs:string*) as item() external;").unwrap();

    let json = serde_json::to_string_pretty(&module).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "version": null,
      "kind": {
        "kind": "main"
      },
      "functions": [
        {
          "name": {
            "prefix": "local",
            "local_part": "f"
          },
          "params": [
            {
              "name": {
                "prefix": null,
                "local_part": "x"
              },
              "type": {
                "item": {
                  "kind": "atomic",
                  "name": {
                    "prefix": "xs",
                    "local_part": "string"
                  }
                },
                "occurrence": "zero_or_more"
              }
            }
          ],
          "return_type": {
            "item": {
              "kind": "any_item"
            },
            "occurrence": "exactly_one"
          },
          "body": "external",
          "span": {
            "start": 0,
            "end": 62
          }
        }
      ]
    }
    "#);
}

#[test]
fn qualified_name_display() {
    assert_eq!(QualifiedName::prefixed("xs", "string").to_string(), "xs:string");
    assert_eq!(QualifiedName::new("f").to_string(), "f");
    assert_eq!(QualifiedName::new("f").prefix_str(), "");
}

#[test]
fn occurrence_from_indicator() {
    assert_eq!(Occurrence::from_indicator("?"), Some(Occurrence::Optional));
    assert_eq!(Occurrence::from_indicator("*"), Some(Occurrence::ZeroOrMore));
    assert_eq!(Occurrence::from_indicator("+"), Some(Occurrence::OneOrMore));
    assert_eq!(Occurrence::from_indicator("!"), None);
    assert_eq!(Occurrence::default().indicator(), "");
}
