use indoc::indoc;

use crate::parser::parse;
use crate::parser::tests::{dump_recovered_cst, expect_invalid};

#[test]
fn missing_function_name() {
    let input = "declare function (";

    insta::assert_snapshot!(expect_invalid(input), @"error at 17..18: expected function name");
    insta::assert_snapshot!(dump_recovered_cst(input), @r#"
    Root
      Prolog
        FunctionDecl
          Keyword "declare"
          Keyword "function"
          Error
            ParenOpen "("
    "#);
}

#[test]
fn missing_function_name_renders_source_line() {
    let input = "declare function (";

    let rendered = parse(input).diagnostics().render_filtered(input);
    assert!(rendered.starts_with("error: expected function name"));
    assert!(rendered.contains("1 | declare function ("));
}

#[test]
fn missing_semicolon_between_declarations() {
    let input = indoc! {r#"
    declare namespace a = "urn:a"
    declare function a:f() external;
    "#};

    insta::assert_snapshot!(expect_invalid(input), @"error at 30..37: expected `;` after declaration");
    let parse = parse(input);
    assert_eq!(parse.root().prolog().unwrap().functions().count(), 1);
}

#[test]
fn unknown_declaration_is_skipped() {
    let input = indoc! {r#"
    declare funtion local:f() { 1 };
    declare function local:g() external;
    "#};

    insta::assert_snapshot!(expect_invalid(input), @"error at 8..15: unknown declaration `declare funtion`");
    let parse = parse(input);
    let names: Vec<String> = parse
        .root()
        .prolog()
        .unwrap()
        .functions()
        .map(|f| f.name().unwrap().text())
        .collect();
    assert_eq!(names, ["local:g"]);
}

#[test]
fn setter_after_function_is_misplaced() {
    let input = indoc! {r#"
    declare function local:f() external;
    declare namespace a = "urn:a";
    "#};

    insta::assert_snapshot!(
        expect_invalid(input),
        @"error at 37..67: namespace, import and setter declarations must precede function, variable and option declarations (related: first function, variable or option declaration at 0..36)"
    );
}

#[test]
fn unknown_kind_test() {
    let input = "declare function local:f() as foo() external;";

    insta::assert_snapshot!(expect_invalid(input), @"error at 30..33: `foo()` is not a kind test");
}

#[test]
fn missing_sequence_type() {
    let input = "declare function local:f($x as) external;";

    insta::assert_snapshot!(expect_invalid(input), @"error at 30..31: expected a sequence type");
}

#[test]
fn missing_function_body() {
    let input = "declare function local:f();";

    insta::assert_snapshot!(expect_invalid(input), @"error at 26..27: expected function body or `external`");
}

#[test]
fn library_module_with_query_body() {
    let input = indoc! {r#"
    module namespace a = "urn:a";
    a:f()
    "#};

    insta::assert_snapshot!(expect_invalid(input), @"error at 30..31: library module cannot have a query body");
}

#[test]
fn unmatched_brace_in_query_body() {
    let input = "declare variable $x := 1;\n}";

    insta::assert_snapshot!(expect_invalid(input), @"error at 26..27: unmatched closing delimiter: `}`");
}

#[test]
fn empty_variable_value() {
    let input = "declare variable $x := ;";

    insta::assert_snapshot!(expect_invalid(input), @"error at 23..24: expected an expression after `:=`");
}

#[test]
fn missing_variable_value() {
    let input = "declare variable $x;";

    insta::assert_snapshot!(expect_invalid(input), @"error at 19..20: expected `:=` or `external`");
}

#[test]
fn prefixed_module_prefix() {
    let input = r#"module namespace a:b = "urn:a";"#;

    insta::assert_snapshot!(expect_invalid(input), @"error at 17..18: expected unprefixed module prefix");
}

#[test]
fn errors_after_recovery_are_still_reported() {
    let input = indoc! {r#"
    declare function (;
    declare function local:g() as;
    "#};

    let parse = parse(input);
    assert_eq!(parse.diagnostics().error_count(), 2);
}
