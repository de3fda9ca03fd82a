use crate::parser::tests::expect_invalid;

#[test]
fn unclosed_param_list() {
    let input = "declare function local:f($x as xs:string";

    insta::assert_snapshot!(
        expect_invalid(input),
        @"error at 24..40: missing closing `)` for parameter list (related: parameter list opened here at 24..25)"
    );
}

#[test]
fn unclosed_function_body() {
    let input = "declare function local:f() external;\ndeclare function local:g() { {1}";

    insta::assert_snapshot!(
        expect_invalid(input),
        @"error at 64..69: missing closing `}` (related: function body opened here at 64..65)"
    );
}

#[test]
fn unclosed_kind_test() {
    let input = "declare function local:f() as element(a";

    insta::assert_snapshot!(
        expect_invalid(input),
        @"error at 37..39: missing closing `)` (related: kind test opened here at 37..38)"
    );
}

#[test]
fn unclosed_query_body_brace() {
    let input = "local:f() { 1";

    insta::assert_snapshot!(
        expect_invalid(input),
        @"error at 10..13: missing closing `}` (related: brace opened here at 10..11)"
    );
}

#[test]
fn unclosed_variable_value() {
    let input = "declare variable $x := (1, 2";

    insta::assert_snapshot!(
        expect_invalid(input),
        @"error at 23..28: missing closing `)` (related: opened here at 23..24)"
    );
}
