use indoc::indoc;

use super::{Brackets, Config, TypeTable, emit, emit_with_config};
use crate::Error;
use crate::model::{Module, Occurrence};

fn stubs(source: &str) -> String {
    emit(&Module::parse(source).unwrap()).unwrap()
}

fn stub_error(source: &str) -> Error {
    emit(&Module::parse(source).unwrap()).unwrap_err()
}

#[test]
fn single_function() {
    let input = r#"declare function local:square($x as xs:string) as xs:string { "body" };"#;

    insta::assert_snapshot!(stubs(input), @r"
    object Local {
      def square(x: String): String = ???
    }
    ");
}

#[test]
fn containers_in_first_seen_order() {
    let input = indoc! {r#"
    declare function local:a() as xs:string external;
    declare function util:is-empty($s as xs:string?, $all as xs:boolean) as xs:boolean external;
    declare function local:b($xs as xs:string*) as xs:string? external;
    "#};

    insta::assert_snapshot!(stubs(input), @r"
    object Local {
      def a(): String = ???
      def b(xs: Option<Array<String>>): Option<String> = ???
    }

    object Util {
      def isEmpty(s: Option<String>, all: Boolean): Boolean = ???
    }
    ");
}

#[test]
fn output_ends_with_single_newline() {
    let out = stubs("declare function a:f() as xs:string external;");
    assert!(out.ends_with("}\n"));
    assert!(!out.ends_with("\n\n"));
}

#[test]
fn empty_module_renders_nothing() {
    assert_eq!(stubs("declare namespace a = \"urn:a\";"), "");
}

#[test]
fn unprefixed_functions_use_default_object() {
    let input = "declare function get-all() as xs:string* external;";

    insta::assert_snapshot!(stubs(input), @r"
    object Main {
      def getAll(): Option<Array<String>> = ???
    }
    ");

    let config = Config::new().default_object("Toplevel");
    let out = emit_with_config(&Module::parse(input).unwrap(), config).unwrap();
    assert!(out.starts_with("object Toplevel {"));
}

#[test]
fn square_brackets_and_custom_placeholder() {
    let input = "declare function local:f($x as xs:string?) as xs:boolean* external;";
    let config = Config::new()
        .brackets(Brackets::Square)
        .placeholder("{ \"hello world\" }")
        .indent("    ");

    let out = emit_with_config(&Module::parse(input).unwrap(), config).unwrap();
    insta::assert_snapshot!(out, @r#"
    object Local {
        def f(x: Option[String]): Option[Array[Boolean]] = { "hello world" }
    }
    "#);
}

#[test]
fn custom_type_table() {
    let input = "declare function local:f($n as xs:integer) as xs:string external;";

    assert!(matches!(stub_error(input), Error::UnsupportedType { .. }));

    let config = Config::new().type_table(TypeTable::default().with("xs:integer", "Int"));
    let out = emit_with_config(&Module::parse(input).unwrap(), config).unwrap();
    assert!(out.contains("def f(n: Int): String = ???"));
}

#[test]
fn unknown_atomic_type() {
    let err = stub_error("declare function local:f() as xs:date external;");
    insta::assert_snapshot!(err.to_string(), @"unsupported type `xs:date` in function `local:f`");
}

#[test]
fn kind_test_is_unsupported() {
    let err = stub_error("declare function local:f() as node() external;");
    let Error::UnsupportedType { function, type_name } = err else {
        panic!("expected unsupported type");
    };
    assert_eq!(function, "local:f");
    assert_eq!(type_name, "node()");
}

#[test]
fn item_type_is_checked_before_occurrence() {
    let err = stub_error("declare function local:f() as element(a)+ external;");
    insta::assert_snapshot!(err.to_string(), @"unsupported type `element(a)` in function `local:f`");
}

#[test]
fn one_or_more_is_unsupported() {
    let err = stub_error("declare function local:f() as xs:string+ external;");
    let Error::UnsupportedOccurrence { occurrence, .. } = &err else {
        panic!("expected unsupported occurrence");
    };
    assert_eq!(*occurrence, Occurrence::OneOrMore);
    insta::assert_snapshot!(err.to_string(), @"unsupported occurrence `+` in function `local:f`");
}

#[test]
fn missing_param_type() {
    let err = stub_error("declare function local:f($x) as xs:string external;");
    insta::assert_snapshot!(err.to_string(), @"parameter `$x` of function `local:f` has no type");
}

#[test]
fn missing_return_type() {
    let err = stub_error("declare function local:f($x as xs:string) external;");
    let Error::MissingType { param, .. } = &err else {
        panic!("expected missing type");
    };
    assert_eq!(*param, None);
    insta::assert_snapshot!(err.to_string(), @"function `local:f` has no return type");
}

#[test]
fn params_are_checked_before_return_type() {
    let err = stub_error("declare function local:f($x as node()) external;");
    assert!(matches!(err, Error::UnsupportedType { .. }));
}

#[test]
fn duplicate_parameter() {
    let err = stub_error("declare function local:f($x as xs:string, $x as xs:string) as xs:string external;");
    insta::assert_snapshot!(err.to_string(), @"duplicate parameter `$x` in function `local:f`");

    let err = stub_error("declare function local:f($a:x as xs:string, $b:x as xs:string) as xs:string external;");
    insta::assert_snapshot!(err.to_string(), @"duplicate parameter `$x` in function `local:f`");
}

#[test]
fn distinct_local_parts_are_not_duplicates() {
    let module = Module::parse("declare function local:f($a:x as xs:string, $a:y as xs:string) as xs:string external;").unwrap();
    let out = emit_with_config(&module, Config::default()).unwrap();
    assert!(out.contains("def f(x: String, y: String): String = ???"), "{}", out);
}

#[test]
fn unprefixed_group_clashing_with_prefix() {
    let input = indoc! {r#"
    declare function h() as xs:string external;
    declare function main:i() as xs:string external;
    1
    "#};

    let err = stub_error(input);
    insta::assert_snapshot!(err.to_string(), @"container `Main` would be emitted for more than one prefix");
}

#[test]
fn prefixes_differing_in_case_clash() {
    let err = stub_error(indoc! {r#"
    declare function my:a() as xs:string external;
    declare function My:b() as xs:string external;
    "#});
    assert!(matches!(err, Error::DuplicateContainer { ref name } if name == "My"), "{:?}", err);
}

#[test]
fn custom_default_object_avoids_clash() {
    let input = "declare function h() as xs:string external; declare function main:i() as xs:string external; 1";
    let module = Module::parse(input).unwrap();
    let out = emit_with_config(&module, Config::new().default_object("Query")).unwrap();
    insta::assert_snapshot!(out, @r"
    object Query {
      def h(): String = ???
    }

    object Main {
      def i(): String = ???
    }
    ");
}

#[test]
fn first_failing_function_wins() {
    let input = indoc! {r#"
    declare function local:ok() as xs:string external;
    declare function local:bad() as xs:date external;
    declare function local:worse($x) external;
    "#};

    let err = stub_error(input);
    insta::assert_snapshot!(err.to_string(), @"unsupported type `xs:date` in function `local:bad`");
}

#[test]
fn colored_output() {
    let config = Config::new().colored(true);
    let module = Module::parse("declare function a:f() as xs:string external;").unwrap();
    let out = emit_with_config(&module, config).unwrap();
    assert!(out.contains("\x1b[34mA\x1b[0m"));
    assert!(out.contains("\x1b[32mString\x1b[0m"));
}
