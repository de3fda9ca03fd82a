mod grammar;
mod recovery;

use crate::parser::parse;
use crate::printer::ModulePrinter;

/// CST of a module that must parse without errors.
fn dump_cst(source: &str) -> String {
    let parse = parse(source);
    assert!(
        !parse.diagnostics().has_errors(),
        "expected valid module, got:\n{}",
        parse.diagnostics().render(source)
    );
    ModulePrinter::new(&parse).raw(true).dump()
}

/// CST of a module with errors, including the recovery nodes.
fn dump_recovered_cst(source: &str) -> String {
    let parse = parse(source);
    assert!(parse.diagnostics().has_errors());
    ModulePrinter::new(&parse).raw(true).dump()
}

/// Diagnostics of a module that must fail, cascades suppressed, one per line.
fn expect_invalid(source: &str) -> String {
    let parse = parse(source);
    assert!(
        parse.diagnostics().has_errors(),
        "expected errors, module parsed cleanly"
    );
    parse
        .diagnostics()
        .filtered()
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
