//! Show the syntax tree or lowered model of a module.

use std::path::PathBuf;

use xqstub_lib::{Module, ModulePrinter};

use super::run_common;

pub struct AstArgs {
    pub input_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub raw: bool,
    pub trivia: bool,
    pub spans: bool,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let input = run_common::load_or_exit(args.input_path.as_deref(), args.query_text.as_deref());

    // The tree is always complete, so show it even when there are errors
    let parse = run_common::parse_reporting(&input, args.color);

    if args.json {
        if parse.diagnostics().has_errors() {
            std::process::exit(1);
        }
        let module = Module::from_parse(&parse);
        let json = serde_json::to_string_pretty(&module).unwrap_or_else(|e| run_common::fail(e));
        println!("{}", json);
        return;
    }

    let output = ModulePrinter::new(&parse)
        .raw(args.raw)
        .with_trivia(args.trivia)
        .with_spans(args.spans)
        .dump();
    print!("{}", output);
}
