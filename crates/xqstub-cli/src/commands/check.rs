use std::path::PathBuf;

use xqstub_lib::{Emitter, Module};

use super::generate::GenerationOptions;
use super::run_common;

pub struct CheckArgs {
    pub input_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub options: GenerationOptions,
    pub syntax_only: bool,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let input = run_common::load_or_exit(args.input_path.as_deref(), args.query_text.as_deref());
    let parse = run_common::parse_or_exit(&input, args.color, args.strict);

    if args.syntax_only {
        return;
    }

    let config = args
        .options
        .to_config(false)
        .unwrap_or_else(|msg| run_common::fail(msg));
    let module = Module::from_parse(&parse);
    if let Err(e) = Emitter::new(&module, config).emit() {
        run_common::fail(e);
    }

    // Silent on success (like cargo check)
}
