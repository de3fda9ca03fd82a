//! Shared logic for the gen, check and ast commands.

use std::fs;
use std::path::Path;

use xqstub_lib::parser::{self, Parse};

use super::input_loader::{Input, load_input};

/// Print `error: {msg}` and exit with status 1.
pub fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    std::process::exit(1)
}

/// Load the module source, exiting on I/O failure.
pub fn load_or_exit(input_path: Option<&Path>, query_text: Option<&str>) -> Input {
    load_input(input_path, query_text).unwrap_or_else(|msg| fail(msg))
}

/// Parse the input and print its diagnostics to stderr.
///
/// Exits when the module has errors, or warnings under `strict`.
pub fn parse_or_exit(input: &Input, color: bool, strict: bool) -> Parse {
    let parse = parse_reporting(input, color);
    let diagnostics = parse.diagnostics();
    if diagnostics.has_errors() || (strict && diagnostics.has_warnings()) {
        std::process::exit(1);
    }
    parse
}

/// Parse the input and print its diagnostics to stderr without exiting.
pub fn parse_reporting(input: &Input, color: bool) -> Parse {
    let parse = parser::parse(&input.text);
    let diagnostics = parse.diagnostics();
    if !diagnostics.is_empty() {
        eprint!(
            "{}",
            diagnostics
                .filtered_printer(&input.text)
                .path(&input.name)
                .colored(color)
                .render()
        );
    }
    parse
}

/// Write to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), String> {
    match path {
        Some(path) => fs::write(path, content)
            .map_err(|e| format!("failed to write '{}': {}", path.display(), e)),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
