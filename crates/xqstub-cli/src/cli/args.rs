//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// XQuery module file, `-` for stdin (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("XQuery module file (- for stdin)")
}

/// Inline module text (-q/--query).
pub fn query_text_arg() -> Arg {
    Arg::new("query_text")
        .short('q')
        .long("query")
        .value_name("TEXT")
        .conflicts_with("input_path")
        .help("Inline module text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log progress to stderr (-v debug, -vv trace)")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Generic bracket style (--brackets).
pub fn brackets_arg() -> Arg {
    Arg::new("brackets")
        .long("brackets")
        .value_name("STYLE")
        .default_value("angle")
        .value_parser(["angle", "square"])
        .help("Generic brackets: angle (Option<T>) or square (Option[T])")
}

/// Stub body text (--placeholder).
pub fn placeholder_arg() -> Arg {
    Arg::new("placeholder")
        .long("placeholder")
        .value_name("TEXT")
        .help("Body of every generated stub (default: ???)")
}

/// Container for unprefixed functions (--default-object).
pub fn default_object_arg() -> Arg {
    Arg::new("default_object")
        .long("default-object")
        .value_name("NAME")
        .help("Container name for functions without a prefix (default: Main)")
}

/// JSON type map merged over the base table (--type-map).
pub fn type_map_arg() -> Arg {
    Arg::new("type_map")
        .long("type-map")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON object mapping atomic types to target types")
}

/// Use the extended base table (--extended).
pub fn extended_arg() -> Arg {
    Arg::new("extended")
        .long("extended")
        .action(ArgAction::SetTrue)
        .help("Start from the extended type table (numeric and date types)")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Skip generation checks (--syntax-only).
pub fn syntax_only_arg() -> Arg {
    Arg::new("syntax_only")
        .long("syntax-only")
        .action(ArgAction::SetTrue)
        .help("Only check syntax, skip type checks")
}

/// Show the concrete syntax tree (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .conflicts_with("json")
        .help("Show the concrete syntax tree")
}

/// Include whitespace and comments in the CST (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .requires("raw")
        .help("Include whitespace and comments (with --raw)")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Dump the module model as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the module model as JSON")
}
