//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Input selection shared by every command.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(input_path_arg())
        .arg(query_text_arg())
        .arg(verbose_arg())
}

/// Type table and rendering options. `check` accepts them too, so it checks
/// against the same table `gen` would use.
fn with_generation_args(cmd: Command) -> Command {
    cmd.arg(type_map_arg())
        .arg(extended_arg())
        .arg(brackets_arg())
        .arg(placeholder_arg())
        .arg(default_object_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("xqstub")
        .about("Typed function stubs from XQuery library modules")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(gen_command())
        .subcommand(check_command())
        .subcommand(ast_command())
}

/// Render stubs for every function of a module.
pub fn gen_command() -> Command {
    let cmd = Command::new("gen")
        .about("Generate stubs from an XQuery module")
        .override_usage(
            "\
  xqstub gen <FILE>
  xqstub gen -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  xqstub gen lib.xqm                        # stubs to stdout
  xqstub gen lib.xqm -o Lib.scala           # stubs to file
  xqstub gen lib.xqm --brackets square      # Option[String] instead of Option<String>
  xqstub gen lib.xqm --type-map types.json  # extra atomic types
  cat lib.xqm | xqstub gen -                # read stdin"#,
        )
        .arg(output_file_arg())
        .arg(strict_arg())
        .arg(color_arg());

    with_generation_args(with_input_args(cmd))
}

/// Validate a module without writing stubs.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate an XQuery module")
        .override_usage(
            "\
  xqstub check <FILE>
  xqstub check -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  xqstub check lib.xqm                # syntax and type checks
  xqstub check lib.xqm --syntax-only  # syntax only
  xqstub check -q 'declare function local:f() external;'"#,
        )
        .arg(syntax_only_arg())
        .arg(strict_arg())
        .arg(color_arg());

    with_generation_args(with_input_args(cmd))
}

/// Show the parsed module.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the declarations of an XQuery module")
        .override_usage(
            "\
  xqstub ast <FILE>
  xqstub ast <FILE> --raw
  xqstub ast <FILE> --json",
        )
        .after_help(
            r#"EXAMPLES:
  xqstub ast lib.xqm                  # declaration outline
  xqstub ast lib.xqm --raw --trivia   # full CST including whitespace
  xqstub ast lib.xqm --spans          # with byte ranges
  xqstub ast lib.xqm --json           # module model as JSON"#,
        )
        .arg(raw_arg())
        .arg(trivia_arg())
        .arg(spans_arg())
        .arg(json_arg())
        .arg(color_arg());

    with_input_args(cmd)
}
