//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the fields each command uses
//! - `Into<*Args>` impls bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use xqstub_lib::Brackets;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::generate::{GenerateArgs, GenerationOptions};

pub struct GenerateParams {
    pub input_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub options: GenerationOptions,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            options: parse_generation_options(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        // Never write escape codes into a file
        let color = p.output.is_none() && p.color.should_colorize();
        Self {
            input_path: p.input_path,
            query_text: p.query_text,
            options: p.options,
            output: p.output,
            strict: p.strict,
            color,
        }
    }
}

pub struct CheckParams {
    pub input_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub options: GenerationOptions,
    pub syntax_only: bool,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            options: parse_generation_options(m),
            syntax_only: m.get_flag("syntax_only"),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input_path: p.input_path,
            query_text: p.query_text,
            options: p.options,
            syntax_only: p.syntax_only,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub input_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub raw: bool,
    pub trivia: bool,
    pub spans: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            raw: m.get_flag("raw"),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input_path: p.input_path,
            query_text: p.query_text,
            raw: p.raw,
            trivia: p.trivia,
            spans: p.spans,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_generation_options(m: &ArgMatches) -> GenerationOptions {
    let brackets = match m.get_one::<String>("brackets").map(|s| s.as_str()) {
        Some("square") => Brackets::Square,
        _ => Brackets::Angle,
    };
    GenerationOptions {
        brackets,
        placeholder: m.get_one::<String>("placeholder").cloned(),
        default_object: m.get_one::<String>("default_object").cloned(),
        type_map: m.get_one::<PathBuf>("type_map").cloned(),
        extended: m.get_flag("extended"),
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
