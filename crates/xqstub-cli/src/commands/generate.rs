//! Generate stubs for a module.

use std::fs;
use std::path::PathBuf;

use xqstub_lib::{Brackets, Config, Emitter, Module, TypeTable};

use super::run_common;

/// Flags shared by `gen` and `check` that shape the generated stubs.
#[derive(Clone, Debug, Default)]
pub struct GenerationOptions {
    pub brackets: Brackets,
    pub placeholder: Option<String>,
    pub default_object: Option<String>,
    pub type_map: Option<PathBuf>,
    pub extended: bool,
}

impl GenerationOptions {
    /// Build the emitter configuration, reading the type map file if one was given.
    pub fn to_config(&self, color: bool) -> Result<Config, String> {
        let mut table = if self.extended {
            TypeTable::extended()
        } else {
            TypeTable::default()
        };

        if let Some(path) = &self.type_map {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
            let overrides = TypeTable::from_json(&json).map_err(|e| e.to_string())?;
            tracing::debug!(path = %path.display(), entries = overrides.len(), "loaded type map");
            table = table.merged(overrides);
        }

        let mut config = Config::new()
            .type_table(table)
            .brackets(self.brackets)
            .colored(color);
        if let Some(placeholder) = &self.placeholder {
            config = config.placeholder(placeholder.as_str());
        }
        if let Some(name) = &self.default_object {
            config = config.default_object(name.as_str());
        }
        Ok(config)
    }
}

pub struct GenerateArgs {
    pub input_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub options: GenerationOptions,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    let input = run_common::load_or_exit(args.input_path.as_deref(), args.query_text.as_deref());
    let config = args
        .options
        .to_config(args.color)
        .unwrap_or_else(|msg| run_common::fail(msg));

    let parse = run_common::parse_or_exit(&input, args.color, args.strict);
    let module = Module::from_parse(&parse);
    tracing::info!(
        functions = module.functions().len(),
        library = module.is_library(),
        "generating stubs"
    );

    let output = Emitter::new(&module, config)
        .emit()
        .unwrap_or_else(|e| run_common::fail(e));

    if let Err(msg) = run_common::write_output(args.output.as_deref(), &output) {
        run_common::fail(msg);
    }
}
