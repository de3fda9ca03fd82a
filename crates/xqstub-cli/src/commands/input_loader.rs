use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// A loaded module source and the name its diagnostics are reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub name: String,
    pub text: String,
}

pub fn load_input(input_path: Option<&Path>, query_text: Option<&str>) -> Result<Input, String> {
    if let Some(text) = query_text {
        return Ok(Input {
            name: "<query>".to_string(),
            text: text.to_owned(),
        });
    }

    if let Some(path) = input_path {
        if path.as_os_str() == "-" {
            return load_stdin();
        }
        return load_file(path);
    }

    Err("input is required: use positional argument, `-` for stdin, or -q/--query".to_string())
}

fn load_stdin() -> Result<Input, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(Input {
        name: "<stdin>".to_string(),
        text: buf,
    })
}

fn load_file(path: &Path) -> Result<Input, String> {
    if path.is_dir() {
        return Err(format!("'{}' is a directory", path.display()));
    }
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    Ok(Input {
        name: path.to_string_lossy().into_owned(),
        text,
    })
}
