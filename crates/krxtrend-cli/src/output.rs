use std::io::Write;

use crate::error::CliError;

/// Write the rendered result to stdout.
pub fn render(text: &str) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{text}")?;
    Ok(())
}

/// Serialize a value as JSON, optionally pretty-printed.
pub fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
