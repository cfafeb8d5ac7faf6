use std::io::{self, Write};

use finmetrics_core::Envelope;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_envelope(&mut writer, envelope, format, pretty)?;
    writer.flush()?;
    Ok(())
}

fn write_envelope<W: Write>(
    writer: &mut W,
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            writeln!(writer, "{payload}")?;
        }
        OutputFormat::Table => write_table(writer, envelope)?,
    }

    Ok(())
}

fn write_table<W: Write>(writer: &mut W, envelope: &Envelope<Value>) -> Result<(), CliError> {
    writeln!(writer, "request_id  : {}", envelope.meta.request_id)?;
    writeln!(writer, "schema      : {}", envelope.meta.schema_version)?;
    writeln!(writer, "generated_at: {}", envelope.meta.generated_at)?;

    if !envelope.meta.warnings.is_empty() {
        writeln!(writer, "warnings:")?;
        for warning in &envelope.meta.warnings {
            writeln!(writer, "  - {warning}")?;
        }
    }

    match &envelope.data {
        Value::Null => {}
        Value::Object(fields) => {
            writeln!(writer, "data:")?;
            let width = fields.keys().map(String::len).max().unwrap_or(0);
            for (key, value) in fields {
                writeln!(writer, "  {key:<width$} : {}", scalar(value))?;
            }
        }
        other => {
            writeln!(writer, "data:")?;
            for line in serde_json::to_string_pretty(other)?.lines() {
                writeln!(writer, "  {line}")?;
            }
        }
    }

    if !envelope.errors.is_empty() {
        writeln!(writer, "errors:")?;
        for error in &envelope.errors {
            writeln!(writer, "  - {}: {}", error.code, error.message)?;
        }
    }

    Ok(())
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
