use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A value that knows its own table layout.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// Render a list of rows in the requested format.
pub fn render_rows<T: Serialize + Tabular>(
    rows: &[T],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Raw => to_ndjson(rows),
        OutputFormat::Table => {
            if rows.is_empty() {
                return Ok(String::from("(no rows)"));
            }
            let cells = rows.iter().map(Tabular::cells).collect::<Vec<_>>();
            Ok(table::render_table(T::HEADERS, &cells, table_options()))
        }
    }
}

/// Render a single record; tables show one `field  value` line per field.
pub fn render_record<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let Value::Object(map) = serde_json::to_value(value)? else {
                anyhow::bail!("table output needs a record with named fields");
            };
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["field", "value"], &rows, table_options()))
        }
    }
}

/// Print rows in the requested format.
pub fn output_rows<T: Serialize + Tabular>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_rows(rows, format)?);
    Ok(())
}

/// Print a single record in the requested format.
pub fn output_record<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_record(value, format)?);
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn to_ndjson<T: Serialize>(rows: &[T]) -> anyhow::Result<String> {
    let lines = rows
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
