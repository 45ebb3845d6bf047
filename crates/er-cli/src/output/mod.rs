use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

pub use table::Table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Like [`output`], but table mode prints the hand-built `tables` instead of
/// the generic key/value view.
pub fn output_with_tables<T, F>(value: &T, format: OutputFormat, tables: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce(&T) -> Vec<(String, Table)>,
{
    if format != OutputFormat::Table {
        return output(value, format);
    }

    let options = table_options();
    let sections = tables(value)
        .into_iter()
        .map(|(title, table)| {
            if title.is_empty() {
                table.render(options)
            } else {
                format!("{title}\n\n{}", table.render(options))
            }
        })
        .collect::<Vec<_>>();
    println!("{}", sections.join("\n\n"));
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();
    let rendered = match serde_json::to_value(value)? {
        Value::Array(items) => array_table(&items).map_or_else(
            || String::from("(no rows)"),
            |table| table.render(options),
        ),
        Value::Object(map) => {
            let mut table = Table::new(["key", "value"]);
            for (key, value) in map {
                table.row([key, value_to_cell(&value)]);
            }
            table.render(options)
        }
        scalar => {
            let mut table = Table::new(["value"]);
            table.row([value_to_cell(&scalar)]);
            table.render(options)
        }
    };
    Ok(rendered)
}

/// Columns are the union of object keys in first-seen order.
fn array_table(items: &[Value]) -> Option<Table> {
    if items.is_empty() {
        return None;
    }

    if !items.iter().all(Value::is_object) {
        let mut table = Table::new(["value"]);
        for item in items {
            table.row([value_to_cell(item)]);
        }
        return Some(table);
    }

    let mut headers = Vec::<String>::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
        if !headers.contains(key) {
            headers.push(key.clone());
        }
    }

    let mut table = Table::new(headers.iter().map(String::as_str));
    for map in items.iter().filter_map(Value::as_object) {
        table.row(
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell)),
        );
    }
    Some(table)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("—"),
        Value::Bool(v) => String::from(if *v { "yes" } else { "no" }),
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
