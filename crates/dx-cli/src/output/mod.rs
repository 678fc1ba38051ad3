use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod dashboard;
pub mod table;

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

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, table_options()))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, table_options()))
        }
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, table_options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    headers.sort();
    if let Some(pos) = headers.iter().position(|h| h == "id") {
        let id = headers.remove(pos);
        headers.insert(0, id);
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => format!("{} item(s)", items.len()),
        Value::Object(map) => match map.get("nama").or_else(|| map.get("nama_lengkap")) {
            Some(Value::String(name)) => name.clone(),
            _ => serde_json::to_string(value).unwrap_or_else(|_| String::from("<invalid-json>")),
        },
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{render, table::render_entity_table, value_to_cell};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: i64,
        nama: &'static str,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: 3, nama: "Kecanduan Berat" };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], 3);
        assert_eq!(parsed["nama"], "Kecanduan Berat");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: 3, nama: "x" };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn array_table_puts_id_first() {
        let rows = vec![
            Example { id: 1, nama: "Ringan" },
            Example { id: 2, nama: "Sedang" },
        ];
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().unwrap();
        assert!(header.trim_start().starts_with("id"), "{header}");
        assert!(out.contains("Sedang"));
    }

    #[test]
    fn empty_array_renders_placeholder() {
        let rows: Vec<Example> = Vec::new();
        assert_eq!(render(&rows, OutputFormat::Table).unwrap(), "(no rows)");
    }

    #[test]
    fn nested_records_show_their_name() {
        let value = serde_json::json!({"id": 2, "nama": "Kecanduan Sedang", "solusi": "..."});
        assert_eq!(value_to_cell(&value), "Kecanduan Sedang");
        assert_eq!(value_to_cell(&serde_json::json!([1, 2, 3])), "3 item(s)");
        assert_eq!(value_to_cell(&serde_json::Value::Null), "-");
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["id", "hypothesis", "percentage"];
        let rows = vec![
            vec!["1".to_string(), "Ringan".to_string(), "12.5".to_string()],
            vec![
                "200".to_string(),
                "Kecanduan Sedang".to_string(),
                "76.5".to_string(),
            ],
        ];

        let table = render_entity_table(
            &headers,
            &rows,
            super::table::TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("hypothesis"));
        assert!(lines[1].chars().all(|c| c == '-'));
    }
}
