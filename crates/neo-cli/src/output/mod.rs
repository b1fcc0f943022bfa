use std::io::IsTerminal;

use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table_options()),
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
    let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let max_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);
    table::TableOptions { max_width, color }
}

fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = flatten_object(&map, "")
                .into_iter()
                .map(|(key, value)| vec![key, value])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

/// Flatten nested objects into dotted keys (`threat.level`), sorted by key.
fn flatten_object(map: &serde_json::Map<String, Value>, prefix: &str) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    for (key, value) in map {
        let key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(inner) => rows.extend(flatten_object(inner, &key)),
            other => rows.push((key, value_to_cell(other))),
        }
    }
    rows
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let all_objects = items.iter().all(Value::is_object);
    if !all_objects {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for item in items {
        if let Some(map) = item.as_object() {
            for key in map.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    headers.sort();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v
            .as_f64()
            .filter(|f| f.fract() != 0.0)
            .map_or_else(|| v.to_string(), |f| format!("{f:.2}")),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{render, render_table, table::TableOptions};
    use crate::cli::OutputFormat;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[derive(Serialize)]
    struct Threat {
        level: &'static str,
        score: u8,
    }

    #[derive(Serialize)]
    struct Report {
        threat: Threat,
        origin: &'static str,
        closest: Option<f64>,
    }

    fn report() -> Report {
        Report {
            threat: Threat {
                level: "ELEVATED",
                score: 79,
            },
            origin: "fallback",
            closest: Some(0.455_25),
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&report(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["threat"]["level"], "ELEVATED");
        assert_eq!(parsed["threat"]["score"], 79);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&report(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["origin"], "fallback");
    }

    #[test]
    fn object_table_flattens_nested_keys() {
        let out = render_table(&report(), PLAIN).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("key"));
        assert!(lines[2].starts_with("closest"));
        assert!(lines[2].contains("0.46"));
        assert!(lines[4].starts_with("threat.level"));
        assert!(lines[4].contains("ELEVATED"));
        assert!(lines[5].starts_with("threat.score"));
    }

    #[test]
    fn array_table_sorts_columns_and_marks_nulls() {
        let rows = vec![
            serde_json::json!({"name": "Apophis", "miss_distance_km": 1_950_000.0}),
            serde_json::json!({"name": "Bennu", "miss_distance_km": null}),
        ];
        let out = render_table(&rows, PLAIN).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("miss_distance_km"));
        assert!(lines[3].trim_start().starts_with("-  Bennu"));
    }

    #[test]
    fn empty_array_has_placeholder() {
        let rows: Vec<serde_json::Value> = Vec::new();
        assert_eq!(render_table(&rows, PLAIN).unwrap(), "(no rows)");
    }
}
