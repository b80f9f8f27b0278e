use serde_json::Value;
use std::io;

/// Format output as CSV.
///
/// Arrays of objects (schedules) become one record per element; flat
/// objects become field,value pairs. Nested schedules inside an analysis
/// result are skipped in favour of the scalar summary fields.
pub fn print_csv(value: &Value) {
    let mut writer = csv::Writer::from_writer(io::stdout());

    let outcome = match value {
        Value::Array(arr) => write_records(&mut writer, arr),
        Value::Object(map) => {
            if let Some(Value::Array(arr)) = map.get("result") {
                write_records(&mut writer, arr)
            } else {
                write_pairs(&mut writer, value)
            }
        }
        _ => writer
            .write_record(["value", &value.to_string()])
            .map_err(Into::into),
    };

    if let Err(e) = outcome.and_then(|_| writer.flush().map_err(Into::into)) {
        eprintln!("CSV output error: {}", e);
    }
}

fn write_records(
    writer: &mut csv::Writer<io::Stdout>,
    arr: &[Value],
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            writer.write_record([scalar(item)])?;
        }
        return Ok(());
    };

    let headers: Vec<&String> = first.keys().collect();
    writer.write_record(headers.iter().map(|h| h.as_str()))?;
    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(scalar).unwrap_or_default())
                .collect();
            writer.write_record(&row)?;
        }
    }
    Ok(())
}

fn write_pairs(
    writer: &mut csv::Writer<io::Stdout>,
    value: &Value,
) -> Result<(), Box<dyn std::error::Error>> {
    writer.write_record(["field", "value"])?;
    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                // Schedules are too wide for the pair form; request the
                // schedule subcommand with --output csv instead.
                Value::Array(arr) if matches!(arr.first(), Some(Value::Object(_))) => continue,
                Value::Object(inner) => {
                    for (inner_key, inner_val) in inner {
                        if inner_val.is_array() || inner_val.is_object() {
                            continue;
                        }
                        writer.write_record([
                            &format!("{}.{}", key, inner_key),
                            &scalar(inner_val),
                        ])?;
                    }
                }
                _ => writer.write_record([key, &scalar(val)])?,
            }
        }
    }
    Ok(())
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
