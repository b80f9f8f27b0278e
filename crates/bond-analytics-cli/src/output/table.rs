use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Columns rendered for amortization schedule rows, in display order.
const SCHEDULE_COLUMNS: [&str; 8] = [
    "payment_number",
    "payment_date",
    "principal_payment",
    "interest_payment",
    "total_payment",
    "extra_payment",
    "lump_sum_payment",
    "remaining_balance",
];

/// Format output as tables using the tabled crate.
///
/// Analysis results get one summary table per scenario plus the schedule
/// tables; calculator results render as a flat field/value table.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result(result, map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => print_schedule_or_array(arr),
        _ => println!("{}", value),
    }
}

fn print_result(result: &Value, envelope: &serde_json::Map<String, Value>) {
    match result {
        // A PropertyAnalysis: baseline plus per-scenario summaries.
        Value::Object(map) if map.contains_key("baseline_schedule") => {
            if let Some(Value::Array(baseline)) = map.get("baseline_schedule") {
                println!("Baseline schedule ({} payments):", baseline.len());
                print_schedule_or_array(baseline);
            }
            if let Some(Value::Array(results)) = map.get("scenario_results") {
                for scenario_result in results {
                    print_scenario_summary(scenario_result);
                }
            }
            if let Some(combined @ Value::Object(_)) = map.get("combined_result") {
                print_scenario_summary(combined);
            }
        }
        Value::Object(res_map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in res_map {
                builder.push_record([key.as_str(), &format_value(val)]);
            }
            println!("{}", Table::from(builder));
        }
        _ => print_flat_object(&Value::Object(envelope.clone())),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_scenario_summary(scenario_result: &Value) {
    let Value::Object(map) = scenario_result else {
        return;
    };

    let label = map
        .get("scenario")
        .and_then(|s| s.get("name"))
        .and_then(|n| n.as_str())
        .map(str::to_string)
        .or_else(|| {
            map.get("scenario")
                .and_then(|s| s.get("type"))
                .and_then(|t| t.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "scenario".to_string());

    println!("\nScenario: {}", label);
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for key in [
        "total_interest_saved",
        "months_saved",
        "original_payoff_date",
        "new_payoff_date",
        "total_amount_paid",
        "baseline_total_paid",
    ] {
        if let Some(val) = map.get(key) {
            builder.push_record([key, &format_value(val)]);
        }
    }
    println!("{}", Table::from(builder));
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_schedule_or_array(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            println!("{}", format_value(item));
        }
        return;
    };

    // Schedule rows get a fixed column order; anything else uses the keys
    // of the first element.
    let headers: Vec<String> = if SCHEDULE_COLUMNS.iter().all(|c| first.contains_key(*c)) {
        SCHEDULE_COLUMNS.iter().map(|c| c.to_string()).collect()
    } else {
        first.keys().cloned().collect()
    };

    let mut builder = Builder::default();
    builder.push_record(&headers);
    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }
    println!("{}", Table::from(builder));
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
