use serde_json::Value;

/// Keys surfaced by the minimal formatter, in priority order.
///
/// The first of these found in the result is printed alone, so scripts can
/// capture a single headline figure without parsing JSON.
const PRIORITY_KEYS: [&str; 8] = [
    "monthly_instalment",
    "max_loan_amount",
    "max_purchase_price",
    "months_to_target",
    "total_interest_saved",
    "interest_saved",
    "months_saved",
    "total_interest",
];

/// Print a single headline value, falling back to compact JSON.
pub fn print_minimal(value: &Value) {
    let result = value.get("result").unwrap_or(value);

    if let Value::Object(map) = result {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key) {
                println!("{}", bare(val));
                return;
            }
        }
        // Analysis results have no single headline figure; report the
        // combined saving when present, otherwise the first scenario's.
        let headline = map
            .get("combined_result")
            .and_then(|r| r.get("total_interest_saved"))
            .or_else(|| {
                map.get("scenario_results")
                    .and_then(|r| r.get(0))
                    .and_then(|r| r.get("total_interest_saved"))
            });
        if let Some(val) = headline {
            println!("{}", bare(val));
            return;
        }
    }

    match serde_json::to_string(result) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

fn bare(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
