use std::path::Path;

fn main() {
    let sample_path = Path::new("catalogs/sample_medications.json");
    validate_sample_file(sample_path);
    set_build_dependencies();
}

fn validate_sample_file(sample_path: &Path) {
    // The fallback sample is compiled into the binary, so it must exist now
    assert!(
        sample_path.exists(),
        "\n\nSAMPLE BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the fallback sample before building.\n",
        sample_path.display()
    );

    let contents = std::fs::read_to_string(sample_path).unwrap_or_else(|e| {
        panic!(
            "\n\nSAMPLE BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            sample_path.display()
        );
    });

    let sample: serde_json::Value = serde_json::from_str(&contents).unwrap_or_else(|e| {
        panic!(
            "\n\nSAMPLE BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            sample_path.display()
        );
    });

    validate_sample_structure(&sample);
}

fn validate_sample_structure(sample: &serde_json::Value) {
    let records = sample.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nSAMPLE BUILD ERROR: Root must be a JSON array of medications\n\
             Got: {sample}\n"
        );
    });

    assert!(
        !records.is_empty(),
        "\n\nSAMPLE BUILD ERROR: Sample must contain at least one medication\n"
    );

    for (i, record) in records.iter().enumerate() {
        validate_record_fields(record, i);
    }

    println!(
        "cargo:warning=Validated fallback sample: {} medications",
        records.len()
    );
}

fn validate_record_fields(record: &serde_json::Value, index: usize) {
    let name = record
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or("<unknown>");

    for field in ["name", "category", "active_ingredient", "price"] {
        assert!(
            record.get(field).is_some(),
            "\n\nSAMPLE BUILD ERROR: Medication '{name}' (index {index}) missing '{field}' field\n"
        );
    }

    let price = match record.get("price") {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    assert!(
        price.is_some_and(|p| p.is_finite() && p >= 0.0),
        "\n\nSAMPLE BUILD ERROR: Medication '{name}' (index {index}) has an invalid price\n\
         Prices must be non-negative numbers or numeric strings.\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the sample changes
    println!("cargo:rerun-if-changed=catalogs/sample_medications.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
