use std::collections::HashSet;
use std::path::Path;

const CATALOG_PATH: &str = "catalogs/creatures.json";

fn main() {
    validate_catalog_file(Path::new(CATALOG_PATH));
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    assert!(
        catalog.get("version").and_then(|v| v.as_str()).is_some(),
        "\n\nCATALOG BUILD ERROR: Missing string 'version' field\n"
    );

    let creatures = catalog
        .get("creatures")
        .and_then(|c| c.as_array())
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Missing 'creatures' array\n\
                 The catalog must have a top-level 'creatures' array.\n"
            );
        });

    validate_creatures(creatures);

    let pairs = optional_array(catalog, "compatibility");
    for (i, entry) in pairs.iter().enumerate() {
        validate_compatibility_entry(entry, i);
    }

    let parts = optional_array(catalog, "parts");
    for (i, part) in parts.iter().enumerate() {
        validate_part(part, i);
    }

    println!(
        "cargo:warning=Validated catalog: {} creatures, {} compatibility pairs, {} parts",
        creatures.len(),
        pairs.len(),
        parts.len()
    );
}

fn optional_array<'a>(catalog: &'a serde_json::Value, field: &str) -> &'a [serde_json::Value] {
    match catalog.get(field) {
        None => &[],
        Some(value) => value.as_array().map(Vec::as_slice).unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: '{field}' must be an array\n\
                 Got: {value}\n"
            );
        }),
    }
}

fn validate_creatures(creatures: &[serde_json::Value]) {
    let mut seen = HashSet::new();

    for (i, creature) in creatures.iter().enumerate() {
        let id = creature
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Creature at index {i} missing string 'id' field\n");
            });

        assert!(
            !id.is_empty(),
            "\n\nCATALOG BUILD ERROR: Creature at index {i} has an empty 'id'\n"
        );
        assert!(
            seen.insert(id),
            "\n\nCATALOG BUILD ERROR: Duplicate creature id '{id}' (index {i})\n"
        );
        assert!(
            creature.get("display_name").and_then(|v| v.as_str()).is_some(),
            "\n\nCATALOG BUILD ERROR: Creature '{id}' (index {i}) missing 'display_name' field\n"
        );
        assert!(
            creature.get("configuration").and_then(|v| v.as_str()).is_some(),
            "\n\nCATALOG BUILD ERROR: Creature '{id}' (index {i}) missing string 'configuration' field\n"
        );
    }
}

fn validate_compatibility_entry(entry: &serde_json::Value, index: usize) {
    for field in ["a", "b"] {
        assert!(
            entry.get(field).and_then(serde_json::Value::as_u64).is_some(),
            "\n\nCATALOG BUILD ERROR: Compatibility entry {index} needs a non-negative integer '{field}'\n"
        );
    }

    let factor = entry
        .get("factor")
        .and_then(serde_json::Value::as_f64)
        .unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Compatibility entry {index} missing numeric 'factor'\n");
        });

    if !(0.0..=1.0).contains(&factor) {
        println!("cargo:warning=Compatibility entry {index} has factor {factor} outside [0, 1]");
    }
}

fn validate_part(part: &serde_json::Value, index: usize) {
    assert!(
        part.get("category").and_then(serde_json::Value::as_u64).is_some(),
        "\n\nCATALOG BUILD ERROR: Part at index {index} needs a non-negative integer 'category'\n"
    );
    assert!(
        part.get("name").and_then(|v| v.as_str()).is_some(),
        "\n\nCATALOG BUILD ERROR: Part at index {index} missing 'name' field\n"
    );
}

fn set_build_dependencies() {
    println!("cargo:rerun-if-changed={CATALOG_PATH}");
    println!("cargo:rerun-if-changed=build.rs");
}
