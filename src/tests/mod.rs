use std::io::Write;

use crate::catalog::{build_catalog, CatalogEntry, Category, Product, Sex, User};
use crate::datasource::{self, DatasetSource};
use crate::filter::{prepare, FilterCriteria};
use crate::output;
use crate::runner::{Options, Runner};

fn demo_entries() -> Vec<CatalogEntry> {
    build_catalog(
        &datasource::demo_users(),
        &datasource::demo_categories(),
        &datasource::demo_products(),
    )
    .unwrap()
}

fn is_subsequence(subset: &[CatalogEntry], full: &[CatalogEntry]) -> bool {
    let mut it = full.iter();
    subset.iter().all(|e| it.any(|f| f == e))
}

#[test]
fn join_output_matches_product_input_order() {
    let entries = demo_entries();
    let products = datasource::demo_products();
    assert_eq!(entries.len(), products.len());
    for (entry, product) in entries.iter().zip(products.iter()) {
        assert_eq!(entry.id, product.id);
        assert_eq!(entry.name, product.name);
    }
}

#[test]
fn filter_output_is_an_order_preserving_subsequence() {
    let entries = demo_entries();
    let criteria = FilterCriteria::new("a", "");
    let out = prepare(&entries, &criteria);
    assert!(is_subsequence(&out, &entries));
}

#[test]
fn filtering_twice_with_same_criteria_is_idempotent() {
    let entries = demo_entries();
    let criteria = FilterCriteria::new("an", "Anna");
    let once = prepare(&entries, &criteria);
    let twice = prepare(&once, &criteria);
    assert_eq!(once, twice);
}

#[test]
fn empty_criteria_are_the_identity() {
    let entries = demo_entries();
    let out = prepare(&entries, &FilterCriteria::default());
    assert_eq!(out, entries);
}

#[test]
fn query_is_case_insensitive_on_both_sides() {
    let users = vec![User {
        id: 1,
        name: "Anna".to_string(),
        sex: Sex::Female,
    }];
    let categories = vec![Category {
        id: 10,
        title: "Electronics".to_string(),
        icon: "💻".to_string(),
        owner_id: 1,
    }];
    let products = vec![
        Product {
            id: 100,
            name: "iPhone 10".to_string(),
            category_id: 10,
        },
        Product {
            id: 101,
            name: "iphone 10".to_string(),
            category_id: 10,
        },
    ];
    let entries = build_catalog(&users, &categories, &products).unwrap();
    let out = prepare(&entries, &FilterCriteria::new("iPhone", ""));
    assert_eq!(out.len(), 2);
    let out = prepare(&entries, &FilterCriteria::new("IPHONE", ""));
    assert_eq!(out.len(), 2);
}

#[test]
fn owner_filter_does_not_prefix_match() {
    let users = vec![
        User {
            id: 1,
            name: "Max".to_string(),
            sex: Sex::Male,
        },
        User {
            id: 2,
            name: "Maxim".to_string(),
            sex: Sex::Male,
        },
    ];
    let categories = vec![
        Category {
            id: 10,
            title: "Drinks".to_string(),
            icon: "🍷".to_string(),
            owner_id: 1,
        },
        Category {
            id: 11,
            title: "Grocery".to_string(),
            icon: "🍞".to_string(),
            owner_id: 2,
        },
    ];
    let products = vec![
        Product {
            id: 100,
            name: "Water".to_string(),
            category_id: 10,
        },
        Product {
            id: 101,
            name: "Bread".to_string(),
            category_id: 11,
        },
    ];
    let entries = build_catalog(&users, &categories, &products).unwrap();
    let out = prepare(&entries, &FilterCriteria::new("", "Max"));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].owner_name, "Max");
}

#[test]
fn conjunction_applies_both_filters() {
    let entries = demo_entries();
    let out = prepare(&entries, &FilterCriteria::new("a", "Anna"));
    assert!(!out.is_empty());
    for entry in out.iter() {
        assert!(entry.name.to_lowercase().contains('a'));
        assert_eq!(entry.owner_name, "Anna");
    }
}

#[test]
fn banana_scenario() {
    let users = vec![User {
        id: 1,
        name: "Anna".to_string(),
        sex: Sex::Female,
    }];
    let categories = vec![Category {
        id: 10,
        title: "Fruits".to_string(),
        icon: "🍎".to_string(),
        owner_id: 1,
    }];
    let products = vec![
        Product {
            id: 100,
            name: "Banana".to_string(),
            category_id: 10,
        },
        Product {
            id: 101,
            name: "Apple".to_string(),
            category_id: 10,
        },
    ];
    let entries = build_catalog(&users, &categories, &products).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.owner_name == "Anna"));

    let out = prepare(&entries, &FilterCriteria::new("ban", ""));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "Banana");

    let out = prepare(&entries, &FilterCriteria::new("", "Anna"));
    assert_eq!(out.len(), 2);

    let out = prepare(&entries, &FilterCriteria::new("xyz", ""));
    assert!(out.is_empty());
}

#[test]
fn datasets_load_from_json_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(br#"[{"id":1,"name":"Anna","sex":"f"},{"id":2,"name":"Roma","sex":"m"}]"#)
        .unwrap();

    let source: DatasetSource<User> =
        DatasetSource::FilePath(path.to_string_lossy().to_string());
    let users = source.load("users").unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Anna");
    assert_eq!(users[0].sex, Sex::Female);
}

#[test]
fn datasets_load_from_yaml_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.yml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"- id: 1\n  name: Milk\n  categoryId: 1\n")
        .unwrap();

    let source: DatasetSource<Product> =
        DatasetSource::FilePath(path.to_string_lossy().to_string());
    let products = source.load("products").unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].category_id, 1);
}

#[test]
fn dataset_load_fails_on_unknown_extension() {
    let source: DatasetSource<User> = DatasetSource::FilePath("./users.csv".to_string());
    assert!(source.load("users").is_err());
}

#[test]
fn dataset_load_fails_on_missing_file() {
    let source: DatasetSource<User> =
        DatasetSource::FilePath("./definitely-not-there.json".to_string());
    assert!(source.load("users").is_err());
}

#[test]
fn runner_applies_query_and_owner_from_options() {
    let runner = Runner::new(Options {
        query: "i".to_string(),
        owner: "Roma".to_string(),
        ..Options::default()
    })
    .unwrap();
    let view = runner.run().unwrap();
    assert!(!view.visible.is_empty());
    for entry in view.visible.iter() {
        assert!(entry.name.to_lowercase().contains('i'));
        assert_eq!(entry.owner_name, "Roma");
    }
}

#[test]
fn text_rendering_contains_rows_and_header() {
    let records = output::build_records(&demo_entries());
    let text = String::from_utf8(output::render_text(&records)).unwrap();
    assert!(text.contains("ID"));
    assert!(text.contains("Product"));
    assert!(text.contains("Milk"));
    assert!(text.contains("🍞 - Grocery"));
}

#[test]
fn text_rendering_uses_empty_state_message() {
    let text = String::from_utf8(output::render_text(&[])).unwrap();
    assert_eq!(text.trim_end(), output::NO_MATCHES_MESSAGE);
}

#[test]
fn json_rendering_round_trips() {
    let records = output::build_records(&demo_entries());
    let json = output::render_json(&records);
    let parsed: serde_json::Value = serde_json::from_slice(&json).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), records.len());
    assert_eq!(rows[0]["name"], "Milk");
    assert_eq!(rows[0]["owner"], "Anna");
}

#[test]
fn xml_rendering_escapes_special_characters() {
    let entries = vec![CatalogEntry {
        id: 1,
        name: "Bread & Butter".to_string(),
        category_title: "Grocery".to_string(),
        category_icon: "🍞".to_string(),
        owner_name: "Anna".to_string(),
        owner_sex: Sex::Female,
    }];
    let records = output::build_records(&entries);
    let xml = String::from_utf8(output::render_xml(&records)).unwrap();
    assert!(xml.contains("Bread &amp; Butter"));
    assert!(!xml.contains("Bread & Butter"));
}

#[test]
fn output_format_inference_prefers_extension() {
    assert_eq!(
        output::infer_format_from_path("catalog.html"),
        Some(output::OutputFormat::Html)
    );
    assert_eq!(
        output::infer_format_from_path("catalog.json"),
        Some(output::OutputFormat::Json)
    );
    assert_eq!(output::infer_format_from_path("catalog.dat"), None);
}
