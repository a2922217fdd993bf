//! Integration tests for the consumer-facing contract: the serialized JSON
//! shape any pattern-matching consumer relies on, and the rendered preview
//! artifact the `render` subcommand produces.

use site_nav::types::NavItem;
use site_nav::{data, render, surface, validate};

#[test]
fn serialized_table_matches_the_consumer_shape() {
    let value = serde_json::to_value(data::navigation()).unwrap();
    let table = value.as_array().unwrap();
    assert_eq!(table.len(), 4);

    // Field names are exactly the consumer-facing ones.
    let pricing = &table[0];
    assert_eq!(pricing["label"], "Pricing");
    assert_eq!(pricing["href"], "/pricing");
    assert_eq!(pricing["showInNav"], true);
    assert_eq!(pricing["showInFooter"], false);
    // Absent optional fields are absent, not null.
    assert!(pricing.get("image").is_none());
    assert!(pricing.get("children").is_none());
    assert!(pricing.get("description").is_none());

    // Grouping items omit href and carry children.
    let use_cases = &table[1];
    assert!(use_cases.get("href").is_none());
    let children = use_cases["children"].as_array().unwrap();
    assert_eq!(children.len(), 3);

    // Children carry description and image; a description never appears on a
    // top-level item.
    let first = &children[0];
    assert_eq!(first["label"], "Conversations that reveal true fit");
    assert!(first["description"].as_str().unwrap().starts_with("Dex uses"));
    assert!(first["image"].as_str().unwrap().ends_with(".webp"));
    // A child has no children key at all.
    assert!(first.get("children").is_none());
}

#[test]
fn serialized_cta_is_label_and_href_only() {
    let value = serde_json::to_value(data::cta()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "label": "Book demo", "href": "/" })
    );
}

#[test]
fn export_round_trips_through_json() {
    let json = serde_json::to_string(data::navigation()).unwrap();
    let back: Vec<NavItem> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.as_slice(), data::navigation());
}

#[test]
fn deserialized_table_passes_validation_and_filters_identically() {
    let json = serde_json::to_string(data::navigation()).unwrap();
    let back: Vec<NavItem> = serde_json::from_str(&json).unwrap();

    validate::validate(&back, data::cta()).unwrap();

    let labels: Vec<&str> = surface::top_level_nav_items(&back)
        .iter()
        .map(|i| i.label.as_str())
        .collect();
    assert_eq!(labels, ["Pricing", "Use Cases", "Company"]);
}

#[test]
fn preview_artifact_is_written_and_self_contained() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("preview.html");

    let preview = render::render_preview(data::navigation(), data::cta());
    std::fs::write(&path, preview.into_string()).unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Book demo"));
    // Styling is inlined; the artifact references no local files.
    assert!(html.contains("<style>"));
    assert!(!html.contains("stylesheet"));
}
