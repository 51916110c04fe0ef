//! Basic usage example for destsearch-rs
//!
//! This example demonstrates how to:
//! - Load the bundled destination catalog
//! - Build a search index and query it
//! - Filter suggestions by kind
//! - Resolve free text and build the fallback route

use destsearch_core::prelude::*;

fn main() -> Result<()> {
    println!("=== destsearch-rs Basic Usage Example ===\n");

    println!("Loading bundled catalog...");
    let catalog = Catalog::embedded()?;
    println!("✓ Catalog loaded: {} entities\n", catalog.len());

    let index = SearchIndex::from_catalog(catalog, SearchConfig::default());

    // Example 1: Suggestions for a partial query
    println!("--- Example 1: Suggestions for 'cali' ---");
    for e in index.search("cali") {
        let style = e.style();
        println!("- [{}] {} ({}, {})", style.label, e.name, e.region_label, e.legal_status);
    }
    println!();

    // Example 2: Regions are listed before the world
    println!("--- Example 2: Suggestions for 'georgia' ---");
    for e in index.search("georgia") {
        println!("- {} -> {}", e.display_key(), e.destination_path);
    }
    println!();

    // Example 3: Bounded list vs. every match
    println!("--- Example 3: Suggestions for 'a' ---");
    let bounded = index.search("a");
    let total = index.matches("a").count();
    println!("Showing {} of {} matches (max {MAX_SUGGESTIONS})", bounded.len(), total);
    println!();

    // Example 4: Only cities
    println!("--- Example 4: Cities containing 'am' ---");
    for e in index.search_kinds("am", &[EntityKind::City]) {
        println!("- {} in {}", e.name, e.region_label);
    }
    println!();

    // Example 5: Free text
    println!("--- Example 5: Resolving free text ---");
    for text in ["Amsterdam", "neth"] {
        match index.resolve(text) {
            Some(e) => println!("'{text}' names {} -> {}", e.name, e.destination_path),
            None => println!("'{text}' falls back to {}", index.fallback_path(text)),
        }
    }
    println!();

    // Example 6: Accent folding
    println!("--- Example 6: Folded matching for 'munchen' ---");
    let folded = SearchIndex::from_catalog(
        catalog,
        SearchConfig {
            match_mode: MatchMode::Folded,
            ..SearchConfig::default()
        },
    );
    println!("case-insensitive: {} hits", index.search("munchen").len());
    println!("folded:           {} hits", folded.search("munchen").len());
    println!();

    // Example 7: Statistics
    println!("--- Example 7: Catalog statistics ---");
    let stats = index.stats();
    println!("Regions: {}", stats.regions);
    println!("Countries: {}", stats.countries);
    println!("Cities: {}", stats.cities);
    println!("Other places: {}", stats.places);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
