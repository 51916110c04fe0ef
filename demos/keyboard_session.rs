//! Keyboard session example for destsearch-rs
//!
//! Replays the key presses of a user in the search box and prints every
//! state along with the navigations it causes.

use destsearch_core::prelude::*;

fn print_state(state: &SearchState) {
    println!(
        "  phase={:?} query={:?} selected={}",
        state.phase,
        state.query,
        state.selected_index()
    );
    for (row, e) in state.results.iter().enumerate() {
        let marker = if state.selected == Some(row) { '>' } else { ' ' };
        println!("   {marker} {} ({})", e.name, e.style().label);
    }
}

fn run(index: &SearchIndex, title: &str, events: Vec<SearchEvent>) {
    println!("--- {title} ---");
    let mut widget = SearchWidget::new(index, |path: &str| println!("  navigate -> {path}"));
    for event in events {
        println!("{event:?}");
        widget.handle(event);
        print_state(widget.state());
    }
    println!();
}

fn main() -> Result<()> {
    println!("=== destsearch-rs Keyboard Session Example ===\n");

    let index = SearchIndex::from_catalog(Catalog::embedded()?, SearchConfig::default());

    run(
        &index,
        "Type, highlight, commit",
        vec![
            SearchEvent::Type("c".into()),
            SearchEvent::Type("ca".into()),
            SearchEvent::Type("cali".into()),
            SearchEvent::ArrowDown,
            SearchEvent::Enter,
        ],
    );

    run(
        &index,
        "Arrow keys clamp at both ends",
        vec![
            SearchEvent::Type("georgia".into()),
            SearchEvent::ArrowUp,
            SearchEvent::ArrowDown,
            SearchEvent::ArrowDown,
            SearchEvent::ArrowDown,
            SearchEvent::ArrowUp,
            SearchEvent::Enter,
        ],
    );

    run(
        &index,
        "Enter without a highlight",
        vec![SearchEvent::Type("neth".into()), SearchEvent::Enter],
    );

    run(
        &index,
        "Blur closes, focus reopens, tap commits",
        vec![
            SearchEvent::Type("on".into()),
            SearchEvent::Blur,
            SearchEvent::Focus,
            SearchEvent::Select(1),
        ],
    );

    println!("=== Example completed successfully ===");
    Ok(())
}
