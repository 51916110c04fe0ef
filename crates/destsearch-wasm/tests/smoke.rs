use wasm_bindgen_test::*;

use destsearch_core::{CatalogStats, SearchEntity};
use destsearch_wasm::{get_stats, search, search_kinds, SearchBox};

#[wasm_bindgen_test]
fn stats_are_populated() {
    let stats: CatalogStats = serde_wasm_bindgen::from_value(get_stats().unwrap()).unwrap();
    assert!(stats.regions > 0);
    assert!(stats.total >= stats.regions + stats.countries);
}

#[wasm_bindgen_test]
fn search_returns_regions_first() {
    let hits: Vec<SearchEntity> = serde_wasm_bindgen::from_value(search("cali").unwrap()).unwrap();
    assert_eq!(hits[0].name, "California");
    assert_eq!(hits[0].destination_path, "/usa/california");
}

#[wasm_bindgen_test]
fn unknown_kind_is_rejected() {
    assert!(search_kinds("a", "planet").is_err());
    assert!(search_kinds("a", "city, place").is_ok());
}

#[wasm_bindgen_test]
fn search_box_commits_highlighted_row() {
    let navigate = js_sys::Function::new_with_args("path", "globalThis.__lastPath = path;");
    let mut search_box = SearchBox::new(navigate).unwrap();

    search_box.type_text("cali".into()).unwrap();
    search_box.arrow_down().unwrap();
    assert_eq!(search_box.selected_index(), 0);

    assert_eq!(search_box.enter().as_deref(), Some("/usa/california"));
    assert_eq!(search_box.selected_index(), -1);
}

#[wasm_bindgen_test]
fn search_box_enter_without_text_does_nothing() {
    let navigate = js_sys::Function::new_no_args("");
    let mut search_box = SearchBox::new(navigate).unwrap();
    assert_eq!(search_box.enter(), None);
}
