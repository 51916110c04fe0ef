//! destsearch-wasm — WebAssembly bindings for destsearch-core
//!
//! This crate exposes the destination search box to JavaScript. The sample
//! catalog shipped with `destsearch-core` is compiled into the module, so no
//! network fetch is needed before the first keystroke.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Stateless helpers returning JSON-serializable values:
//!   - `search("cali")`, `search_kinds("a", "city,place")`
//!   - `get_stats()`, `kind_styles()`
//! - A `SearchBox` class that owns one search box state and calls a JS
//!   `navigate(path)` callback on every commit.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { SearchBox, search } from 'destsearch-wasm';
//!
//! async function main() {
//!   await init();
//!   console.log(search('cali'));
//!
//!   const box = new SearchBox((path) => { window.location.href = path; });
//!   input.addEventListener('input', (e) => render(box.type_text(e.target.value)));
//!   input.addEventListener('keydown', (e) => {
//!     if (e.key === 'ArrowDown') render(box.arrow_down());
//!     if (e.key === 'ArrowUp') render(box.arrow_up());
//!     if (e.key === 'Enter') box.enter();
//!   });
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - State snapshots are plain objects:
//!   `{ query, phase, selected, results: [{ name, kind, legal_status, ... }] }`.
//! - Errors (unknown kind names, serialization failures) surface as thrown
//!   JS strings.

use std::result::Result;
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use destsearch_core::prelude::*;
use serde::Serialize;
use serde_wasm_bindgen::to_value;

static INDEX: OnceLock<SearchIndex> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing destsearch WASM module...".into());

    match index() {
        Ok(index) => {
            let stats = index.stats();
            web_sys::console::log_1(
                &format!(
                    "✓ Loaded {} destinations ({} regions, {} countries, {} cities)",
                    stats.total, stats.regions, stats.countries, stats.cities
                )
                .into(),
            );
        }
        Err(err) => web_sys::console::error_1(&err),
    }
}

fn index() -> Result<&'static SearchIndex, JsValue> {
    if let Some(index) = INDEX.get() {
        return Ok(index);
    }
    let catalog = Catalog::embedded().map_err(to_js_error)?;
    let built = SearchIndex::from_catalog(catalog, SearchConfig::default());
    Ok(INDEX.get_or_init(|| built))
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(JsValue::from)
}

/* --------------------------------------------------------------------------
   Stateless queries
-------------------------------------------------------------------------- */

/// Bounded suggestions for `query`, regions first.
#[wasm_bindgen]
pub fn search(query: &str) -> Result<JsValue, JsValue> {
    to_js(&index()?.search(query))
}

/// Like `search`, keeping only the comma-separated `kinds`
/// (`region`, `country`, `city`, `place`). An empty list keeps every kind.
#[wasm_bindgen]
pub fn search_kinds(query: &str, kinds: &str) -> Result<JsValue, JsValue> {
    let kinds = kinds
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| {
            EntityKind::parse(k).ok_or_else(|| JsValue::from_str(&format!("unknown kind: {k}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    to_js(&index()?.search_kinds(query, &kinds))
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    to_js(&index()?.stats())
}

#[derive(Serialize)]
struct KindInfo {
    kind: EntityKind,
    icon: &'static str,
    label: &'static str,
}

/// Icon and label for every entity kind, for rendering suggestion rows.
#[wasm_bindgen]
pub fn kind_styles() -> Result<JsValue, JsValue> {
    let styles: Vec<KindInfo> = EntityKind::ALL
        .iter()
        .map(|&kind| {
            let style = kind.style();
            KindInfo {
                kind,
                icon: style.icon,
                label: style.label,
            }
        })
        .collect();
    to_js(&styles)
}

/* --------------------------------------------------------------------------
   Search box
-------------------------------------------------------------------------- */

/// Forwards commits to a JS callback.
struct JsNavigate {
    callback: js_sys::Function,
}

impl NavigationSink for JsNavigate {
    fn navigate_to(&mut self, path: &str) {
        if let Err(_err) = self.callback.call1(&JsValue::NULL, &JsValue::from_str(path)) {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::error_2(&"navigate callback failed:".into(), &_err);
        }
    }
}

/// One search box. Every method except `enter`/`select` returns the new
/// state snapshot.
#[wasm_bindgen]
pub struct SearchBox {
    widget: SearchWidget<'static, JsNavigate>,
}

impl SearchBox {
    fn apply(&mut self, event: SearchEvent) -> Result<JsValue, JsValue> {
        self.widget.handle(event);
        self.state()
    }
}

#[wasm_bindgen]
impl SearchBox {
    #[wasm_bindgen(constructor)]
    pub fn new(navigate: js_sys::Function) -> Result<SearchBox, JsValue> {
        Ok(SearchBox {
            widget: SearchWidget::new(index()?, JsNavigate { callback: navigate }),
        })
    }

    pub fn type_text(&mut self, text: String) -> Result<JsValue, JsValue> {
        self.apply(SearchEvent::Type(text))
    }

    pub fn arrow_down(&mut self) -> Result<JsValue, JsValue> {
        self.apply(SearchEvent::ArrowDown)
    }

    pub fn arrow_up(&mut self) -> Result<JsValue, JsValue> {
        self.apply(SearchEvent::ArrowUp)
    }

    /// Returns the path navigated to, if the press committed.
    pub fn enter(&mut self) -> Option<String> {
        self.widget.handle(SearchEvent::Enter).map(|c| c.path)
    }

    /// Pointer/tap on suggestion row `row`.
    pub fn select(&mut self, row: usize) -> Option<String> {
        self.widget.handle(SearchEvent::Select(row)).map(|c| c.path)
    }

    pub fn blur(&mut self) -> Result<JsValue, JsValue> {
        self.apply(SearchEvent::Blur)
    }

    pub fn focus(&mut self) -> Result<JsValue, JsValue> {
        self.apply(SearchEvent::Focus)
    }

    /// Highlighted row, or -1.
    pub fn selected_index(&self) -> i32 {
        self.widget.state().selected_index() as i32
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(self.widget.state())
    }
}
