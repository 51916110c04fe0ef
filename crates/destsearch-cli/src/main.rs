//! destsearch — Command-line interface for destsearch-core
//!
//! This binary inspects destination catalogs and exercises the search box
//! engine from a terminal. It prints catalog statistics, shows suggestions
//! for a query, lists entity kinds, and replays keyboard/pointer sessions.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ destsearch stats
//!
//! - Show the dropdown for a query (optionally restricted to kinds)
//!   $ destsearch search cali
//!   $ destsearch search a --kind city,place --all
//!
//! - Replay a session: type "neth", press Enter without highlighting
//!   $ destsearch simulate type:neth enter
//!
//! Data source
//! -----------
//!
//! Without `--input` the catalog bundled with `destsearch-core` is used.
//! A `--input <file>.json` source is cached as a binary file next to it for
//! faster subsequent runs.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{anyhow, bail, Context};
use clap::Parser;
use destsearch_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => SearchConfig::load_from_path(path)
            .with_context(|| format!("loading config {path}"))?,
        None => SearchConfig::default(),
    };

    let catalog = load_catalog(args.input.as_deref())?;
    let index = SearchIndex::from_catalog(&catalog, config);
    tracing::debug!(entities = index.len(), "index ready");

    match args.command {
        Commands::Stats => {
            let stats = index.stats();
            println!("Catalog statistics:");
            println!("  Regions: {}", stats.regions);
            println!("  Countries: {}", stats.countries);
            println!("  Cities: {}", stats.cities);
            println!("  Other places: {}", stats.places);
            println!("  Total: {}", stats.total);
            println!("  Max suggestions: {}", index.config().max_suggestions);
        }

        Commands::Search { query, kind, all } => {
            let kinds = match kind.as_deref() {
                Some(list) => parse_kinds(list)?,
                None => Vec::new(),
            };
            let hits: Vec<&SearchEntity> = if all {
                index
                    .matches(&query)
                    .filter(|e| kinds.is_empty() || kinds.contains(&e.kind))
                    .collect()
            } else {
                index.search_kinds(&query, &kinds)
            };
            if hits.is_empty() {
                println!("No destinations match: {query}");
            } else {
                for e in hits {
                    println!("{}", describe(e));
                }
            }
        }

        Commands::Kinds => {
            for kind in EntityKind::ALL {
                let style = kind.style();
                println!("{:<8} {:<9} {}", kind, style.icon, style.label);
            }
        }

        Commands::Simulate { events } => {
            let events = events
                .iter()
                .map(String::as_str)
                .map(parse_event)
                .collect::<anyhow::Result<Vec<_>>>()?;
            let mut widget = SearchWidget::new(&index, RecordingSink::new());
            for event in events {
                println!("> {event:?}");
                let commit = widget.handle(event);
                print_state(widget.state());
                if let Some(commit) = commit {
                    println!("  -> navigate {}", commit.path);
                }
            }
        }

        Commands::Cache { output } => {
            catalog
                .save_as(&output)
                .with_context(|| format!("writing cache {output}"))?;
            println!("Wrote {} entities to {output}", catalog.len());
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn load_catalog(input: Option<&str>) -> anyhow::Result<Catalog> {
    match input {
        Some(path) if path.ends_with(".json") => {
            Catalog::load_cached(path).with_context(|| format!("loading catalog {path}"))
        }
        Some(path) => {
            Catalog::load_from_path(path).with_context(|| format!("loading catalog {path}"))
        }
        None => Ok(Catalog::embedded()?.clone()),
    }
}

fn parse_kinds(list: &str) -> anyhow::Result<Vec<EntityKind>> {
    list.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| EntityKind::parse(k).ok_or_else(|| anyhow!("unknown kind: {k}")))
        .collect()
}

fn parse_event(raw: &str) -> anyhow::Result<SearchEvent> {
    let (name, arg) = match raw.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (raw, None),
    };
    let event = match (name.to_ascii_lowercase().as_str(), arg) {
        ("type", Some(text)) => SearchEvent::Type(text.to_string()),
        ("down", None) => SearchEvent::ArrowDown,
        ("up", None) => SearchEvent::ArrowUp,
        ("enter", None) => SearchEvent::Enter,
        ("select", Some(row)) => SearchEvent::Select(
            row.parse()
                .with_context(|| format!("select expects a row number, got {row:?}"))?,
        ),
        ("blur", None) => SearchEvent::Blur,
        ("focus", None) => SearchEvent::Focus,
        _ => bail!("unrecognised event: {raw}"),
    };
    Ok(event)
}

fn describe(e: &SearchEntity) -> String {
    format!(
        "{} — {}, {} [{}] -> {}",
        e.name,
        e.kind.style().label,
        e.region_label,
        e.legal_status,
        e.destination_path
    )
}

fn print_state(state: &SearchState) {
    println!(
        "  [{:?}] query={:?} selected={}",
        state.phase,
        state.query,
        state.selected_index()
    );
    for (row, e) in state.results.iter().enumerate() {
        let marker = if state.selected == Some(row) { '*' } else { ' ' };
        println!("   {marker}{row} {}", describe(e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_event() {
        assert_eq!(
            parse_event("type:new york").unwrap(),
            SearchEvent::Type("new york".into())
        );
        assert_eq!(parse_event("DOWN").unwrap(), SearchEvent::ArrowDown);
        assert_eq!(parse_event("select:2").unwrap(), SearchEvent::Select(2));
        assert_eq!(parse_event("type:").unwrap(), SearchEvent::Type(String::new()));
        assert!(parse_event("select:x").is_err());
        assert!(parse_event("enter:now").is_err());
        assert!(parse_event("jump").is_err());
    }

    #[test]
    fn parses_kind_lists() {
        assert_eq!(
            parse_kinds("state, city").unwrap(),
            vec![EntityKind::Region, EntityKind::City]
        );
        assert!(parse_kinds("planet").is_err());
    }
}
