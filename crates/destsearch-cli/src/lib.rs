//! destsearch-cli
//! ==============
//!
//! Command-line interface for the `destsearch-core` destination search
//! engine.
//!
//! This crate primarily provides a binary (`destsearch`). The small library
//! target only exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! destsearch --help
//! destsearch stats
//! destsearch search cali
//! destsearch search a --kind city --all
//! destsearch simulate type:neth enter
//! destsearch --input my_catalog.json cache my_catalog.bin.gz
//! ```
//!
//! For programmatic access use the `destsearch-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
