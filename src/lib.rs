//! # FNDLWR
//!
//! A lawyer directory: search by name, specialty, and location, profile
//! pages, and autocomplete suggestions, served over HTTP from one SQLite
//! table.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────────────┐   ┌──────────┐
//! │ Browser  │──▶│  HTTP (axum)      │──▶│  SQLite  │
//! │  / CLI   │   │ get/search/suggest│   │  lawyer  │
//! └──────────┘   └──────────────────┘   └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! fndlwr init                          # create the lawyer table
//! fndlwr import ./data/lawyers.json    # load profiles
//! fndlwr search smith --location austin
//! fndlwr serve                         # start HTTP server
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Lawyer profile types |
//! | [`error`] | Directory error type |
//! | [`get`] | Lookup by ID |
//! | [`search`] | Fuzzy search by name/specialty and location |
//! | [`suggest`] | Autocomplete suggestions |
//! | [`import`] | Bulk profile import |
//! | [`pages`] | HTML page rendering |
//! | [`server`] | HTTP server |
//! | [`db`] | Database connection |
//! | [`migrate`] | Schema migrations |

pub mod config;
pub mod db;
pub mod error;
pub mod get;
pub mod import;
pub mod migrate;
pub mod models;
pub mod pages;
pub mod search;
pub mod server;
pub mod suggest;

#[cfg(test)]
mod testing;
