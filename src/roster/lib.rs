//! # Roster Architecture
//!
//! Roster keeps employee records in a single CSV file and serves them as JSON
//! over HTTP. The same core also backs a small command-line client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Boundaries: http/ (axum service), main.rs + cli/ (clap)    │
//! │  - Parse requests/arguments, validate required fields       │
//! │  - Map errors to status codes or exit codes                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (JSON field maps → FieldUpdates)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Duplicate-id policy, partial updates, first-match delete │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, codec.rs)                           │
//! │  - RecordStore trait: load / append / rewrite               │
//! │  - CsvStore (production), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! Every operation loads the whole file. Create appends one row; update and
//! delete rewrite the file from scratch. There is no cache, no index and no
//! locking, so concurrent writers can lose each other's changes.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`codec`]: CSV row ↔ [`model::Employee`] mapping
//! - [`model`]: `Employee` and `FieldUpdate`
//! - [`http`]: axum routes and error mapping
//! - [`config`]: Configuration management
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod model;
pub mod store;
