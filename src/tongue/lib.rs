//! # Tongue Architecture
//!
//! Tongue is a vocabulary manager: it keeps native/foreign word pairs in a
//! plain, human-readable JSON file. The core is a small library with a CLI
//! client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Validates argument counts and selector flags             │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load → select or mutate → save, per command              │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Per-Invocation Lifecycle
//!
//! Nothing lives between invocations except the file. Every command loads the
//! whole collection, optionally selects or mutates, saves the whole collection
//! back if it mutated, and returns. Saves replace the file through a rename, so
//! the file on disk is always a complete collection.
//!
//! Concurrent invocations against the same file are not coordinated: the last
//! save wins and an interleaved update can be lost.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for `add`, `delete`, `list` and `show`
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Entry` and `Collection`
//! - [`index`]: 1-based display indexes
//! - [`selector`]: Lookup by index, term, or at random
//! - [`display`]: Which side of an entry gets shown
//! - [`config`]: Configuration file handling
//! - [`init`]: Resolves config and flags into the per-invocation API
//! - [`logging`]: stderr diagnostics
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod index;
pub mod init;
pub mod logging;
pub mod model;
pub mod selector;
pub mod store;
