//! # CLI Behavior
//!
//! This is **one possible UI client** for tongue. The CLI is the only place
//! that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the library.
//!
//! ## Output
//!
//! - `list` prints `N: native - foreign` per entry, `--no-index` drops the `N: `
//! - `show` prints the entry (or the looked-up terms) without an index
//! - `--no-native` / `--no-foreign` pick which side is printed; with both set
//!   only the foreign side is shown
//! - Informational messages only appear with `--verbose`
//!
//! ## Errors
//!
//! Usage mistakes (missing arguments, conflicting `show` selectors) print a hint
//! and exit successfully. Anything else prints `Error: ...` to stderr and exits 1.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `render`: Output formatting
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
pub use render::print_usage_hint;
