//! # Tongue CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and maps the outcome to a process exit.
//!
//! - `Ok` exits 0.
//! - A usage error prints its guidance and still exits 0.
//! - Every other error prints `Error: <message>` to stderr and exits 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        if !e.is_fatal() {
            cli::print_usage_hint(&e.to_string());
            return;
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
