//! # Rendering
//!
//! Turns `CmdResult` contents into terminal lines. Line building is kept
//! separate from printing so it can be tested without a terminal.

use colored::Colorize;
use tongue::api::{CmdMessage, MessageLevel};
use tongue::display::DisplayPolicy;
use tongue::index::DisplayEntry;

/// Lines for a list of entries, optionally prefixed with `N: `.
pub fn entry_lines(
    entries: &[DisplayEntry],
    policy: DisplayPolicy,
    with_index: bool,
) -> Vec<String> {
    entries
        .iter()
        .map(|de| {
            let text = policy.render(&de.entry);
            if with_index {
                format!("{}: {}", de.index, text)
            } else {
                text
            }
        })
        .collect()
}

/// Messages that should be shown; info messages only in verbose mode.
pub fn visible_messages(messages: &[CmdMessage], verbose: bool) -> Vec<&CmdMessage> {
    messages
        .iter()
        .filter(|m| verbose || m.level != MessageLevel::Info)
        .collect()
}

pub fn print_messages(messages: &[CmdMessage], verbose: bool) {
    for message in visible_messages(messages, verbose) {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_entries(entries: &[DisplayEntry], policy: DisplayPolicy, with_index: bool) {
    for line in entry_lines(entries, policy, with_index) {
        println!("{}", line);
    }
}

pub fn print_terms(terms: &[String]) {
    for term in terms {
        println!("{}", term);
    }
}

/// Guidance for a usage mistake. Goes to stdout; it is not a failure.
pub fn print_usage_hint(hint: &str) {
    println!("{}", hint.yellow());
}
