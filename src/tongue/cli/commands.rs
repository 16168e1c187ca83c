//! # CLI Dispatch
//!
//! Parses arguments, builds the per-invocation context, calls the matching
//! `TongueApi` method and prints the result.

use super::render::{print_entries, print_messages, print_terms};
use super::setup::{parse_cli, Cli, Commands};
use clap::CommandFactory;
use tongue::api::TongueApi;
use tongue::display::DisplayPolicy;
use tongue::error::{Result, TongueError};
use tongue::init::initialize;
use tongue::logging::init_logging;
use tongue::store::fs::FileStore;

struct AppContext {
    api: TongueApi<FileStore>,
    policy: DisplayPolicy,
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = parse_cli(std::env::args_os())?;
    init_logging();

    let command = match cli.command {
        Some(ref command) => command,
        None => {
            Cli::command().print_help().map_err(TongueError::Io)?;
            return Ok(());
        }
    };

    let mut ctx = init_context(&cli)?;

    match command {
        Commands::Add {
            native, foreign, ..
        } => handle_add(&mut ctx, native.clone(), foreign.clone()),
        Commands::Delete { native, .. } => handle_delete(&mut ctx, native.clone()),
        Commands::List { no_index } => handle_list(&ctx, !*no_index),
        Commands::Show {
            index,
            native,
            foreign,
        } => handle_show(&mut ctx, *index, native.clone(), foreign.clone()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    Ok(AppContext {
        api: initialize(cli.file.clone())?,
        policy: DisplayPolicy::from_flags(cli.no_native, cli.no_foreign),
        verbose: cli.verbose,
    })
}

fn handle_add(ctx: &mut AppContext, native: Option<String>, foreign: Option<String>) -> Result<()> {
    let result = ctx.api.add_entry(native, foreign)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, native: Option<String>) -> Result<()> {
    let result = ctx.api.delete_entry(native)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_list(ctx: &AppContext, with_index: bool) -> Result<()> {
    let result = ctx.api.list_entries()?;
    // The count header comes before the entries
    print_messages(&result.messages, ctx.verbose);
    print_entries(&result.listed_entries, ctx.policy, with_index);
    Ok(())
}

fn handle_show(
    ctx: &mut AppContext,
    index: Option<i64>,
    native: Option<String>,
    foreign: Option<String>,
) -> Result<()> {
    let result = ctx.api.show_entry(index, native, foreign)?;
    print_entries(&result.listed_entries, ctx.policy, false);
    print_terms(&result.terms);
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}
