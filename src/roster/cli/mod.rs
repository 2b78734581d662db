//! Command handlers for the `roster` binary.

mod browse;
mod print;

use crate::args::{Cli, Commands};
use directories::ProjectDirs;
use print::{print_gallery, print_message, print_overlay, MessageLevel};
use roster::bootstrap::bootstrap;
use roster::config::{RosterConfig, CONFIG_KEYS};
use roster::error::{Result, RosterError};
use roster::page::{ClickOutcome, Page};
use roster::provider::file::FileProvider;
use roster::provider::http::HttpProvider;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the config directory.
pub const HOME_ENV: &str = "ROSTER_HOME";

pub struct AppContext {
    config_dir: PathBuf,
    config: RosterConfig,
    source: Option<PathBuf>,
}

pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Show {
            position,
            search,
            next,
            prev,
        }) => handle_show(&ctx, position, search, next, prev),
        Some(Commands::Browse) => handle_browse(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match std::env::var_os(HOME_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "roster", "roster")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| RosterError::Api("Could not determine config dir".into()))?,
    };
    let config = RosterConfig::load(&config_dir)?;

    Ok(AppContext {
        config_dir,
        config,
        source: cli.source.clone(),
    })
}

fn load_page(ctx: &AppContext) -> Result<Page> {
    match &ctx.source {
        Some(path) => bootstrap(&FileProvider::new(path)),
        None => bootstrap(&HttpProvider::from_config(&ctx.config)?),
    }
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let mut page = load_page(ctx)?;
    if let Some(term) = search {
        page.type_query(&term);
    }
    let mut out = io::stdout().lock();
    print_gallery(&mut out, &page)?;
    Ok(())
}

fn handle_show(
    ctx: &AppContext,
    position: usize,
    search: Option<String>,
    next: usize,
    prev: usize,
) -> Result<()> {
    let mut page = load_page(ctx)?;
    if let Some(term) = search {
        page.type_query(&term);
    }
    if page.open_visible(position) != ClickOutcome::Opened {
        return Err(RosterError::Api(format!("No person at position {}", position)));
    }
    for _ in 0..next {
        page.next();
    }
    for _ in 0..prev {
        page.prev();
    }

    let mut out = io::stdout().lock();
    if let Some(view) = page.overlay_view() {
        print_overlay(&mut out, &view)?;
    }
    Ok(())
}

fn handle_browse(ctx: &AppContext) -> Result<()> {
    let mut page = load_page(ctx)?;
    let stdin = io::stdin().lock();
    let mut out = io::stdout().lock();
    browse::run(&mut page, stdin, &mut out)?;
    out.flush()?;
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut out = io::stdout().lock();
    match (key.as_deref(), value) {
        (None, _) => {
            for key in CONFIG_KEYS {
                writeln!(out, "{} = {}", key, ctx.config.get(key)?)?;
            }
        }
        (Some(key), None) => {
            writeln!(out, "{} = {}", key, ctx.config.get(key)?)?;
        }
        (Some(key), Some(value)) => {
            ctx.config.set(key, &value)?;
            ctx.config.save(&ctx.config_dir)?;
            print_message(
                &mut out,
                MessageLevel::Success,
                &format!("Set {} = {}", key, ctx.config.get(key)?),
            )?;
        }
    }
    Ok(())
}
