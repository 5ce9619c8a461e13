//! Employee directory viewer: fetch once, list in the terminal.

pub mod config;
pub mod view;

use std::io::Write;

use anyhow::{Context, Result};
use platform_api::{EmployeeSource, HttpEmployeeSource};
use products_hr::{Roster, apply, start_load};
use tracing::info;

use crate::{
    config::AppConfig,
    view::{ListView, OutputFormat},
};

/// How the loaded list should be shown.
#[derive(Clone, Copy, Debug)]
pub struct DisplayOptions {
    pub format: OutputFormat,
    pub offset: usize,
    pub height: Option<usize>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            offset: 0,
            height: None,
        }
    }
}

pub async fn run(config: &AppConfig, display: DisplayOptions, out: &mut impl Write) -> Result<Roster> {
    let source = HttpEmployeeSource::new(&config.source_settings())
        .context("failed to prepare HTTP client")?;
    info!(url = %source.url(), timeout = ?config.timeout, "loading employee directory");
    show(source, display, out).await
}

/// Load once from `source`, then draw. A failed load still draws the
/// (empty) list.
pub async fn show<S>(source: S, display: DisplayOptions, out: &mut impl Write) -> Result<Roster>
where
    S: EmployeeSource + 'static,
{
    let mut roster = Roster::new();
    let mut view = ListView::new(display.height);

    let pending = start_load(source);
    if let Some(change) = apply(pending.wait().await, &mut roster) {
        view.on_change(change);
    }
    view.scroll_to(display.offset, &roster);

    view.render(display.format, &roster, out)?;
    out.flush()?;
    Ok(roster)
}
