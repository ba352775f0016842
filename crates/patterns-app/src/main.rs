//! Headless driver for the patterns demo page.
//!
//! Mounts the page on the reference layout, replays the element ids given
//! on the command line as clicks, and prints the final page state as JSON.
//!
//! Usage: `patterns-app [--config <site.toml>] <element-id>...`
//! The config path may also come from the `PATTERNS_CONFIG` env var.

mod replay;

use anyhow::Result;

use patterns_types::config::SiteConfig;
use replay::{Args, Session};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse(std::env::args().skip(1))?;
    let config_path = args
        .config
        .clone()
        .or_else(|| std::env::var_os("PATTERNS_CONFIG").map(Into::into));
    let config = match config_path {
        Some(path) => SiteConfig::load(&path)?,
        None => SiteConfig::default(),
    };

    let mut session = Session::new(&config)?;
    for id in &args.clicks {
        session.click(id)?;
    }
    log::info!("Replayed {} clicks", args.clicks.len());

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}
