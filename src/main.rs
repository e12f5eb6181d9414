//! # liblog demo
//!
//! Registers the built-in plugins, optionally configures one namespace from
//! the command line, then emits one message per severity into it. Any
//! `LIBLOG*` variables in the environment apply as usual, e.g.
//!
//! ```text
//! LIBLOG_NET=7,color: liblog-demo -n NET
//! liblog-demo -n IO -l notice -u file:///tmp/io.log
//! ```
//!
//! The crate's own diagnostics go through `tracing` and are enabled with
//! `RUST_LOG=liblog=debug`.

use anyhow::{Context, Result};
use clap::Parser;
use liblog::{cli::Args, logging::RecordFormatter, Level};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .event_format(RecordFormatter)
        .init();

    let args = Args::parse();
    let logger = liblog::global();

    logger
        .register_builtin_plugins()
        .context("registering built-in plugins")?;

    if args.list_plugins {
        for name in logger.plugins().names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let ns = args.namespace.as_str();
    match (&args.uri, args.level) {
        (Some(uri), level) => {
            let level = level.unwrap_or(logger.config().default_level);
            logger
                .setup(ns, level, uri)
                .with_context(|| format!("configuring namespace '{}' with {}", ns, uri))?;
        }
        (None, Some(level)) => {
            logger.set_level(ns, level)?;
        }
        (None, None) => {}
    }

    info!(
        "Namespace '{}' at level {}",
        ns,
        logger.get_level(ns)?
    );

    for level in Level::ALL.iter().rev() {
        if *level == Level::Emerg {
            continue;
        }
        liblog::ll_pr!(ns, *level, "{} message", level);
    }

    if args.emerg {
        liblog::ll_pr_emerg!(ns, "emergency message");
    }

    liblog::teardown();
    Ok(())
}
