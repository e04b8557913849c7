//! Command-line front-end for the Mirror256 hasher.

mod cli;
mod demo;

use std::fs::File;
use std::io::{self, Write};

use anyhow::Context;
use cli::Cli;
use mimalloc::MiMalloc;
use mirror256::Mirror256;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Cli::parse_args();
    let config = args.config();

    if args.example {
        return demo::run_example(config, &mut io::stdout().lock());
    }

    let mut hasher = Mirror256::new(config)?;
    match &args.file {
        Some(path) => {
            let mut file = File::open(path)
                .with_context(|| format!("could not open file {}", path.display()))?;
            io::copy(&mut file, &mut hasher)
                .with_context(|| format!("could not read file {}", path.display()))?;
        }
        None => {
            io::copy(&mut io::stdin().lock(), &mut hasher).context("could not read stdin")?;
        }
    }
    debug!(absorbed = hasher.absorbed(), "input hashed");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", hasher.hex_digest())?;
    Ok(())
}

/// Logs go to stderr so stdout carries only the digest. Filter with `RUST_LOG`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
