//! Example loop: one hasher absorbing a run of generated messages.

use std::io::Write;
use std::time::{Duration, Instant};

use mirror256::{Config, Mirror256};
use tracing::debug;

/// Number of messages hashed by the example loop.
pub(crate) const EXAMPLE_MESSAGES: usize = 1024;

/// The loop stops early and reports a rate once it has run this long.
const REPORT_AFTER: Duration = Duration::from_secs(1);

/// Builds the `i`-th example message.
pub(crate) fn example_message(i: usize) -> String {
    format!("This is the canary #{i}. asdfasdfasdfasdfasdfqwerqwerqwerdfnnjkdfnjldljknsvv")
}

/// Feeds the example messages into a single hasher, writing each message and
/// the running digest to `out`.
///
/// If the loop runs past one second it writes a rough hashes-per-second
/// figure instead and returns.
pub(crate) fn run_example(config: Config, out: &mut impl Write) -> anyhow::Result<()> {
    let mut hasher = Mirror256::new(config)?;
    let start = Instant::now();

    for i in 0..EXAMPLE_MESSAGES {
        let msg = example_message(i);
        hasher.absorb(msg.as_bytes());

        let elapsed = start.elapsed();
        if elapsed > REPORT_AFTER {
            let rate = (i + 1) as f64 / elapsed.as_secs_f64();
            writeln!(out, "{rate:.0} hashes per second!")?;
            return Ok(());
        }

        writeln!(out, "Example message = {msg}\n")?;
        writeln!(out, "Example digest = {}\n", hasher.hex_digest())?;
    }

    debug!(absorbed = hasher.absorbed(), "example loop finished");
    Ok(())
}
