use anyhow::{Context, Result};
use config::{CONFIG_PATH, Config};
use randomizer::Randomizer;
use std::io::{self, Write};
use tracing::{debug, info};

mod config;
mod logging;
mod randomizer;

fn main() -> Result<()> {
	logging::init_logger()?;

	let res = start();

	// anyhow prints the error itself when main returns, this only adds the log lines leading up to it
	if res.is_err() {
		let _ = logging::dump_logs();
	}

	res
}

fn start() -> Result<()> {
	let config = Config::load(CONFIG_PATH)?;
	debug!(?config, "Config loaded");

	let seed = match config.seed {
		Some(seed) => seed,
		None => chrono::Utc::now().timestamp_millis(),
	};

	run(&config, seed, io::stdout().lock())
}

/// Prints `config.count` numbers from a generator seeded with `seed`, one per line
fn run(config: &Config, seed: i64, mut out: impl Write) -> Result<()> {
	let mut r = Randomizer::new(seed);
	info!(seed = r.seed(), "Generator seeded");

	for _ in 0..config.count {
		writeln!(out, "{}", r.next_int(config.max)).context("writing output")?;
	}
	out.flush().context("flushing output")?;

	debug!(state = r.seed(), "Done");

	Ok(())
}
