use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{fs, io::ErrorKind, path::Path};

pub const CONFIG_PATH: &str = "randomizer.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// A fixed seed for reproducible output.
	/// If not set, the current time in milliseconds since the unix epoch is used.
	pub seed: Option<i64>,
	/// How many numbers to print
	pub count: usize,
	/// The scale passed to `Randomizer::next_int`
	pub max: i32,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			seed: None,
			count: 10,
			max: 100,
		}
	}
}

impl Config {
	pub fn parse(s: &str) -> Result<Self> {
		let config: Self = toml::from_str(s)?;

		if config.count == 0 {
			bail!("count must be at least 1");
		}

		Ok(config)
	}
	/// Reads the config at `path`. A missing file just means the defaults.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();

		let contents = match fs::read_to_string(path) {
			Ok(c) => c,
			Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
			Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
		};

		Self::parse(&contents).with_context(|| format!("parsing {}", path.display()))
	}
}
