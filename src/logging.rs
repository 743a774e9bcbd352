use std::{
	collections::VecDeque,
	io::{self, Write},
	sync::{Mutex, MutexGuard},
};

use anyhow::Result;
use tracing_subscriber::{FmtSubscriber, fmt::MakeWriter};

/// How many log lines to keep in memory. stdout belongs to the numbers, so logs
/// are only shown if something goes wrong.
const MAX_LOG_LINES: usize = 1000;

static LOG_BUFFER: LogBuffer = LogBuffer::new();

pub struct LogBuffer {
	// newest line first
	buffer: Mutex<VecDeque<Vec<u8>>>,
}

pub struct LogWriter<'a> {
	lock: MutexGuard<'a, VecDeque<Vec<u8>>>,
}

impl LogBuffer {
	pub const fn new() -> Self {
		Self {
			buffer: Mutex::new(VecDeque::new()),
		}
	}
	/// Writes all saved lines, oldest first
	pub fn dump(&self, mut out: impl Write) -> io::Result<()> {
		let buffer = self.buffer.lock().unwrap();

		for line in buffer.iter().rev() {
			out.write_all(line)?;
		}

		out.flush()
	}
}

impl<'a> Write for LogWriter<'a> {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let log_line = self.lock.front_mut().unwrap();

		log_line.write(buf)
	}

	fn flush(&mut self) -> io::Result<()> {
		let log_line = self.lock.front_mut().unwrap();

		log_line.flush()
	}
}

impl<'a> MakeWriter<'a> for &'static LogBuffer {
	type Writer = LogWriter<'a>;

	fn make_writer(&'a self) -> Self::Writer {
		let mut buffer = self.buffer.lock().unwrap();

		// remove oldest log line if we're at limit
		if buffer.len() == MAX_LOG_LINES {
			buffer.pop_back();
		}

		buffer.push_front(Vec::new());

		LogWriter { lock: buffer }
	}
}

pub fn init_logger() -> Result<()> {
	FmtSubscriber::builder()
		.with_env_filter("randomizer=trace")
		.json()
		.with_writer(&LOG_BUFFER)
		.init();

	Ok(())
}

/// Prints everything that was logged so far to stderr
pub fn dump_logs() -> io::Result<()> {
	LOG_BUFFER.dump(io::stderr().lock())
}

#[cfg(test)]
mod tests {
	use super::{LogBuffer, MAX_LOG_LINES};
	use std::io::Write;
	use tracing_subscriber::fmt::MakeWriter;

	#[test]
	fn dumps_oldest_first() {
		static BUFFER: LogBuffer = LogBuffer::new();

		for line in ["first\n", "second\n"] {
			(&BUFFER).make_writer().write_all(line.as_bytes()).unwrap();
		}

		let mut out = Vec::new();
		BUFFER.dump(&mut out).unwrap();

		assert_eq!(out, b"first\nsecond\n");
	}

	#[test]
	fn evicts_oldest_line_at_limit() {
		static BUFFER: LogBuffer = LogBuffer::new();

		for i in 0..=MAX_LOG_LINES {
			writeln!((&BUFFER).make_writer(), "{i}").unwrap();
		}

		let mut out = Vec::new();
		BUFFER.dump(&mut out).unwrap();
		let out = String::from_utf8(out).unwrap();

		assert_eq!(out.lines().count(), MAX_LOG_LINES);
		assert_eq!(out.lines().next(), Some("1"));
		assert_eq!(out.lines().last(), Some(&*MAX_LOG_LINES.to_string()));
	}
}
