use std::io::{BufReader, Read, Write};

use tracing::{debug, warn};

use crate::constants::{EOX, MAX_MESSAGE_LEN, SOX};
use crate::error::{Error, Result};
use crate::message::SysexMessage;
use crate::notice::Notice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
	// nothing buffered since the last EOX
	Idle,
	Accumulating,
}

/// Splits a byte stream into exclusive messages. Every SOX starts a new
/// message, whatever came before it.
pub struct Framer {
	buf: Vec<u8>,
	state: State,
	started: bool,
	discarded: usize,
}

impl Default for Framer {
	fn default() -> Self {
		Self::new()
	}
}

impl Framer {
	pub fn new() -> Self {
		Self {
			buf: Vec::with_capacity(MAX_MESSAGE_LEN),
			state: State::Idle,
			started: false,
			discarded: 0,
		}
	}

	pub fn push(&mut self, byte: u8) -> Result<Option<SysexMessage>> {
		if !self.started {
			self.started = true;
			if byte != SOX {
				return Err(Error::NotSysex { found: byte });
			}
		}
		if byte == SOX {
			if self.state == State::Accumulating {
				debug!("resync, dropping {} bytes", self.buf.len());
				self.discarded += self.buf.len();
			}
			self.buf.clear();
			self.buf.push(byte);
			self.state = State::Accumulating;
			return Ok(None);
		}
		match self.state {
			State::Idle => {
				debug!("stray byte {:02x} outside message", byte);
				self.discarded += 1;
				Ok(None)
			}
			State::Accumulating => {
				if self.buf.len() >= MAX_MESSAGE_LEN {
					self.discarded += self.buf.len() + 1;
					self.buf.clear();
					self.state = State::Idle;
					return Err(Error::MessageTooLong { max: MAX_MESSAGE_LEN });
				}
				self.buf.push(byte);
				if byte != EOX {
					return Ok(None);
				}
				self.state = State::Idle;
				let bytes = std::mem::replace(
					&mut self.buf,
					Vec::with_capacity(MAX_MESSAGE_LEN),
				);
				Ok(Some(SysexMessage::new(bytes)))
			}
		}
	}

	/// Length of the unterminated message at the end of the stream, if any.
	pub fn pending(&self) -> Option<usize> {
		match self.state {
			State::Accumulating => Some(self.buf.len()),
			State::Idle => None,
		}
	}

	/// Bytes that never made it into a complete message.
	pub fn discarded(&self) -> usize {
		self.discarded
	}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConvertOptions {
	// skip messages that fail validation instead of aborting
	pub keep_going: bool,
	// an unterminated trailing message is an error
	pub strict: bool,
}

#[derive(Debug)]
pub struct Rejected {
	pub index: usize,
	pub error: Error,
}

#[derive(Debug, Default)]
pub struct Summary {
	pub converted: usize,
	pub rejected: Vec<Rejected>,
	pub discarded_bytes: usize,
}

pub struct Converter {
	options: ConvertOptions,
}

impl Converter {
	pub fn new(options: ConvertOptions) -> Self {
		Self { options }
	}

	/// Reads exclusive messages from `input`, converts each one and writes
	/// it to `output`. `on_notice` sees the decoded header of every
	/// converted message before it is written.
	pub fn convert<R, W, F>(
		&self,
		input: R,
		mut output: W,
		mut on_notice: F,
	) -> Result<Summary>
	where
		R: Read,
		W: Write,
		F: FnMut(&Notice),
	{
		let mut framer = Framer::new();
		let mut summary = Summary::default();
		let mut index = 0;
		for byte in BufReader::new(input).bytes() {
			let byte = byte.map_err(Error::Read)?;
			let mut msg = match framer.push(byte) {
				Ok(Some(msg)) => msg,
				Ok(None) => continue,
				Err(e) => {
					self.reject(index, e, &mut summary)?;
					index += 1;
					continue;
				}
			};
			debug!("message {}: {} bytes", index, msg.len());
			match msg.convert() {
				Ok(()) => {
					if let Some(notice) = msg.notice() {
						on_notice(&notice);
					}
					output.write_all(msg.as_bytes()).map_err(Error::Write)?;
					summary.converted += 1;
				}
				Err(e) => self.reject(index, e, &mut summary)?,
			}
			index += 1;
		}
		if let Some(len) = framer.pending() {
			if self.options.strict {
				return Err(Error::TruncatedMessage { len });
			}
			warn!("dropping unterminated message of {} bytes", len);
		}
		output.flush().map_err(Error::Write)?;
		summary.discarded_bytes = framer.discarded() + framer.pending().unwrap_or(0);
		Ok(summary)
	}

	fn reject(&self, index: usize, error: Error, summary: &mut Summary) -> Result<()> {
		if !(self.options.keep_going && error.is_recoverable()) {
			return Err(error);
		}
		warn!("skipping message {}: {}", index, error);
		summary.rejected.push(Rejected { index, error });
		Ok(())
	}
}

/// Converts with default options: abort on the first bad message and
/// silently drop an unterminated tail. Returns the notices in order.
pub fn convert<R: Read, W: Write>(input: R, output: W) -> Result<Vec<Notice>> {
	let mut notices = Vec::new();
	Converter::new(ConvertOptions::default())
		.convert(input, output, |n| notices.push(*n))?;
	Ok(notices)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::constants::*;
	use crate::message::test::build;

	fn feed(framer: &mut Framer, bytes: &[u8]) -> Vec<SysexMessage> {
		let mut result = Vec::new();
		for &b in bytes {
			if let Some(msg) = framer.push(b).unwrap() {
				result.push(msg);
			}
		}
		result
	}

	#[test]
	fn test_first_byte() {
		let mut framer = Framer::new();
		assert!(matches!(framer.push(0x4d), Err(Error::NotSysex { found: 0x4d })));
	}

	#[test]
	fn test_resync() {
		let mut framer = Framer::new();
		let msgs = feed(&mut framer, &[SOX, 0x01, 0x02, SOX, 0x03, EOX]);
		assert_eq!(msgs.len(), 1);
		assert_eq!(msgs[0].as_bytes(), &[SOX, 0x03, EOX]);
		assert_eq!(framer.discarded(), 3);
		assert_eq!(framer.pending(), None);
	}

	#[test]
	fn test_stray_bytes_between_messages() {
		let mut framer = Framer::new();
		let msgs = feed(&mut framer, &[SOX, 0x01, EOX, 0x10, 0x11, SOX, 0x02, EOX]);
		assert_eq!(msgs.len(), 2);
		assert_eq!(msgs[1].as_bytes(), &[SOX, 0x02, EOX]);
		assert_eq!(framer.discarded(), 2);
	}

	#[test]
	fn test_pending() {
		let mut framer = Framer::new();
		feed(&mut framer, &[SOX, 0x01, 0x02]);
		assert_eq!(framer.pending(), Some(3));
	}

	#[test]
	fn test_too_long() {
		let mut framer = Framer::new();
		framer.push(SOX).unwrap();
		for _ in 1..MAX_MESSAGE_LEN {
			assert!(framer.push(0x00).unwrap().is_none());
		}
		assert!(matches!(framer.push(EOX), Err(Error::MessageTooLong { .. })));
		assert_eq!(framer.pending(), None);
	}

	#[test]
	fn test_max_len_fits() {
		let mut framer = Framer::new();
		framer.push(SOX).unwrap();
		for _ in 2..MAX_MESSAGE_LEN {
			framer.push(0x00).unwrap();
		}
		let msg = framer.push(EOX).unwrap().unwrap();
		assert_eq!(msg.len(), MAX_MESSAGE_LEN);
	}

	#[test]
	fn test_notices_in_order() {
		let mut input = build(SOURCE_FAMILY, MSG_TYPE_CURRENT, 0, 0, 0);
		input.extend(build(SOURCE_FAMILY, MSG_TYPE_PROGRAM, 1, 3, 7));
		let mut output = Vec::new();
		let notices = convert(input.as_slice(), &mut output).unwrap();
		assert_eq!(
			notices,
			vec![
				Notice::CurrentSound,
				Notice::Program { bank: Some(3), program: 7 },
			],
		);
		assert_eq!(output.len(), input.len());
	}
}
