use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("input is not a *.syx file (first byte {found:02x})")]
	NotSysex { found: u8 },

	#[error("Unknown data ({found:02x}) at offset {offset}, it should be {expected:02x}")]
	BadManufacturerId { offset: usize, found: u8, expected: u8 },

	#[error("Unknown data ({found:02x}), it should be {expected:02x}")]
	BadDeviceType { found: u8, expected: u8 },

	#[error("The input data is V-Station/K-Station dump. No conversion required.")]
	AlreadyConverted,

	#[error("Unknown data ({found:02x}), it should be {expected:02x}")]
	UnknownDeviceFamily { found: u8, expected: u8 },

	#[error("message of {len} bytes has no byte at offset {offset}")]
	MessageTooShort { offset: usize, len: usize },

	#[error("message exceeds {max} bytes without end of exclusive")]
	MessageTooLong { max: usize },

	#[error("stream ends inside a message ({len} bytes without end of exclusive)")]
	TruncatedMessage { len: usize },

	#[error("File read error: {0}")]
	Read(#[source] std::io::Error),

	#[error("File write error: {0}")]
	Write(#[source] std::io::Error),
}

impl Error {
	/// Errors confined to a single message, which keep-going mode can skip.
	pub fn is_recoverable(&self) -> bool {
		matches!(
			self,
			Self::BadManufacturerId { .. }
				| Self::BadDeviceType { .. }
				| Self::AlreadyConverted
				| Self::UnknownDeviceFamily { .. }
				| Self::MessageTooShort { .. }
				| Self::MessageTooLong { .. }
		)
	}
}

pub type Result<T> = std::result::Result<T, Error>;
