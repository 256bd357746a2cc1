use crate::constants::*;
use crate::error::{Error, Result};
use crate::notice::Notice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageType {
	// edit buffer
	Current,
	Program,
	ProgramPair,
	Unknown(u8),
}

impl From<u8> for MessageType {
	fn from(b: u8) -> Self {
		match b {
			MSG_TYPE_CURRENT => Self::Current,
			MSG_TYPE_PROGRAM => Self::Program,
			MSG_TYPE_PAIR => Self::ProgramPair,
			b => Self::Unknown(b),
		}
	}
}

/// One complete exclusive message, SOX through EOX inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SysexMessage {
	bytes: Vec<u8>,
}

impl SysexMessage {
	pub fn new(bytes: Vec<u8>) -> Self {
		Self { bytes }
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}

	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	pub fn byte(&self, offset: usize) -> Result<u8> {
		self.bytes.get(offset).copied().ok_or(Error::MessageTooShort {
			offset,
			len: self.bytes.len(),
		})
	}

	pub fn family(&self) -> Result<u8> {
		self.byte(OFFSET_FAMILY)
	}

	pub fn message_type(&self) -> Result<MessageType> {
		self.byte(OFFSET_MSG_TYPE).map(MessageType::from)
	}

	/// Checks manufacturer, device type and family, in that order.
	pub fn validate(&self) -> Result<()> {
		for (i, &expected) in MANUFACTURER_ID.iter().enumerate() {
			let offset = OFFSET_MANUFACTURER + i;
			let found = self.byte(offset)?;
			if found != expected {
				return Err(Error::BadManufacturerId { offset, found, expected });
			}
		}
		let found = self.byte(OFFSET_DEVICE_TYPE)?;
		if found != DEVICE_TYPE {
			return Err(Error::BadDeviceType { found, expected: DEVICE_TYPE });
		}
		match self.family()? {
			SOURCE_FAMILY => Ok(()),
			TARGET_FAMILY => Err(Error::AlreadyConverted),
			found => Err(Error::UnknownDeviceFamily {
				found,
				expected: SOURCE_FAMILY,
			}),
		}
	}

	/// Validates, then rewrites the family byte to the target device.
	pub fn convert(&mut self) -> Result<()> {
		self.validate()?;
		self.bytes[OFFSET_FAMILY] = TARGET_FAMILY;
		Ok(())
	}

	/// Decodes the header for reporting. Unknown types, unknown bank modes
	/// and headers too short to hold the fields give nothing.
	pub fn notice(&self) -> Option<Notice> {
		let get = |offset| self.bytes.get(offset).copied();
		match MessageType::from(get(OFFSET_MSG_TYPE)?) {
			MessageType::Current => Some(Notice::CurrentSound),
			MessageType::Program => match get(OFFSET_BANK_MODE)? {
				0 => Some(Notice::Program {
					bank: None,
					program: get(OFFSET_PROGRAM)?,
				}),
				1 => Some(Notice::Program {
					bank: Some(get(OFFSET_BANK)?),
					program: get(OFFSET_PROGRAM)?,
				}),
				_ => None,
			},
			// the bank byte is reported even in current-bank mode,
			// the V-Station ignores the destination control
			MessageType::ProgramPair => match get(OFFSET_BANK_MODE)? {
				0 | 1 => {
					let first = get(OFFSET_PROGRAM)?;
					Some(Notice::ProgramPair {
						bank: get(OFFSET_BANK)?,
						first,
						second: first as u16 + 1,
					})
				}
				_ => None,
			},
			MessageType::Unknown(_) => None,
		}
	}
}
