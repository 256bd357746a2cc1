use std::fmt;

/// What a converted message contains, decoded from its header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
	CurrentSound,
	// bank is None when the dump targets the currently selected bank
	Program { bank: Option<u8>, program: u8 },
	// second is first + 1, not wrapped at the bank boundary
	ProgramPair { bank: u8, first: u8, second: u16 },
}

impl fmt::Display for Notice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CurrentSound => write!(f, "Current sound (edit buffer) dump"),
			Self::Program { bank: None, program } => {
				write!(f, "Current selected bank, PROGRAM NUMBER={}", program)
			}
			Self::Program { bank: Some(bank), program } => {
				write!(f, "PROGRAM BANK={}, PROGRAM NUMBER={}", bank, program)
			}
			Self::ProgramPair { bank, first, second } => write!(
				f,
				"PROGRAM BANK={}, PROGRAM NUMBER={} and {}",
				bank, first, second,
			),
		}
	}
}
