// start/end of exclusive
pub const SOX: u8 = 0xF0;
pub const EOX: u8 = 0xF7;

pub const MANUFACTURER_ID: [u8; 3] = [0x00, 0x20, 0x29];
pub const DEVICE_TYPE: u8 = 0x01;

// A-Station
pub const SOURCE_FAMILY: u8 = 0x40;
// K-Station and V-Station
pub const TARGET_FAMILY: u8 = 0x41;

pub const MSG_TYPE_CURRENT: u8 = 0x00;
pub const MSG_TYPE_PROGRAM: u8 = 0x01;
pub const MSG_TYPE_PAIR: u8 = 0x02;

pub const OFFSET_MANUFACTURER: usize = 1;
pub const OFFSET_DEVICE_TYPE: usize = 4;
pub const OFFSET_FAMILY: usize = 5;
pub const OFFSET_MSG_TYPE: usize = 7;
pub const OFFSET_BANK_MODE: usize = 8;
pub const OFFSET_BANK: usize = 11;
pub const OFFSET_PROGRAM: usize = 12;
pub const OFFSET_PROGRAM_DATA: usize = 13;

pub const PROGRAM_DATA_LEN: usize = 128;
// a program pair dump is the largest message
pub const MAX_MESSAGE_LEN: usize = PROGRAM_DATA_LEN * 2 + OFFSET_PROGRAM_DATA + 1;
