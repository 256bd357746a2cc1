//! Novation A-Station to V-Station patch converter.
//!
//! The K-Station reads A-Station dumps and the V-Station reads K-Station
//! dumps, but the V-Station refuses A-Station dumps. The program data is
//! compatible: byte 126 of a program block holds EFFECTS SELECT / KEYBOARD
//! OCTAVE on the K/V-Station and is zero on the A-Station, which reads as
//! "Delay selected" and makes no sound difference. So converting a dump only
//! means rewriting the device family byte of each exclusive message.

pub mod constants;
pub mod error;
pub mod framer;
pub mod message;
pub mod notice;

pub use error::{Error, Result};
pub use framer::{convert, ConvertOptions, Converter, Framer, Rejected, Summary};
pub use message::{MessageType, SysexMessage};
pub use notice::Notice;
