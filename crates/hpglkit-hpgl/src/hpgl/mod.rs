//! HPGL command stream handling
//!
//! This module provides:
//! - Command decoding (mnemonic lookup plus per-mnemonic argument grammar)
//! - Path reconstruction from pen-up/pen-down commands
//! - Serialization of a drawing back to a command stream

pub mod command;
pub mod parser;
pub mod writer;

pub use command::*;
pub use parser::*;
pub use writer::*;
