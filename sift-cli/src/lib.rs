//! Support library for the `sift` binary: the demo grammar and the driver
//! error type. The binary itself only wires these to standard input.

pub mod error;
pub mod grammar;
