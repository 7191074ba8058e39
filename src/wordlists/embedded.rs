//! Embedded word lists
//!
//! Dictionary and dice compiled into the binary at build time.

// Include generated lists from build script
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
include!(concat!(env!("OUT_DIR"), "/dice.rs"));
