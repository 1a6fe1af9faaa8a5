//! Embedded word tables
//!
//! Packed tables compiled into the binary at build time.

// Include generated tables from build script
include!(concat!(env!("OUT_DIR"), "/solutions.rs"));
include!(concat!(env!("OUT_DIR"), "/accepted.rs"));
