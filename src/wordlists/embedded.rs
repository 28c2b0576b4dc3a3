//! Embedded word lists
//!
//! Generated by the build script from `data/sample.txt`.

include!(concat!(env!("OUT_DIR"), "/sample.rs"));
