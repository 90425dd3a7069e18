//! Embedded level sets
//!
//! Level content compiled into the binary at build time from `data/*.txt`.

include!(concat!(env!("OUT_DIR"), "/levels_en.rs"));
include!(concat!(env!("OUT_DIR"), "/levels_ar.rs"));
