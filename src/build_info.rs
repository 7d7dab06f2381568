//! Version string baked in at compile time, shown by `--version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
