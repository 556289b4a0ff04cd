//! Copies `memory.x` into `OUT_DIR` so the linker finds it from inside the
//! workspace, and adds the cortex-m-rt and defmt linker scripts for the
//! example binaries.

use std::{env, fs::File, io::Write, path::PathBuf};

fn main() {
    println!("cargo:rustc-link-arg-examples=--nmagic");
    println!("cargo:rustc-link-arg-examples=-Tlink.x");

    if env::var_os("CARGO_FEATURE_DEFMT_LOGGER").is_some() {
        println!("cargo:rustc-link-arg-examples=-Tdefmt.x");
    }

    println!("cargo:rerun-if-changed=memory.x");

    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());
    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();
    println!("cargo:rustc-link-search={}", out.display());
}
