//! Build script for the UART core
//!
//! Only the embedded binary needs linker configuration; host builds
//! pass straight through.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Link arguments for the cortex-m runtime and defmt, emitted only
    // for the bare-metal target so host test builds stay untouched.
    let target = std::env::var("TARGET").unwrap_or_default();
    if target.starts_with("thumbv") && std::env::var_os("CARGO_FEATURE_EMBEDDED").is_some() {
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}
