//! Build script for the bundled SPA assets.
//!
//! `include_dir!` does not register the bundle with cargo's change
//! tracking on stable, so a rebuilt frontend would otherwise be missed.

fn main() {
    println!("cargo:rerun-if-changed=web/dist");
}
