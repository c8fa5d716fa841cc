use std::env;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=LIBIDN2_LIB_DIR");
    println!("cargo:rerun-if-env-changed=LIBIDN2_STATIC");

    // Resolve the library search path: explicit override first, falling back
    // to the conventional prefixes where libidn2 lands when installed from
    // source or from ports.
    if let Ok(dir) = env::var("LIBIDN2_LIB_DIR") {
        println!("cargo:rustc-link-search=native={dir}");
    } else {
        for dir in ["/usr/local/lib", "/opt/local/lib"] {
            if Path::new(dir).exists() {
                println!("cargo:rustc-link-search=native={dir}");
            }
        }
    }

    if env::var_os("LIBIDN2_STATIC").is_some() {
        println!("cargo:rustc-link-lib=static=idn2");
    } else {
        println!("cargo:rustc-link-lib=idn2");
    }
}
