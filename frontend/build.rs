use std::env;

fn main() {
    export_api_base();
}

/// Expose the base URL of the lyrics backend to the build as the environment variable
/// SONGBOOK_API_BASE. Unset means requests go to the origin the page was served from.
fn export_api_base() {
    println!("cargo:rerun-if-env-changed=SONGBOOK_API_BASE");

    let base = env::var("SONGBOOK_API_BASE").unwrap_or_default();
    let base = base.trim().trim_end_matches('/');
    println!("cargo:rustc-env=SONGBOOK_API_BASE={base}");
}
