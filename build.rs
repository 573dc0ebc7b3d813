/// Expose the compilation target triple to the crate at build time.
///
/// `userview version` prints it alongside the package version.
fn main() {
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=USERVIEW_TARGET={target}");
}
