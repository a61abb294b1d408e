//! # Storefront Entry Point
//!
//! Runs a headless storefront session and prints the rendered grid and
//! cart. The setup lives in lib.rs so tests can drive it directly.

fn main() {
    if let Err(err) = storefront_app::run() {
        eprintln!("storefront: {}", err);
        std::process::exit(1);
    }
}
