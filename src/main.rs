// The effect logic is target-independent and unit-tested natively; only the
// DOM wiring in `frontend` is wasm-only.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod contact;
mod error;
mod filter;
mod logging;
mod navigation;
mod particles;
mod reveal;
mod theme;
mod typewriter;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
