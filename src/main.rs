// Host builds only compile the state machines for `cargo test`.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod caret;
mod config;
mod contact;
mod css;
mod error;
mod notice;
mod parallax;
mod particles;
mod reveal;
mod theme;
mod tilt;
mod typewriter;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This crate runs in the browser. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
