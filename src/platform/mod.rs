//! Platform glue
//!
//! The browser build mounts the cat into the page. Native builds drive
//! [`crate::Neko`] directly, see the headless demo in `main.rs`.

#[cfg(target_arch = "wasm32")]
pub mod web;
