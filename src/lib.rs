// Library target exists for the integration tests and criterion benchmarks.
// The binary entry point is main.rs; this file re-declares the module tree so
// harnesses can import types via `shxhelp::content::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by tests/ and benches/
pub mod content;
pub mod ui;

// Private: compiled into the lib target so their unit tests run under
// `cargo test`
mod app;
mod config;
mod event;
