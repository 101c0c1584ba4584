//! Example applications for the Umbra simulation stack.
//!
//! See the `examples/` directory; run one with
//! `cargo run --example profiled_integration`.
