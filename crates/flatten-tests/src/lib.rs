//! End-to-end tests for flatten-rs crates.
//!
//! Every scenario goes through real PNG files in a temp directory:
//! encode inputs, load them as layers, blend, quantize, write, read back.
