//! bifurcate-util - test and benchmarking helpers for `bifurcate`
//!
//! Provides a seeded generator of random tree shapes, so property tests can
//! exercise copy, destroy and traversal over many reproducible trees.

pub mod fuzzer;

pub use fuzzer::{Fuzzer, Shape};
