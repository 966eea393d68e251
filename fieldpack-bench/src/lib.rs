//! # Fieldpack Bench
//!
//! Benchmarking utilities for fieldpack performance testing.

pub mod fixtures;
