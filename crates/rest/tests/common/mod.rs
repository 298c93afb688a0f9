//! Common test utilities for the catalog API tests.

pub mod harness;

pub use harness::*;
